//! Settings panel: built from the declarative control tables in
//! `wave_core::controls`, read back into [`RawControls`].

use crate::constants::{CONTROLS_ROOT_ID, VALUE_SUFFIX};
use crate::dom;
use crate::panel::RawControls;
use std::rc::Rc;
use wave_core::controls::{self, SliderSpec, ToggleSpec};
use wave_core::WaveKind;
use web_sys as web;

pub fn build_panel(document: &web::Document) -> anyhow::Result<()> {
    let root: web::HtmlElement = dom::element_by_id(document, CONTROLS_ROOT_ID)?;

    let heading: web::HtmlElement = dom::create(document, "h2")?;
    heading.set_text_content(Some("Wave Controls"));
    dom::append(&root, &heading)?;

    dom::append(&root, &waveform_select(document)?)?;
    for spec in controls::SLIDERS {
        dom::append(&root, &slider(document, &spec)?)?;
    }
    dom::append(&root, &color_picker(document)?)?;

    let advanced: web::HtmlElement = dom::create(document, "details")?;
    let summary: web::HtmlElement = dom::create(document, "summary")?;
    summary.set_text_content(Some(controls::ADVANCED_GROUP_LABEL));
    dom::append(&advanced, &summary)?;
    for spec in controls::TOGGLES {
        dom::append(&advanced, &toggle(document, &spec)?)?;
    }
    dom::append(&root, &advanced)?;
    Ok(())
}

fn row(
    document: &web::Document,
    id: &str,
    label: &str,
    help: &str,
) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let row: web::HtmlElement = dom::create(document, "div")?;
    _ = row.set_attribute("class", "control");
    row.set_title(help);
    let lab: web::HtmlElement = dom::create(document, "label")?;
    _ = lab.set_attribute("for", id);
    lab.set_text_content(Some(label));
    dom::append(&row, &lab)?;
    Ok((row, lab))
}

fn help_text(document: &web::Document, help: &str) -> anyhow::Result<web::HtmlElement> {
    let small: web::HtmlElement = dom::create(document, "small")?;
    _ = small.set_attribute("class", "help");
    small.set_text_content(Some(help));
    Ok(small)
}

fn waveform_select(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let (row, _) = row(
        document,
        controls::WAVEFORM_SELECT_ID,
        controls::WAVEFORM_LABEL,
        controls::WAVEFORM_HELP,
    )?;
    let select: web::HtmlSelectElement = dom::create(document, "select")?;
    select.set_id(controls::WAVEFORM_SELECT_ID);
    for kind in WaveKind::ALL {
        let option: web::HtmlElement = dom::create(document, "option")?;
        _ = option.set_attribute("value", kind.name());
        option.set_text_content(Some(kind.name()));
        dom::append(&select, &option)?;
    }
    select.set_value(WaveKind::default().name());
    dom::append(&row, &select)?;
    dom::append(&row, &help_text(document, controls::WAVEFORM_HELP)?)?;
    Ok(row)
}

fn slider(document: &web::Document, spec: &SliderSpec) -> anyhow::Result<web::HtmlElement> {
    let (row, label) = row(document, spec.id, spec.label, spec.help)?;
    let value: web::HtmlElement = dom::create(document, "span")?;
    value.set_id(&format!("{}{}", spec.id, VALUE_SUFFIX));
    _ = value.set_attribute("class", "value");
    value.set_text_content(Some(&spec.format(spec.default)));
    dom::append(&label, &value)?;

    let input: web::HtmlInputElement = dom::create(document, "input")?;
    input.set_type("range");
    input.set_id(spec.id);
    input.set_min(&spec.format(spec.min));
    input.set_max(&spec.format(spec.max));
    input.set_step(&spec.format(spec.step));
    input.set_value(&spec.format(spec.default));
    dom::append(&row, &input)?;
    dom::append(&row, &help_text(document, spec.help)?)?;
    Ok(row)
}

fn color_picker(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let (row, _) = row(
        document,
        controls::COLOR_PICKER_ID,
        controls::COLOR_LABEL,
        controls::COLOR_HELP,
    )?;
    let input: web::HtmlInputElement = dom::create(document, "input")?;
    input.set_type("color");
    input.set_id(controls::COLOR_PICKER_ID);
    // the color input only accepts lowercase #rrggbb
    input.set_value(&controls::DEFAULT_COLOR_HEX.to_ascii_lowercase());
    dom::append(&row, &input)?;
    dom::append(&row, &help_text(document, controls::COLOR_HELP)?)?;
    Ok(row)
}

fn toggle(document: &web::Document, spec: &ToggleSpec) -> anyhow::Result<web::HtmlElement> {
    let (row, label) = row(document, spec.id, spec.label, spec.help)?;
    let input: web::HtmlInputElement = dom::create(document, "input")?;
    input.set_type("checkbox");
    input.set_id(spec.id);
    input.set_checked(spec.default);
    // checkbox goes before its label text
    let label_node: &web::Node = &label;
    _ = row.insert_before(&input, Some(label_node));
    dom::append(&row, &help_text(document, spec.help)?)?;
    Ok(row)
}

/// Snapshot every control.
pub fn read_raw(document: &web::Document) -> anyhow::Result<RawControls> {
    let select: web::HtmlSelectElement =
        dom::element_by_id(document, controls::WAVEFORM_SELECT_ID)?;
    let value = |spec: &SliderSpec| -> anyhow::Result<String> {
        Ok(dom::element_by_id::<web::HtmlInputElement>(document, spec.id)?.value())
    };
    let checked = |spec: &ToggleSpec| -> anyhow::Result<bool> {
        Ok(dom::element_by_id::<web::HtmlInputElement>(document, spec.id)?.checked())
    };
    let color: web::HtmlInputElement = dom::element_by_id(document, controls::COLOR_PICKER_ID)?;
    Ok(RawControls {
        waveform: select.value(),
        frequency: value(&controls::FREQUENCY)?,
        amplitude: value(&controls::AMPLITUDE)?,
        phase: value(&controls::PHASE)?,
        damping: value(&controls::DAMPING)?,
        speed: value(&controls::SPEED)?,
        color: color.value(),
        envelope: checked(&controls::SHOW_ENVELOPE)?,
        particles: checked(&controls::SHOW_PARTICLES)?,
        grid: checked(&controls::SHOW_GRID)?,
        dark_mode: checked(&controls::DARK_MODE)?,
    })
}

/// Keep each slider's value label in sync with its position.
fn refresh_value_labels(document: &web::Document) {
    for spec in controls::SLIDERS {
        if let Ok(input) = dom::element_by_id::<web::HtmlInputElement>(document, spec.id) {
            let shown = input
                .value()
                .parse::<f64>()
                .map(|v| spec.format(spec.snap(v)))
                .unwrap_or_else(|_| input.value());
            dom::set_text(document, &format!("{}{}", spec.id, VALUE_SUFFIX), &shown);
        }
    }
}

/// Call `on_change` whenever any control is touched.
pub fn wire_changes(document: &web::Document, on_change: Rc<dyn Fn()>) {
    let mut ids: Vec<&'static str> = vec![controls::WAVEFORM_SELECT_ID, controls::COLOR_PICKER_ID];
    ids.extend(controls::SLIDERS.iter().map(|s| s.id));
    ids.extend(controls::TOGGLES.iter().map(|t| t.id));
    for id in ids {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("[controls] missing #{id}; not wired");
            continue;
        };
        let handler = on_change.clone();
        let doc = document.clone();
        dom::add_listener(&el, "input", move || {
            refresh_value_labels(&doc);
            handler();
        });
    }
}
