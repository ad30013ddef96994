use crate::constants::*;
use crate::dom;
use wave_core::about;
use wave_core::WaveKind;
use web_sys as web;

#[inline]
pub fn show_progress(document: &web::Document, fraction: f64) {
    if let Some(el) = document.get_element_by_id(PROGRESS_ID) {
        let value = (fraction.clamp(0.0, 1.0) * PROGRESS_MAX as f64).round() as u32;
        _ = el.set_attribute("max", &PROGRESS_MAX.to_string());
        _ = el.set_attribute("value", &value.to_string());
        dom::set_hidden(&el, false);
    }
}

#[inline]
pub fn hide_progress(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PROGRESS_ID) {
        dom::set_hidden(&el, true);
    }
}

pub fn show_warning(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(WARNING_ID) {
        el.set_text_content(Some(message));
        dom::set_hidden(&el, false);
    }
}

#[inline]
pub fn hide_warning(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(WARNING_ID) {
        dom::set_hidden(&el, true);
    }
}

/// Update the "About {kind} Waves" block for the selected waveform.
pub fn update_about(document: &web::Document, kind: WaveKind) {
    dom::set_text(document, ABOUT_HEADING_ID, &about::heading(kind));
    dom::set_text(document, ABOUT_BODY_ID, about::description(kind));
}

/// Fill the static side panel (explainer and fun facts) once at start-up.
pub fn render_static_copy(document: &web::Document) -> anyhow::Result<()> {
    if let Some(el) = document.get_element_by_id(EXPLAINER_ID) {
        let mut html = format!(
            "<h3>{}</h3><p>{}</p><p><strong>Waveform Types</strong>:</p><ul>",
            about::WHAT_AM_I_SEEING_TITLE,
            about::WHAT_AM_I_SEEING
        );
        for (name, summary) in about::WAVEFORM_SUMMARIES {
            html.push_str(&format!("<li><strong>{name}</strong>: {summary}</li>"));
        }
        html.push_str("</ul><p><strong>Controls</strong>:</p><ul>");
        for (name, summary) in about::CONTROL_SUMMARIES {
            html.push_str(&format!("<li><strong>{name}</strong>: {summary}</li>"));
        }
        html.push_str("</ul>");
        el.set_inner_html(&html);
    }

    let facts = document
        .get_element_by_id(FUN_FACTS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{FUN_FACTS_ID}"))?;
    let summary: web::HtmlElement = dom::create(document, "summary")?;
    summary.set_text_content(Some(about::FUN_FACTS_TITLE));
    dom::append(&facts, &summary)?;
    let list: web::HtmlElement = dom::create(document, "ul")?;
    for fact in about::FUN_FACTS {
        let item: web::HtmlElement = dom::create(document, "li")?;
        item.set_text_content(Some(fact));
        dom::append(&list, &item)?;
    }
    dom::append(&facts, &list)?;
    Ok(())
}
