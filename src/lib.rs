#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wave_core::{FRAME_HEIGHT_PX, FRAME_WIDTH_PX};
use web_sys as web;

mod canvas;
mod constants;
mod controls;
mod dom;
mod frame;
mod overlay;
mod panel;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wave-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&e.to_string()));
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let display_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    display_canvas.set_width(FRAME_WIDTH_PX);
    display_canvas.set_height(FRAME_HEIGHT_PX);
    let display = canvas::context_2d(&display_canvas)?;
    let rasterizer = canvas::CanvasRasterizer::new(&document, FRAME_WIDTH_PX, FRAME_HEIGHT_PX)?;

    controls::build_panel(&document)?;
    overlay::render_static_copy(&document)?;

    // Parameters flow one way: panel -> pending slot -> next animation frame.
    let pending = Rc::new(RefCell::new(None));
    queue_params(&document, &pending);
    {
        let pending = pending.clone();
        let doc = document.clone();
        controls::wire_changes(&document, Rc::new(move || queue_params(&doc, &pending)));
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        document.clone(),
        display,
        rasterizer,
        pending,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Read the panel and queue a fresh parameter set. Invalid input keeps the
/// current animation running and is reported instead.
fn queue_params(document: &web::Document, pending: &Rc<RefCell<Option<wave_core::WaveParams>>>) {
    let raw = match controls::read_raw(document) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("[controls] read failed: {:?}", e);
            return;
        }
    };
    match panel::params_from_raw(&raw) {
        Ok(params) => {
            *pending.borrow_mut() = Some(params);
        }
        Err(e) => {
            log::warn!("[controls] rejected input: {e}");
            overlay::show_warning(document, &format!("Invalid setting: {e}"));
        }
    }
}
