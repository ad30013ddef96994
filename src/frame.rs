use crate::canvas::{self, CanvasRasterizer};
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wave_core::{
    fallback, Animation, FrameCollector, RenderError, Step, WaveParams, FALLBACK_WARNING,
};
use web_sys as web;

enum Phase {
    Idle,
    /// Frames are rasterized one per tick; nothing is shown until all are done.
    Generating(FrameCollector<web::ImageData>),
    Showing(Animation<web::ImageData>),
}

/// Everything the animation-frame callback needs between ticks.
pub struct FrameContext {
    document: web::Document,
    display: web::CanvasRenderingContext2d,
    rasterizer: CanvasRasterizer,
    /// Latest parameters from the panel, consumed on the next tick.
    pending: Rc<RefCell<Option<WaveParams>>>,
    phase: Phase,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        document: web::Document,
        display: web::CanvasRenderingContext2d,
        rasterizer: CanvasRasterizer,
        pending: Rc<RefCell<Option<WaveParams>>>,
    ) -> Self {
        Self {
            document,
            display,
            rasterizer,
            pending,
            phase: Phase::Idle,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let queued = self.pending.borrow_mut().take();
        if let Some(params) = queued {
            self.restart(params);
        }

        self.phase = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => Phase::Idle,
            Phase::Generating(collector) => self.generate(collector),
            Phase::Showing(mut animation) => {
                let mut failed = None;
                if let Animation::Looping { frames, playback } = &mut animation {
                    if let Some(bitmap) = playback.advance(dt).and_then(|i| frames.get(i)) {
                        if let Err(reason) = canvas::present(&self.display, bitmap) {
                            failed = Some((*frames.params(), reason));
                        }
                    }
                }
                match failed {
                    Some((params, reason)) => self.fail(params, reason),
                    None => Phase::Showing(animation),
                }
            }
        };
    }

    /// Drop whatever is in flight and start a new cycle from scratch.
    fn restart(&mut self, params: WaveParams) {
        log::info!("[frames] restart: {}", params.readout());
        overlay::hide_warning(&self.document);
        overlay::update_about(&self.document, params.kind());
        overlay::show_progress(&self.document, 0.0);
        self.phase = Phase::Generating(FrameCollector::new(params));
    }

    fn generate(&mut self, mut collector: FrameCollector<web::ImageData>) -> Phase {
        let params = *collector.params();
        match collector.step(&mut self.rasterizer) {
            Ok(Step::Pending { progress }) => {
                overlay::show_progress(&self.document, progress);
                Phase::Generating(collector)
            }
            Ok(Step::Complete) => {
                overlay::hide_progress(&self.document);
                match collector.finish() {
                    Ok(frames) => {
                        let animation = Animation::looping(frames);
                        let shown = animation.current().map(|f| canvas::present(&self.display, f));
                        match shown {
                            Some(Err(reason)) => self.fail(params, reason),
                            _ => Phase::Showing(animation),
                        }
                    }
                    Err(reason) => self.fail(params, reason),
                }
            }
            Err(reason) => self.fail(params, reason),
        }
    }

    /// Stop animating and show the t = 0 still with a warning.
    fn fail(&mut self, params: WaveParams, reason: RenderError) -> Phase {
        log::error!("[frames] animation stopped: {reason}");
        overlay::hide_progress(&self.document);
        overlay::show_warning(&self.document, FALLBACK_WARNING);
        match fallback(params, &mut self.rasterizer, reason) {
            Ok(still) => {
                let shown = still.current().map(|f| canvas::present(&self.display, f));
                if let Some(Err(e)) = shown {
                    log::error!("[frames] fallback frame not shown: {e}");
                    return Phase::Idle;
                }
                Phase::Showing(still)
            }
            Err(e) => {
                log::error!("[frames] fallback frame failed: {e}");
                Phase::Idle
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
