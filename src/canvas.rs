//! Canvas 2D backend: rasterizes a [`Scene`] on an offscreen canvas and
//! captures the result as `ImageData`.

use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use wave_core::{
    Backdrop, DrawOp, Rasterizer, Rect, RenderError, Scene, Stroke, Text, TextAlign,
    TextBaseline,
};
use web_sys as web;

const FONT_FAMILY: &str = "system-ui, sans-serif";

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext(2d): {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("unexpected context type: {:?}", e))
}

#[inline]
fn js_err(e: JsValue) -> RenderError {
    RenderError::Rasterize(format!("{:?}", e))
}

/// Draws onto a detached canvas that is never shown; every rasterized frame
/// is copied out, so the canvas can be reused for the next one.
pub struct CanvasRasterizer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRasterizer {
    pub fn new(document: &web::Document, width: u32, height: u32) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::create(document, "canvas")?;
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    fn ensure_size(&self, scene: &Scene) {
        if self.canvas.width() != scene.width {
            self.canvas.set_width(scene.width);
        }
        if self.canvas.height() != scene.height {
            self.canvas.set_height(scene.height);
        }
    }

    fn draw(&self, scene: &Scene) -> Result<(), JsValue> {
        self.ensure_size(scene);
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.clear_rect(0.0, 0.0, scene.width as f64, scene.height as f64);
        for op in &scene.ops {
            match op {
                DrawOp::FillRect { rect, color } => {
                    ctx.set_fill_style_str(&color.css(1.0));
                    ctx.fill_rect(rect.min.x, rect.min.y, rect.width(), rect.height());
                }
                DrawOp::StrokeRect { rect, stroke } => {
                    self.apply_stroke(stroke)?;
                    ctx.stroke_rect(rect.min.x, rect.min.y, rect.width(), rect.height());
                }
                DrawOp::Polyline { points, stroke } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    self.apply_stroke(stroke)?;
                    ctx.begin_path();
                    ctx.move_to(first.x, first.y);
                    for p in rest {
                        ctx.line_to(p.x, p.y);
                    }
                    ctx.stroke();
                }
                DrawOp::Dots {
                    centers,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&color.css(1.0));
                    ctx.begin_path();
                    for c in centers {
                        ctx.move_to(c.x + radius, c.y);
                        ctx.arc(c.x, c.y, *radius, 0.0, TAU)?;
                    }
                    ctx.fill();
                }
                DrawOp::Text(text) => self.draw_text(text)?,
            }
        }
        Ok(())
    }

    fn apply_stroke(&self, stroke: &Stroke) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&stroke.color.css(stroke.alpha));
        ctx.set_line_width(stroke.width);
        ctx.set_line_join("round");
        let dash = match stroke.dash {
            Some([on, off]) => js_sys::Array::of2(&on.into(), &off.into()),
            None => js_sys::Array::new(),
        };
        ctx.set_line_dash(&dash)
    }

    fn draw_text(&self, text: &Text) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(text.anchor.x, text.anchor.y)?;
        if text.rotation != 0.0 {
            ctx.rotate(text.rotation)?;
        }
        ctx.set_font(&format!("{}px {}", text.font_px, FONT_FAMILY));
        ctx.set_text_align(match text.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        ctx.set_text_baseline(match text.baseline {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        });
        if let Some(backdrop) = &text.backdrop {
            let width = ctx.measure_text(&text.content)?.width();
            self.draw_backdrop(backdrop, text, width)?;
        }
        ctx.set_fill_style_str(&text.color.css(1.0));
        let drawn = ctx.fill_text(&text.content, 0.0, 0.0);
        ctx.restore();
        drawn
    }

    /// Rounded box around a text run whose anchor is at the origin.
    fn draw_backdrop(&self, backdrop: &Backdrop, text: &Text, width: f64) -> Result<(), JsValue> {
        let pad = backdrop.padding;
        let x0 = match text.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        };
        let y0 = match text.baseline {
            TextBaseline::Top => 0.0,
            TextBaseline::Middle => -text.font_px / 2.0,
            TextBaseline::Bottom => -text.font_px,
        };
        let rect = Rect::new(
            glam::DVec2::new(x0 - pad, y0 - pad),
            glam::DVec2::new(x0 + width + pad, y0 + text.font_px + pad),
        );
        rounded_rect_path(&self.ctx, &rect, pad)?;
        self.ctx.set_fill_style_str(&backdrop.fill.css(backdrop.alpha));
        self.ctx.fill();
        self.ctx.set_stroke_style_str(&backdrop.edge.css(backdrop.alpha));
        self.ctx.set_line_width(1.0);
        self.ctx.set_line_dash(&js_sys::Array::new())?;
        self.ctx.stroke();
        Ok(())
    }
}

fn rounded_rect_path(
    ctx: &web::CanvasRenderingContext2d,
    rect: &Rect,
    radius: f64,
) -> Result<(), JsValue> {
    let (x0, y0, x1, y1) = (rect.min.x, rect.min.y, rect.max.x, rect.max.y);
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    ctx.begin_path();
    ctx.move_to(x0 + r, y0);
    ctx.arc_to(x1, y0, x1, y1, r)?;
    ctx.arc_to(x1, y1, x0, y1, r)?;
    ctx.arc_to(x0, y1, x0, y0, r)?;
    ctx.arc_to(x0, y0, x1, y0, r)?;
    ctx.close_path();
    Ok(())
}

impl Rasterizer for CanvasRasterizer {
    type Bitmap = web::ImageData;

    fn rasterize(&mut self, scene: &Scene) -> Result<web::ImageData, RenderError> {
        self.draw(scene).map_err(js_err)?;
        self.ctx
            .get_image_data(0.0, 0.0, scene.width as f64, scene.height as f64)
            .map_err(js_err)
    }
}

/// Replace whatever is on `ctx` with `frame`.
pub fn present(
    ctx: &web::CanvasRenderingContext2d,
    frame: &web::ImageData,
) -> Result<(), RenderError> {
    ctx.put_image_data(frame, 0.0, 0.0)
        .map_err(|e| RenderError::Display(format!("{:?}", e)))
}
