use crate::core::{
    build_card_layout, Card, CardLayout, DrawOp, Font, Paint, Rect, Rgb, Rgba, TextMeasure,
    TextRun, TEXTURE_HEIGHT, TEXTURE_WIDTH,
};
use crate::dom::js_err;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// RGBA8 pixels (sRGB, unpremultiplied), row 0 at the top.
pub struct CardTexture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl CardTexture {
    /// 1x1 stand-in used when a card could not be painted.
    pub fn solid(color: Rgb) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![color.r, color.g, color.b, 255],
        }
    }
}

struct CanvasMeasure<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl TextMeasure for CanvasMeasure<'_> {
    fn measure(&self, font: &Font, text: &str) -> f32 {
        self.ctx.set_font(&font.to_css());
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }
}

/// Paint one card into an offscreen canvas and read the pixels back.
pub fn paint_card(document: &web::Document, card: &Card) -> anyhow::Result<CardTexture> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(TEXTURE_WIDTH);
    canvas.set_height(TEXTURE_HEIGHT);
    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let layout = build_card_layout(card, &CanvasMeasure { ctx: &ctx });
    paint_layout(&ctx, &layout).map_err(js_err)?;

    let image = ctx
        .get_image_data(0.0, 0.0, layout.width as f64, layout.height as f64)
        .map_err(js_err)?;
    Ok(CardTexture {
        width: image.width(),
        height: image.height(),
        rgba: image.data().0,
    })
}

/// Textures for every card, in order. Failures are logged and replaced by
/// a flat swatch of the card's primary color.
pub fn card_textures(document: &web::Document, cards: &[Card]) -> Vec<CardTexture> {
    cards
        .iter()
        .map(|card| match paint_card(document, card) {
            Ok(tex) => tex,
            Err(e) => {
                log::error!("[texture] card {} paint failed: {:?}", card.id, e);
                CardTexture::solid(card.color)
            }
        })
        .collect()
}

fn paint_layout(ctx: &web::CanvasRenderingContext2d, layout: &CardLayout) -> Result<(), JsValue> {
    let (w, h) = (layout.width as f64, layout.height as f64);
    for op in layout.draw_ops() {
        match op {
            DrawOp::Fill(paint) => {
                apply_fill(ctx, paint)?;
                ctx.fill_rect(0.0, 0.0, w, h);
            }
            DrawOp::Speckle(s) => {
                ctx.set_fill_style_str(&Rgba::white(s.alpha).to_css());
                ctx.fill_rect(s.x as f64, s.y as f64, 1.0, 1.0);
            }
            DrawOp::Circle(c) => {
                ctx.set_fill_style_str(&c.fill.to_css());
                ctx.begin_path();
                ctx.arc(c.cx as f64, c.cy as f64, c.radius as f64, 0.0, TAU)?;
                ctx.fill();
            }
            DrawOp::RoundRect {
                rect,
                radius,
                fill,
                stroke,
            } => {
                trace_round_rect(ctx, rect, radius)?;
                apply_fill(ctx, fill)?;
                ctx.fill();
                ctx.set_stroke_style_str(&stroke.color.to_css());
                ctx.set_line_width(stroke.width as f64);
                ctx.stroke();
            }
            DrawOp::Text(run) => draw_text(ctx, run)?,
        }
    }
    Ok(())
}

fn apply_fill(ctx: &web::CanvasRenderingContext2d, paint: &Paint) -> Result<(), JsValue> {
    match paint {
        Paint::Solid(color) => ctx.set_fill_style_str(&color.to_css()),
        Paint::Linear { from, to, stops } => {
            let g = ctx.create_linear_gradient(
                from[0] as f64,
                from[1] as f64,
                to[0] as f64,
                to[1] as f64,
            );
            for stop in stops {
                g.add_color_stop(stop.offset, &stop.color.to_css())?;
            }
            ctx.set_fill_style_canvas_gradient(&g);
        }
        Paint::Radial {
            center,
            inner_radius,
            outer_radius,
            stops,
        } => {
            let (cx, cy) = (center[0] as f64, center[1] as f64);
            let g = ctx.create_radial_gradient(
                cx,
                cy,
                *inner_radius as f64,
                cx,
                cy,
                *outer_radius as f64,
            )?;
            for stop in stops {
                g.add_color_stop(stop.offset, &stop.color.to_css())?;
            }
            ctx.set_fill_style_canvas_gradient(&g);
        }
    }
    Ok(())
}

fn trace_round_rect(
    ctx: &web::CanvasRenderingContext2d,
    rect: &Rect,
    radius: f32,
) -> Result<(), JsValue> {
    let r = radius.min(rect.w * 0.5).min(rect.h * 0.5).max(0.0) as f64;
    let (x, y) = (rect.x as f64, rect.y as f64);
    let (right, bottom) = (x + rect.w as f64, y + rect.h as f64);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(right, y, right, bottom, r)?;
    ctx.arc_to(right, bottom, x, bottom, r)?;
    ctx.arc_to(x, bottom, x, y, r)?;
    ctx.arc_to(x, y, right, y, r)?;
    ctx.close_path();
    Ok(())
}

fn draw_text(ctx: &web::CanvasRenderingContext2d, run: &TextRun) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_font(&run.font.to_css());
    ctx.set_fill_style_str(&run.fill.to_css());
    ctx.set_text_align(run.align.as_css());
    if let Some(shadow) = &run.shadow {
        ctx.set_shadow_color(&shadow.color.to_css());
        ctx.set_shadow_blur(shadow.blur as f64);
        ctx.set_shadow_offset_y(shadow.offset_y as f64);
    }
    let drawn = ctx.fill_text(&run.text, run.x as f64, run.y as f64);
    ctx.restore();
    drawn
}
