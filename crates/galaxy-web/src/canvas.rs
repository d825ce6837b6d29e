use std::f64::consts::TAU;

use galaxy_engine::{Color, DrawCommand, DrawList, Renderer};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Paints galaxy frames onto an HTML canvas through the 2D context.
pub struct Canvas2dRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dRenderer {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn gradient(&self, width: f32, height: f32, top: Color, bottom: Color) -> Result<(), JsValue> {
        let grad = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height as f64);
        grad.add_color_stop(0.0, &top.to_css())?;
        grad.add_color_stop(1.0, &bottom.to_css())?;
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
        Ok(())
    }

    fn circle(&self, x: f32, y: f32, radius: f32, color: Color, alpha: f32, glow: f32) -> Result<(), JsValue> {
        let css = color.to_css();
        self.ctx.save();
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.begin_path();
        self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU)?;
        self.ctx.set_fill_style_str(&css);
        self.ctx.fill();
        if glow > 0.0 {
            self.ctx.set_shadow_blur(glow as f64);
            self.ctx.set_shadow_color(&css);
            self.ctx.set_stroke_style_str(&css);
            self.ctx.stroke();
        }
        self.ctx.restore();
        Ok(())
    }
}

impl Renderer for Canvas2dRenderer {
    type Error = JsValue;

    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn render(&mut self, frame: &DrawList) -> Result<(), JsValue> {
        for command in frame.commands() {
            match *command {
                DrawCommand::Clear { width, height } => {
                    self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
                }
                DrawCommand::VerticalGradient { width, height, top, bottom } => {
                    self.gradient(width, height, top, bottom)?;
                }
                DrawCommand::Circle { center, radius, color, alpha, glow } => {
                    self.circle(center.x, center.y, radius, color, alpha, glow)?;
                }
            }
        }
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
