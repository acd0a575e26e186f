/// Cairo-based renderer implementation.

use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use cairo::Context;
use std::f64::consts::PI;

pub struct RendererCairo {
    cr: Context,
}

impl RendererCairo {
    pub fn new(cr: Context) -> Self {
        Self { cr }
    }

    /// Update the Cairo context (e.g., after window resize).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn select_font(&self, size: f64) {
        self.cr
            .select_font_face("serif", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(size);
    }
}

impl Renderer for RendererCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
    }

    fn end_frame(&mut self) {
        self.cr.restore().ok();
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_color(color);
        self.cr.rectangle(x, y, w, h);
        self.cr.fill().ok();
    }

    fn draw_line(&self, a: Vec2, b: Vec2, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.cr.new_path();
        self.cr.move_to(a.x, a.y);
        self.cr.line_to(b.x, b.y);
        self.cr.stroke().ok();
    }

    fn fill_triangle(&self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.set_color(color);
        self.cr.new_path();
        self.cr.move_to(a.x, a.y);
        self.cr.line_to(b.x, b.y);
        self.cr.line_to(c.x, c.y);
        self.cr.close_path();
        self.cr.fill().ok();
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.fill().ok();
    }

    fn stroke_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.stroke().ok();
    }

    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.select_font(size);
        self.cr.move_to(x, y);
        self.cr.show_text(text).ok();
    }

    fn draw_text_centered(&self, x: f64, y: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.select_font(size);
        let width = self
            .cr
            .text_extents(text)
            .map(|e| e.width())
            .unwrap_or(0.0);
        self.cr.move_to(x - width / 2.0, y);
        self.cr.show_text(text).ok();
    }
}
