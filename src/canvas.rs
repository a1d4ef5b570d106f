// Browser canvas backend for the renderer.
use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::model::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::render::{Surface, TextAlign};

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, color: &str) {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        self.set_fill_style_str(color);
        self.fill_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        self.fill_rect(x, y, w, h);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.begin_path();
        self.set_fill_style_str(color);
        self.arc(x, y, radius, 0.0, PI * 2.0).ok();
        self.fill();
    }

    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, dash: &[f64], color: &str) {
        let pattern = js_sys::Array::new();
        for d in dash {
            pattern.push(&JsValue::from_f64(*d));
        }
        self.set_line_dash(&pattern).ok();
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke();
        // dash would otherwise leak into later strokes
        self.set_line_dash(&js_sys::Array::new()).ok();
    }

    fn rotated_rect(&mut self, origin: (f64, f64), angle: f64, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.save();
        self.translate(origin.0, origin.1).ok();
        self.rotate(angle).ok();
        self.set_fill_style_str(color);
        self.fill_rect(x, y, w, h);
        self.restore();
    }

    fn text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str) {
        self.set_fill_style_str(color);
        self.set_font(font);
        self.set_text_align(align.as_str());
        self.fill_text(text, x, y).ok();
    }
}
