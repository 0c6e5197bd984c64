//! The single shared paint configuration for every stroke.
//!
//! The pencil is read when something is drawn, never copied into a path, so a
//! change made mid-stroke shows up both on screen and in the baked result.

use tiny_skia::{LineCap, Paint, Stroke};

pub const DEFAULT_COLOR: u32 = 0xFF00_0000; // opaque black
pub const DEFAULT_WIDTH: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pencil {
    color: u32, // 0xAARRGGBB
    width: f32,
}

impl Default for Pencil {
    fn default() -> Self {
        Self { color: DEFAULT_COLOR, width: DEFAULT_WIDTH }
    }
}

impl Pencil {
    pub fn new(color: u32, width: f32) -> Self {
        let mut pencil = Self { color, width: DEFAULT_WIDTH };
        pencil.set_width(width);
        pencil
    }

    /// Any 32-bit ARGB value is accepted.
    pub fn set_color(&mut self, argb: u32) {
        self.color = argb;
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// Width 0 draws a one-pixel hairline. Negative or NaN widths are clamped to 0.
    pub fn set_width(&mut self, width: f32) {
        if width.is_nan() || width < 0.0 {
            log::warn!("pencil width {width} clamped to 0");
            self.width = 0.0;
        } else {
            self.width = width;
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Anti-aliased solid paint in the current color.
    pub fn paint(&self) -> Paint<'static> {
        let [a, r, g, b] = self.color.to_be_bytes();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    /// Round-capped stroke at the current width.
    pub fn stroke(&self) -> Stroke {
        Stroke { width: self.width, line_cap: LineCap::Round, ..Stroke::default() }
    }
}
