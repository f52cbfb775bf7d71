//! Immediate-mode drawing surface used by the particle background.
//!
//! The core never touches a browser canvas directly; the web front-end
//! implements [`Canvas2d`] over `CanvasRenderingContext2d`, and tests use a
//! recording implementation.

use glam::Vec2;

/// Straight RGBA color. `a` is the CSS alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// CSS color string, e.g. `rgba(108, 99, 255, 0.3)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Canvas2d {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Filled circle (one path: arc + fill).
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Single stroked segment (one path: move_to + line_to + stroke).
    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Rgba);
}

impl<C: Canvas2d + ?Sized> Canvas2d for &mut C {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        (**self).clear_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        (**self).fill_circle(center, radius, color);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Rgba) {
        (**self).stroke_line(from, to, line_width, color);
    }
}
