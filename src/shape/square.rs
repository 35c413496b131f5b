use crate::foundation::core::Point;
use crate::shape::palette::Color;
use crate::surface::{Paint, Surface};

/// A filled axis-aligned square: the primitive every cross is built from.
///
/// Squares are transient. They are built for one draw call and dropped right after.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Square {
    /// Top-left corner.
    pub origin: Point,
    /// Side length in pixels. Non-positive values draw degenerate geometry.
    pub length: f64,
    /// Fill color.
    pub color: Color,
}

impl Square {
    /// Create a square at `origin`.
    pub fn new(origin: Point, length: f64, color: Color) -> Self {
        Self {
            origin,
            length,
            color,
        }
    }

    /// Corners in outline order, starting and ending at the origin.
    pub fn outline(&self) -> [Point; 5] {
        let o = self.origin;
        let l = self.length;
        [
            o,
            o.translate(l, 0.0),
            o.translate(l, l),
            o.translate(0.0, l),
            o,
        ]
    }

    /// Fill the square onto `surface`.
    ///
    /// The style change is wrapped in a save/restore pair so it never leaks into later draws.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.save_state();
        surface.begin_path();
        let [first, rest @ ..] = self.outline();
        surface.move_to(first.x, first.y);
        for p in rest {
            surface.line_to(p.x, p.y);
        }
        surface.set_fill_style(Paint::Solid(self.color));
        surface.set_stroke_style(Paint::Transparent);
        surface.fill();
        surface.stroke();
        surface.close_path();
        surface.restore_state();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/square.rs"]
mod tests;
