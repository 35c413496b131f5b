use crate::foundation::core::Point;
use crate::shape::palette::Color;
use crate::shape::square::Square;
use crate::surface::Surface;

/// Five same-sized squares in a plus pattern around `origin`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cross {
    /// Top-left corner of the center square.
    pub origin: Point,
    /// Side length shared by all five squares.
    pub length: f64,
    /// Color shared by all five squares.
    pub color: Color,
}

impl Cross {
    /// Create a cross centered on the square at `origin`.
    pub fn new(origin: Point, length: f64, color: Color) -> Self {
        Self {
            origin,
            length,
            color,
        }
    }

    /// The five squares in draw order: center, top, bottom, left, right.
    pub fn squares(&self) -> [Square; 5] {
        let l = self.length;
        let at = |p: Point| Square::new(p, l, self.color);
        [
            at(self.origin),
            at(self.origin.translate(0.0, -l)),
            at(self.origin.translate(0.0, l)),
            at(self.origin.translate(-l, 0.0)),
            at(self.origin.translate(l, 0.0)),
        ]
    }

    /// Draw all five squares onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for square in self.squares() {
            square.draw(surface);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/cross.rs"]
mod tests;
