pub(crate) mod raster;
pub(crate) mod recording;

use crate::foundation::error::CrosstileResult;
use crate::shape::palette::Color;

/// Fill or stroke style of a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Paints nothing.
    Transparent,
    /// Opaque palette color.
    Solid(Color),
}

impl Paint {
    /// Straight-alpha RGBA8 value of this paint.
    pub fn rgba8(self) -> [u8; 4] {
        match self {
            Paint::Transparent => [0, 0, 0, 0],
            Paint::Solid(c) => c.rgba8(),
        }
    }

    /// Whether drawing with this paint leaves the surface untouched.
    pub fn is_transparent(self) -> bool {
        self.rgba8()[3] == 0
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Color::Black)
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

/// Canvas-style 2D drawing capability that shapes render onto.
///
/// The operation set mirrors an immediate-mode canvas: a current path built with
/// [`Surface::move_to`]/[`Surface::line_to`], a fill/stroke style, and a save/restore stack
/// that scopes style changes. Implementations must honor that stack: a shape that saves,
/// restyles, draws and restores leaves the next shape's styles untouched.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Push the current drawing state.
    fn save_state(&mut self);

    /// Pop the most recently saved drawing state. No-op when nothing was saved.
    fn restore_state(&mut self);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extend the current subpath with a straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Set the paint used by [`Surface::fill`].
    fn set_fill_style(&mut self, paint: Paint);

    /// Set the paint used by [`Surface::stroke`].
    fn set_stroke_style(&mut self, paint: Paint);

    /// Fill the current path with the fill style.
    fn fill(&mut self);

    /// Outline the current path with the stroke style.
    fn stroke(&mut self);

    /// Reset every pixel inside the rectangle to transparent.
    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Change the surface size. Contents, path and drawing state are discarded.
    fn resize(&mut self, width: u32, height: u32) -> CrosstileResult<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DrawState {
    pub(crate) fill: Paint,
    pub(crate) stroke: Paint,
}

/// Current drawing state plus the saved states below it.
#[derive(Clone, Debug, Default)]
pub(crate) struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub(crate) fn current(&self) -> DrawState {
        self.current
    }

    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }

    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub(crate) fn restore(&mut self) {
        if let Some(prev) = self.saved.pop() {
            self.current = prev;
        }
    }

    pub(crate) fn set_fill(&mut self, paint: Paint) {
        self.current.fill = paint;
    }

    pub(crate) fn set_stroke(&mut self, paint: Paint) {
        self.current.stroke = paint;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/state.rs"]
mod tests;
