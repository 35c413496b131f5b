use crate::foundation::core::Point;
use crate::foundation::error::CrosstileResult;
use crate::surface::{Paint, StateStack, Surface};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    /// [`Surface::save_state`]
    SaveState,
    /// [`Surface::restore_state`]
    RestoreState,
    /// [`Surface::begin_path`]
    BeginPath,
    /// [`Surface::move_to`]
    MoveTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// [`Surface::line_to`]
    LineTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// [`Surface::close_path`]
    ClosePath,
    /// [`Surface::set_fill_style`]
    SetFillStyle {
        /// New fill paint.
        paint: Paint,
    },
    /// [`Surface::set_stroke_style`]
    SetStrokeStyle {
        /// New stroke paint.
        paint: Paint,
    },
    /// [`Surface::fill`]
    Fill,
    /// [`Surface::stroke`]
    Stroke,
    /// [`Surface::clear_region`]
    ClearRegion {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Region width.
        width: f64,
        /// Region height.
        height: f64,
    },
    /// [`Surface::resize`]
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
}

/// A path filled on a [`RecordingSurface`], with the paint in effect at the time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilledShape {
    /// Path vertices in the order they were added.
    pub points: Vec<Point>,
    /// Fill paint active when [`Surface::fill`] was called.
    pub paint: Paint,
}

impl FilledShape {
    /// First vertex of the path, if any.
    pub fn origin(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Horizontal extent of the path's first edge.
    pub fn side(&self) -> Option<f64> {
        match self.points.as_slice() {
            [a, b, ..] => Some(b.x - a.x),
            _ => None,
        }
    }
}

/// Surface that rasterizes nothing and records every call.
///
/// Style state and the current path are tracked like a real canvas, so each recorded fill
/// carries the geometry and paint that would have hit the pixels.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    fills: Vec<FilledShape>,
    styles: StateStack,
    path: Vec<Point>,
}

impl RecordingSurface {
    /// Create an empty recording of a `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            fills: Vec::new(),
            styles: StateStack::default(),
            path: Vec::new(),
        }
    }

    /// Every call so far, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Every fill so far, oldest first.
    pub fn fills(&self) -> &[FilledShape] {
        &self.fills
    }

    /// Current fill paint.
    pub fn fill_style(&self) -> Paint {
        self.styles.current().fill
    }

    /// Current stroke paint.
    pub fn stroke_style(&self) -> Paint {
        self.styles.current().stroke
    }

    /// Number of saved states not yet restored.
    pub fn state_depth(&self) -> usize {
        self.styles.depth()
    }

    /// Drain the call and fill logs, keeping size, styles and path.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        self.fills.clear();
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn save_state(&mut self) {
        self.styles.save();
        self.calls.push(DrawCall::SaveState);
    }

    fn restore_state(&mut self) {
        self.styles.restore();
        self.calls.push(DrawCall::RestoreState);
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(Point::new(x, y));
        self.calls.push(DrawCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(Point::new(x, y));
        self.calls.push(DrawCall::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.styles.set_fill(paint);
        self.calls.push(DrawCall::SetFillStyle { paint });
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.styles.set_stroke(paint);
        self.calls.push(DrawCall::SetStrokeStyle { paint });
    }

    fn fill(&mut self) {
        self.fills.push(FilledShape {
            points: self.path.clone(),
            paint: self.styles.current().fill,
        });
        self.calls.push(DrawCall::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::ClearRegion {
            x,
            y,
            width,
            height,
        });
    }

    fn resize(&mut self, width: u32, height: u32) -> CrosstileResult<()> {
        self.width = width;
        self.height = height;
        self.styles.reset();
        self.path.clear();
        self.calls.push(DrawCall::Resize { width, height });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/recording.rs"]
mod tests;
