use crate::foundation::core::{FrameRGBA, Point};
use crate::foundation::error::{CrosstileError, CrosstileResult};
use crate::foundation::math::premul_over_in_place;
use crate::surface::{Paint, StateStack, Surface};

/// Queued fill/stroke commands after which the render context is composited onto the canvas.
pub(crate) const MAX_PENDING_DRAWS: usize = 256;

/// CPU raster surface powered by `vello_cpu`.
///
/// Fills and strokes are queued on a render context and composited onto a persistent
/// premultiplied RGBA8 canvas whenever pixels are needed (clear, snapshot). `vello_cpu`
/// renders into a fresh buffer, so queued work goes through a scratch pixmap and is then
/// premul-over'd onto the canvas. The queue is also composited once it holds
/// [`MAX_PENDING_DRAWS`] commands, so an animation that never reads pixels back keeps a bounded
/// backlog.
pub struct RasterSurface {
    width: u16,
    height: u16,
    canvas: vello_cpu::Pixmap,
    scratch: vello_cpu::Pixmap,
    ctx: vello_cpu::RenderContext,
    pending: usize,
    styles: StateStack,
    path: kurbo::BezPath,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl RasterSurface {
    /// Create a transparent `width` x `height` surface.
    ///
    /// Both dimensions must be in `1..=65535`.
    pub fn new(width: u32, height: u32) -> CrosstileResult<Self> {
        let (w, h) = raster_dims(width, height)?;
        let mut canvas = vello_cpu::Pixmap::new(w, h);
        clear_pixmap_to_transparent(&mut canvas);
        Ok(Self {
            width: w,
            height: h,
            canvas,
            scratch: vello_cpu::Pixmap::new(w, h),
            ctx: vello_cpu::RenderContext::new(w, h),
            pending: 0,
            styles: StateStack::default(),
            path: kurbo::BezPath::new(),
        })
    }

    /// Composite queued draws and read the canvas back.
    pub fn snapshot(&mut self) -> CrosstileResult<FrameRGBA> {
        self.flush_pending()?;
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.canvas.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn flush_pending(&mut self) -> CrosstileResult<()> {
        if self.pending == 0 {
            return Ok(());
        }
        clear_pixmap_to_transparent(&mut self.scratch);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.scratch);
        premul_over_in_place(
            self.canvas.data_as_u8_slice_mut(),
            self.scratch.data_as_u8_slice(),
        )?;
        self.ctx.reset();
        self.pending = 0;
        Ok(())
    }

    fn queued(&mut self) {
        self.pending += 1;
        if self.pending < MAX_PENDING_DRAWS {
            return;
        }
        if let Err(err) = self.flush_pending() {
            tracing::warn!(%err, "dropping queued draws");
            self.ctx.reset();
            self.pending = 0;
        }
    }

    fn set_paint(&mut self, paint: Paint) {
        let [r, g, b, a] = paint.rgba8();
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn save_state(&mut self) {
        self.styles.save();
    }

    fn restore_state(&mut self) {
        self.styles.restore();
    }

    fn begin_path(&mut self) {
        self.path = kurbo::BezPath::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.path.elements().is_empty() {
            // Canvas semantics: a line_to on an empty path acts as move_to.
            self.path.move_to(Point::new(x, y));
        } else {
            self.path.line_to(Point::new(x, y));
        }
    }

    fn close_path(&mut self) {
        if !self.path.elements().is_empty() {
            self.path.close_path();
        }
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.styles.set_fill(paint);
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.styles.set_stroke(paint);
    }

    fn fill(&mut self) {
        let paint = self.styles.current().fill;
        if paint.is_transparent() || self.path.elements().is_empty() {
            return;
        }
        self.set_paint(paint);
        self.ctx.fill_path(&bezpath_to_cpu(&self.path));
        self.queued();
    }

    fn stroke(&mut self) {
        let paint = self.styles.current().stroke;
        if paint.is_transparent() || self.path.elements().is_empty() {
            return;
        }
        self.set_paint(paint);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(1.0));
        self.ctx.stroke_path(&bezpath_to_cpu(&self.path));
        self.queued();
    }

    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let Err(err) = self.flush_pending() {
            tracing::warn!(%err, "dropping queued draws before clear");
            self.ctx.reset();
            self.pending = 0;
        }
        let (x0, x1) = clip_span(x, width, self.width);
        let (y0, y1) = clip_span(y, height, self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let stride = usize::from(self.width) * 4;
        let data = self.canvas.data_as_u8_slice_mut();
        for row in y0..y1 {
            let start = row * stride + x0 * 4;
            let end = row * stride + x1 * 4;
            data[start..end].fill(0);
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> CrosstileResult<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }
}

fn raster_dims(width: u32, height: u32) -> CrosstileResult<(u16, u16)> {
    let w = u16::try_from(width).ok().filter(|&w| w > 0);
    let h = u16::try_from(height).ok().filter(|&h| h > 0);
    match (w, h) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(CrosstileError::surface(format!(
            "raster surface size must be within 1..=65535 on both axes, got {width}x{height}"
        ))),
    }
}

/// Pixel span covered by `[start, start + len)`, normalized for negative lengths and clipped
/// to `0..limit`.
fn clip_span(start: f64, len: f64, limit: u16) -> (usize, usize) {
    let (a, b) = if len < 0.0 {
        (start + len, start)
    } else {
        (start, start + len)
    };
    let limit = f64::from(limit);
    let a = a.floor().clamp(0.0, limit);
    let b = b.ceil().clamp(0.0, limit);
    (a as usize, b as usize)
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/raster.rs"]
mod tests;
