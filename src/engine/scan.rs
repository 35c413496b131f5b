use crate::foundation::core::Point;

/// What a pass needs from its environment at each step.
///
/// Every value is re-read when it is needed, so changes made between steps (a resize, a new
/// side length) apply to the next step of the pass in flight.
pub trait ScanHost {
    /// Current surface width in pixels.
    fn width(&mut self) -> f64;

    /// Current surface height in pixels.
    fn height(&mut self) -> f64;

    /// Current side length of a cross's squares.
    fn side_length(&mut self) -> f64;

    /// Draw one cross with its center square at `origin`.
    fn draw_cross(&mut self, origin: Point, side_length: f64);

    /// Yield between steps.
    fn pause(&mut self);
}

/// Summary of one completed pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PassReport {
    /// Vertical offset the pass started at.
    pub start_offset: f64,
    /// Crosses drawn.
    pub crosses: u64,
    /// Times the cursor wrapped back to `x = 0`.
    pub wraps: u64,
    /// Cursor `y` that ended the pass (first value past the surface height).
    pub end_y: f64,
}

/// Sweep the surface once, left to right and top to bottom, starting at `start_offset`.
///
/// The exit check only looks at the cursor: a pass never observes the engine's run flag and
/// always sweeps to the bottom. A zero or negative side length never moves the cursor past the
/// right edge, so such a pass does not end.
pub fn run_pass<H: ScanHost + ?Sized>(host: &mut H, start_offset: f64) -> PassReport {
    let mut x = 0.0;
    let mut y = start_offset;
    let mut crosses = 0u64;
    let mut wraps = 0u64;

    loop {
        if y > host.height() {
            break;
        }

        let side = host.side_length();
        host.draw_cross(Point::new(x, y), side);
        crosses += 1;

        host.pause();

        let step = host.side_length() * 3.0;
        x += step;
        if x > host.width() {
            x = 0.0;
            y += step;
            wraps += 1;
        }
    }

    PassReport {
        start_offset,
        crosses,
        wraps,
        end_y: y,
    }
}

/// Offset of the pass after one that started at `offset`.
///
/// Advances by one side length and wraps to 0 once it reaches the surface height.
pub fn next_scan_offset(offset: f64, side_length: f64, height: f64) -> f64 {
    let next = offset + side_length;
    if next >= height { 0.0 } else { next }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scan.rs"]
mod tests;
