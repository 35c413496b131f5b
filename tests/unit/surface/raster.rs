use super::*;
use crate::shape::cross::Cross;
use crate::shape::palette::{Color, PALETTE};

fn fill_rect(s: &mut RasterSurface, x: f64, y: f64, w: f64, h: f64, paint: Paint) {
    s.begin_path();
    s.move_to(x, y);
    s.line_to(x + w, y);
    s.line_to(x + w, y + h);
    s.line_to(x, y + h);
    s.close_path();
    s.set_fill_style(paint);
    s.fill();
}

#[test]
fn new_surface_is_transparent() {
    let mut s = RasterSurface::new(8, 4).unwrap();
    let frame = s.snapshot().unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn zero_or_oversized_dimensions_are_rejected() {
    assert!(RasterSurface::new(0, 10).is_err());
    assert!(RasterSurface::new(10, 0).is_err());
    assert!(RasterSurface::new(70_000, 10).is_err());
}

#[test]
fn fill_paints_inside_pixels_only() {
    let mut s = RasterSurface::new(16, 16).unwrap();
    fill_rect(&mut s, 4.0, 4.0, 8.0, 8.0, Paint::Solid(Color::Red));
    let frame = s.snapshot().unwrap();
    assert_eq!(frame.pixel(8, 8), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(14, 14), Some([0, 0, 0, 0]));
}

#[test]
fn later_fills_cover_earlier_ones_across_snapshots() {
    let mut s = RasterSurface::new(16, 16).unwrap();
    fill_rect(&mut s, 0.0, 0.0, 16.0, 16.0, Paint::Solid(Color::Blue));
    let _ = s.snapshot().unwrap();
    fill_rect(&mut s, 0.0, 0.0, 8.0, 16.0, Paint::Solid(Color::Green));
    let frame = s.snapshot().unwrap();
    assert_eq!(frame.pixel(2, 8), Some([0, 128, 0, 255]));
    assert_eq!(frame.pixel(12, 8), Some([0, 0, 255, 255]));
}

#[test]
fn transparent_fill_and_stroke_leave_canvas_untouched() {
    let mut s = RasterSurface::new(8, 8).unwrap();
    fill_rect(&mut s, 0.0, 0.0, 8.0, 8.0, Paint::Transparent);
    s.set_stroke_style(Paint::Transparent);
    s.stroke();
    let frame = s.snapshot().unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn clear_region_resets_pixels_to_transparent() {
    let mut s = RasterSurface::new(16, 16).unwrap();
    fill_rect(&mut s, 0.0, 0.0, 16.0, 16.0, Paint::Solid(Color::Purple));
    s.clear_region(0.0, 0.0, 8.0, 16.0);
    let frame = s.snapshot().unwrap();
    assert_eq!(frame.pixel(3, 3), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(12, 3), Some([128, 0, 128, 255]));
}

#[test]
fn clear_region_handles_negative_extent_and_clipping() {
    let mut s = RasterSurface::new(16, 16).unwrap();
    fill_rect(&mut s, 0.0, 0.0, 16.0, 16.0, Paint::Solid(Color::Red));
    s.clear_region(20.0, 20.0, -10.0, -10.0);
    let frame = s.snapshot().unwrap();
    assert_eq!(frame.pixel(15, 15), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(5, 5), Some([255, 0, 0, 255]));
}

#[test]
fn resize_discards_contents() {
    let mut s = RasterSurface::new(8, 8).unwrap();
    fill_rect(&mut s, 0.0, 0.0, 8.0, 8.0, Paint::Solid(Color::Black));
    s.resize(4, 6).unwrap();
    assert_eq!((s.width(), s.height()), (4, 6));
    let frame = s.snapshot().unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
    assert!(s.resize(0, 6).is_err());
}

#[test]
fn clip_span_normalizes_and_clamps() {
    assert_eq!(clip_span(2.0, 3.0, 10), (2, 5));
    assert_eq!(clip_span(5.0, -3.0, 10), (2, 5));
    assert_eq!(clip_span(-4.0, 6.0, 10), (0, 2));
    assert_eq!(clip_span(8.5, 10.0, 10), (8, 10));
}

#[test]
fn queued_draws_stay_bounded_without_snapshots() {
    let mut queued = RasterSurface::new(40, 40).unwrap();
    let mut eager = RasterSurface::new(40, 40).unwrap();
    for i in 0..300u32 {
        let origin = Point::new(f64::from(i % 3) * 5.0 + 5.0, 10.0);
        let cross = Cross::new(origin, 10.0, PALETTE[i as usize % PALETTE.len()]);
        cross.draw(&mut queued);
        assert!(queued.pending < MAX_PENDING_DRAWS);
        cross.draw(&mut eager);
        let _ = eager.snapshot().unwrap();
    }
    assert_eq!(
        queued.snapshot().unwrap().data,
        eager.snapshot().unwrap().data
    );
}
