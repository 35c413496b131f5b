use super::*;
use crate::shape::palette::Color;

#[test]
fn fills_capture_path_and_active_paint() {
    let mut s = RecordingSurface::new(10, 10);
    s.begin_path();
    s.move_to(1.0, 1.0);
    s.line_to(4.0, 1.0);
    s.line_to(4.0, 4.0);
    s.set_fill_style(Paint::Solid(Color::Red));
    s.fill();

    assert_eq!(s.fills().len(), 1);
    let shape = &s.fills()[0];
    assert_eq!(shape.paint, Paint::Solid(Color::Red));
    assert_eq!(shape.origin(), Some(Point::new(1.0, 1.0)));
    assert_eq!(shape.side(), Some(3.0));
    assert_eq!(shape.points.len(), 3);
}

#[test]
fn begin_path_discards_previous_points() {
    let mut s = RecordingSurface::new(10, 10);
    s.move_to(1.0, 1.0);
    s.line_to(2.0, 2.0);
    s.begin_path();
    s.move_to(5.0, 5.0);
    s.fill();
    assert_eq!(s.fills()[0].points, vec![Point::new(5.0, 5.0)]);
}

#[test]
fn resize_resets_styles_and_updates_size() {
    let mut s = RecordingSurface::new(10, 10);
    s.save_state();
    s.set_fill_style(Paint::Transparent);
    s.resize(30, 20).unwrap();
    assert_eq!((s.width(), s.height()), (30, 20));
    assert_eq!(s.fill_style(), Paint::Solid(Color::Black));
    assert_eq!(s.state_depth(), 0);
    assert_eq!(
        s.calls().last(),
        Some(&DrawCall::Resize {
            width: 30,
            height: 20
        })
    );
}

#[test]
fn take_calls_drains_logs() {
    let mut s = RecordingSurface::new(10, 10);
    s.clear_region(0.0, 0.0, 10.0, 10.0);
    s.fill();
    let calls = s.take_calls();
    assert_eq!(calls.len(), 2);
    assert!(s.calls().is_empty());
    assert!(s.fills().is_empty());
}

#[test]
fn draw_calls_serialize_with_op_tag() {
    let json = serde_json::to_value(DrawCall::MoveTo { x: 1.0, y: 2.0 }).unwrap();
    assert_eq!(json["op"], "move_to");
    assert_eq!(json["x"], 1.0);

    let json = serde_json::to_value(DrawCall::SetFillStyle {
        paint: Paint::Solid(Color::Blue),
    })
    .unwrap();
    assert_eq!(json["op"], "set_fill_style");
    assert_eq!(json["paint"]["solid"], "blue");
}
