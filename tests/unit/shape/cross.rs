use super::*;
use crate::surface::Paint;
use crate::surface::recording::RecordingSurface;

#[test]
fn squares_are_center_top_bottom_left_right() {
    let cross = Cross::new(Point::new(40.0, 40.0), 10.0, Color::Green);
    let origins: Vec<Point> = cross.squares().iter().map(|s| s.origin).collect();
    assert_eq!(
        origins,
        vec![
            Point::new(40.0, 40.0),
            Point::new(40.0, 30.0),
            Point::new(40.0, 50.0),
            Point::new(30.0, 40.0),
            Point::new(50.0, 40.0),
        ]
    );
    assert!(cross.squares().iter().all(|s| s.length == 10.0));
    assert!(cross.squares().iter().all(|s| s.color == Color::Green));
}

#[test]
fn draw_fills_exactly_five_squares() {
    let mut s = RecordingSurface::new(100, 100);
    let cross = Cross::new(Point::new(20.0, 20.0), 20.0, Color::Red);
    cross.draw(&mut s);

    let fills = s.fills();
    assert_eq!(fills.len(), 5);
    let expected = [(20.0, 20.0), (20.0, 0.0), (20.0, 40.0), (0.0, 20.0), (40.0, 20.0)];
    for (fill, (x, y)) in fills.iter().zip(expected) {
        assert_eq!(fill.origin(), Some(Point::new(x, y)));
        assert_eq!(fill.side(), Some(20.0));
        assert_eq!(fill.paint, Paint::Solid(Color::Red));
    }
}

#[test]
fn negative_length_mirrors_neighbors() {
    let cross = Cross::new(Point::new(0.0, 0.0), -5.0, Color::Black);
    let origins: Vec<Point> = cross.squares().iter().map(|s| s.origin).collect();
    assert_eq!(origins[1], Point::new(0.0, 5.0));
    assert_eq!(origins[4], Point::new(-5.0, 0.0));
}
