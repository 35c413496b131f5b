use super::*;

#[test]
fn palette_order_is_fixed() {
    let names: Vec<&str> = PALETTE.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["red", "blue", "green", "purple", "black"]);
}

#[test]
fn every_color_is_opaque() {
    for c in PALETTE {
        assert_eq!(c.rgba8()[3], 255, "{c} must be opaque");
    }
}

#[test]
fn seeded_palettes_repeat() {
    let mut a = Palette::seeded(7);
    let mut b = Palette::seeded(7);
    for _ in 0..64 {
        assert_eq!(a.pick(), b.pick());
    }
}

#[test]
fn picks_cover_whole_palette() {
    let mut p = Palette::seeded(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(p.pick());
    }
    assert_eq!(seen.len(), PALETTE.len());
}

#[test]
fn color_serializes_as_css_name() {
    let json = serde_json::to_string(&Color::Purple).unwrap();
    assert_eq!(json, "\"purple\"");
    let back: Color = serde_json::from_str("\"green\"").unwrap();
    assert_eq!(back, Color::Green);
}
