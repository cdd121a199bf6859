//! Vertex templates, purity, degenerate input and the CSS/SVG encodings.

use neonfolio_core::shapes::{outline, Point, Polygon, ShapeKind, BUTTON_OVERHANG};
use neonfolio_core::theme::TitleLevel;
use pretty_assertions::assert_eq;

fn assert_near(p: Point, x: f64, y: f64) {
    assert!(
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9,
        "expected ({x}, {y}), got ({}, {})",
        p.x,
        p.y
    );
}

fn all_kinds() -> Vec<ShapeKind> {
    let mut kinds = vec![
        ShapeKind::Button,
        ShapeKind::InputField,
        ShapeKind::Card,
        ShapeKind::ImageFrame,
        ShapeKind::Paragraph,
        ShapeKind::AsideItem,
        ShapeKind::SimpleSeparator,
        ShapeKind::GlitchedSeparator,
        ShapeKind::SectionBottomBorder,
        ShapeKind::SectionTopDecoration,
        ShapeKind::UnorderedBullet,
        ShapeKind::OrderedBullet,
    ];
    kinds.extend(TitleLevel::ALL.iter().map(|&l| ShapeKind::TitleUnderline(l)));
    kinds
}

#[test]
fn identical_sizes_give_identical_polygons() {
    for kind in all_kinds() {
        let a = outline(kind, 321.5, 143.25);
        let b = outline(kind, 321.5, 143.25);
        assert_eq!(a, b, "{kind:?}");
        let bits = |p: &Polygon| p.points.iter().map(|q| (q.x.to_bits(), q.y.to_bits())).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b), "{kind:?}");
    }
}

#[test]
fn zero_or_negative_sizes_are_degenerate() {
    for kind in all_kinds() {
        for (w, h) in [(0.0, 100.0), (100.0, 0.0), (-5.0, 40.0), (f64::NAN, 10.0)] {
            let polygon = outline(kind, w, h);
            assert_eq!(polygon.area(), 0.0, "{kind:?} at {w}x{h}");
            assert!(polygon.is_degenerate());
        }
    }
}

#[test]
fn real_sizes_have_area() {
    for kind in all_kinds() {
        if kind == ShapeKind::SectionTopDecoration {
            continue;
        }
        assert!(outline(kind, 400.0, 200.0).area() > 0.0, "{kind:?}");
    }
}

#[test]
fn button_overhangs_both_sides() {
    let polygon = outline(ShapeKind::Button, 200.0, 60.0);
    assert_eq!(
        polygon.points,
        vec![
            Point::new(-15.0, 0.0),
            Point::new(215.0, 0.0),
            Point::new(215.0, 60.0),
            Point::new(20.0, 60.0),
            Point::new(-15.0, 25.0),
        ]
    );
    let (min_x, _, max_x, _) = polygon.bounds().unwrap();
    assert_eq!(min_x, -BUTTON_OVERHANG);
    assert_eq!(max_x, 200.0 + BUTTON_OVERHANG);
    assert!(ShapeKind::Button.overflows_box());
}

#[test]
fn input_field_and_image_frame_share_a_template() {
    assert_eq!(
        outline(ShapeKind::InputField, 300.0, 80.0),
        outline(ShapeKind::ImageFrame, 300.0, 80.0)
    );
    let polygon = outline(ShapeKind::InputField, 300.0, 80.0);
    assert_eq!(polygon.len(), 11);
    assert_near(polygon.points[2], 155.0, 0.0);
    assert_near(polygon.points[8], 225.0, 80.0);
}

#[test]
fn card_cuts_its_lower_edge() {
    let polygon = outline(ShapeKind::Card, 1000.0, 400.0);
    assert_eq!(polygon.len(), 14);
    assert_near(polygon.points[0], 0.0, 120.0);
    assert_near(polygon.points[3], 220.0, 370.0);
    assert_near(polygon.points[10], 930.0, 370.0);
    assert_near(polygon.points[13], 0.0, 400.0);
}

#[test]
fn glitched_separator_scales_with_the_box() {
    let polygon = outline(ShapeKind::GlitchedSeparator, 200.0, 28.0);
    assert_eq!(polygon.points[3], Point::new(16.0, 28.0));
    assert_eq!(polygon.points[8], Point::new(200.0, 4.0));
    assert_eq!(ShapeKind::GlitchedSeparator.natural_height(), Some(14.0));
}

#[test]
fn title_underlines_differ_per_level() {
    let h1 = outline(ShapeKind::TitleUnderline(TitleLevel::H1), 300.0, 10.0);
    let h4 = outline(ShapeKind::TitleUnderline(TitleLevel::H4), 300.0, 10.0);
    assert_eq!(h1.len(), 8);
    assert_eq!(h4.len(), 12);
    assert_ne!(h1, h4);
    assert_eq!(h1.points[3], Point::new(300.0, 5.0));
    assert_eq!(ShapeKind::TitleUnderline(TitleLevel::H4).natural_height(), Some(7.0));
}

#[test]
fn area_uses_the_shoelace_formula() {
    let square = Polygon::from_pairs(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert_eq!(square.area(), 100.0);
    let reversed = Polygon::from_pairs(&[(0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
    assert_eq!(reversed.area(), 100.0);
    let separator = outline(ShapeKind::SimpleSeparator, 50.0, 14.0);
    assert_eq!(separator.area(), 50.0);
}

#[test]
fn css_and_svg_encodings() {
    let polygon = outline(ShapeKind::OrderedBullet, 10.0, 10.0);
    assert_eq!(
        polygon.to_css_clip_path(),
        "polygon(0px 0px, 6px 0px, 10px 4px, 10px 10px, 0px 10px)"
    );
    assert_eq!(polygon.to_svg_points(), "0,0 6,0 10,4 10,10 0,10");
    assert_eq!(Polygon::empty().to_css_clip_path(), "none");
    assert_eq!(Polygon::empty().to_svg_points(), "");
}

#[test]
fn translation_moves_every_vertex() {
    let polygon = outline(ShapeKind::Button, 100.0, 50.0).translated(15.0, 0.0);
    assert_eq!(polygon.bounds(), Some((0.0, 0.0, 130.0, 50.0)));
}
