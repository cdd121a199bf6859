//! Parametric clip outlines. Every template is a pure function of the element's
//! measured width and height; literal pixel offsets are part of the look and
//! some vertices deliberately fall outside the `(0,0)-(W,H)` box.

use std::fmt::Write as _;

use crate::theme::TitleLevel;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed polygon; the last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, always non-negative.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }

    /// `(min_x, min_y, max_x, max_y)`, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
        ))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| Point::new(p.x + dx, p.y + dy))
                .collect(),
        }
    }

    /// Value for the CSS `clip-path` property.
    pub fn to_css_clip_path(&self) -> String {
        if self.points.is_empty() {
            return "none".to_string();
        }
        let mut out = String::from("polygon(");
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}px {}px", fmt_coord(p.x), fmt_coord(p.y));
        }
        out.push(')');
        out
    }

    /// Value for an SVG `<polygon points="...">` attribute.
    pub fn to_svg_points(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", fmt_coord(p.x), fmt_coord(p.y));
        }
        out
    }
}

fn fmt_coord(v: f64) -> String {
    // Two decimals is well below a device pixel; `+ 0.0` folds -0 into 0.
    let rounded = (v * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}

/// Every outline family the widgets draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Button,
    InputField,
    Card,
    ImageFrame,
    Paragraph,
    AsideItem,
    SimpleSeparator,
    GlitchedSeparator,
    SectionBottomBorder,
    SectionTopDecoration,
    TitleUnderline(TitleLevel),
    UnorderedBullet,
    OrderedBullet,
}

impl ShapeKind {
    /// Fixed box height for shapes that are drawn at a constant size.
    pub fn natural_height(self) -> Option<f64> {
        match self {
            ShapeKind::SimpleSeparator | ShapeKind::GlitchedSeparator => Some(SEPARATOR_HEIGHT),
            ShapeKind::SectionBottomBorder => Some(SECTION_BORDER_HEIGHT),
            ShapeKind::TitleUnderline(TitleLevel::H4) => Some(7.0),
            ShapeKind::TitleUnderline(_) => Some(10.0),
            _ => None,
        }
    }

    /// Whether the template reaches outside the nominal box.
    pub fn overflows_box(self) -> bool {
        matches!(self, ShapeKind::Button | ShapeKind::SectionTopDecoration)
    }
}

pub const SEPARATOR_HEIGHT: f64 = 14.0;
pub const SECTION_BORDER_HEIGHT: f64 = 30.0;
/// Horizontal overhang of the button outline on each side.
pub const BUTTON_OVERHANG: f64 = 15.0;

/// Concrete outline for `kind` at `width` x `height`.
///
/// Non-positive or non-finite sizes produce an empty, zero-area polygon.
pub fn outline(kind: ShapeKind, width: f64, height: f64) -> Polygon {
    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Polygon::empty();
    }
    let (w, h) = (width, height);
    let pairs: Vec<(f64, f64)> = match kind {
        ShapeKind::Button => vec![
            (-BUTTON_OVERHANG, 0.0),
            (w + BUTTON_OVERHANG, 0.0),
            (w + BUTTON_OVERHANG, h),
            (20.0, h),
            (-BUTTON_OVERHANG, h - 35.0),
        ],
        ShapeKind::InputField | ShapeKind::ImageFrame => vec![
            (0.0, 25.0),
            (26.0, 0.0),
            (0.6 * w - 25.0, 0.0),
            (0.6 * w, 25.0),
            (w, 25.0),
            (w, h - 10.0),
            (w - 15.0, h - 10.0),
            (0.8 * w - 10.0, h - 10.0),
            (0.8 * w - 15.0, h),
            (10.0, h),
            (0.0, h - 10.0),
        ],
        ShapeKind::Card => vec![
            (0.0, 0.3 * h),
            (30.0, 0.3 * h + 30.0),
            (30.0, h - 30.0),
            (0.22 * w, h - 30.0),
            (0.22 * w + 30.0, h),
            (0.52 * w, h),
            (0.52 * w + 15.0, h - 15.0),
            (0.7 * w, h - 15.0),
            (0.7 * w + 15.0, h),
            (0.9 * w, h),
            (0.9 * w + 30.0, h - 30.0),
            (w, h - 30.0),
            (w, h),
            (0.0, h),
        ],
        ShapeKind::Paragraph => vec![
            (0.0, 25.0),
            (26.0, 0.0),
            (0.6 * w - 25.0, 0.0),
            (0.6 * w, 25.0),
            (w, 25.0),
            (w, h - 10.0),
            (w - 15.0, h - 10.0),
            (0.8 * w - 10.0, h - 10.0),
            (0.8 * w - 15.0, h),
            (80.0, h),
            (65.0, h - 15.0),
            (0.0, h - 15.0),
        ],
        ShapeKind::AsideItem => vec![
            (0.0, 0.0),
            (w, 0.0),
            (w, h),
            (0.4 * w, h - 9.0),
            (0.0, h),
            (0.01 * w, 0.62 * h),
        ],
        ShapeKind::SimpleSeparator => {
            let mid = h / 2.0;
            vec![(0.0, mid), (w, mid), (w, mid + 1.0), (0.0, mid + 1.0)]
        }
        ShapeKind::GlitchedSeparator => {
            const TEMPLATE: [(f64, f64); 15] = [
                (1.0, 0.0),
                (0.0, 0.0),
                (0.0, 0.0),
                (8.0, 14.0),
                (13.0, 14.0),
                (22.0, 7.0),
                (42.0, 6.0),
                (49.0, 2.0),
                (100.0, 2.0),
                (100.0, 0.0),
                (42.0, 0.0),
                (35.0, 5.0),
                (22.0, 6.0),
                (13.0, 13.0),
                (9.0, 13.0),
            ];
            TEMPLATE
                .iter()
                .map(|&(px, py)| (px * w / 100.0, py * h / SEPARATOR_HEIGHT))
                .collect()
        }
        ShapeKind::SectionBottomBorder => vec![
            (0.0, 0.0),
            (0.22 * w, 0.0),
            (0.22 * w + 30.0, 30.0),
            (0.52 * w, 30.0),
            (0.52 * w + 15.0, 15.0),
            (0.7 * w, 15.0),
            (0.7 * w + 15.0, 30.0),
            (0.9 * w, 30.0),
            (0.9 * w + 30.0, 0.0),
            (w, 0.0),
            (w, 30.0),
            (0.0, 30.0),
        ],
        ShapeKind::SectionTopDecoration => vec![
            (0.22 * w + 28.0, -1.0),
            (0.22 * w + 45.0, 15.0),
            (0.34 * w, 15.0),
            (0.34 * w + 15.0, -1.0),
            (0.7 * w, 0.0),
        ],
        ShapeKind::TitleUnderline(level) => title_underline(level, w),
        ShapeKind::UnorderedBullet => vec![
            (0.0, 0.1 * h),
            (w, 0.7 * h),
            (0.4 * w, h),
            (0.5 * w, 0.7 * h),
        ],
        ShapeKind::OrderedBullet => vec![
            (0.0, 0.0),
            (0.6 * w, 0.0),
            (w, 0.4 * h),
            (w, h),
            (0.0, h),
        ],
    };
    Polygon::from_pairs(&pairs)
}

fn title_underline(level: TitleLevel, w: f64) -> Vec<(f64, f64)> {
    match level {
        TitleLevel::H1 => vec![
            (0.0, 0.0),
            (85.0, 0.0),
            (90.0, 5.0),
            (w, 5.0),
            (w, 6.0),
            (85.0, 6.0),
            (80.0, 10.0),
            (0.0, 10.0),
        ],
        TitleLevel::H2 => vec![
            (0.0, 5.0),
            (35.0, 5.0),
            (40.0, 0.0),
            (85.0, 0.0),
            (90.0, 5.0),
            (w, 5.0),
            (w, 6.0),
            (85.0, 6.0),
            (80.0, 10.0),
            (20.0, 10.0),
            (15.0, 6.0),
            (0.0, 6.0),
        ],
        TitleLevel::H3 => vec![
            (0.0, 5.0),
            (10.0, 5.0),
            (15.0, 0.0),
            (40.0, 0.0),
            (45.0, 5.0),
            (w, 5.0),
            (w, 6.0),
            (31.0, 6.0),
            (27.0, 2.0),
            (15.0, 2.0),
            (8.0, 10.0),
            (0.0, 10.0),
        ],
        TitleLevel::H4 => vec![
            (0.0, 3.0),
            (15.0, 3.0),
            (20.0, 0.0),
            (80.0, 0.0),
            (85.0, 3.0),
            (w, 3.0),
            (w, 4.0),
            (85.0, 4.0),
            (80.0, 7.0),
            (20.0, 7.0),
            (15.0, 4.0),
            (0.0, 4.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_are_rounded_and_unsigned_zero() {
        assert_eq!(fmt_coord(-0.0), "0");
        assert_eq!(fmt_coord(12.0), "12");
        assert_eq!(fmt_coord(1.0 / 3.0), "0.33");
    }
}
