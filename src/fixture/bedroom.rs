use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Layer, LineStyle, Paint};
use crate::layout::LayoutWarning;
use crate::math::{Axis, Point2, Rect};

use super::Sketch;

/// Standard mattress sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedSize {
    Twin,
    Full,
    Queen,
    King,
}

impl BedSize {
    /// `(width, length)` in metres.
    #[must_use]
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Twin => (0.99, 1.91),
            Self::Full => (1.37, 1.91),
            Self::Queen => (1.52, 2.03),
            Self::King => (1.93, 2.03),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Twin => "twin",
            Self::Full => "full",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Capitalised name used in labels.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Twin => "Twin",
            Self::Full => "Full",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Parses a bed name, falling back to [`BedSize::Queen`] with a warning
    /// when the name is not recognised.
    #[must_use]
    pub fn resolve(name: &str) -> (Self, Option<LayoutWarning>) {
        match name.parse() {
            Ok(size) => (size, None),
            Err(UnknownBedSize(value)) => (
                Self::Queen,
                Some(LayoutWarning::UnknownOption {
                    option: "bed_type",
                    value,
                    fallback: Self::Queen.name().to_owned(),
                }),
            ),
        }
    }
}

impl fmt::Display for BedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`BedSize::from_str`] for an unrecognised name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBedSize(pub String);

impl FromStr for BedSize {
    type Err = UnknownBedSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twin" => Ok(Self::Twin),
            "full" => Ok(Self::Full),
            "queen" => Ok(Self::Queen),
            "king" => Ok(Self::King),
            _ => Err(UnknownBedSize(s.to_owned())),
        }
    }
}

const HEADBOARD_SHARE: f64 = 0.08;
const BLANKET_SHARE: f64 = 0.7;
const PILLOW_SHARE: f64 = 0.15;
const PILLOW_INSET: f64 = 0.05;

/// Bed drawn with the head end at the top (max y) of `b`.
///
/// The headboard is inside the bounding box, so the whole bed including
/// headboard occupies exactly the footprint of its mattress size.
pub(super) fn bed(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;

    let headboard = b.height * HEADBOARD_SHARE;
    let mattress = Rect::new(b.min_x(), b.min_y(), b.width, b.height - headboard);
    let blanket = b.height * BLANKET_SHARE;
    let fold_y = b.min_y() + blanket - b.height * 0.05;

    let pillow_w = (b.width - 2.0 * PILLOW_INSET) * 0.5;
    let pillow_l = b.height * PILLOW_SHARE;
    let pillow_y = mattress.max_y() - pillow_l - PILLOW_INSET;

    sk.body(
        Rect::new(b.min_x(), mattress.max_y(), b.width, headboard),
        &c.headboard,
        0.8,
        Layer::Fixture,
    );
    sk.body(mattress, &c.bed_base, 0.8, Layer::Fixture);
    sk.body(
        Rect::new(b.min_x(), b.min_y(), b.width, blanket),
        &c.blanket,
        0.5,
        Layer::FixtureDetail,
    );
    sk.line(
        Point2::new(b.min_x() + b.width * 0.2, fold_y),
        Point2::new(b.min_x() + b.width * 0.8, fold_y),
        Paint::stroke(&c.blanket_fold, 0.8)
            .with_line_style(LineStyle::Dashed)
            .with_opacity(0.6),
        Layer::FixtureDetail,
    );
    for i in 0..2 {
        let x = b.min_x() + PILLOW_INSET + f64::from(i) * pillow_w;
        sk.body(
            Rect::new(x, pillow_y, pillow_w, pillow_l),
            &c.pillow,
            0.5,
            Layer::Accent,
        );
    }
    sk.label(b, label, &c.label, style.fonts.large_label, true);
}

pub(super) fn nightstand(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    sk.body(b, &style.colors.furniture, 0.8, Layer::Fixture);
    sk.label(b, label, &style.colors.label, style.fonts.small_label, false);
}

/// Wardrobe; a vertical wardrobe gets its label turned to read along it.
pub(super) fn wardrobe(sk: &mut Sketch<'_>, b: Rect, axis: Axis, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let rotation = match axis {
        Axis::Horizontal => 0.0,
        Axis::Vertical => 90.0,
    };
    sk.body(b, &c.furniture, 1.0, Layer::Fixture);
    // Door split down the middle of the run.
    let (from, to) = match axis {
        Axis::Horizontal => {
            let x = b.center().x;
            (Point2::new(x, b.min_y()), Point2::new(x, b.max_y()))
        }
        Axis::Vertical => {
            let y = b.center().y;
            (Point2::new(b.min_x(), y), Point2::new(b.max_x(), y))
        }
    };
    sk.line(from, to, Paint::stroke(&c.outline, 0.5), Layer::FixtureDetail);
    sk.label_rotated(
        b,
        label,
        &c.label_on_dark,
        style.fonts.large_label,
        true,
        rotation,
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Primitive, Shape};
    use crate::style::Style;
    use approx::assert_relative_eq;

    fn draw(f: impl FnOnce(&mut Sketch<'_>)) -> Vec<Shape> {
        let style = Style::default();
        let mut sk = Sketch::new(&style);
        f(&mut sk);
        sk.finish()
    }

    #[test]
    fn named_sizes() {
        assert_eq!(BedSize::King.dimensions(), (1.93, 2.03));
        assert_eq!("Twin".parse::<BedSize>().unwrap(), BedSize::Twin);
        let (size, warning) = BedSize::resolve("full");
        assert_eq!(size, BedSize::Full);
        assert!(warning.is_none());
    }

    #[test]
    fn unknown_size_falls_back_to_queen() {
        let (size, warning) = BedSize::resolve("queen_xl");
        assert_eq!(size.dimensions(), (1.52, 2.03));
        assert!(matches!(
            warning,
            Some(LayoutWarning::UnknownOption { option: "bed_type", ref value, .. }) if value == "queen_xl"
        ));
    }

    #[test]
    fn headboard_sits_at_the_head_end() {
        let b = Rect::new(1.39, 1.62, 1.52, 2.03);
        let shapes = draw(|sk| bed(sk, b, "Queen Bed"));
        let Primitive::Rect(headboard) = shapes[0].primitive else {
            panic!("headboard is not a rectangle");
        };
        assert_relative_eq!(headboard.max_y(), b.max_y(), epsilon = 1e-9);
        assert_relative_eq!(headboard.height, 2.03 * 0.08, epsilon = 1e-9);
        let pillows = shapes.iter().filter(|s| s.layer == Layer::Accent).count();
        assert_eq!(pillows, 2);
    }

    #[test]
    fn vertical_wardrobe_label_is_rotated() {
        let shapes = draw(|sk| wardrobe(sk, Rect::new(0.0, 0.0, 0.6, 1.8), Axis::Vertical, "Wardrobe"));
        let rotation = shapes.iter().find_map(|s| match &s.primitive {
            Primitive::Text(t) => Some(t.rotation_deg),
            _ => None,
        });
        assert_eq!(rotation, Some(90.0));
    }
}
