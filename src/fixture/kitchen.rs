use serde::{Deserialize, Serialize};

use crate::geometry::{Layer, LineStyle, Paint};
use crate::math::{whole_divisions, Axis, Point2, Rect};

use super::Sketch;

/// Nominal width of one base cabinet.
pub const COUNTER_UNIT: f64 = 0.6;

const COUNTERTOP: f64 = 0.05;
const BASIN: f64 = 0.4;
const BURNER_RADIUS: f64 = 0.08;
const CHAIR_RADIUS: f64 = 0.2;
const CHAIR_GAP: f64 = 0.1;

/// Number of cabinet units along a counter run, at least one.
#[must_use]
pub fn counter_units(run: f64) -> usize {
    whole_divisions(run, COUNTER_UNIT, 1)
}

/// Chairs drawn around a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiningChairs {
    None,
    /// One chair at each short side (below and above the table).
    #[default]
    Two,
    /// Two more at the left and right.
    Four,
}

impl DiningChairs {
    /// Space `(x, y)` the chairs need on each side of the table top.
    #[must_use]
    pub fn margins(self) -> (f64, f64) {
        let m = CHAIR_GAP + 2.0 * CHAIR_RADIUS;
        match self {
            Self::None => (0.0, 0.0),
            Self::Two => (0.0, m),
            Self::Four => (m, m),
        }
    }
}

/// Base cabinets with a countertop band and dotted unit dividers. Unlabelled
/// unless the template names the run.
#[allow(clippy::cast_precision_loss)]
pub(super) fn counter(sk: &mut Sketch<'_>, b: Rect, axis: Axis, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let divider = Paint::stroke(&c.outline, 0.5).with_line_style(LineStyle::Dotted);

    sk.body(b, &c.counter, 0.8, Layer::Fixture);
    match axis {
        Axis::Horizontal => {
            let top = Rect::new(b.min_x(), b.max_y() - COUNTERTOP, b.width, COUNTERTOP);
            sk.body(top, &c.countertop, 0.5, Layer::FixtureDetail);
            let n = counter_units(b.width);
            let step = b.width / n as f64;
            for i in 1..n {
                let x = b.min_x() + i as f64 * step;
                sk.line(
                    Point2::new(x, b.min_y()),
                    Point2::new(x, b.max_y()),
                    divider.clone(),
                    Layer::FixtureDetail,
                );
            }
        }
        Axis::Vertical => {
            let top = Rect::new(b.min_x(), b.min_y(), COUNTERTOP, b.height);
            sk.body(top, &c.countertop, 0.5, Layer::FixtureDetail);
            let n = counter_units(b.height);
            let step = b.height / n as f64;
            for i in 1..n {
                let y = b.min_y() + i as f64 * step;
                sk.line(
                    Point2::new(b.min_x(), y),
                    Point2::new(b.max_x(), y),
                    divider.clone(),
                    Layer::FixtureDetail,
                );
            }
        }
    }
    sk.label(b, label, &c.label_on_dark, style.fonts.small_label, false);
}

/// Sink cut-out with a square basin and a dotted drain cross.
pub(super) fn sink(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;

    let size = BASIN.min(b.width).min(b.height);
    let center = b.center();
    let basin = Rect::new(center.x - size * 0.5, center.y - size * 0.5, size, size);
    let cross = basin.inset(0.05_f64.min(size * 0.25), 0.05_f64.min(size * 0.25));
    let dotted = Paint::stroke(&c.outline, 0.5).with_line_style(LineStyle::Dotted);

    sk.body(b, &c.countertop, 0.5, Layer::Fixture);
    sk.body(basin, &c.basin, 0.5, Layer::Accent);
    sk.line(cross.origin, Point2::new(cross.max_x(), cross.max_y()), dotted.clone(), Layer::Accent);
    sk.line(
        Point2::new(cross.min_x(), cross.max_y()),
        Point2::new(cross.max_x(), cross.min_y()),
        dotted,
        Layer::Accent,
    );
    sk.label(b, label, &c.label, style.fonts.fixture_label, false);
}

/// Cooktop with four burners and the oven door line.
pub(super) fn stove(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let radius = BURNER_RADIUS.min(b.width.min(b.height) * 0.25);

    sk.body(b, &c.appliance, 0.8, Layer::Fixture);
    for (fx, fy) in [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)] {
        sk.circle(
            Point2::new(b.min_x() + b.width * fx, b.min_y() + b.height * fy),
            radius,
            Paint::fill(&c.burner),
            Layer::FixtureDetail,
        );
    }
    let y = b.min_y() + b.height * 0.3;
    sk.line(
        Point2::new(b.min_x() + b.width * 0.1, y),
        Point2::new(b.min_x() + b.width * 0.9, y),
        Paint::stroke(&c.appliance_detail, 1.5),
        Layer::FixtureDetail,
    );
    sk.label(b, label, &c.label_on_dark, style.fonts.fixture_label, true);
}

/// Fridge with a dashed freezer split and two door handles.
pub(super) fn refrigerator(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let mid = b.center().y;
    let handle_x = b.min_x() + b.width * 0.1;

    sk.body(b, &c.appliance, 0.8, Layer::Fixture);
    sk.line(
        Point2::new(b.min_x(), mid),
        Point2::new(b.max_x(), mid),
        Paint::stroke(&c.appliance_detail, 1.0).with_line_style(LineStyle::Dashed),
        Layer::FixtureDetail,
    );
    for (lo, hi) in [(0.2, 0.4), (0.6, 0.8)] {
        sk.line(
            Point2::new(handle_x, b.min_y() + b.height * lo),
            Point2::new(handle_x, b.min_y() + b.height * hi),
            Paint::stroke(&c.appliance_detail, 1.5),
            Layer::FixtureDetail,
        );
    }
    sk.label(b, label, &c.label_on_dark, style.fonts.fixture_label, true);
}

pub(super) fn dishwasher(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let y = b.min_y() + b.height * 0.15;

    sk.body(b, &c.appliance, 0.8, Layer::Fixture);
    sk.line(
        Point2::new(b.min_x() + b.width * 0.1, y),
        Point2::new(b.min_x() + b.width * 0.9, y),
        Paint::stroke(&c.appliance_detail, 1.5),
        Layer::FixtureDetail,
    );
    sk.body(
        Rect::new(
            b.min_x() + b.width * 0.1,
            b.min_y() + b.height * 0.8,
            b.width * 0.8,
            b.height * 0.15,
        ),
        &c.control_panel,
        0.5,
        Layer::FixtureDetail,
    );
    sk.label(b, label, &c.label_on_dark, style.fonts.fixture_label, true);
}

pub(super) fn microwave(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let x = b.min_x() + b.width * 0.2;

    sk.body(b, &c.appliance, 0.8, Layer::Fixture);
    sk.line(
        Point2::new(x, b.min_y() + b.height * 0.1),
        Point2::new(x, b.min_y() + b.height * 0.9),
        Paint::stroke(&c.appliance_detail, 1.0),
        Layer::FixtureDetail,
    );
    sk.body(
        Rect::new(
            b.min_x() + b.width * 0.7,
            b.min_y() + b.height * 0.7,
            b.width * 0.2,
            b.height * 0.2,
        ),
        &c.tank,
        0.5,
        Layer::FixtureDetail,
    );
    sk.label(b, label, &c.label_on_dark, style.fonts.small_label, true);
}

/// Exhaust hood, hatched to read as an overhead element.
pub(super) fn hood(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    sk.rect(b, Paint::outlined(&c.appliance, 0.8).hatched(), Layer::Fixture);
    sk.label(b, label, &c.label_on_dark, style.fonts.small_label, true);
}

/// Table top inset from the footprint by the chair margins, with chairs on
/// the sides the margins reserve.
pub(super) fn dining_table(sk: &mut Sketch<'_>, b: Rect, chairs: DiningChairs, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let (mx, my) = chairs.margins();
    let top = b.inset(mx, my);
    let center = top.center();
    let offset = CHAIR_RADIUS + CHAIR_GAP;

    sk.body(top, &c.furniture, 0.8, Layer::Fixture);
    let mut seats = Vec::with_capacity(4);
    if chairs != DiningChairs::None {
        seats.push(Point2::new(center.x, top.min_y() - offset));
        seats.push(Point2::new(center.x, top.max_y() + offset));
    }
    if chairs == DiningChairs::Four {
        seats.push(Point2::new(top.min_x() - offset, center.y));
        seats.push(Point2::new(top.max_x() + offset, center.y));
    }
    for seat in seats {
        sk.circle(seat, CHAIR_RADIUS, Paint::outlined(&c.furniture, 0.8), Layer::FixtureDetail);
    }
    sk.label(top, label, &c.label_on_dark, style.fonts.fixture_label, true);
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

    fn lines(shapes: &[Shape]) -> Vec<(Point2, Point2)> {
        shapes
            .iter()
            .filter_map(|s| match s.primitive {
                Primitive::Line { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn counter_unit_count() {
        assert_eq!(counter_units(1.8), 3);
        assert_eq!(counter_units(2.9), 4);
        assert_eq!(counter_units(0.4), 1);
    }

    #[test]
    fn vertical_counter_divides_along_its_run() {
        let b = Rect::new(0.15, 1.15, 0.6, 2.4);
        let shapes = draw(|sk| counter(sk, b, Axis::Vertical, ""));
        let dividers = lines(&shapes);
        assert_eq!(dividers.len(), 3);
        for (from, to) in dividers {
            assert_relative_eq!(from.y, to.y, epsilon = 1e-9);
            assert_relative_eq!(from.x, b.min_x(), epsilon = 1e-9);
        }
    }

    #[test]
    fn counter_label_is_drawn_only_when_named() {
        let b = Rect::new(0.0, 0.0, 1.8, 0.6);
        let texts = |shapes: &[Shape]| {
            shapes
                .iter()
                .filter_map(|s| match &s.primitive {
                    Primitive::Text(t) => Some(t.text.clone()),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        assert!(texts(&draw(|sk| counter(sk, b, Axis::Horizontal, ""))).is_empty());
        assert_eq!(
            texts(&draw(|sk| counter(sk, b, Axis::Horizontal, "Pantry"))),
            ["Pantry"]
        );
    }

    #[test]
    fn dining_chairs_sit_in_the_margin() {
        let (mx, my) = DiningChairs::Two.margins();
        let b = Rect::new(0.0, 0.0, 1.0, 0.8 + 2.0 * my);
        assert_relative_eq!(mx, 0.0, epsilon = 1e-9);
        let shapes = draw(|sk| dining_table(sk, b, DiningChairs::Two, "Island"));
        let chairs: Vec<_> = shapes
            .iter()
            .filter_map(|s| match s.primitive {
                Primitive::Circle { center, radius } => Some((center, radius)),
                _ => None,
            })
            .collect();
        assert_eq!(chairs.len(), 2);
        assert_relative_eq!(chairs[0].0.y - chairs[0].1, b.min_y(), epsilon = 1e-9);
        assert_relative_eq!(chairs[1].0.y + chairs[1].1, b.max_y(), epsilon = 1e-9);
    }

    #[test]
    fn stove_has_four_burners() {
        let shapes = draw(|sk| stove(sk, Rect::new(2.0, 3.0, 0.75, 0.6), "Stove"));
        let burners = shapes
            .iter()
            .filter(|s| matches!(s.primitive, Primitive::Circle { .. }))
            .count();
        assert_eq!(burners, 4);
    }

    #[test]
    fn hood_is_hatched() {
        let shapes = draw(|sk| hood(sk, Rect::new(0.0, 0.0, 0.675, 0.35), "Hood"));
        assert!(shapes.iter().any(|s| s.paint.hatched));
    }
}
