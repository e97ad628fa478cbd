use crate::geometry::{Layer, LineStyle, Paint};
use crate::math::{Axis, Facing, Point2, Rect};

use super::Sketch;

/// Share of the toilet's depth taken by the tank.
const TANK_SHARE: f64 = 0.4;
const BASIN_RADIUS: f64 = 0.2;
const COUNTERTOP: f64 = 0.05;
const TUB_RIM: f64 = 0.1;
const FAUCET_RADIUS: f64 = 0.05;

/// Toilet with the tank on the side opposite the seat's facing.
pub(super) fn toilet(sk: &mut Sketch<'_>, b: Rect, facing: Facing, label: &str) {
    let style = sk.style;
    let c = &style.colors;

    let tank_rect = match facing {
        Facing::North => {
            let h = b.height * TANK_SHARE;
            Rect::new(b.min_x(), b.max_y() - h, b.width, h)
        }
        Facing::South => Rect::new(b.min_x(), b.min_y(), b.width, b.height * TANK_SHARE),
        Facing::East => Rect::new(b.min_x(), b.min_y(), b.width * TANK_SHARE, b.height),
        Facing::West => {
            let w = b.width * TANK_SHARE;
            Rect::new(b.max_x() - w, b.min_y(), w, b.height)
        }
    };

    sk.body(b, &c.porcelain, 0.8, Layer::Fixture);
    sk.body(tank_rect, &c.tank, 0.5, Layer::FixtureDetail);
    sk.label(b, label, &c.label, style.fonts.fixture_label, false);
}

/// Vanity cabinet with a countertop strip along its back edge and a round
/// basin.
pub(super) fn vanity(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;

    sk.body(b, &c.vanity, 0.8, Layer::Fixture);
    sk.body(
        Rect::new(b.min_x(), b.max_y() - COUNTERTOP, b.width, COUNTERTOP),
        &c.appliance,
        0.5,
        Layer::FixtureDetail,
    );
    let radius = BASIN_RADIUS.min(b.width.min(b.height) * 0.5);
    sk.circle(b.center(), radius, Paint::outlined(&c.basin, 0.5), Layer::Accent);
    sk.label(b, label, &c.label_on_dark, style.fonts.fixture_label, true);
}

/// Shower tray with dashed drain diagonals.
pub(super) fn shower(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let dashed = Paint::stroke(&c.drain, 0.8).with_line_style(LineStyle::Dashed);

    sk.body(b, &c.porcelain, 0.8, Layer::Fixture);
    sk.line(
        Point2::new(b.min_x(), b.max_y()),
        Point2::new(b.max_x(), b.min_y()),
        dashed.clone(),
        Layer::FixtureDetail,
    );
    sk.line(b.origin, Point2::new(b.max_x(), b.max_y()), dashed, Layer::FixtureDetail);
    sk.label(b, label, &c.label, style.fonts.fixture_label, false);
}

/// Bathtub with inner basin and faucet. Horizontal tubs have the faucet
/// near the left end; vertical tubs near the bottom end.
pub(super) fn bathtub(sk: &mut Sketch<'_>, b: Rect, axis: Axis, label: &str) {
    let style = sk.style;
    let c = &style.colors;

    let faucet = match axis {
        Axis::Horizontal => Point2::new(b.min_x() + 0.2, b.max_y() - 0.15),
        Axis::Vertical => Point2::new(b.max_x() - 0.15, b.min_y() + 0.2),
    };

    sk.body(b, &c.porcelain, 0.8, Layer::Fixture);
    sk.body(b.inset(TUB_RIM, TUB_RIM), &c.tub_inner, 0.5, Layer::FixtureDetail);
    sk.circle(faucet, FAUCET_RADIUS, Paint::outlined(&c.tank, 0.5), Layer::Accent);
    sk.label(b, label, &c.label, style.fonts.fixture_label, false);
}
