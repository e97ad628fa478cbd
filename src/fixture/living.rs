use crate::geometry::{Layer, LineStyle, Paint, TextLabel};
use crate::math::{whole_divisions, Axis, Point2, Rect};

use super::Sketch;

const CUSHION_UNIT: f64 = 0.7;
const CUSHION_GAP: f64 = 0.1;
const ARMREST_SHARE: f64 = 0.15;
const SHELF_UNIT: f64 = 0.8;

/// Sofa with evenly spaced seat cushions.
#[allow(clippy::cast_precision_loss)]
pub(super) fn sofa(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;

    let n = whole_divisions(b.width, CUSHION_UNIT, 1);
    let gap = CUSHION_GAP.min(b.width / (2.0 * (n as f64 + 1.0)));
    let cushion_w = (b.width - gap * (n as f64 + 1.0)) / n as f64;
    let cushion = Paint::outlined(&c.sofa, 0.5)
        .with_stroke(&c.cushion_edge, 0.5)
        .with_opacity(0.8);

    sk.body(b, &c.sofa, 0.8, Layer::Fixture);
    for i in 0..n {
        let x = b.min_x() + gap + i as f64 * (cushion_w + gap);
        sk.rect(
            Rect::new(x, b.min_y() + b.height * 0.1, cushion_w, b.height * 0.8),
            cushion.clone(),
            Layer::FixtureDetail,
        );
    }
    sk.label(b, label, &c.label_on_dark, style.fonts.large_label, true);
}

pub(super) fn armchair(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let arm = b.width * ARMREST_SHARE;

    sk.body(b, &c.accent_chair, 0.8, Layer::Fixture);
    sk.body(
        Rect::new(b.min_x(), b.min_y(), arm, b.height),
        &c.accent_chair,
        0.5,
        Layer::FixtureDetail,
    );
    sk.body(
        Rect::new(b.max_x() - arm, b.min_y(), arm, b.height),
        &c.accent_chair,
        0.5,
        Layer::FixtureDetail,
    );
    sk.label(b, label, &c.label_on_dark, style.fonts.fixture_label, true);
}

pub(super) fn coffee_table(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    sk.body(b, &style.colors.table, 1.0, Layer::Fixture);
    sk.label(b, label, &style.colors.outline, style.fonts.fixture_label, true);
}

/// Stand with the screen set against its back edge.
pub(super) fn tv_stand(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let screen_w = b.width * 0.7;
    let screen_h = b.height * 0.5;
    let back = (b.height - screen_h).min(0.05);
    let screen = Rect::new(
        b.min_x() + (b.width - screen_w) * 0.5,
        b.max_y() - screen_h - back,
        screen_w,
        screen_h,
    );

    sk.body(b, &c.table, 1.0, Layer::Fixture);
    sk.rect(
        screen,
        Paint::fill(&c.tv).with_stroke(&c.tank, 1.0),
        Layer::FixtureDetail,
    );
    sk.label(b, label, &c.label_on_dark, style.fonts.large_label, true);
}

pub(super) fn rug(sk: &mut Sketch<'_>, b: Rect, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    sk.rect(
        b,
        Paint::fill(&c.rug)
            .with_stroke(&c.rug_edge, 0.5)
            .with_line_style(LineStyle::Dashed),
        Layer::Fixture,
    );
    if !label.is_empty() {
        sk.text(
            TextLabel {
                anchor: b.center(),
                text: label.to_owned(),
                size: style.fonts.large_label,
                bold: false,
                rotation_deg: 0.0,
            },
            Paint::fill(&c.label).with_opacity(0.6),
            Layer::Label,
        );
    }
}

/// Bookshelf with shelf divisions across its run.
#[allow(clippy::cast_precision_loss)]
pub(super) fn bookshelf(sk: &mut Sketch<'_>, b: Rect, axis: Axis, label: &str) {
    let style = sk.style;
    let c = &style.colors;
    let shelf = Paint::stroke(&c.outline, 0.5);

    sk.body(b, &c.bookshelf, 0.8, Layer::Fixture);
    let run = match axis {
        Axis::Horizontal => b.width,
        Axis::Vertical => b.height,
    };
    let n = whole_divisions(run, SHELF_UNIT, 2);
    let step = run / n as f64;
    for i in 1..n {
        let t = i as f64 * step;
        let (from, to) = match axis {
            Axis::Horizontal => (
                Point2::new(b.min_x() + t, b.min_y()),
                Point2::new(b.min_x() + t, b.max_y()),
            ),
            Axis::Vertical => (
                Point2::new(b.min_x(), b.min_y() + t),
                Point2::new(b.max_x(), b.min_y() + t),
            ),
        };
        sk.line(from, to, shelf.clone(), Layer::FixtureDetail);
    }
    let rotation = if axis == Axis::Vertical { 90.0 } else { 0.0 };
    sk.label_rotated(b, label, &c.label_on_dark, style.fonts.fixture_label, true, rotation);
}
