//! Doors and windows drawn over the wall band.

use crate::geometry::{Layer, LineStyle, Paint, Shape};
use crate::layout::{Opening, OpeningKind};
use crate::math::{Axis, Point2};
use crate::style::Style;

use super::Sketch;

/// Decomposes a resolved opening into shapes.
///
/// A window is a glazing rectangle with a centre line along the wall. A
/// door clears its footprint to the floor colour and adds the open leaf and
/// its dotted swing arc.
#[must_use]
pub fn opening_shapes(opening: &Opening, style: &Style) -> Vec<Shape> {
    let mut sk = Sketch::new(style);
    let c = &style.colors;
    let f = opening.footprint;

    match opening.kind {
        OpeningKind::Window => {
            sk.body(f, &c.window, 0.5, Layer::Opening);
            let (from, to) = match opening.wall.orientation() {
                Axis::Horizontal => {
                    let y = f.center().y;
                    (Point2::new(f.min_x(), y), Point2::new(f.max_x(), y))
                }
                Axis::Vertical => {
                    let x = f.center().x;
                    (Point2::new(x, f.min_y()), Point2::new(x, f.max_y()))
                }
            };
            sk.line(from, to, Paint::stroke(&c.outline, 1.0), Layer::OpeningDetail);
        }
        OpeningKind::Door { .. } => {
            sk.rect(f, Paint::fill(&c.floor), Layer::Opening);
            if let Some(swing) = &opening.swing {
                sk.line(
                    swing.hinge,
                    swing.leaf_end,
                    Paint::stroke(&c.door_leaf, 1.5),
                    Layer::OpeningDetail,
                );
                sk.arc(
                    swing.hinge,
                    swing.radius,
                    swing.start_deg,
                    swing.end_deg,
                    Paint::stroke(&c.door_leaf, 0.8).with_line_style(LineStyle::Dotted),
                    Layer::OpeningDetail,
                );
            }
        }
    }
    sk.finish()
}
