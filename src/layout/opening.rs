use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, LayoutError, Result};
use crate::math::{arc_2d, Axis, Point2, Rect, Vector2};

use super::room::{Room, Wall};

/// Door swing configuration.
///
/// "In" swings towards +y on horizontal walls and towards −x on vertical
/// walls, i.e. into the room for the bottom and right walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingDirection {
    InCw,
    InCcw,
    OutCw,
    OutCcw,
}

/// What is cut into the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OpeningKind {
    Window,
    Door { swing: SwingDirection },
}

impl OpeningKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Door { .. } => "door",
        }
    }
}

/// Position of an opening along its wall's inner span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Along {
    /// Offset from the left (horizontal walls) or bottom (vertical walls)
    /// corner.
    FromStart(f64),
    /// Gap between the opening and the right or top corner.
    FromEnd(f64),
    Centered,
}

/// Declarative description of a door or window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningSpec {
    pub kind: OpeningKind,
    pub wall: Wall,
    pub length: f64,
    pub position: Along,
}

impl OpeningSpec {
    #[must_use]
    pub fn window(wall: Wall, length: f64, position: Along) -> Self {
        Self {
            kind: OpeningKind::Window,
            wall,
            length,
            position,
        }
    }

    #[must_use]
    pub fn door(wall: Wall, length: f64, position: Along, swing: SwingDirection) -> Self {
        Self {
            kind: OpeningKind::Door { swing },
            wall,
            length,
            position,
        }
    }

    /// Computes the opening's footprint in the wall band.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for a non-positive length or
    /// negative offset, and [`LayoutError::OpeningOutOfWall`] if the opening
    /// does not fit inside the wall's inner span.
    pub fn resolve(&self, room: &Room) -> Result<Opening> {
        let length = ensure_positive(self.kind.name(), self.length)?;
        let span = self.wall.span(room);
        let offset = match self.position {
            Along::FromStart(o) => ensure_non_negative("opening offset", o)?,
            Along::FromEnd(o) => span - length - ensure_non_negative("opening offset", o)?,
            Along::Centered => (span - length) * 0.5,
        };

        if length > span || offset < 0.0 || offset + length > span + crate::math::TOLERANCE {
            return Err(LayoutError::OpeningOutOfWall {
                kind: self.kind.name(),
                wall: self.wall.name(),
                offset,
                length,
                span,
            }
            .into());
        }

        let footprint = self.wall.segment(room, offset, length);
        let swing = match self.kind {
            OpeningKind::Window => None,
            OpeningKind::Door { swing } => Some(
                swing_entry(self.wall.orientation(), swing).resolve(
                    footprint.origin,
                    length,
                    room.wall_thickness(),
                ),
            ),
        };

        Ok(Opening {
            kind: self.kind,
            wall: self.wall,
            length,
            footprint,
            swing,
        })
    }
}

/// A resolved door or window.
#[derive(Debug, Clone, PartialEq)]
pub struct Opening {
    pub kind: OpeningKind,
    pub wall: Wall,
    pub length: f64,
    /// Rectangle carved from the wall band; its origin is the anchor.
    pub footprint: Rect,
    /// Leaf and arc geometry, for doors.
    pub swing: Option<DoorSwing>,
}

impl Opening {
    /// Bottom-left corner of the footprint.
    #[must_use]
    pub fn anchor(&self) -> Point2 {
        self.footprint.origin
    }
}

/// Which edge of the opening holds the hinge, along the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HingeEdge {
    /// The anchor side (left or bottom).
    Near,
    /// Anchor plus leaf length.
    Far,
}

/// Which face of the wall band holds the hinge, across the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HingeFace {
    /// The anchor side (bottom or left face of the band).
    Low,
    /// Anchor plus wall thickness.
    High,
}

/// One row of the swing table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingEntry {
    pub orientation: Axis,
    pub swing: SwingDirection,
    pub edge: HingeEdge,
    pub face: HingeFace,
    /// Unit direction of the open leaf, as `(dx, dy)`.
    pub leaf: (f64, f64),
    pub start_deg: f64,
    pub end_deg: f64,
}

const fn entry(
    orientation: Axis,
    swing: SwingDirection,
    edge: HingeEdge,
    face: HingeFace,
    leaf: (f64, f64),
    start_deg: f64,
    end_deg: f64,
) -> SwingEntry {
    SwingEntry {
        orientation,
        swing,
        edge,
        face,
        leaf,
        start_deg,
        end_deg,
    }
}

/// Hinge and arc for every (wall orientation, swing) pair.
pub const SWING_TABLE: [SwingEntry; 8] = {
    use Axis::{Horizontal as H, Vertical as V};
    use HingeEdge::{Far, Near};
    use HingeFace::{High, Low};
    use SwingDirection::{InCcw, InCw, OutCcw, OutCw};
    [
        entry(H, InCw, Near, High, (0.0, 1.0), 0.0, 90.0),
        entry(H, InCcw, Far, High, (0.0, 1.0), 90.0, 180.0),
        entry(H, OutCw, Near, Low, (0.0, -1.0), 270.0, 360.0),
        entry(H, OutCcw, Far, Low, (0.0, -1.0), 180.0, 270.0),
        entry(V, InCw, Far, High, (-1.0, 0.0), 180.0, 270.0),
        entry(V, InCcw, Near, High, (-1.0, 0.0), 90.0, 180.0),
        entry(V, OutCw, Far, Low, (1.0, 0.0), 270.0, 360.0),
        entry(V, OutCcw, Near, Low, (1.0, 0.0), 0.0, 90.0),
    ]
};

/// Looks up the swing table row for a wall orientation and swing.
#[must_use]
pub fn swing_entry(orientation: Axis, swing: SwingDirection) -> &'static SwingEntry {
    let index = match (orientation, swing) {
        (Axis::Horizontal, SwingDirection::InCw) => 0,
        (Axis::Horizontal, SwingDirection::InCcw) => 1,
        (Axis::Horizontal, SwingDirection::OutCw) => 2,
        (Axis::Horizontal, SwingDirection::OutCcw) => 3,
        (Axis::Vertical, SwingDirection::InCw) => 4,
        (Axis::Vertical, SwingDirection::InCcw) => 5,
        (Axis::Vertical, SwingDirection::OutCw) => 6,
        (Axis::Vertical, SwingDirection::OutCcw) => 7,
    };
    &SWING_TABLE[index]
}

impl SwingEntry {
    /// Applies this row to an opening anchored at `anchor` with the given
    /// leaf length, in a wall of the given thickness.
    #[must_use]
    pub fn resolve(&self, anchor: Point2, leaf_length: f64, wall_thickness: f64) -> DoorSwing {
        let along = match self.edge {
            HingeEdge::Near => 0.0,
            HingeEdge::Far => leaf_length,
        };
        let across = match self.face {
            HingeFace::Low => 0.0,
            HingeFace::High => wall_thickness,
        };
        let hinge = match self.orientation {
            Axis::Horizontal => Point2::new(anchor.x + along, anchor.y + across),
            Axis::Vertical => Point2::new(anchor.x + across, anchor.y + along),
        };
        let leaf_dir = Vector2::new(self.leaf.0, self.leaf.1);
        DoorSwing {
            hinge,
            leaf_end: hinge + leaf_dir * leaf_length,
            radius: leaf_length,
            start_deg: self.start_deg,
            end_deg: self.end_deg,
        }
    }
}

/// Leaf and swing arc of a door.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorSwing {
    pub hinge: Point2,
    /// Tip of the leaf in its open position.
    pub leaf_end: Point2,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl DoorSwing {
    /// Counter-clockwise sweep of the arc in degrees.
    #[must_use]
    pub fn sweep_deg(&self) -> f64 {
        arc_2d::sweep_degrees(self.start_deg, self.end_deg)
    }

    /// The two arc endpoints, in sweep order.
    #[must_use]
    pub fn arc_endpoints(&self) -> (Point2, Point2) {
        (
            arc_2d::point_at_angle(self.hinge, self.radius, self.start_deg),
            arc_2d::point_at_angle(self.hinge, self.radius, self.end_deg),
        )
    }

    /// Square swept by the leaf.
    #[must_use]
    pub fn clearance(&self) -> Rect {
        let (a, b) = self.arc_endpoints();
        let min = Point2::new(
            self.hinge.x.min(a.x).min(b.x),
            self.hinge.y.min(a.y).min(b.y),
        );
        let max = Point2::new(
            self.hinge.x.max(a.x).max(b.x),
            self.hinge.y.max(a.y).max(b.y),
        );
        Rect::from_corners(min, max)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn close(a: Point2, b: Point2) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn table_covers_every_combination_once() {
        for orientation in [Axis::Horizontal, Axis::Vertical] {
            for swing in [
                SwingDirection::InCw,
                SwingDirection::InCcw,
                SwingDirection::OutCw,
                SwingDirection::OutCcw,
            ] {
                let e = swing_entry(orientation, swing);
                assert_eq!(e.orientation, orientation);
                assert_eq!(e.swing, swing);
            }
        }
    }

    #[test]
    fn every_swing_is_a_quarter_circle_between_leaf_positions() {
        let anchor = Point2::new(1.0, 0.0);
        let (leaf, t) = (0.8, 0.15);
        for e in &SWING_TABLE {
            let door = e.resolve(anchor, leaf, t);
            assert_relative_eq!(door.radius, leaf, epsilon = 1e-9);
            assert_relative_eq!(door.sweep_deg(), 90.0, epsilon = 1e-9);
            assert_relative_eq!((door.leaf_end - door.hinge).norm(), leaf, epsilon = 1e-12);

            // Closed tip: the opposite edge of the opening, on the hinge face.
            let along = match e.edge {
                HingeEdge::Near => leaf,
                HingeEdge::Far => -leaf,
            };
            let closed = match e.orientation {
                Axis::Horizontal => Point2::new(door.hinge.x + along, door.hinge.y),
                Axis::Vertical => Point2::new(door.hinge.x, door.hinge.y + along),
            };

            let (a, b) = door.arc_endpoints();
            assert!(
                (close(a, door.leaf_end) && close(b, closed))
                    || (close(b, door.leaf_end) && close(a, closed)),
                "{:?}/{:?}: arc ends {a:?} {b:?}, leaf {:?}, closed {closed:?}",
                e.orientation,
                e.swing,
                door.leaf_end
            );
        }
    }

    #[test]
    fn horizontal_in_ccw_hinges_on_far_edge_inner_face() {
        let door = swing_entry(Axis::Horizontal, SwingDirection::InCcw).resolve(
            Point2::new(1.75, 0.0),
            0.7,
            0.15,
        );
        assert_relative_eq!(door.hinge.x, 2.45, epsilon = 1e-9);
        assert_relative_eq!(door.hinge.y, 0.15, epsilon = 1e-9);
        assert_relative_eq!(door.leaf_end.y, 0.85, epsilon = 1e-9);
        assert_relative_eq!(door.start_deg, 90.0, epsilon = 1e-9);
        assert_relative_eq!(door.end_deg, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn vertical_in_cw_hinge() {
        let door = swing_entry(Axis::Vertical, SwingDirection::InCw).resolve(
            Point2::new(4.15, 1.0),
            0.9,
            0.15,
        );
        assert_relative_eq!(door.hinge.x, 4.3, epsilon = 1e-9);
        assert_relative_eq!(door.hinge.y, 1.9, epsilon = 1e-9);
        assert_relative_eq!(door.leaf_end.x, 3.4, epsilon = 1e-9);
    }

    #[test]
    fn centered_window_on_left_wall() {
        let room = Room::new(2.5, 3.0, 0.15).unwrap();
        let w = OpeningSpec::window(Wall::Left, 0.6, Along::Centered)
            .resolve(&room)
            .unwrap();
        assert_relative_eq!(w.anchor().x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(w.anchor().y, 0.15 + 1.2, epsilon = 1e-9);
        assert_relative_eq!(w.footprint.width, 0.15, epsilon = 1e-9);
        assert_relative_eq!(w.footprint.height, 0.6, epsilon = 1e-9);
        assert!(w.swing.is_none());
    }

    #[test]
    fn door_from_end_of_bottom_wall() {
        let room = Room::new(2.5, 3.0, 0.15).unwrap();
        let d = OpeningSpec::door(Wall::Bottom, 0.7, Along::FromEnd(0.2), SwingDirection::InCcw)
            .resolve(&room)
            .unwrap();
        assert_relative_eq!(d.anchor().x, 0.15 + 2.5 - 0.7 - 0.2, epsilon = 1e-9);
        assert_relative_eq!(d.anchor().y, 0.0, epsilon = 1e-9);
        let swing = d.swing.unwrap();
        assert_relative_eq!(swing.hinge.y, 0.15, epsilon = 1e-9);
    }

    #[test]
    fn opening_longer_than_wall_fails() {
        let room = Room::new(2.5, 3.0, 0.15).unwrap();
        let err = OpeningSpec::window(Wall::Bottom, 3.0, Along::Centered).resolve(&room);
        assert!(matches!(
            err,
            Err(crate::error::FloorplanError::Layout(
                LayoutError::OpeningOutOfWall { .. }
            ))
        ));
    }

    #[test]
    fn opening_past_corner_fails() {
        let room = Room::new(2.5, 3.0, 0.15).unwrap();
        assert!(OpeningSpec::window(Wall::Top, 1.0, Along::FromStart(2.0))
            .resolve(&room)
            .is_err());
        assert!(OpeningSpec::window(Wall::Top, 1.0, Along::FromStart(-0.1))
            .resolve(&room)
            .is_err());
        assert!(OpeningSpec::window(Wall::Top, 0.0, Along::Centered)
            .resolve(&room)
            .is_err());
    }

    #[test]
    fn inward_clearance_lies_on_the_floor_side() {
        let room = Room::new(4.0, 3.5, 0.15).unwrap();
        let d = OpeningSpec::door(Wall::Bottom, 0.9, Along::FromStart(0.5), SwingDirection::InCcw)
            .resolve(&room)
            .unwrap();
        let c = d.swing.unwrap().clearance();
        assert_relative_eq!(c.min_y(), 0.15, epsilon = 1e-9);
        assert_relative_eq!(c.height, 0.9, epsilon = 1e-9);
        assert!(room.inner().contains_rect(&c));
    }
}
