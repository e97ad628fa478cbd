use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, Result};
use crate::math::{Axis, Rect};

/// Wall and floor rectangles of a single room.
///
/// The outer rectangle starts at the origin; the inner (floor) rectangle is
/// inset by the wall thickness on every side:
///
/// ```text
/// outer: (0, 0) – (W + 2T, H + 2T)
/// inner: (T, T) – (T + W, T + H)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    width: f64,
    height: f64,
    wall_thickness: f64,
}

impl Room {
    /// Creates a room from its inner size and wall thickness.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` if any value is zero,
    /// negative or not finite.
    pub fn new(width: f64, height: f64, wall_thickness: f64) -> Result<Self> {
        Ok(Self {
            width: ensure_positive("width", width)?,
            height: ensure_positive("height", height)?,
            wall_thickness: ensure_positive("wall_thickness", wall_thickness)?,
        })
    }

    /// Inner (floor) width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Inner (floor) height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    /// Outer wall rectangle.
    #[must_use]
    pub fn outer(&self) -> Rect {
        let t2 = 2.0 * self.wall_thickness;
        Rect::new(0.0, 0.0, self.width + t2, self.height + t2)
    }

    /// Inner floor rectangle.
    #[must_use]
    pub fn inner(&self) -> Rect {
        let t = self.wall_thickness;
        Rect::new(t, t, self.width, self.height)
    }
}

/// One of the four walls of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    Bottom,
    Top,
    Left,
    Right,
}

impl Wall {
    /// Direction the wall runs in.
    #[must_use]
    pub fn orientation(self) -> Axis {
        match self {
            Self::Bottom | Self::Top => Axis::Horizontal,
            Self::Left | Self::Right => Axis::Vertical,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Coordinate of the wall's face towards the floor (y for horizontal
    /// walls, x for vertical ones).
    #[must_use]
    pub fn inner_face(self, room: &Room) -> f64 {
        let inner = room.inner();
        match self {
            Self::Bottom => inner.min_y(),
            Self::Top => inner.max_y(),
            Self::Left => inner.min_x(),
            Self::Right => inner.max_x(),
        }
    }

    /// Usable length of the wall: the inner span between the two corners.
    #[must_use]
    pub fn span(self, room: &Room) -> f64 {
        match self.orientation() {
            Axis::Horizontal => room.width(),
            Axis::Vertical => room.height(),
        }
    }

    /// Wall band of thickness `T` running along the inner span.
    #[must_use]
    pub fn band(self, room: &Room) -> Rect {
        self.segment(room, 0.0, self.span(room))
    }

    /// Part of the wall band starting `offset` from the span start
    /// (left or bottom corner) and `length` long.
    #[must_use]
    pub fn segment(self, room: &Room, offset: f64, length: f64) -> Rect {
        let t = room.wall_thickness();
        let inner = room.inner();
        match self {
            Self::Bottom => Rect::new(inner.min_x() + offset, 0.0, length, t),
            Self::Top => Rect::new(inner.min_x() + offset, inner.max_y(), length, t),
            Self::Left => Rect::new(0.0, inner.min_y() + offset, t, length),
            Self::Right => Rect::new(inner.max_x(), inner.min_y() + offset, t, length),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn bathroom_boundaries() {
        let room = Room::new(2.5, 3.0, 0.15).unwrap();
        let outer = room.outer();
        let inner = room.inner();
        assert_relative_eq!(outer.max_x(), 2.8, epsilon = 1e-9);
        assert_relative_eq!(outer.max_y(), 3.3, epsilon = 1e-9);
        assert_relative_eq!(inner.min_x(), 0.15, epsilon = 1e-9);
        assert_relative_eq!(inner.max_y(), 3.15, epsilon = 1e-9);
    }

    #[test]
    fn non_positive_dimensions_fail() {
        assert!(Room::new(0.0, 3.0, 0.15).is_err());
        assert!(Room::new(2.5, -3.0, 0.15).is_err());
        assert!(Room::new(2.5, 3.0, 0.0).is_err());
        assert!(Room::new(f64::NAN, 3.0, 0.15).is_err());
    }

    #[test]
    fn wall_faces_and_bands() {
        let room = Room::new(4.0, 3.5, 0.15).unwrap();
        assert_relative_eq!(Wall::Top.inner_face(&room), 3.65, epsilon = 1e-9);
        assert_relative_eq!(Wall::Right.inner_face(&room), 4.15, epsilon = 1e-9);

        let top = Wall::Top.band(&room);
        assert_relative_eq!(top.min_y(), 3.65, epsilon = 1e-9);
        assert_relative_eq!(top.max_y(), room.outer().max_y(), epsilon = 1e-9);
        assert_relative_eq!(top.width, 4.0, epsilon = 1e-9);

        let left = Wall::Left.segment(&room, 1.0, 1.5);
        assert_relative_eq!(left.min_x(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(left.min_y(), 1.15, epsilon = 1e-9);
        assert_relative_eq!(left.height, 1.5, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn inner_is_inset_by_wall_thickness(
            w in 0.1f64..50.0,
            h in 0.1f64..50.0,
            t in 0.01f64..1.0,
        ) {
            let room = Room::new(w, h, t).unwrap();
            let outer = room.outer();
            let inner = room.inner();
            prop_assert_eq!(outer.origin, Point2::origin());
            prop_assert_eq!(outer.width, w + 2.0 * t);
            prop_assert_eq!(outer.height, h + 2.0 * t);
            prop_assert_eq!(inner.origin, Point2::new(t, t));
            prop_assert_eq!(inner.max_x(), t + w);
            prop_assert_eq!(inner.max_y(), t + h);
            prop_assert!(outer.contains_rect(&inner));
            prop_assert!(((outer.max_x() - inner.max_x()) - t).abs() < 1e-9);
            prop_assert!(((outer.max_y() - inner.max_y()) - t).abs() < 1e-9);
        }
    }
}
