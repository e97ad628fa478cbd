//! 2D arc utilities for door swings.
//!
//! Angles are in degrees, measured counter-clockwise from +x, matching the
//! angle convention of the swing table. Arcs are always swept
//! counter-clockwise from `start` to `end`.

use super::Point2;

/// Returns the point at `angle_deg` on the circle of `radius` around `center`.
#[must_use]
pub fn point_at_angle(center: Point2, radius: f64, angle_deg: f64) -> Point2 {
    let a = angle_deg.to_radians();
    Point2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
}

/// Counter-clockwise sweep from `start_deg` to `end_deg`, in `(0, 360]`.
#[must_use]
pub fn sweep_degrees(start_deg: f64, end_deg: f64) -> f64 {
    let sweep = (end_deg - start_deg).rem_euclid(360.0);
    if sweep == 0.0 {
        360.0
    } else {
        sweep
    }
}
