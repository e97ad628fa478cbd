pub mod arc_2d;
pub mod orientation;
pub mod rect;

pub use orientation::{Axis, Facing};
pub use rect::Rect;

/// 2D point type (plan coordinates, metres).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Number of whole `unit`-sized divisions in `length`, at least `min`.
///
/// The quotient is nudged by [`TOLERANCE`] before flooring so that exact
/// multiples such as `1.8 / 0.6` (which evaluates to `2.999…` in binary
/// floating point) count as whole units.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_divisions(length: f64, unit: f64, min: usize) -> usize {
    if !(length.is_finite() && unit.is_finite()) || unit <= 0.0 || length <= 0.0 {
        return min;
    }
    let count = (length / unit + TOLERANCE).floor();
    (count as usize).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_counts_whole_units() {
        assert_eq!(whole_divisions(1.8, 0.6, 1), 3);
        assert_eq!(whole_divisions(3.0, 0.7, 1), 4);
    }

    #[test]
    fn short_length_uses_minimum() {
        assert_eq!(whole_divisions(0.5, 0.6, 1), 1);
        assert_eq!(whole_divisions(1.5, 0.8, 2), 2);
        assert_eq!(whole_divisions(-1.0, 0.6, 1), 1);
    }
}
