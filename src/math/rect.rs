use super::{Point2, TOLERANCE};

/// An axis-aligned rectangle in plan coordinates.
///
/// `origin` is the bottom-left corner; `width` runs along +x and `height`
/// along +y. Constructors do not validate sizes; callers that accept user
/// input check dimensions first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its bottom-left corner and size.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point2::new(x, y),
            width,
            height,
        }
    }

    /// Creates the smallest rectangle containing both corner points.
    #[must_use]
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self::new(min_x, min_y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.height
    }

    /// Returns the centre point.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.origin.x + self.width * 0.5,
            self.origin.y + self.height * 0.5,
        )
    }

    /// Returns a rectangle shrunk by `dx` on the left/right and `dy` on the
    /// bottom/top. Negative values grow it.
    #[must_use]
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }

    /// Returns a rectangle grown by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        self.inset(-margin, -margin)
    }

    /// Returns whether `other` lies entirely inside `self` (edges may touch).
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x() - TOLERANCE
            && other.min_y() >= self.min_y() - TOLERANCE
            && other.max_x() <= self.max_x() + TOLERANCE
            && other.max_y() <= self.max_y() + TOLERANCE
    }

    /// Returns whether the interiors of the two rectangles overlap.
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x() - TOLERANCE
            && other.min_x() < self.max_x() - TOLERANCE
            && self.min_y() < other.max_y() - TOLERANCE
            && other.min_y() < self.max_y() - TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn edges_and_center() {
        let r = Rect::new(0.15, 0.15, 2.5, 3.0);
        assert_relative_eq!(r.max_x(), 2.65, epsilon = 1e-9);
        assert_relative_eq!(r.max_y(), 3.15, epsilon = 1e-9);
        assert_relative_eq!(r.center().x, 1.4, epsilon = 1e-9);
        assert_relative_eq!(r.center().y, 1.65, epsilon = 1e-9);
    }

    #[test]
    fn from_corners_normalizes_order() {
        let r = Rect::from_corners(Point2::new(2.0, 1.0), Point2::new(0.5, 3.0));
        assert_relative_eq!(r.min_x(), 0.5, epsilon = 1e-9);
        assert_relative_eq!(r.min_y(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(r.width, 1.5, epsilon = 1e-9);
        assert_relative_eq!(r.height, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn inset_and_expand_are_inverse() {
        let r = Rect::new(1.0, 1.0, 4.0, 2.0);
        let back = r.inset(0.1, 0.1).expanded(0.1);
        assert_relative_eq!(back.min_x(), r.min_x(), epsilon = 1e-9);
        assert_relative_eq!(back.max_y(), r.max_y(), epsilon = 1e-9);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(0.5, 0.5, 1.0, 1.0)));
    }

    #[test]
    fn containment_allows_shared_edges() {
        let outer = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 2.0, 1.0)));
        assert!(!outer.contains_rect(&Rect::new(1.5, 0.0, 1.0, 1.0)));
    }
}
