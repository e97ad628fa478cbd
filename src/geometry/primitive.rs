use crate::math::{Point2, Rect};

use super::{Layer, Paint};

/// A text label anchored at its centre.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub anchor: Point2,
    pub text: String,
    /// Font size in points.
    pub size: f64,
    pub bold: bool,
    /// Counter-clockwise rotation in degrees.
    pub rotation_deg: f64,
}

/// A drawing primitive understood by every canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(Rect),
    Circle {
        center: Point2,
        radius: f64,
    },
    /// Counter-clockwise arc from `start_deg` to `end_deg`.
    Arc {
        center: Point2,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
    },
    Line {
        from: Point2,
        to: Point2,
    },
    Text(TextLabel),
}

/// A primitive with its paint and layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub primitive: Primitive,
    pub paint: Paint,
    pub layer: Layer,
}

impl Shape {
    #[must_use]
    pub fn new(primitive: Primitive, paint: Paint, layer: Layer) -> Self {
        Self {
            primitive,
            paint,
            layer,
        }
    }

    /// Geometric extent of the shape, or `None` for text (whose extent
    /// depends on the font).
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match &self.primitive {
            Primitive::Rect(r) => Some(*r),
            Primitive::Circle { center, radius } | Primitive::Arc { center, radius, .. } => {
                Some(Rect::new(
                    center.x - radius,
                    center.y - radius,
                    2.0 * radius,
                    2.0 * radius,
                ))
            }
            Primitive::Line { from, to } => Some(Rect::from_corners(*from, *to)),
            Primitive::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Color, Paint};

    #[test]
    fn circle_bounds_span_diameter() {
        let shape = Shape::new(
            Primitive::Circle {
                center: Point2::new(1.0, 2.0),
                radius: 0.2,
            },
            Paint::fill(&Color::new("gray")),
            Layer::Accent,
        );
        let b = shape.bounds().unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert!((b.min_x() - 0.8).abs() < 1e-12);
        assert!((b.max_y() - 2.2).abs() < 1e-12);
    }

    #[test]
    fn text_has_no_bounds() {
        let shape = Shape::new(
            Primitive::Text(TextLabel {
                anchor: Point2::origin(),
                text: "WC".into(),
                size: 7.0,
                bold: false,
                rotation_deg: 0.0,
            }),
            Paint::default(),
            Layer::Label,
        );
        assert!(shape.bounds().is_none());
    }
}
