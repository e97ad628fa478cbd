//! Finished, ordered drawing of one room.

use crate::error::Result;
use crate::geometry::Shape;
use crate::math::Rect;
use crate::render::Canvas;

/// Title, visible extent and layered shapes of a plan.
///
/// Shapes are kept in draw order: sorted by [`Layer`](crate::geometry::Layer),
/// with shapes on the same layer in the order they were given.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    title: String,
    extent: Rect,
    shapes: Vec<Shape>,
}

impl Scene {
    #[must_use]
    pub fn new(title: impl Into<String>, extent: Rect, mut shapes: Vec<Shape>) -> Self {
        // `sort_by_key` is stable, which keeps emission order within a layer.
        shapes.sort_by_key(|s| s.layer);
        Self {
            title: title.into(),
            extent,
            shapes,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn extent(&self) -> Rect {
        self.extent
    }

    /// Shapes in draw order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Hands the scene to a canvas: extent and title first, then every shape
    /// bottom layer up, then `finish`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the canvas.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        canvas.set_extent(self.extent)?;
        canvas.set_title(&self.title)?;
        for shape in &self.shapes {
            canvas.draw(shape)?;
        }
        canvas.finish()
    }
}
