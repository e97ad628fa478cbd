//! Drawing back-ends.
//!
//! The library never rasterizes anything itself: a [`Scene`](crate::scene::Scene)
//! is handed, shape by shape, to a [`Canvas`]. [`SvgCanvas`] is the bundled
//! implementation.

mod svg;

pub use svg::SvgCanvas;

use crate::error::Result;
use crate::geometry::Shape;
use crate::math::Rect;

/// Receiver of layered primitives.
///
/// Calls arrive in a fixed order: `set_extent`, `set_title`, one `draw` per
/// shape from the bottom layer up, then `finish`.
pub trait Canvas {
    /// Plan-coordinate rectangle that must be visible.
    ///
    /// # Errors
    ///
    /// Implementation specific.
    fn set_extent(&mut self, extent: Rect) -> Result<()>;

    /// # Errors
    ///
    /// Implementation specific.
    fn set_title(&mut self, title: &str) -> Result<()>;

    /// # Errors
    ///
    /// Implementation specific.
    fn draw(&mut self, shape: &Shape) -> Result<()>;

    /// Completes the drawing; nothing is drawn after this.
    ///
    /// # Errors
    ///
    /// Implementation specific.
    fn finish(&mut self) -> Result<()>;
}

/// Canvas that only remembers what it was given.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub extent: Option<Rect>,
    pub title: Option<String>,
    pub drawn: Vec<Shape>,
    pub finished: bool,
}

#[cfg(test)]
impl Canvas for Recorder {
    fn set_extent(&mut self, extent: Rect) -> Result<()> {
        self.extent = Some(extent);
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = Some(title.to_owned());
        Ok(())
    }

    fn draw(&mut self, shape: &Shape) -> Result<()> {
        self.drawn.push(shape.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
