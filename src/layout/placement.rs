//! Coordinate rules for fixture anchors.
//!
//! A fixture's bounding box is resolved one axis at a time from a [`Coord`]
//! (where it starts) and an [`Extent`] (how long it is). Rules are relative
//! to the room's inner rectangle or to fixtures already placed, so a room
//! template is plain data that reads like the placement description it
//! encodes: "against the right wall", "0.1 left of the sink", "centred on
//! the rug".

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, GeometryError, LayoutError, Result};
use crate::fixture::Fixture;
use crate::math::{Axis, Rect};

/// Where a fixture starts along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coord {
    /// `inner_min + offset`; `0` puts the fixture against the left/bottom wall.
    FromStart(f64),
    /// `inner_max − size − offset`; `0` puts it against the right/top wall.
    FromEnd(f64),
    /// Centred in the inner span, shifted by `offset`.
    Centered(f64),
    /// A fixed plan coordinate.
    Absolute(f64),
    /// Starts `gap` past the far edge of fixture `of`.
    After { of: String, gap: f64 },
    /// Ends `gap` before the near edge of fixture `of`.
    Before { of: String, gap: f64 },
    /// Shares the near edge of `of`, shifted by `offset`.
    AlignStart { of: String, offset: f64 },
    /// Shares the far edge of `of`, pulled in by `offset`.
    AlignEnd { of: String, offset: f64 },
    /// Centred on `of`, shifted by `offset`.
    CenterOn { of: String, offset: f64 },
    /// The larger of two rules.
    AtLeast(Box<Coord>, Box<Coord>),
}

impl Coord {
    #[must_use]
    pub fn after(of: &str, gap: f64) -> Self {
        Self::After { of: of.to_owned(), gap }
    }

    #[must_use]
    pub fn before(of: &str, gap: f64) -> Self {
        Self::Before { of: of.to_owned(), gap }
    }

    #[must_use]
    pub fn align_start(of: &str, offset: f64) -> Self {
        Self::AlignStart { of: of.to_owned(), offset }
    }

    #[must_use]
    pub fn align_end(of: &str, offset: f64) -> Self {
        Self::AlignEnd { of: of.to_owned(), offset }
    }

    #[must_use]
    pub fn center_on(of: &str, offset: f64) -> Self {
        Self::CenterOn { of: of.to_owned(), offset }
    }

    #[must_use]
    pub fn at_least(a: Coord, b: Coord) -> Self {
        Self::AtLeast(Box::new(a), Box::new(b))
    }

    /// Whether resolving this rule needs the fixture's own size.
    #[must_use]
    pub fn depends_on_size(&self) -> bool {
        match self {
            Self::FromStart(_) | Self::Absolute(_) | Self::After { .. } | Self::AlignStart { .. } => {
                false
            }
            Self::FromEnd(_)
            | Self::Centered(_)
            | Self::Before { .. }
            | Self::AlignEnd { .. }
            | Self::CenterOn { .. } => true,
            Self::AtLeast(a, b) => a.depends_on_size() || b.depends_on_size(),
        }
    }
}

/// Size of a fixture along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    Fixed(f64),
    /// Runs from the resolved start to the far inner wall, minus `margin`.
    /// Collapses to zero when nothing is left.
    Fill { margin: f64 },
}

impl Extent {
    /// Checks the extent's numbers.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for a non-positive fixed
    /// size or a negative margin.
    pub fn validate(&self, name: &str) -> Result<()> {
        match *self {
            Self::Fixed(v) => ensure_positive(name, v).map(drop),
            Self::Fill { margin } => ensure_non_negative(name, margin).map(drop),
        }
    }
}

/// Inner span and already placed fixtures along one axis.
pub(crate) struct AxisFrame<'a> {
    pub axis: Axis,
    pub min: f64,
    pub max: f64,
    pub placed: &'a [Fixture],
}

impl<'a> AxisFrame<'a> {
    pub fn new(axis: Axis, inner: &Rect, placed: &'a [Fixture]) -> Self {
        let (min, max) = match axis {
            Axis::Horizontal => (inner.min_x(), inner.max_x()),
            Axis::Vertical => (inner.min_y(), inner.max_y()),
        };
        Self {
            axis,
            min,
            max,
            placed,
        }
    }

    /// Resolves `extent` and `coord` for fixture `id`, returning
    /// `(start, size)`.
    pub fn place(&self, id: &str, coord: &Coord, extent: Extent) -> Result<(f64, f64)> {
        match extent {
            Extent::Fixed(size) => Ok((self.resolve(id, coord, Some(size))?, size)),
            Extent::Fill { margin } => {
                if coord.depends_on_size() {
                    return Err(LayoutError::UnresolvableExtent {
                        id: id.to_owned(),
                        axis: self.axis.name(),
                    }
                    .into());
                }
                let start = self.resolve(id, coord, None)?;
                Ok((start, (self.max - margin - start).max(0.0)))
            }
        }
    }

    fn resolve(&self, id: &str, coord: &Coord, size: Option<f64>) -> Result<f64> {
        // `size` is only `None` for fill extents, whose coords never read it.
        let s = size.unwrap_or(0.0);
        let value = match coord {
            Coord::FromStart(o) => self.min + o,
            Coord::FromEnd(o) => self.max - s - o,
            Coord::Centered(o) => self.min + (self.max - self.min - s) * 0.5 + o,
            Coord::Absolute(v) => *v,
            Coord::After { of, gap } => self.span_of(of)?.1 + gap,
            Coord::Before { of, gap } => self.span_of(of)?.0 - s - gap,
            Coord::AlignStart { of, offset } => self.span_of(of)?.0 + offset,
            Coord::AlignEnd { of, offset } => self.span_of(of)?.1 - s - offset,
            Coord::CenterOn { of, offset } => {
                let (lo, hi) = self.span_of(of)?;
                (lo + hi) * 0.5 - s * 0.5 + offset
            }
            Coord::AtLeast(a, b) => self.resolve(id, a, size)?.max(self.resolve(id, b, size)?),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeometryError::invalid(format!("{id}.{}", self.axis.name()), value).into())
        }
    }

    fn span_of(&self, of: &str) -> Result<(f64, f64)> {
        let fixture = self
            .placed
            .iter()
            .find(|f| f.id == of)
            .ok_or_else(|| LayoutError::UnknownFixture(of.to_owned()))?;
        let b = &fixture.bounds;
        Ok(match self.axis {
            Axis::Horizontal => (b.min_x(), b.max_x()),
            Axis::Vertical => (b.min_y(), b.max_y()),
        })
    }
}
