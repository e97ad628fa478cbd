//! Room layout engine.
//!
//! Turns a declarative [`RoomTemplate`] into concrete coordinates: wall and
//! floor rectangles, door and window footprints with their swing geometry,
//! and one bounding box per fixture. Fit problems are reported as
//! [`LayoutWarning`]s; they never move anything.

mod fit;
mod opening;
mod placement;
mod room;

pub use fit::LayoutWarning;
pub use opening::{
    swing_entry, Along, DoorSwing, HingeEdge, HingeFace, Opening, OpeningKind, OpeningSpec,
    SwingDirection, SwingEntry, SWING_TABLE,
};
pub use placement::{Coord, Extent};
pub use room::{Room, Wall};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LayoutError, Result};
use crate::fixture::{Fixture, FixtureKind};
use crate::math::{Axis, Rect};

use placement::AxisFrame;

/// One fixture of a template: what it is and where its anchor goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSpec {
    /// Unique within the template; other fixtures refer to it by this id.
    pub id: String,
    pub kind: FixtureKind,
    pub x: Coord,
    pub y: Coord,
    /// Overrides [`FixtureKind::default_label`]. An empty label draws none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Dropped instead of warned about when it does not fit.
    #[serde(default)]
    pub optional: bool,
}

impl FixtureSpec {
    #[must_use]
    pub fn new(id: &str, kind: FixtureKind, x: Coord, y: Coord) -> Self {
        Self {
            id: id.to_owned(),
            kind,
            x,
            y,
            label: None,
            optional: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Everything needed to lay out and draw one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTemplate {
    /// Text drawn across the middle of the floor, e.g. `BATHROOM`.
    pub label: String,
    /// Plan title.
    pub title: String,
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
    pub wall_thickness: f64,
    #[serde(default)]
    pub openings: Vec<OpeningSpec>,
    /// Placed in order; a fixture may only refer to fixtures before it.
    #[serde(default)]
    pub fixtures: Vec<FixtureSpec>,
    /// Warnings raised while building the template, such as an unknown
    /// preset option that was replaced by its default.
    #[serde(skip)]
    pub warnings: Vec<LayoutWarning>,
}

/// A template resolved to coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLayout {
    pub room: Room,
    pub openings: Vec<Opening>,
    /// Placed fixtures, in template order.
    pub fixtures: Vec<Fixture>,
    /// Ids of optional fixtures left out because they did not fit.
    pub skipped: Vec<String>,
    pub warnings: Vec<LayoutWarning>,
}

impl RoomLayout {
    #[must_use]
    pub fn fixture(&self, id: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }
}

/// Resolves a [`RoomTemplate`] into a [`RoomLayout`].
pub struct LayoutRoom<'a> {
    template: &'a RoomTemplate,
}

impl<'a> LayoutRoom<'a> {
    /// Creates a new `LayoutRoom` operation.
    #[must_use]
    pub fn new(template: &'a RoomTemplate) -> Self {
        Self { template }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for an unusable room,
    /// opening or fixture dimension, `LayoutError::OpeningOutOfWall` for an
    /// opening outside its wall, and `LayoutError::DuplicateFixture`,
    /// `LayoutError::UnknownFixture` or `LayoutError::UnresolvableExtent`
    /// for a malformed fixture list.
    pub fn execute(&self) -> Result<RoomLayout> {
        let t = self.template;
        let room = Room::new(t.width, t.height, t.wall_thickness)?;
        let inner = room.inner();
        let openings = t
            .openings
            .iter()
            .map(|o| o.resolve(&room))
            .collect::<Result<Vec<_>>>()?;

        for w in &t.warnings {
            warn!(room = %t.label, "{w}");
        }
        let mut warnings = t.warnings.clone();
        let mut fixtures: Vec<Fixture> = Vec::with_capacity(t.fixtures.len());
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for spec in &t.fixtures {
            if !seen.insert(spec.id.as_str()) {
                return Err(LayoutError::DuplicateFixture(spec.id.clone()).into());
            }
            let (fixture, mut found) = place(spec, &inner, &fixtures)?;
            found.extend(fit::check_fixture(&fixture, &inner, &fixtures, &openings));
            if spec.optional && !found.is_empty() {
                debug!(room = %t.label, fixture = %spec.id, "optional fixture does not fit, skipped");
                skipped.push(spec.id.clone());
                continue;
            }
            for w in &found {
                warn!(room = %t.label, "{w}");
            }
            warnings.extend(found);
            fixtures.push(fixture);
        }

        debug!(
            room = %t.label,
            fixtures = fixtures.len(),
            openings = openings.len(),
            warnings = warnings.len(),
            "room laid out"
        );
        Ok(RoomLayout {
            room,
            openings,
            fixtures,
            skipped,
            warnings,
        })
    }
}

/// Resolves the bounding box, warning about fill extents that got no room.
fn place(
    spec: &FixtureSpec,
    inner: &Rect,
    placed: &[Fixture],
) -> Result<(Fixture, Vec<LayoutWarning>)> {
    let (ex, ey) = spec.kind.footprint()?;
    let (x, width) = AxisFrame::new(Axis::Horizontal, inner, placed).place(&spec.id, &spec.x, ex)?;
    let (y, height) = AxisFrame::new(Axis::Vertical, inner, placed).place(&spec.id, &spec.y, ey)?;

    let warnings = [(Axis::Horizontal, ex, width), (Axis::Vertical, ey, height)]
        .into_iter()
        .filter(|(_, extent, size)| matches!(extent, Extent::Fill { .. }) && *size <= 0.0)
        .map(|(axis, _, _)| LayoutWarning::NoFreeSpan {
            fixture: spec.id.clone(),
            axis: axis.name(),
        })
        .collect();

    let fixture = Fixture {
        id: spec.id.clone(),
        kind: spec.kind.clone(),
        bounds: Rect::new(x, y, width, height),
        label: spec
            .label
            .clone()
            .unwrap_or_else(|| spec.kind.default_label()),
    };
    Ok((fixture, warnings))
}
