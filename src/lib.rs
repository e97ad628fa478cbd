//! Procedural 2D floor plans of single rooms.
//!
//! A [`RoomTemplate`] (built by a [`Preset`] or loaded from JSON) is laid out
//! by [`LayoutRoom`], drawn into a layered [`Scene`] by [`Generator`] and
//! handed to any [`Canvas`], such as the bundled [`SvgCanvas`].

pub mod error;
pub mod fixture;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod preset;
pub mod render;
pub mod scene;
pub mod style;

pub use error::{FloorplanError, Result};
pub use fixture::{Fixture, FixtureKind};
pub use layout::{LayoutRoom, LayoutWarning, RoomLayout, RoomTemplate};
pub use preset::{GeneratedPlan, Generator, Preset};
pub use render::{Canvas, SvgCanvas};
pub use scene::Scene;
pub use style::Style;
