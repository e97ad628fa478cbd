use std::fmt;
use std::str::FromStr;

use crate::fixture::FixtureKind;
use crate::layout::{
    Along, Coord, FixtureSpec, LayoutWarning, OpeningSpec, RoomTemplate, SwingDirection, Wall,
};
use crate::math::{Axis, Facing};

use super::plan_title;

/// Which wet area goes into the bathroom's free corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BathroomLayout {
    #[default]
    Shower,
    Bathtub,
}

impl BathroomLayout {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Shower => "shower",
            Self::Bathtub => "bathtub",
        }
    }

    /// Parses a layout name, falling back to [`BathroomLayout::Shower`] with
    /// a warning.
    #[must_use]
    pub fn resolve(name: &str) -> (Self, Option<LayoutWarning>) {
        match name.parse() {
            Ok(layout) => (layout, None),
            Err(UnknownBathroomLayout(value)) => (
                Self::Shower,
                Some(LayoutWarning::UnknownOption {
                    option: "fixture_layout",
                    value,
                    fallback: Self::Shower.name().to_owned(),
                }),
            ),
        }
    }
}

impl fmt::Display for BathroomLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBathroomLayout(pub String);

impl FromStr for BathroomLayout {
    type Err = UnknownBathroomLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shower" => Ok(Self::Shower),
            "bathtub" | "tub" => Ok(Self::Bathtub),
            _ => Err(UnknownBathroomLayout(s.to_owned())),
        }
    }
}

/// Bathroom parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Bathroom {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
    /// `shower` or `bathtub`; anything else falls back to a shower.
    pub layout: String,
}

impl Default for Bathroom {
    fn default() -> Self {
        Self {
            width: 2.5,
            height: 3.0,
            wall_thickness: 0.15,
            layout: BathroomLayout::Shower.name().to_owned(),
        }
    }
}

impl Bathroom {
    #[must_use]
    pub fn template(&self) -> RoomTemplate {
        let (layout, warning) = BathroomLayout::resolve(&self.layout);

        let mut fixtures = vec![
            FixtureSpec::new(
                "toilet",
                FixtureKind::Toilet {
                    facing: Facing::West,
                },
                Coord::FromEnd(0.1),
                Coord::FromEnd(0.1),
            ),
            FixtureSpec::new(
                "vanity",
                FixtureKind::Vanity {
                    width: 0.5,
                    depth: 0.8,
                },
                Coord::FromEnd(0.0),
                Coord::FromStart(0.1),
            ),
        ];
        fixtures.push(match layout {
            BathroomLayout::Shower => FixtureSpec::new(
                "shower",
                FixtureKind::Shower {
                    width: 0.9,
                    depth: 0.9,
                },
                Coord::FromStart(0.1),
                Coord::FromStart(0.1),
            ),
            BathroomLayout::Bathtub => FixtureSpec::new(
                "bathtub",
                FixtureKind::Bathtub {
                    length: 1.6,
                    width: 0.75,
                    axis: Axis::Vertical,
                },
                Coord::FromStart(0.0),
                Coord::FromStart(0.1),
            ),
        });

        RoomTemplate {
            label: "BATHROOM".into(),
            title: plan_title("Bathroom", self.width, self.height),
            width: self.width,
            height: self.height,
            wall_thickness: self.wall_thickness,
            openings: vec![
                OpeningSpec::window(Wall::Left, 0.6, Along::Centered),
                // Between the wet area and the vanity, so the leaf clears both.
                OpeningSpec::door(Wall::Bottom, 0.7, Along::FromEnd(0.55), SwingDirection::InCcw),
            ],
            fixtures,
            warnings: warning.into_iter().collect(),
        }
    }
}
