use crate::fixture::{DiningChairs, FixtureKind};
use crate::layout::{
    Along, Coord, Extent, FixtureSpec, OpeningSpec, RoomTemplate, SwingDirection, Wall,
};
use crate::math::Axis;

use super::plan_title;

const COUNTER_DEPTH: f64 = 0.6;
const HOOD_DEPTH: f64 = 0.35;
/// Hood width as a share of the stove width.
const HOOD_SHARE: f64 = 0.9;
/// Gap between the bottom wall and the island's table top.
const ISLAND_CLEARANCE: f64 = 0.5;

/// Kitchen parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Kitchen {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub stove_width: f64,
    /// Adds a microwave right of the stove when it fits.
    pub microwave: bool,
    /// Adds an island with two stools when it fits. In narrow kitchens the
    /// lower stool lands in the door swing and the island is dropped.
    pub island: bool,
}

impl Default for Kitchen {
    fn default() -> Self {
        Self {
            width: 4.5,
            height: 3.5,
            wall_thickness: 0.15,
            stove_width: 0.75,
            microwave: true,
            island: true,
        }
    }
}

impl Kitchen {
    #[must_use]
    pub fn template(&self) -> RoomTemplate {
        let mut fixtures = vec![
            FixtureSpec::new(
                "fridge",
                FixtureKind::Refrigerator {
                    width: 0.7,
                    depth: 0.9,
                },
                Coord::FromStart(0.0),
                Coord::FromStart(0.1),
            ),
            // Left wall, from just past the fridge up to the top wall.
            FixtureSpec::new(
                "counter_left",
                FixtureKind::Counter {
                    run: Extent::Fill { margin: 0.0 },
                    depth: COUNTER_DEPTH,
                    axis: Axis::Vertical,
                },
                Coord::FromStart(0.0),
                Coord::after("fridge", 0.1),
            ),
            // Top wall, from the left counter's edge to the right wall.
            FixtureSpec::new(
                "counter_top",
                FixtureKind::Counter {
                    run: Extent::Fill { margin: 0.0 },
                    depth: COUNTER_DEPTH,
                    axis: Axis::Horizontal,
                },
                Coord::after("counter_left", 0.0),
                Coord::FromEnd(0.0),
            ),
            // Under the window.
            FixtureSpec::new(
                "sink",
                FixtureKind::Sink {
                    width: 0.8,
                    depth: COUNTER_DEPTH,
                },
                Coord::Centered(0.0),
                Coord::align_start("counter_top", 0.0),
            ),
            FixtureSpec::new(
                "dishwasher",
                FixtureKind::Dishwasher {
                    width: 0.6,
                    depth: COUNTER_DEPTH,
                },
                Coord::at_least(
                    Coord::before("sink", 0.1),
                    Coord::align_start("counter_top", 0.0),
                ),
                Coord::align_start("counter_top", 0.0),
            ),
            FixtureSpec::new(
                "stove",
                FixtureKind::Stove {
                    width: self.stove_width,
                    depth: COUNTER_DEPTH,
                },
                Coord::after("sink", 0.1),
                Coord::align_start("counter_top", 0.0),
            ),
            FixtureSpec::new(
                "hood",
                FixtureKind::Hood {
                    width: self.stove_width * HOOD_SHARE,
                    depth: HOOD_DEPTH,
                },
                Coord::center_on("stove", 0.0),
                Coord::align_end("stove", 0.0),
            ),
        ];

        if self.microwave {
            fixtures.push(
                FixtureSpec::new(
                    "microwave",
                    FixtureKind::Microwave {
                        width: 0.5,
                        depth: 0.4,
                    },
                    Coord::after("stove", 0.1),
                    Coord::center_on("counter_top", 0.0),
                )
                .optional(),
            );
        }
        if self.island {
            fixtures.push(
                FixtureSpec::new(
                    "island",
                    FixtureKind::DiningTable {
                        width: 1.0,
                        depth: 0.8,
                        chairs: DiningChairs::Two,
                    },
                    Coord::Centered(0.0),
                    // The footprint includes the stools; the top sits at the clearance.
                    Coord::FromStart(ISLAND_CLEARANCE - DiningChairs::Two.margins().1),
                )
                .with_label("Island")
                .optional(),
            );
        }

        RoomTemplate {
            label: "KITCHEN".into(),
            title: plan_title("Kitchen", self.width, self.height),
            width: self.width,
            height: self.height,
            wall_thickness: self.wall_thickness,
            openings: vec![
                OpeningSpec::window(Wall::Top, 1.2, Along::Centered),
                // Far enough from the corner for the leaf to clear the fridge.
                OpeningSpec::door(Wall::Bottom, 0.8, Along::FromStart(1.0), SwingDirection::InCw),
            ],
            fixtures,
            warnings: Vec::new(),
        }
    }
}
