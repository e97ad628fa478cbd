use crate::fixture::FixtureKind;
use crate::layout::{Along, Coord, FixtureSpec, OpeningSpec, RoomTemplate, SwingDirection, Wall};
use crate::math::Axis;

use super::plan_title;

/// Living room parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LivingRoom {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
    /// Adds a bookshelf on the right wall when it fits.
    pub bookshelf: bool,
}

impl Default for LivingRoom {
    fn default() -> Self {
        Self {
            width: 5.5,
            height: 4.5,
            wall_thickness: 0.15,
            bookshelf: true,
        }
    }
}

impl LivingRoom {
    #[must_use]
    pub fn template(&self) -> RoomTemplate {
        let armchair = FixtureKind::Armchair {
            width: 0.9,
            depth: 0.9,
        };
        let mut fixtures = vec![
            FixtureSpec::new(
                "rug",
                FixtureKind::Rug {
                    width: 4.0,
                    depth: 3.0,
                },
                Coord::Centered(0.0),
                Coord::Centered(0.0),
            ),
            FixtureSpec::new(
                "sofa",
                FixtureKind::Sofa {
                    width: 3.0,
                    depth: 1.0,
                },
                Coord::center_on("rug", 0.0),
                Coord::align_end("rug", 0.0),
            )
            .with_label("3-Seater Sofa"),
            FixtureSpec::new(
                "coffee_table",
                FixtureKind::CoffeeTable {
                    width: 1.2,
                    depth: 0.7,
                },
                Coord::center_on("rug", 0.0),
                Coord::before("sofa", 0.2),
            ),
            FixtureSpec::new(
                "armchair_left",
                armchair.clone(),
                Coord::align_start("rug", 0.0),
                Coord::center_on("coffee_table", 0.0),
            ),
            FixtureSpec::new(
                "armchair_right",
                armchair,
                Coord::align_end("rug", 0.0),
                Coord::center_on("coffee_table", 0.0),
            ),
            FixtureSpec::new(
                "tv_stand",
                FixtureKind::TvStand {
                    width: 2.0,
                    depth: 0.4,
                },
                Coord::Centered(0.0),
                Coord::FromStart(0.0),
            ),
        ];
        if self.bookshelf {
            fixtures.push(
                FixtureSpec::new(
                    "bookshelf",
                    FixtureKind::Bookshelf {
                        length: 1.5,
                        depth: 0.35,
                        axis: Axis::Vertical,
                    },
                    Coord::FromEnd(0.0),
                    Coord::FromEnd(0.2),
                )
                .optional(),
            );
        }

        RoomTemplate {
            label: "LIVING ROOM".into(),
            title: plan_title("Living Room", self.width, self.height),
            width: self.width,
            height: self.height,
            wall_thickness: self.wall_thickness,
            openings: vec![
                OpeningSpec::window(Wall::Left, 2.0, Along::Centered),
                OpeningSpec::door(Wall::Bottom, 0.9, Along::FromEnd(0.5), SwingDirection::InCcw),
            ],
            fixtures,
            warnings: Vec::new(),
        }
    }
}
