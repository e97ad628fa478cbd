use crate::fixture::{BedSize, FixtureKind};
use crate::geometry::Color;
use crate::layout::{Along, Coord, FixtureSpec, OpeningSpec, RoomTemplate, SwingDirection, Wall};
use crate::math::Axis;

use super::plan_title;

/// Bedroom parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Bedroom {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub door_width: f64,
    pub window_width: f64,
    /// `twin`, `full`, `queen` or `king`; anything else becomes `queen`.
    pub bed_type: String,
    pub nightstand_size: f64,
    /// Wardrobe length along the right wall.
    pub wardrobe_width: f64,
    pub wardrobe_depth: f64,
    /// Overrides the style's furniture colour.
    pub furniture_color: Option<Color>,
}

impl Default for Bedroom {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 3.5,
            wall_thickness: 0.15,
            door_width: 0.9,
            window_width: 1.5,
            bed_type: BedSize::Queen.name().to_owned(),
            nightstand_size: 0.5,
            wardrobe_width: 1.8,
            wardrobe_depth: 0.6,
            furniture_color: None,
        }
    }
}

impl Bedroom {
    #[must_use]
    pub fn template(&self) -> RoomTemplate {
        let (size, warning) = BedSize::resolve(&self.bed_type);
        let nightstand = FixtureKind::Nightstand {
            size: self.nightstand_size,
        };

        RoomTemplate {
            label: "BEDROOM".into(),
            title: plan_title("Bedroom", self.width, self.height),
            width: self.width,
            height: self.height,
            wall_thickness: self.wall_thickness,
            openings: vec![
                OpeningSpec::window(Wall::Top, self.window_width, Along::Centered),
                OpeningSpec::door(
                    Wall::Bottom,
                    self.door_width,
                    Along::FromStart(0.5),
                    SwingDirection::InCcw,
                ),
            ],
            fixtures: vec![
                // Head end against the top wall.
                FixtureSpec::new(
                    "bed",
                    FixtureKind::Bed { size },
                    Coord::Centered(0.0),
                    Coord::FromEnd(0.0),
                ),
                FixtureSpec::new(
                    "nightstand_left",
                    nightstand.clone(),
                    Coord::before("bed", 0.1),
                    Coord::align_end("bed", 0.0),
                ),
                FixtureSpec::new(
                    "nightstand_right",
                    nightstand,
                    Coord::after("bed", 0.1),
                    Coord::align_end("bed", 0.0),
                ),
                FixtureSpec::new(
                    "wardrobe",
                    FixtureKind::Wardrobe {
                        length: self.wardrobe_width,
                        depth: self.wardrobe_depth,
                        axis: Axis::Vertical,
                    },
                    Coord::FromEnd(0.0),
                    Coord::FromStart(0.5),
                ),
            ],
            warnings: warning.into_iter().collect(),
        }
    }
}
