//! Non-fatal fit checks.
//!
//! Placement is never changed by these checks. They only report fixtures
//! that leave the floor, collide with another fixture of the same
//! [`Tier`](crate::fixture::Tier), or stand inside a door's swing.

use std::fmt;

use crate::fixture::Fixture;
use crate::math::{Point2, Rect, TOLERANCE};

use super::opening::Opening;
use super::room::Wall;

/// Something about a layout worth telling the user about.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    /// An unrecognised option value was replaced by a default.
    UnknownOption {
        option: &'static str,
        value: String,
        fallback: String,
    },
    /// The fixture extends past the inner floor rectangle.
    OutOfBounds { fixture: String },
    /// A fill extent found no space left before the far wall.
    NoFreeSpan { fixture: String, axis: &'static str },
    /// Two fixtures of the same tier share floor area.
    Overlap { fixture: String, other: String },
    /// A fixture stands inside the quarter circle swept by a door.
    DoorSwingBlocked {
        door: usize,
        wall: Wall,
        fixture: String,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption {
                option,
                value,
                fallback,
            } => write!(f, "{option} '{value}' not recognized, using '{fallback}'"),
            Self::OutOfBounds { fixture } => {
                write!(f, "fixture '{fixture}' extends past the room's inner walls")
            }
            Self::NoFreeSpan { fixture, axis } => {
                write!(f, "fixture '{fixture}' has no free space to fill along {axis}")
            }
            Self::Overlap { fixture, other } => {
                write!(f, "fixture '{fixture}' overlaps '{other}'")
            }
            Self::DoorSwingBlocked {
                door,
                wall,
                fixture,
            } => write!(
                f,
                "door {door} on the {} wall is blocked by '{fixture}'",
                wall.name()
            ),
        }
    }
}

/// Checks `fixture` against the floor, the fixtures placed before it and
/// every door swing.
pub(crate) fn check_fixture(
    fixture: &Fixture,
    inner: &Rect,
    placed: &[Fixture],
    openings: &[Opening],
) -> Vec<LayoutWarning> {
    let mut warnings = Vec::new();
    if !inner.contains_rect(&fixture.bounds) {
        warnings.push(LayoutWarning::OutOfBounds {
            fixture: fixture.id.clone(),
        });
    }

    let tier = fixture.kind.tier();
    warnings.extend(
        placed
            .iter()
            .filter(|other| other.kind.tier() == tier && other.bounds.overlaps(&fixture.bounds))
            .map(|other| LayoutWarning::Overlap {
                fixture: fixture.id.clone(),
                other: other.id.clone(),
            }),
    );

    if tier.blocks_swing() {
        for (index, opening) in openings.iter().enumerate() {
            let Some(swing) = &opening.swing else {
                continue;
            };
            if quadrant_hits(swing.hinge, swing.clearance(), swing.radius, &fixture.bounds) {
                warnings.push(LayoutWarning::DoorSwingBlocked {
                    door: index,
                    wall: opening.wall,
                    fixture: fixture.id.clone(),
                });
            }
        }
    }
    warnings
}

/// Whether `rect` reaches into the quarter disc of `radius` around `hinge`
/// bounded by `square`.
fn quadrant_hits(hinge: Point2, square: Rect, radius: f64, rect: &Rect) -> bool {
    if !square.overlaps(rect) {
        return false;
    }
    // Nearest point of the part of `rect` inside the quadrant square.
    let lo = Point2::new(rect.min_x().max(square.min_x()), rect.min_y().max(square.min_y()));
    let hi = Point2::new(rect.max_x().min(square.max_x()), rect.max_y().min(square.max_y()));
    let nearest = Point2::new(hinge.x.clamp(lo.x, hi.x), hinge.y.clamp(lo.y, hi.y));
    (nearest - hinge).norm() < radius - TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixture::FixtureKind;
    use crate::layout::{Along, OpeningSpec, Room, SwingDirection};

    fn fixture(id: &str, kind: FixtureKind, bounds: Rect) -> Fixture {
        Fixture {
            id: id.into(),
            label: kind.default_label(),
            kind,
            bounds,
        }
    }

    fn chair(id: &str, x: f64, y: f64) -> Fixture {
        fixture(
            id,
            FixtureKind::Armchair {
                width: 0.9,
                depth: 0.9,
            },
            Rect::new(x, y, 0.9, 0.9),
        )
    }

    #[test]
    fn fixture_past_the_wall_is_out_of_bounds() {
        let inner = Rect::new(0.15, 0.15, 2.5, 3.0);
        let warnings = check_fixture(&chair("a", 2.0, 1.0), &inner, &[], &[]);
        assert_eq!(
            warnings,
            vec![LayoutWarning::OutOfBounds {
                fixture: "a".into()
            }]
        );
    }

    #[test]
    fn touching_fixtures_do_not_overlap() {
        let inner = Rect::new(0.0, 0.0, 5.0, 5.0);
        let placed = [chair("a", 1.0, 1.0)];
        assert!(check_fixture(&chair("b", 1.9, 1.0), &inner, &placed, &[]).is_empty());
        let warnings = check_fixture(&chair("c", 1.8, 1.0), &inner, &placed, &[]);
        assert_eq!(
            warnings,
            vec![LayoutWarning::Overlap {
                fixture: "c".into(),
                other: "a".into()
            }]
        );
    }

    #[test]
    fn fixtures_on_a_rug_do_not_overlap_it() {
        let inner = Rect::new(0.0, 0.0, 6.0, 6.0);
        let rug = fixture(
            "rug",
            FixtureKind::Rug {
                width: 4.0,
                depth: 3.0,
            },
            Rect::new(1.0, 1.0, 4.0, 3.0),
        );
        assert!(check_fixture(&chair("a", 2.0, 2.0), &inner, &[rug], &[]).is_empty());
    }

    #[test]
    fn door_swing_quadrant() {
        let room = Room::new(4.0, 3.5, 0.15).unwrap();
        let door = OpeningSpec::door(Wall::Bottom, 0.9, Along::FromStart(0.5), SwingDirection::InCcw)
            .resolve(&room)
            .unwrap();
        let swing = door.swing.unwrap();
        let inner = room.inner();
        let openings = [door];

        // Hinge at (1.55, 0.15); the swing covers x 0.65..1.55, y 0.15..1.05.
        let blocked = check_fixture(&chair("in", 0.7, 0.2), &inner, &[], &openings);
        assert!(matches!(
            blocked.as_slice(),
            [LayoutWarning::DoorSwingBlocked { door: 0, wall: Wall::Bottom, .. }]
        ));
        assert!(check_fixture(&chair("clear", 2.0, 0.2), &inner, &[], &openings).is_empty());

        // Inside the quadrant's square but beyond the arc.
        let far_corner = Rect::new(0.65, 0.95, 0.05, 0.05);
        assert!(!quadrant_hits(swing.hinge, swing.clearance(), swing.radius, &far_corner));
    }

    #[test]
    fn warnings_read_well() {
        let w = LayoutWarning::UnknownOption {
            option: "bed_type",
            value: "queen_xl".into(),
            fallback: "queen".into(),
        };
        assert_eq!(w.to_string(), "bed_type 'queen_xl' not recognized, using 'queen'");
    }
}
