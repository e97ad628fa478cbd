use serde::{Deserialize, Serialize};

/// Run direction of a wall or of a fixture that can be rotated by 90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Along x.
    Horizontal,
    /// Along y.
    Vertical,
}

impl Axis {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }
}

/// Compass direction on the plan; north is +y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[serde(rename = "N", alias = "north")]
    North,
    #[serde(rename = "S", alias = "south")]
    South,
    #[serde(rename = "E", alias = "east")]
    East,
    #[serde(rename = "W", alias = "west")]
    West,
}

impl Facing {
    /// Axis the direction runs along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Vertical,
            Self::East | Self::West => Axis::Horizontal,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn facing_axes() {
        assert_eq!(Facing::North.axis(), Axis::Vertical);
        assert_eq!(Facing::West.axis(), Axis::Horizontal);
        assert_eq!(Facing::South.axis().name(), "y");
    }

    #[test]
    fn facing_parses_compass_letters() {
        let f: Facing = serde_json::from_str("\"W\"").unwrap();
        assert_eq!(f, Facing::West);
        let f: Facing = serde_json::from_str("\"north\"").unwrap();
        assert_eq!(f, Facing::North);
    }
}
