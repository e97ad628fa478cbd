/// Draw order of a shape. Lower layers are painted first and end up
/// underneath.
///
/// Shapes on the same layer keep the order in which they were emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Outer wall rectangle.
    Wall,
    /// Inner floor rectangle.
    Floor,
    /// Door cuts and window glazing over the wall band.
    Opening,
    /// Door leaves, swing arcs, glazing lines.
    OpeningDetail,
    /// Faded room name, kept below the furniture.
    RoomLabel,
    /// Fixture bodies.
    Fixture,
    /// Parts drawn on a fixture body (tanks, countertops, cushions).
    FixtureDetail,
    /// Fine detail on top of fixture parts (burners, basins, pillows).
    Accent,
    /// Fixture labels.
    Label,
}

impl Layer {
    /// Numeric layering index, usable as a z-order by canvases.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_below_floor_below_fixtures_below_labels() {
        assert!(Layer::Wall < Layer::Floor);
        assert!(Layer::Floor < Layer::Opening);
        assert!(Layer::Fixture < Layer::FixtureDetail);
        assert!(Layer::Accent < Layer::Label);
        assert_eq!(Layer::Wall.index(), 0);
        assert_eq!(Layer::Label.index(), 8);
    }
}
