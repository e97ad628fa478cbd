//! Catalog of furnishings and appliances.
//!
//! Every fixture is static geometry: given its bounding box and parameters it
//! decomposes into a handful of layered shapes plus one centred label. No
//! fixture looks at any other fixture.

mod bath;
mod bedroom;
mod kitchen;
mod living;
pub mod opening;

pub use bedroom::{BedSize, UnknownBedSize};
pub use kitchen::{counter_units, DiningChairs, COUNTER_UNIT};

use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, Result};
use crate::geometry::{Color, Layer, Paint, Primitive, Shape, TextLabel};
use crate::layout::Extent;
use crate::math::{Axis, Facing, Point2, Rect};
use crate::style::Style;

/// Plan size of a toilet: width across the seat, depth front to back.
pub const TOILET_SIZE: (f64, f64) = (0.4, 0.7);

/// A fixture type with its parameters.
///
/// `width` is always the plan extent along x and `depth` along y, except for
/// the rotatable kinds, which take a run `length` and an [`Axis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FixtureKind {
    Toilet { facing: Facing },
    Vanity { width: f64, depth: f64 },
    Shower { width: f64, depth: f64 },
    Bathtub { length: f64, width: f64, axis: Axis },

    Bed { size: BedSize },
    Nightstand { size: f64 },
    Wardrobe { length: f64, depth: f64, axis: Axis },

    Counter { run: Extent, depth: f64, axis: Axis },
    Sink { width: f64, depth: f64 },
    Stove { width: f64, depth: f64 },
    Refrigerator { width: f64, depth: f64 },
    Dishwasher { width: f64, depth: f64 },
    Microwave { width: f64, depth: f64 },
    Hood { width: f64, depth: f64 },
    DiningTable { width: f64, depth: f64, chairs: DiningChairs },

    Sofa { width: f64, depth: f64 },
    Armchair { width: f64, depth: f64 },
    CoffeeTable { width: f64, depth: f64 },
    TvStand { width: f64, depth: f64 },
    Rug { width: f64, depth: f64 },
    Bookshelf { length: f64, depth: f64, axis: Axis },
}

/// Swaps a (along-run, across-run) pair into (x, y) for the given axis.
fn oriented<T>(along: T, across: T, axis: Axis) -> (T, T) {
    match axis {
        Axis::Horizontal => (along, across),
        Axis::Vertical => (across, along),
    }
}

impl FixtureKind {
    /// Plan extents `(x, y)` of the bounding box, after validating every
    /// dimension.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for a zero, negative or
    /// non-finite dimension.
    pub fn footprint(&self) -> Result<(Extent, Extent)> {
        use Extent::Fixed;

        let fixed = |name: &str, w: f64, d: f64| -> Result<(Extent, Extent)> {
            Ok((
                Fixed(ensure_positive(&format!("{name}.width"), w)?),
                Fixed(ensure_positive(&format!("{name}.depth"), d)?),
            ))
        };

        match self {
            Self::Toilet { facing } => {
                let (w, d) = TOILET_SIZE;
                let (x, y) = oriented(d, w, facing.axis());
                Ok((Fixed(x), Fixed(y)))
            }
            Self::Bathtub {
                length,
                width,
                axis,
            } => {
                let (x, y) = oriented(
                    ensure_positive("bathtub.length", *length)?,
                    ensure_positive("bathtub.width", *width)?,
                    *axis,
                );
                Ok((Fixed(x), Fixed(y)))
            }
            Self::Bed { size } => {
                let (w, l) = size.dimensions();
                Ok((Fixed(w), Fixed(l)))
            }
            Self::Nightstand { size } => fixed("nightstand", *size, *size),
            Self::Wardrobe {
                length,
                depth,
                axis,
            } => {
                let (x, y) = oriented(
                    ensure_positive("wardrobe.length", *length)?,
                    ensure_positive("wardrobe.depth", *depth)?,
                    *axis,
                );
                Ok((Fixed(x), Fixed(y)))
            }
            Self::Bookshelf {
                length,
                depth,
                axis,
            } => {
                let (x, y) = oriented(
                    ensure_positive("bookshelf.length", *length)?,
                    ensure_positive("bookshelf.depth", *depth)?,
                    *axis,
                );
                Ok((Fixed(x), Fixed(y)))
            }
            Self::Counter { run, depth, axis } => {
                run.validate("counter.run")?;
                let depth = Fixed(ensure_positive("counter.depth", *depth)?);
                Ok(oriented(*run, depth, *axis))
            }
            Self::DiningTable {
                width,
                depth,
                chairs,
            } => {
                ensure_positive("dining_table.width", *width)?;
                ensure_positive("dining_table.depth", *depth)?;
                let (mx, my) = chairs.margins();
                Ok((Fixed(width + 2.0 * mx), Fixed(depth + 2.0 * my)))
            }
            Self::Vanity { width, depth } => fixed("vanity", *width, *depth),
            Self::Shower { width, depth } => fixed("shower", *width, *depth),
            Self::Sink { width, depth } => fixed("sink", *width, *depth),
            Self::Stove { width, depth } => fixed("stove", *width, *depth),
            Self::Refrigerator { width, depth } => fixed("refrigerator", *width, *depth),
            Self::Dishwasher { width, depth } => fixed("dishwasher", *width, *depth),
            Self::Microwave { width, depth } => fixed("microwave", *width, *depth),
            Self::Hood { width, depth } => fixed("hood", *width, *depth),
            Self::Sofa { width, depth } => fixed("sofa", *width, *depth),
            Self::Armchair { width, depth } => fixed("armchair", *width, *depth),
            Self::CoffeeTable { width, depth } => fixed("coffee_table", *width, *depth),
            Self::TvStand { width, depth } => fixed("tv_stand", *width, *depth),
            Self::Rug { width, depth } => fixed("rug", *width, *depth),
        }
    }

    /// Label used when the template does not give one.
    #[must_use]
    pub fn default_label(&self) -> String {
        match self {
            Self::Toilet { .. } => "WC".into(),
            Self::Vanity { .. } => "Vanity".into(),
            Self::Shower { .. } => "Shower".into(),
            Self::Bathtub { .. } => "Tub".into(),
            Self::Bed { size } => format!("{} Bed", size.title()),
            Self::Nightstand { .. } => "Nightstand".into(),
            Self::Wardrobe { .. } => "Wardrobe".into(),
            // Counters carry no label unless the template gives one.
            Self::Counter { .. } => String::new(),
            Self::Sink { .. } => "Sink".into(),
            Self::Stove { .. } => "Stove".into(),
            Self::Refrigerator { .. } => "Fridge".into(),
            Self::Dishwasher { .. } => "Dishwasher".into(),
            Self::Microwave { .. } => "Micro.".into(),
            Self::Hood { .. } => "Hood".into(),
            Self::DiningTable { .. } => "Table".into(),
            Self::Sofa { .. } => "Sofa".into(),
            Self::Armchair { .. } => "Armchair".into(),
            Self::CoffeeTable { .. } => "Coffee Table".into(),
            Self::TvStand { .. } => "TV".into(),
            Self::Rug { .. } => "Rug".into(),
            Self::Bookshelf { .. } => "Bookshelf".into(),
        }
    }
}

/// Vertical band a fixture occupies. Fixtures only collide with fixtures
/// in the same tier: a sink may sit on a counter and a sofa on a rug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Rugs; never block anything.
    Floor,
    /// Base cabinets that appliances are set into.
    Base,
    /// Ordinary free-standing furniture and appliances.
    Standing,
    /// Wall-hung above the counter (hood).
    Overhead,
}

impl Tier {
    /// Whether a fixture of this tier stops a door from opening.
    #[must_use]
    pub fn blocks_swing(self) -> bool {
        matches!(self, Self::Base | Self::Standing)
    }
}

impl FixtureKind {
    #[must_use]
    pub fn tier(&self) -> Tier {
        match self {
            Self::Rug { .. } => Tier::Floor,
            Self::Counter { .. } => Tier::Base,
            Self::Hood { .. } => Tier::Overhead,
            _ => Tier::Standing,
        }
    }
}

/// A fixture placed in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub id: String,
    pub kind: FixtureKind,
    pub bounds: Rect,
    pub label: String,
}

impl Fixture {
    /// Decomposes the fixture into layered shapes.
    #[must_use]
    pub fn shapes(&self, style: &Style) -> Vec<Shape> {
        let mut sk = Sketch::new(style);
        let b = self.bounds;
        let label = self.label.as_str();
        match &self.kind {
            FixtureKind::Toilet { facing } => bath::toilet(&mut sk, b, *facing, label),
            FixtureKind::Vanity { .. } => bath::vanity(&mut sk, b, label),
            FixtureKind::Shower { .. } => bath::shower(&mut sk, b, label),
            FixtureKind::Bathtub { axis, .. } => bath::bathtub(&mut sk, b, *axis, label),
            FixtureKind::Bed { .. } => bedroom::bed(&mut sk, b, label),
            FixtureKind::Nightstand { .. } => bedroom::nightstand(&mut sk, b, label),
            FixtureKind::Wardrobe { axis, .. } => bedroom::wardrobe(&mut sk, b, *axis, label),
            FixtureKind::Counter { axis, .. } => kitchen::counter(&mut sk, b, *axis, label),
            FixtureKind::Sink { .. } => kitchen::sink(&mut sk, b, label),
            FixtureKind::Stove { .. } => kitchen::stove(&mut sk, b, label),
            FixtureKind::Refrigerator { .. } => kitchen::refrigerator(&mut sk, b, label),
            FixtureKind::Dishwasher { .. } => kitchen::dishwasher(&mut sk, b, label),
            FixtureKind::Microwave { .. } => kitchen::microwave(&mut sk, b, label),
            FixtureKind::Hood { .. } => kitchen::hood(&mut sk, b, label),
            FixtureKind::DiningTable { chairs, .. } => {
                kitchen::dining_table(&mut sk, b, *chairs, label);
            }
            FixtureKind::Sofa { .. } => living::sofa(&mut sk, b, label),
            FixtureKind::Armchair { .. } => living::armchair(&mut sk, b, label),
            FixtureKind::CoffeeTable { .. } => living::coffee_table(&mut sk, b, label),
            FixtureKind::TvStand { .. } => living::tv_stand(&mut sk, b, label),
            FixtureKind::Rug { .. } => living::rug(&mut sk, b, label),
            FixtureKind::Bookshelf { axis, .. } => living::bookshelf(&mut sk, b, *axis, label),
        }
        sk.finish()
    }
}

/// Collects shapes for one fixture.
pub(crate) struct Sketch<'a> {
    pub style: &'a Style,
    shapes: Vec<Shape>,
}

impl<'a> Sketch<'a> {
    pub fn new(style: &'a Style) -> Self {
        Self {
            style,
            shapes: Vec::with_capacity(8),
        }
    }

    pub fn rect(&mut self, rect: Rect, paint: Paint, layer: Layer) {
        self.shapes
            .push(Shape::new(Primitive::Rect(rect), paint, layer));
    }

    /// Filled rectangle with a thin black outline.
    pub fn body(&mut self, rect: Rect, color: &Color, stroke_width: f64, layer: Layer) {
        self.rect(rect, Paint::outlined(color, stroke_width), layer);
    }

    pub fn circle(&mut self, center: Point2, radius: f64, paint: Paint, layer: Layer) {
        self.shapes
            .push(Shape::new(Primitive::Circle { center, radius }, paint, layer));
    }

    pub fn line(&mut self, from: Point2, to: Point2, paint: Paint, layer: Layer) {
        self.shapes
            .push(Shape::new(Primitive::Line { from, to }, paint, layer));
    }

    pub fn arc(&mut self, center: Point2, radius: f64, start_deg: f64, end_deg: f64, paint: Paint, layer: Layer) {
        self.shapes.push(Shape::new(
            Primitive::Arc {
                center,
                radius,
                start_deg,
                end_deg,
            },
            paint,
            layer,
        ));
    }

    pub fn text(&mut self, label: TextLabel, paint: Paint, layer: Layer) {
        self.shapes
            .push(Shape::new(Primitive::Text(label), paint, layer));
    }

    /// Centred label on the [`Layer::Label`] layer.
    pub fn label(&mut self, bounds: Rect, text: &str, color: &Color, size: f64, bold: bool) {
        self.label_rotated(bounds, text, color, size, bold, 0.0);
    }

    pub fn label_rotated(&mut self, bounds: Rect, text: &str, color: &Color, size: f64, bold: bool, rotation_deg: f64) {
        if text.is_empty() {
            return;
        }
        self.text(
            TextLabel {
                anchor: bounds.center(),
                text: text.to_owned(),
                size,
                bold,
                rotation_deg,
            },
            Paint::fill(color),
            Layer::Label,
        );
    }

    pub fn finish(self) -> Vec<Shape> {
        self.shapes
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fixed(e: Extent) -> f64 {
        match e {
            Extent::Fixed(v) => v,
            Extent::Fill { .. } => f64::NAN,
        }
    }

    fn place(kind: FixtureKind, x: f64, y: f64) -> Fixture {
        let (w, d) = kind.footprint().unwrap();
        Fixture {
            id: "f".into(),
            label: kind.default_label(),
            bounds: Rect::new(x, y, fixed(w), fixed(d)),
            kind,
        }
    }

    #[test]
    fn toilet_footprint_swaps_with_facing() {
        let (w, d) = FixtureKind::Toilet { facing: Facing::North }.footprint().unwrap();
        assert_eq!((fixed(w), fixed(d)), (0.4, 0.7));
        let (w, d) = FixtureKind::Toilet { facing: Facing::West }.footprint().unwrap();
        assert_eq!((fixed(w), fixed(d)), (0.7, 0.4));
    }

    #[test]
    fn rotatable_kinds_swap_width_and_depth() {
        let h = FixtureKind::Bathtub { length: 1.6, width: 0.75, axis: Axis::Horizontal };
        let v = FixtureKind::Bathtub { length: 1.6, width: 0.75, axis: Axis::Vertical };
        let (hw, hd) = h.footprint().unwrap();
        let (vw, vd) = v.footprint().unwrap();
        assert_eq!((fixed(hw), fixed(hd)), (fixed(vd), fixed(vw)));
        assert_eq!(fixed(vw), 0.75);
    }

    #[test]
    fn counter_run_can_fill() {
        let k = FixtureKind::Counter { run: Extent::Fill { margin: 0.0 }, depth: 0.6, axis: Axis::Vertical };
        let (w, d) = k.footprint().unwrap();
        assert_eq!(w, Extent::Fixed(0.6));
        assert_eq!(d, Extent::Fill { margin: 0.0 });
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        assert!(FixtureKind::Shower { width: 0.0, depth: 0.9 }.footprint().is_err());
        assert!(FixtureKind::Rug { width: 4.0, depth: -3.0 }.footprint().is_err());
        assert!(FixtureKind::Counter { run: Extent::Fixed(-1.0), depth: 0.6, axis: Axis::Horizontal }
            .footprint()
            .is_err());
    }

    #[test]
    fn every_kind_decomposes_into_bounded_layered_shapes() {
        let style = Style::default();
        let kinds = [
            FixtureKind::Toilet { facing: Facing::South },
            FixtureKind::Vanity { width: 0.5, depth: 0.8 },
            FixtureKind::Shower { width: 0.9, depth: 0.9 },
            FixtureKind::Bathtub { length: 1.6, width: 0.75, axis: Axis::Horizontal },
            FixtureKind::Bed { size: BedSize::King },
            FixtureKind::Nightstand { size: 0.5 },
            FixtureKind::Wardrobe { length: 1.8, depth: 0.6, axis: Axis::Vertical },
            FixtureKind::Counter { run: Extent::Fixed(1.8), depth: 0.6, axis: Axis::Horizontal },
            FixtureKind::Sink { width: 0.8, depth: 0.6 },
            FixtureKind::Stove { width: 0.75, depth: 0.6 },
            FixtureKind::Refrigerator { width: 0.7, depth: 0.9 },
            FixtureKind::Dishwasher { width: 0.6, depth: 0.6 },
            FixtureKind::Microwave { width: 0.5, depth: 0.4 },
            FixtureKind::Hood { width: 0.675, depth: 0.35 },
            FixtureKind::DiningTable { width: 1.0, depth: 0.8, chairs: DiningChairs::Four },
            FixtureKind::Sofa { width: 3.0, depth: 1.0 },
            FixtureKind::Armchair { width: 0.9, depth: 0.9 },
            FixtureKind::CoffeeTable { width: 1.2, depth: 0.7 },
            FixtureKind::TvStand { width: 2.0, depth: 0.4 },
            FixtureKind::Rug { width: 4.0, depth: 3.0 },
            FixtureKind::Bookshelf { length: 1.5, depth: 0.35, axis: Axis::Vertical },
        ];
        for kind in kinds {
            let name = kind.default_label();
            let fixture = place(kind, 1.0, 1.0);
            let shapes = fixture.shapes(&style);
            assert!(shapes.len() >= 2, "{name}: {} shapes", shapes.len());

            let bounds = fixture.bounds.expanded(1e-9);
            for shape in &shapes {
                if let Some(b) = shape.bounds() {
                    assert!(bounds.contains_rect(&b), "{name}: {b:?} escapes {:?}", fixture.bounds);
                }
            }

            let labels: Vec<_> = shapes
                .iter()
                .filter(|s| matches!(s.primitive, Primitive::Text(_)))
                .collect();
            if matches!(fixture.kind, FixtureKind::Counter { .. }) {
                assert!(labels.is_empty());
            } else {
                assert_eq!(labels.len(), 1, "{name}");
                assert_eq!(labels[0].layer, Layer::Label);
            }
            assert!(shapes.iter().any(|s| s.layer == Layer::Fixture), "{name}");
        }
    }

    #[test]
    fn kind_json_is_tagged() {
        let kind: FixtureKind =
            serde_json::from_str(r#"{ "type": "toilet", "facing": "W" }"#).unwrap();
        assert_eq!(kind, FixtureKind::Toilet { facing: Facing::West });
        let kind: FixtureKind = serde_json::from_str(
            r#"{ "type": "counter", "run": { "fill": { "margin": 0.0 } }, "depth": 0.6, "axis": "vertical" }"#,
        )
        .unwrap();
        assert!(matches!(kind, FixtureKind::Counter { axis: Axis::Vertical, .. }));
    }
}
