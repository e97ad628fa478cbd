//! Room presets and the generator that turns a template into a drawing.
//!
//! Each preset is a parameter struct whose `template()` builds a declarative
//! [`RoomTemplate`]. One [`Generator`] handles every template the same way:
//! layout, walls and floor, openings, fixtures, room label, extent.

mod bathroom;
mod bedroom;
mod kitchen;
mod living_room;

pub use bathroom::{Bathroom, BathroomLayout, UnknownBathroomLayout};
pub use bedroom::Bedroom;
pub use kitchen::Kitchen;
pub use living_room::LivingRoom;

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::fixture::opening::opening_shapes;
use crate::geometry::{Layer, Paint, Primitive, Shape, TextLabel};
use crate::layout::{LayoutRoom, RoomLayout, RoomTemplate};
use crate::render::Canvas;
use crate::scene::Scene;
use crate::style::Style;

/// Plan title in the form `Detailed Kitchen Floor Plan (4.5x3.5m)`.
pub(crate) fn plan_title(room: &str, width: f64, height: f64) -> String {
    format!("Detailed {room} Floor Plan ({width:.1}x{height:.1}m)")
}

/// One of the built-in room types with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Preset {
    Bathroom(Bathroom),
    Bedroom(Bedroom),
    Kitchen(Kitchen),
    LivingRoom(LivingRoom),
}

impl Preset {
    /// Default parameters for a room type name: `bathroom`, `bedroom`,
    /// `kitchen` or `living-room` (`living_room` is accepted too).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRoom`] for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bathroom" => Ok(Self::Bathroom(Bathroom::default())),
            "bedroom" => Ok(Self::Bedroom(Bedroom::default())),
            "kitchen" => Ok(Self::Kitchen(Kitchen::default())),
            "living-room" | "living_room" => Ok(Self::LivingRoom(LivingRoom::default())),
            _ => Err(ConfigError::UnknownRoom(name.to_owned()).into()),
        }
    }

    /// Replaces the inner width and/or height.
    #[must_use]
    pub fn with_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        let (w, h) = match &mut self {
            Self::Bathroom(p) => (&mut p.width, &mut p.height),
            Self::Bedroom(p) => (&mut p.width, &mut p.height),
            Self::Kitchen(p) => (&mut p.width, &mut p.height),
            Self::LivingRoom(p) => (&mut p.width, &mut p.height),
        };
        if let Some(width) = width {
            *w = width;
        }
        if let Some(height) = height {
            *h = height;
        }
        self
    }

    #[must_use]
    pub fn template(&self) -> RoomTemplate {
        match self {
            Self::Bathroom(p) => p.template(),
            Self::Bedroom(p) => p.template(),
            Self::Kitchen(p) => p.template(),
            Self::LivingRoom(p) => p.template(),
        }
    }

    /// `base` with this preset's colour overrides applied.
    #[must_use]
    pub fn style(&self, base: &Style) -> Style {
        let mut style = base.clone();
        if let Self::Bedroom(Bedroom {
            furniture_color: Some(color),
            ..
        }) = self
        {
            style.colors.furniture = color.clone();
        }
        style
    }
}

/// A laid-out room together with its drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub layout: RoomLayout,
    pub scene: Scene,
}

impl GeneratedPlan {
    /// Hands the scene to a canvas.
    ///
    /// # Errors
    ///
    /// Propagates canvas errors.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        self.scene.render(canvas)
    }
}

/// Builds the scene for any room template.
pub struct Generator<'a> {
    style: &'a Style,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(style: &'a Style) -> Self {
        Self { style }
    }

    /// Lays out `template` and draws it.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`LayoutRoom::execute`].
    pub fn generate(&self, template: &RoomTemplate) -> Result<GeneratedPlan> {
        let layout = LayoutRoom::new(template).execute()?;
        let style = self.style;
        let c = &style.colors;
        let outer = layout.room.outer();
        let inner = layout.room.inner();

        let mut shapes = vec![
            Shape::new(
                Primitive::Rect(outer),
                Paint::outlined(&c.wall, 1.0),
                Layer::Wall,
            ),
            Shape::new(Primitive::Rect(inner), Paint::fill(&c.floor), Layer::Floor),
        ];
        for opening in &layout.openings {
            shapes.extend(opening_shapes(opening, style));
        }
        for fixture in &layout.fixtures {
            shapes.extend(fixture.shapes(style));
        }
        if !template.label.is_empty() {
            shapes.push(Shape::new(
                Primitive::Text(TextLabel {
                    anchor: inner.center(),
                    text: template.label.clone(),
                    size: style.fonts.room_label,
                    bold: true,
                    rotation_deg: 0.0,
                }),
                Paint::fill(&c.label).with_opacity(style.fonts.room_label_opacity),
                Layer::RoomLabel,
            ));
        }

        let extent = outer.expanded(style.margin);
        debug!(
            room = %template.label,
            shapes = shapes.len(),
            skipped = layout.skipped.len(),
            "scene composed"
        );
        let scene = Scene::new(template.title.clone(), extent, shapes);
        Ok(GeneratedPlan { layout, scene })
    }
}
