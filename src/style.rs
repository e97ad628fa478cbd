//! Colours, font sizes and canvas margin used when drawing a plan.
//!
//! A [`Style`] is passed explicitly to the generator; nothing here is global.
//! Every field has a default, so a JSON style file only needs to list the
//! values it overrides:
//!
//! ```json
//! { "colors": { "wall": "#808080", "furniture": "saddlebrown" }, "margin": 0.8 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::Color;

/// Complete drawing style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub colors: Palette,
    pub fonts: Fonts,
    /// Space around the outer wall rectangle in the canvas extent.
    pub margin: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            colors: Palette::default(),
            fonts: Fonts::default(),
            margin: 0.5,
        }
    }
}

impl Style {
    /// Parses a style from JSON, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Json(e).into())
    }
}

/// Named colours of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub wall: Color,
    pub floor: Color,
    pub outline: Color,
    pub window: Color,
    pub door_leaf: Color,

    pub porcelain: Color,
    pub tank: Color,
    pub tub_inner: Color,
    pub drain: Color,
    pub vanity: Color,
    pub basin: Color,

    pub appliance: Color,
    pub appliance_detail: Color,
    pub control_panel: Color,
    pub burner: Color,
    pub counter: Color,
    pub countertop: Color,

    pub furniture: Color,
    pub bed_base: Color,
    pub headboard: Color,
    pub blanket: Color,
    pub blanket_fold: Color,
    pub pillow: Color,

    pub sofa: Color,
    pub cushion_edge: Color,
    pub accent_chair: Color,
    pub table: Color,
    pub rug: Color,
    pub rug_edge: Color,
    pub tv: Color,
    pub bookshelf: Color,

    pub label: Color,
    pub label_on_dark: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: "#b0b0b0".into(),
            floor: "white".into(),
            outline: "black".into(),
            window: "#add8e6".into(),
            door_leaf: "black".into(),

            porcelain: "#e0ffff".into(),
            tank: "gray".into(),
            tub_inner: "white".into(),
            drain: "blue".into(),
            vanity: "#a0522d".into(),
            basin: "lightgray".into(),

            appliance: "#696969".into(),
            appliance_detail: "white".into(),
            control_panel: "darkgray".into(),
            burner: "black".into(),
            counter: "#8b4513".into(),
            countertop: "#a9a9a9".into(),

            furniture: "peru".into(),
            bed_base: "#d3d3d3".into(),
            headboard: "#8b4513".into(),
            blanket: "#add8e6".into(),
            blanket_fold: "darkblue".into(),
            pillow: "#f0f8ff".into(),

            sofa: "#4682b4".into(),
            cushion_edge: "darkblue".into(),
            accent_chair: "#8b4513".into(),
            table: "#d2b48c".into(),
            rug: "#f0f8ff".into(),
            rug_edge: "darkgray".into(),
            tv: "#1c1c1c".into(),
            bookshelf: "#8b4513".into(),

            label: "darkslategray".into(),
            label_on_dark: "white".into(),
        }
    }
}

/// Font sizes (points) and text opacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub title: f64,
    pub room_label: f64,
    pub room_label_opacity: f64,
    pub fixture_label: f64,
    pub small_label: f64,
    pub large_label: f64,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            title: 16.0,
            room_label: 14.0,
            room_label_opacity: 0.7,
            fixture_label: 7.0,
            small_label: 6.0,
            large_label: 9.0,
        }
    }
}
