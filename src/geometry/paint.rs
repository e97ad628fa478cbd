use serde::{Deserialize, Serialize};

/// A colour in any notation the canvas understands (`#b0b0b0`, `white`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Stroke pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Fill and stroke attributes of a shape.
///
/// For text, `fill` is the glyph colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub line_style: LineStyle,
    pub opacity: f64,
    pub hatched: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 0.0,
            line_style: LineStyle::Solid,
            opacity: 1.0,
            hatched: false,
        }
    }
}

impl Paint {
    /// A filled area with no outline.
    #[must_use]
    pub fn fill(color: &Color) -> Self {
        Self {
            fill: Some(color.clone()),
            ..Self::default()
        }
    }

    /// A filled area outlined in black.
    #[must_use]
    pub fn outlined(color: &Color, stroke_width: f64) -> Self {
        Self {
            fill: Some(color.clone()),
            stroke: Some(Color::new("black")),
            stroke_width,
            ..Self::default()
        }
    }

    /// An unfilled stroke, for lines and arcs.
    #[must_use]
    pub fn stroke(color: &Color, stroke_width: f64) -> Self {
        Self {
            stroke: Some(color.clone()),
            stroke_width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, color: &Color, stroke_width: f64) -> Self {
        self.stroke = Some(color.clone());
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn hatched(mut self) -> Self {
        self.hatched = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlined_uses_black_edge() {
        let paint = Paint::outlined(&Color::new("#e0ffff"), 0.8);
        assert_eq!(paint.fill, Some(Color::new("#e0ffff")));
        assert_eq!(paint.stroke, Some(Color::new("black")));
        assert!((paint.stroke_width - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn opacity_is_clamped() {
        let paint = Paint::fill(&Color::new("white")).with_opacity(1.7);
        assert!((paint.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn color_serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::new("peru")).unwrap_or_default();
        assert_eq!(json, "\"peru\"");
    }
}
