use std::fmt::{self, Write as _};

use crate::error::{RenderError, Result};
use crate::geometry::{LineStyle, Paint, Primitive, Shape, TextLabel};
use crate::math::{arc_2d, Point2, Rect};

use super::Canvas;

/// Height of the band above the plan that holds the title, in pixels.
const TITLE_BAND: f64 = 40.0;
const HATCH_ID: &str = "hatch";

/// Canvas that builds an SVG document.
///
/// Plan coordinates are metres with y pointing up; the document is in pixels
/// with y pointing down, so every point is flipped against the extent.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    scale: f64,
    title_size: f64,
    extent: Option<Rect>,
    title: Option<String>,
    body: String,
    hatch_used: bool,
    document: Option<String>,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgCanvas {
    /// Pixels per metre used by [`SvgCanvas::new`].
    pub const DEFAULT_SCALE: f64 = 100.0;

    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            title_size: 16.0,
            extent: None,
            title: None,
            body: String::new(),
            hatch_used: false,
            document: None,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, pixels_per_metre: f64) -> Self {
        if pixels_per_metre.is_finite() && pixels_per_metre > 0.0 {
            self.scale = pixels_per_metre;
        }
        self
    }

    #[must_use]
    pub fn with_title_size(mut self, size: f64) -> Self {
        self.title_size = size;
        self
    }

    /// The finished document, once [`Canvas::finish`] has run.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn into_document(self) -> Option<String> {
        self.document
    }

    fn px(&self, p: Point2) -> (f64, f64) {
        let e = self.extent.unwrap_or_else(|| Rect::new(0.0, 0.0, 0.0, 0.0));
        (
            (p.x - e.min_x()) * self.scale,
            (e.max_y() - p.y) * self.scale + TITLE_BAND,
        )
    }

    fn write_shape(&mut self, shape: &Shape) -> fmt::Result {
        let paint = paint_attrs(&shape.paint);
        let layer = shape.layer.index();
        match &shape.primitive {
            Primitive::Rect(r) => {
                let (x, y) = self.px(Point2::new(r.min_x(), r.max_y()));
                let (w, h) = (r.width * self.scale, r.height * self.scale);
                writeln!(
                    self.body,
                    r#"  <rect data-layer="{layer}" x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}"{paint}/>"#
                )?;
                if shape.paint.hatched {
                    self.hatch_used = true;
                    writeln!(
                        self.body,
                        r#"  <rect data-layer="{layer}" x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="url(#{HATCH_ID})" stroke="none"/>"#
                    )?;
                }
            }
            Primitive::Circle { center, radius } => {
                let (cx, cy) = self.px(*center);
                let r = radius * self.scale;
                writeln!(
                    self.body,
                    r#"  <circle data-layer="{layer}" cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}"{paint}/>"#
                )?;
            }
            Primitive::Arc {
                center,
                radius,
                start_deg,
                end_deg,
            } => {
                let (sx, sy) = self.px(arc_2d::point_at_angle(*center, *radius, *start_deg));
                let (ex, ey) = self.px(arc_2d::point_at_angle(*center, *radius, *end_deg));
                let r = radius * self.scale;
                let large = u8::from(arc_2d::sweep_degrees(*start_deg, *end_deg) > 180.0);
                // Counter-clockwise in the plan is clockwise once y is
                // flipped, which is SVG's positive sweep direction.
                writeln!(
                    self.body,
                    r#"  <path data-layer="{layer}" d="M {sx:.2} {sy:.2} A {r:.2} {r:.2} 0 {large} 1 {ex:.2} {ey:.2}"{paint}/>"#
                )?;
            }
            Primitive::Line { from, to } => {
                let (x1, y1) = self.px(*from);
                let (x2, y2) = self.px(*to);
                writeln!(
                    self.body,
                    r#"  <line data-layer="{layer}" x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}"{paint}/>"#
                )?;
            }
            Primitive::Text(label) => self.write_text(label, &shape.paint, layer)?,
        }
        Ok(())
    }

    fn write_text(&mut self, label: &TextLabel, paint: &Paint, layer: u8) -> fmt::Result {
        let (x, y) = self.px(label.anchor);
        let fill = paint.fill.as_ref().map_or("black", |c| c.as_str());
        write!(
            self.body,
            r#"  <text data-layer="{layer}" x="{x:.2}" y="{y:.2}" font-size="{:.1}" fill="{}" text-anchor="middle" dominant-baseline="central""#,
            label.size,
            escape(fill)
        )?;
        if label.bold {
            self.body.push_str(r#" font-weight="bold""#);
        }
        if paint.opacity < 1.0 {
            write!(self.body, r#" opacity="{:.2}""#, paint.opacity)?;
        }
        if label.rotation_deg.abs() > f64::EPSILON {
            // SVG rotates clockwise on screen.
            write!(
                self.body,
                r#" transform="rotate({:.1} {x:.2} {y:.2})""#,
                -label.rotation_deg
            )?;
        }
        writeln!(self.body, ">{}</text>", escape(&label.text))
    }

    fn assemble(&self, extent: Rect) -> std::result::Result<String, fmt::Error> {
        let width = extent.width * self.scale;
        let height = extent.height * self.scale + TITLE_BAND;
        let mut doc = String::with_capacity(self.body.len() + 512);
        writeln!(doc, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.2} {height:.2}">"#
        )?;
        if let Some(title) = &self.title {
            writeln!(doc, "  <title>{}</title>", escape(title))?;
        }
        if self.hatch_used {
            writeln!(
                doc,
                r#"  <defs><pattern id="{HATCH_ID}" patternUnits="userSpaceOnUse" width="8" height="8"><path d="M 0 8 L 8 0" stroke="black" stroke-width="0.6"/></pattern></defs>"#
            )?;
        }
        writeln!(doc, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;
        if let Some(title) = &self.title {
            writeln!(
                doc,
                r#"  <text x="{:.2}" y="{:.2}" font-size="{:.1}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                width * 0.5,
                TITLE_BAND * 0.5,
                self.title_size,
                escape(title)
            )?;
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        Ok(doc)
    }
}

impl Canvas for SvgCanvas {
    fn set_extent(&mut self, extent: Rect) -> Result<()> {
        self.extent = Some(extent);
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = Some(title.to_owned());
        Ok(())
    }

    fn draw(&mut self, shape: &Shape) -> Result<()> {
        self.write_shape(shape).map_err(RenderError::from)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let extent = self.extent.ok_or(RenderError::MissingExtent)?;
        self.document = Some(self.assemble(extent).map_err(RenderError::from)?);
        Ok(())
    }
}

/// Fill, stroke, dash and opacity attributes, each with a leading space.
fn paint_attrs(paint: &Paint) -> String {
    let mut out = String::new();
    let fill = paint.fill.as_ref().map_or("none", |c| c.as_str());
    out.push_str(&format!(r#" fill="{}""#, escape(fill)));
    match &paint.stroke {
        Some(stroke) if paint.stroke_width > 0.0 => {
            out.push_str(&format!(
                r#" stroke="{}" stroke-width="{:.2}""#,
                escape(stroke.as_str()),
                paint.stroke_width
            ));
            match paint.line_style {
                LineStyle::Solid => {}
                LineStyle::Dashed => out.push_str(r#" stroke-dasharray="6 3""#),
                LineStyle::Dotted => out.push_str(r#" stroke-dasharray="1.5 3""#),
            }
        }
        _ => out.push_str(r#" stroke="none""#),
    }
    if paint.opacity < 1.0 {
        out.push_str(&format!(r#" opacity="{:.2}""#, paint.opacity));
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FloorplanError;
    use crate::geometry::{Color, Layer};

    fn canvas() -> SvgCanvas {
        let mut c = SvgCanvas::new();
        c.set_extent(Rect::new(-0.5, -0.5, 3.0, 4.0)).unwrap();
        c
    }

    #[test]
    fn rect_is_flipped_into_pixels() {
        let mut c = canvas();
        c.draw(&Shape::new(
            Primitive::Rect(Rect::new(0.0, 0.0, 1.0, 0.5)),
            Paint::outlined(&Color::new("#b0b0b0"), 1.0),
            Layer::Wall,
        ))
        .unwrap();
        c.finish().unwrap();
        let doc = c.document().unwrap();
        // Top edge y = 0.5 sits 3.0 m below the extent's top (3.5).
        assert!(doc.contains(r#"x="50.00" y="340.00" width="100.00" height="50.00""#), "{doc}");
        assert!(doc.contains(r##"fill="#b0b0b0" stroke="black" stroke-width="1.00""##));
    }

    #[test]
    fn dotted_arc_uses_positive_sweep() {
        let mut c = canvas();
        c.draw(&Shape::new(
            Primitive::Arc {
                center: Point2::new(0.0, 0.0),
                radius: 1.0,
                start_deg: 0.0,
                end_deg: 90.0,
            },
            Paint::stroke(&Color::new("black"), 0.8).with_line_style(LineStyle::Dotted),
            Layer::OpeningDetail,
        ))
        .unwrap();
        c.finish().unwrap();
        let doc = c.into_document().unwrap();
        assert!(doc.contains("M 150.00 390.00 A 100.00 100.00 0 0 1 50.00 290.00"), "{doc}");
        assert!(doc.contains(r#"stroke-dasharray="1.5 3""#));
        assert!(doc.contains(r#"fill="none""#));
    }

    #[test]
    fn hatch_pattern_is_defined_once_when_used() {
        let mut c = canvas();
        let hood = Shape::new(
            Primitive::Rect(Rect::new(1.0, 1.0, 0.5, 0.3)),
            Paint::outlined(&Color::new("#696969"), 0.8).hatched(),
            Layer::Fixture,
        );
        c.draw(&hood).unwrap();
        c.draw(&hood).unwrap();
        c.finish().unwrap();
        let doc = c.document().unwrap();
        assert_eq!(doc.matches("<pattern").count(), 1);
        assert_eq!(doc.matches("url(#hatch)").count(), 2);
    }

    #[test]
    fn text_is_escaped_rotated_and_faded() {
        let mut c = canvas();
        c.set_title("Kitchen & Dining").unwrap();
        c.draw(&Shape::new(
            Primitive::Text(TextLabel {
                anchor: Point2::new(1.0, 1.0),
                text: "<Rug>".into(),
                size: 9.0,
                bold: false,
                rotation_deg: 90.0,
            }),
            Paint::fill(&Color::new("darkslategray")).with_opacity(0.6),
            Layer::Label,
        ))
        .unwrap();
        c.finish().unwrap();
        let doc = c.document().unwrap();
        assert!(doc.contains("&lt;Rug&gt;"));
        assert!(doc.contains("<title>Kitchen &amp; Dining</title>"));
        assert!(doc.contains(r#"opacity="0.60""#));
        assert!(doc.contains(r#"transform="rotate(-90.0 150.00 290.00)""#), "{doc}");
    }

    #[test]
    fn finishing_without_extent_fails() {
        let mut c = SvgCanvas::new();
        assert!(matches!(
            c.finish(),
            Err(FloorplanError::Render(RenderError::MissingExtent))
        ));
    }
}
