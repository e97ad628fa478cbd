use thiserror::Error;

/// Top-level error type for floor-plan composition.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to dimensions and primitive geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid dimension: {name} = {value} (must be finite and positive)")]
    InvalidDimension { name: String, value: f64 },
}

/// Errors raised while resolving a room template into coordinates.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("{kind} of length {length} at offset {offset} does not fit the {wall} wall span of {span}")]
    OpeningOutOfWall {
        kind: &'static str,
        wall: &'static str,
        offset: f64,
        length: f64,
        span: f64,
    },

    #[error("fixture '{0}' is referenced before it is placed")]
    UnknownFixture(String),

    #[error("fixture id '{0}' is used more than once")]
    DuplicateFixture(String),

    #[error("fixture '{id}': a fill extent on the {axis} axis needs a size-independent position")]
    UnresolvableExtent { id: String, axis: &'static str },
}

/// Errors raised by a canvas implementation.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format output: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("canvas finished before an extent was set")]
    MissingExtent,
}

/// Errors related to loading templates, styles and preset parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown room type '{0}' (expected bathroom, bedroom, kitchen or living-room)")]
    UnknownRoom(String),
}

impl GeometryError {
    /// Builds a [`GeometryError::InvalidDimension`] for the named value.
    pub(crate) fn invalid(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidDimension {
            name: name.into(),
            value,
        }
    }
}

/// Checks that `value` is a usable length: finite and strictly positive.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidDimension`] otherwise.
pub fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid(name, value).into())
    }
}

/// Checks that `value` is a usable offset: finite and not negative.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidDimension`] otherwise.
pub fn ensure_non_negative(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid(name, value).into())
    }
}

/// Convenience type alias for results using [`FloorplanError`].
pub type Result<T> = std::result::Result<T, FloorplanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_dimension_passes_through() {
        assert!(matches!(ensure_positive("width", 2.5), Ok(v) if (v - 2.5).abs() < f64::EPSILON));
    }

    #[test]
    fn zero_negative_and_nan_are_rejected() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ensure_positive("width", value);
            assert!(matches!(
                err,
                Err(FloorplanError::Geometry(GeometryError::InvalidDimension { .. }))
            ));
        }
    }

    #[test]
    fn zero_offset_is_allowed() {
        assert!(ensure_non_negative("gap", 0.0).is_ok());
        assert!(ensure_non_negative("gap", -0.1).is_err());
    }

    #[test]
    fn message_names_the_dimension() {
        let err = GeometryError::invalid("wall_thickness", -0.15);
        assert_eq!(
            err.to_string(),
            "invalid dimension: wall_thickness = -0.15 (must be finite and positive)"
        );
    }
}
