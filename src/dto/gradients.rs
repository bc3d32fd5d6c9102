use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{color::GradientStop, dto::validation::validate_hex_color};

/// Query string of `GET /gradients`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct GradientQuery {
    /// Source color, `#rrggbb` or `rrggbb`.
    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,
    /// value, saturation or both. Defaults to value.
    #[serde(default)]
    pub kind: Option<String>,
    /// Number of steps, clamped to the configured bounds.
    #[serde(default)]
    pub steps: Option<usize>,
}

/// Query string of `GET /gradients/sample`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct GradientSampleQuery {
    /// Source color, `#rrggbb` or `rrggbb`.
    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,
    /// value, saturation or both. Defaults to value.
    #[serde(default)]
    pub kind: Option<String>,
    /// Normalized position along the gradient.
    #[validate(range(min = 0.0, max = 1.0))]
    pub position: f32,
}

/// Query string of `GET /gradients/smooth`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SmoothGradientQuery {
    /// Source color, `#rrggbb` or `rrggbb`.
    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,
    /// value, saturation or both. Defaults to value.
    #[serde(default)]
    pub kind: Option<String>,
    /// Number of evenly spaced stops. Defaults to the configured maximum.
    #[serde(default)]
    pub stops: Option<usize>,
}

/// Stepped gradient, darkest or least saturated first.
#[derive(Debug, Serialize, ToSchema)]
pub struct GradientResponse {
    pub color: String,
    pub kind: String,
    pub colors: Vec<String>,
}

/// Single point of a smooth gradient.
#[derive(Debug, Serialize, ToSchema)]
pub struct GradientSampleResponse {
    pub color: String,
    pub kind: String,
    pub position: f32,
    pub hex: String,
}

/// Position/color pair of a smooth gradient.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct GradientStopDto {
    pub position: f32,
    pub hex: String,
}

impl From<GradientStop> for GradientStopDto {
    fn from(stop: GradientStop) -> Self {
        Self {
            position: stop.position,
            hex: stop.hex,
        }
    }
}

/// Smooth gradient evaluated at evenly spaced stops.
#[derive(Debug, Serialize, ToSchema)]
pub struct SmoothGradientResponse {
    pub color: String,
    pub kind: String,
    pub stops: Vec<GradientStopDto>,
}
