use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dto::validation::validate_hex_color;

/// Query string of `GET /palettes`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PaletteQuery {
    /// Seed color, `#rrggbb` or `rrggbb`. Returned verbatim as the first palette entry.
    #[validate(custom(function = "validate_hex_color"))]
    pub seed: String,
    /// One of dichromatic, complementary, split-complementary, triadic, tetradic, analogous,
    /// monochromatic. Anything else behaves as triadic.
    #[serde(default)]
    pub scheme: Option<String>,
    /// Number of colors, clamped to the configured bounds.
    #[serde(default)]
    pub count: Option<usize>,
}

/// Generated palette, seed first.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub seed: String,
    /// Scheme that was actually applied.
    pub scheme: String,
    pub colors: Vec<String>,
}
