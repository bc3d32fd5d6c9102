use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{color::ColorInfo, dto::validation::validate_hex_color};

/// Query string of `GET /colors`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ColorQuery {
    /// Color to describe, `#rrggbb` or `rrggbb`.
    #[validate(custom(function = "validate_hex_color"))]
    pub hex: String,
}

/// 8-bit sRGB channels.
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
pub struct RgbDto {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// OKLCH coordinates. `h` is omitted for grays.
#[derive(Debug, Serialize, ToSchema, Clone, Copy)]
pub struct OklchDto {
    pub l: f32,
    pub c: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<f32>,
}

/// Legacy HSL triple: hue in degrees, saturation and lightness in `[0, 1]`.
#[derive(Debug, Serialize, ToSchema, Clone, Copy)]
pub struct HslDto {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Every representation of a single color.
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorInfoResponse {
    /// Canonical lowercase `#rrggbb`.
    pub hex: String,
    pub rgb: RgbDto,
    pub oklch: OklchDto,
    pub hsl: HslDto,
    /// Largest chroma displayable at this lightness and hue.
    pub max_chroma: f32,
}

impl ColorInfoResponse {
    pub fn new(info: ColorInfo, max_chroma: f32) -> Self {
        let (h, s, l) = info.hsl;
        Self {
            hex: info.hex,
            rgb: RgbDto {
                r: info.rgb.red,
                g: info.rgb.green,
                b: info.rgb.blue,
            },
            oklch: OklchDto {
                l: info.lch.l,
                c: info.lch.c,
                h: info.lch.hue(),
            },
            hsl: HslDto { h, s, l },
            max_chroma,
        }
    }
}
