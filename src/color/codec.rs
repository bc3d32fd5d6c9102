use palette::{FromColor, Hsl, Oklch, Srgb};

use super::{ColorError, Lch, gamut::to_displayable_srgb};

/// Every view of a single color the core knows about.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorInfo {
    /// Canonical `#rrggbb` encoding.
    pub hex: String,
    /// 8-bit sRGB channels.
    pub rgb: Srgb<u8>,
    /// OKLCH coordinates.
    pub lch: Lch,
    /// Legacy HSL triple: hue in degrees, saturation and lightness in `[0, 1]`.
    pub hsl: (f32, f32, f32),
}

/// Parse a strict 6-digit hex color (case-insensitive, optional leading `#`).
pub fn hex_to_rgb(hex: &str) -> Result<Srgb<u8>, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(hex.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_owned()))
    };
    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Encode 8-bit channels as lowercase, zero-padded `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

/// Decode a hex color into OKLCH.
pub fn hex_to_perceptual(hex: &str) -> Result<Lch, ColorError> {
    let rgb: Srgb = hex_to_rgb(hex)?.into_format();
    Ok(Lch::from(Oklch::from_color(rgb)))
}

/// Encode an OKLCH color as hex. Out-of-gamut input is compressed toward gray at constant
/// lightness and hue; each channel is then rounded and clamped to `[0, 255]`.
#[must_use]
pub fn perceptual_to_hex(color: Lch) -> String {
    rgb_to_hex(quantize(to_displayable_srgb(color)))
}

/// Legacy RGB to HSL (hue degrees, saturation, lightness).
///
/// Kept for RGB/HSL consumers only. HSL interpolation is not perceptually uniform, so the
/// generators never go through it.
#[must_use]
pub fn rgb_to_hsl(rgb: Srgb<u8>) -> (f32, f32, f32) {
    let hsl = Hsl::from_color(rgb.into_format::<f32>());
    (
        hsl.hue.into_positive_degrees(),
        hsl.saturation,
        hsl.lightness,
    )
}

/// Legacy HSL to RGB. Saturation and lightness are clamped into `[0, 1]`.
#[must_use]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Srgb<u8> {
    let hsl = Hsl::new(hue, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
    quantize(Srgb::from_color(hsl))
}

/// Canonical hex, RGB, OKLCH and HSL views of `hex`.
pub fn describe_color(hex: &str) -> Result<ColorInfo, ColorError> {
    let rgb = hex_to_rgb(hex)?;
    Ok(ColorInfo {
        hex: rgb_to_hex(rgb),
        rgb,
        lch: hex_to_perceptual(hex)?,
        hsl: rgb_to_hsl(rgb),
    })
}

#[inline]
fn quantize(c: Srgb) -> Srgb<u8> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let to_u8 = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Srgb::new(to_u8(c.red), to_u8(c.green), to_u8(c.blue))
}
