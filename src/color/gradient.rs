use std::{fmt, str::FromStr};

use super::{
    ColorError, Lch,
    codec::{hex_to_perceptual, perceptual_to_hex},
    gamut::{clamp_chroma, max_chroma},
    lerp,
};

const VALUE_HALF_SPAN: f32 = 0.3;
const VALUE_BOUNDS: (f32, f32) = (0.1, 0.98);
/// Chroma falloff at either end of a value gradient, relative to the midpoint.
const VALUE_CHROMA_FALLOFF: f32 = 0.4;

const SATURATION_FLOOR: f32 = 0.1;
const SATURATION_MIN_SPAN: f32 = 0.15;

const COMBINED_HALF_SPAN: f32 = 0.25;
const COMBINED_BOUNDS: (f32, f32) = (0.15, 0.95);
const COMBINED_CHROMA_FLOOR: f32 = 0.2;
const COMBINED_MIN_SPAN: f32 = 0.1;

/// Dimension a gradient varies along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GradientKind {
    /// Lightness.
    #[default]
    Value,
    /// Chroma.
    Saturation,
    /// Lightness and chroma together.
    Both,
}

impl GradientKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 3] = [Self::Value, Self::Saturation, Self::Both];

    /// Canonical lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Saturation => "saturation",
            Self::Both => "both",
        }
    }
}

impl FromStr for GradientKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "value" | "lightness" => Ok(Self::Value),
            "saturation" | "chroma" => Ok(Self::Saturation),
            "both" | "combined" => Ok(Self::Both),
            _ => Err(ColorError::invalid_parameter(
                "kind",
                s,
                "expected value, saturation or both",
            )),
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One evaluated point of a smooth gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Normalized position in `[0, 1]`.
    pub position: f32,
    /// Color at `position`.
    pub hex: String,
}

/// Lightness gradient of `steps` colors centered on the tone of `color`.
///
/// # Errors
///
/// [`ColorError::InvalidColorFormat`] for a malformed `color`, [`ColorError::InvalidParameter`]
/// when `steps < 2`.
pub fn generate_value_gradient(color: &str, steps: usize) -> Result<Vec<String>, ColorError> {
    generate_gradient(color, steps, GradientKind::Value)
}

/// Chroma gradient of `steps` colors, from a faint tint of `color` to the most saturated
/// displayable version of it.
///
/// # Errors
///
/// Same as [`generate_value_gradient`].
pub fn generate_saturation_gradient(color: &str, steps: usize) -> Result<Vec<String>, ColorError> {
    generate_gradient(color, steps, GradientKind::Saturation)
}

/// Gradient of `steps` colors varying lightness and chroma together.
///
/// # Errors
///
/// Same as [`generate_value_gradient`].
pub fn generate_combined_gradient(color: &str, steps: usize) -> Result<Vec<String>, ColorError> {
    generate_gradient(color, steps, GradientKind::Both)
}

/// Stepped gradient of `kind`. Step `i` sits at position `i / (steps - 1)`, so both ends of the
/// range are included.
///
/// # Errors
///
/// Same as [`generate_value_gradient`].
pub fn generate_gradient(
    color: &str,
    steps: usize,
    kind: GradientKind,
) -> Result<Vec<String>, ColorError> {
    let source = hex_to_perceptual(color)?;
    require_two("steps", steps)?;
    Ok((0..steps)
        .map(|i| perceptual_to_hex(tone_at(source, kind, step_position(i, steps))))
        .collect())
}

/// Evaluate the smooth gradient of `kind` at `position`.
///
/// Positions outside `[0, 1]` are clamped and NaN reads as `0`. Sampling at `i / (n - 1)`
/// yields exactly step `i` of the `n`-step gradient.
///
/// # Errors
///
/// [`ColorError::InvalidColorFormat`] for a malformed `color`.
pub fn sample_gradient(color: &str, position: f32, kind: GradientKind) -> Result<String, ColorError> {
    let source = hex_to_perceptual(color)?;
    Ok(perceptual_to_hex(tone_at(source, kind, clamp_position(position))))
}

/// Evaluate the smooth gradient at `stops` evenly spaced positions, for renderers that
/// interpolate between densely sampled stops.
///
/// # Errors
///
/// Same as [`generate_value_gradient`], with `stops` in place of `steps`.
pub fn sample_gradient_stops(
    color: &str,
    stops: usize,
    kind: GradientKind,
) -> Result<Vec<GradientStop>, ColorError> {
    let source = hex_to_perceptual(color)?;
    require_two("stops", stops)?;
    Ok((0..stops)
        .map(|i| {
            let position = step_position(i, stops);
            GradientStop {
                position,
                hex: perceptual_to_hex(tone_at(source, kind, position)),
            }
        })
        .collect())
}

fn require_two(name: &'static str, n: usize) -> Result<(), ColorError> {
    if n < 2 {
        return Err(ColorError::invalid_parameter(
            name,
            n,
            "a gradient needs at least 2 stops",
        ));
    }
    Ok(())
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn step_position(i: usize, steps: usize) -> f32 {
    i as f32 / (steps - 1) as f32
}

#[inline]
fn clamp_position(position: f32) -> f32 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

/// Color at `t` in `[0, 1]`. Both the stepped and the smooth gradients go through here.
fn tone_at(source: Lch, kind: GradientKind, t: f32) -> Lch {
    let hue = source.hue();
    match kind {
        GradientKind::Value => {
            let (lo, hi) = lightness_band(source.l, VALUE_HALF_SPAN, VALUE_BOUNDS);
            let l = lerp(lo, hi, t);
            let c = source.c * VALUE_CHROMA_FALLOFF.mul_add(-(t - 0.5).abs(), 1.0);
            Lch::new(l, clamp_chroma(l, hue, c), source.h)
        }
        GradientKind::Saturation => {
            let (lo, hi) = chroma_range(source, SATURATION_FLOOR, SATURATION_MIN_SPAN);
            let c = clamp_chroma(source.l, hue, lerp(lo, hi, t));
            Lch::new(source.l, c, source.h)
        }
        GradientKind::Both => {
            let (l_lo, l_hi) = lightness_band(source.l, COMBINED_HALF_SPAN, COMBINED_BOUNDS);
            let (c_lo, c_hi) = chroma_range(source, COMBINED_CHROMA_FLOOR, COMBINED_MIN_SPAN);
            let l = lerp(l_lo, l_hi, t);
            Lch::new(l, clamp_chroma(l, hue, lerp(c_lo, c_hi, t)), source.h)
        }
    }
}

fn lightness_band(center: f32, half_span: f32, (lo, hi): (f32, f32)) -> (f32, f32) {
    (
        (center - half_span).clamp(lo, hi),
        (center + half_span).clamp(lo, hi),
    )
}

/// From `floor × source chroma` up to the gamut limit, at least `min_span` wide before the
/// per-step gamut clamp.
fn chroma_range(source: Lch, floor: f32, min_span: f32) -> (f32, f32) {
    let lo = (source.c * floor).max(0.0);
    let hi = max_chroma(source.l, source.hue()).max(lo + min_span);
    (lo, hi)
}
