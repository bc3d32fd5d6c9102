use palette::{Clamp, Oklch, Srgb, convert::FromColorUnclamped};

use super::Lch;

/// Upper end of the chroma search; no sRGB color reaches it.
const CHROMA_CEILING: f32 = 0.4;
const BISECTION_STEPS: usize = 24;
/// Slack for float noise when testing channels against `[0, 1]`.
const CHANNEL_TOLERANCE: f32 = 1.0e-5;

/// Largest chroma that stays inside the sRGB gamut at `lightness` and `hue`.
///
/// The bound is found by bisecting along the chroma axis, so it never exceeds the real gamut
/// and naturally shrinks toward black and white. An undefined hue (`None`, i.e. a gray) and
/// lightness at or beyond the extremes both yield `0.0`.
#[must_use]
pub fn max_chroma(lightness: f32, hue: Option<f32>) -> f32 {
    let Some(hue) = hue else {
        return 0.0;
    };
    if !(lightness > 0.0 && lightness < 1.0) {
        return 0.0;
    }
    if is_displayable(lightness, CHROMA_CEILING, hue) {
        return CHROMA_CEILING;
    }

    let (mut lo, mut hi) = (0.0_f32, CHROMA_CEILING);
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if is_displayable(lightness, mid, hue) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Clamp a candidate chroma into `[0, max_chroma(lightness, hue)]`.
#[inline]
pub(crate) fn clamp_chroma(lightness: f32, hue: Option<f32>, candidate: f32) -> f32 {
    candidate.max(0.0).min(max_chroma(lightness, hue))
}

/// Convert to sRGB, pulling out-of-gamut colors back along the chroma axis at constant
/// lightness and hue rather than clipping channels independently.
pub(crate) fn to_displayable_srgb(color: Lch) -> Srgb {
    let l = if color.l.is_nan() { 0.0 } else { color.l.clamp(0.0, 1.0) };
    let rgb = unclamped_srgb(l, color.c, color.h);
    if channels_in_range(&rgb) {
        return rgb.clamp();
    }
    let c = color.c.min(max_chroma(l, color.hue()));
    unclamped_srgb(l, c, color.h).clamp()
}

fn is_displayable(l: f32, c: f32, h: f32) -> bool {
    channels_in_range(&unclamped_srgb(l, c, h))
}

fn unclamped_srgb(l: f32, c: f32, h: f32) -> Srgb {
    Srgb::from_color_unclamped(Oklch::new(l, c, h))
}

fn channels_in_range(rgb: &Srgb) -> bool {
    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|ch| (-CHANNEL_TOLERANCE..=1.0 + CHANNEL_TOLERANCE).contains(ch))
}
