use tracing::debug;

use super::{
    ColorError, ColorScheme, Lch, codec::hex_to_perceptual, codec::perceptual_to_hex,
    gamut::clamp_chroma, lerp, scheme::HUE_STEP_DEG,
};

/// Lightness never leaves this band in monochromatic palettes.
const MONO_LIGHTNESS_BOUNDS: (f32, f32) = (0.15, 0.95);
/// Half-width of the monochromatic lightness band for a mid-tone seed.
const MONO_LIGHTNESS_HALF_SPAN: f32 = 0.35;
/// Monochromatic chroma spans this multiple of the seed chroma.
const MONO_CHROMA_FACTORS: (f32, f32) = (0.3, 1.5);

/// Build a palette of `count` colors from `seed` following `scheme`.
///
/// The first entry is `seed` exactly as given. Remaining entries keep the seed lightness and
/// rotate its hue by the scheme offsets; when a scheme has fewer offsets than free slots, the
/// hue of the last generated color keeps advancing by 30°. A `count` of zero is treated as one.
///
/// # Errors
///
/// [`ColorError::InvalidColorFormat`] when `seed` is not a 6-digit hex color.
pub fn generate_palette(
    seed: &str,
    scheme: ColorScheme,
    count: usize,
) -> Result<Vec<String>, ColorError> {
    let base = hex_to_perceptual(seed)?;
    let count = if count == 0 {
        debug!(seed, "palette count 0 raised to 1");
        1
    } else {
        count
    };

    let mut colors = Vec::with_capacity(count);
    colors.push(seed.to_owned());
    match scheme {
        ColorScheme::Monochromatic => colors.extend(monochromatic(base, count)),
        _ => colors.extend(rotated(base, &scheme.hue_offsets(count), count)),
    }
    colors.truncate(count);
    Ok(colors)
}

/// Hue-rotated companions of `base`, `count - 1` of them.
fn rotated(base: Lch, offsets: &[f32], count: usize) -> Vec<String> {
    let wanted = count.saturating_sub(1);
    let mut generated = Vec::with_capacity(wanted);

    let mut last = base;
    for offset in offsets.iter().take(wanted) {
        last = shifted(base, *offset, base.c);
        generated.push(perceptual_to_hex(last));
    }
    while generated.len() < wanted {
        last = shifted(last, HUE_STEP_DEG, last.c);
        generated.push(perceptual_to_hex(last));
    }
    generated
}

/// `from` rotated by `offset`, with `chroma` clamped to what the new hue can display.
///
/// Grays stay gray: an achromatic `from` has no hue, hence no chroma budget.
fn shifted(from: Lch, offset: f32, chroma: f32) -> Lch {
    let target = from.rotated(offset);
    let hue = from.hue().map(|_| target.h);
    Lch::new(target.l, clamp_chroma(target.l, hue, chroma), target.h)
}

/// Tonal variants of `base` at constant hue, `count - 1` of them.
fn monochromatic(base: Lch, count: usize) -> Vec<String> {
    let others = count.saturating_sub(1);
    if others == 0 {
        return Vec::new();
    }

    // Seeds already near black or white get a narrower band.
    let extremity = (base.l - 0.5).abs() * 2.0;
    let half_span = MONO_LIGHTNESS_HALF_SPAN * (1.0 - 0.5 * extremity.min(1.0));
    let (lo, hi) = MONO_LIGHTNESS_BOUNDS;
    let l_min = (base.l - half_span).clamp(lo, hi);
    let l_max = (base.l + half_span).clamp(lo, hi);

    let c_min = base.c * MONO_CHROMA_FACTORS.0;
    let c_max = base.c * MONO_CHROMA_FACTORS.1;
    let hue = base.hue();

    (1..=others)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let progress = i as f32 / others as f32;
            let l = lerp(l_min, l_max, progress);
            let bell = 1.0 - 2.0 * (progress - 0.5).abs();
            let c = clamp_chroma(l, hue, lerp(c_min, c_max, bell));
            perceptual_to_hex(Lch::new(l, c, base.h))
        })
        .collect()
}
