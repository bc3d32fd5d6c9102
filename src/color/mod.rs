//! Color core: hex/RGB/OKLCH conversions, gamut estimation, and the palette and gradient
//! generators built on top of them.
//!
//! Every function here is pure. All palette and gradient math happens in OKLCH so that linear
//! steps in lightness and chroma read as even steps to the eye; hex and RGB only exist at the
//! boundary.

#![forbid(unsafe_code)]

mod codec;
mod error;
mod gamut;
mod gradient;
mod harmony;
mod scheme;

use palette::Oklch;

pub use codec::{
    ColorInfo, describe_color, hex_to_perceptual, hex_to_rgb, hsl_to_rgb, perceptual_to_hex,
    rgb_to_hex, rgb_to_hsl,
};
pub use error::ColorError;
pub use gamut::max_chroma;
pub use gradient::{
    GradientKind, GradientStop, generate_combined_gradient, generate_gradient,
    generate_saturation_gradient, generate_value_gradient, sample_gradient,
    sample_gradient_stops,
};
pub use harmony::generate_palette;
pub use scheme::ColorScheme;

/// Chroma below which a color is treated as gray and has no meaningful hue.
pub const ACHROMATIC_CHROMA: f32 = 1.0e-4;

/// A color in OKLCH: lightness in `[0, 1]`, chroma in `[0, ~0.4]`, hue in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Perceptual lightness.
    pub l: f32,
    /// Chroma, distance from the gray axis.
    pub c: f32,
    /// Hue angle in degrees. Meaningless when [`Lch::is_achromatic`] holds.
    pub h: f32,
}

impl Lch {
    /// Build a color, normalizing the hue into `[0, 360)`.
    #[must_use]
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self {
            l,
            c: c.max(0.0),
            h: normalize_hue(h),
        }
    }

    /// True for grays, whose hue is undefined.
    #[must_use]
    pub fn is_achromatic(&self) -> bool {
        self.c < ACHROMATIC_CHROMA
    }

    /// Hue in degrees, or `None` for achromatic colors.
    #[must_use]
    pub fn hue(&self) -> Option<f32> {
        (!self.is_achromatic()).then_some(self.h)
    }

    /// Same lightness and chroma, hue rotated by `offset_deg`.
    #[must_use]
    pub fn rotated(&self, offset_deg: f32) -> Self {
        Self::new(self.l, self.c, self.h + offset_deg)
    }
}

impl From<Oklch> for Lch {
    fn from(value: Oklch) -> Self {
        Self::new(value.l, value.chroma, value.hue.into_positive_degrees())
    }
}

impl From<Lch> for Oklch {
    fn from(value: Lch) -> Self {
        Oklch::new(value.l, value.c, value.h)
    }
}

/// Wrap any angle into `[0, 360)`.
#[inline]
pub(crate) fn normalize_hue(h: f32) -> f32 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[inline]
pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    (to - from).mul_add(t, from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_hue_wraps_both_directions() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert!(normalize_hue(-1.0e-7) < 360.0);
    }

    #[test]
    fn gray_has_no_hue() {
        assert_eq!(Lch::new(0.5, 0.0, 200.0).hue(), None);
        assert_eq!(Lch::new(0.5, 0.1, 200.0).hue(), Some(200.0));
    }

    #[test]
    fn rotation_keeps_tone() {
        let rotated = Lch::new(0.6, 0.12, 300.0).rotated(120.0);
        assert_eq!(rotated.l, 0.6);
        assert_eq!(rotated.c, 0.12);
        assert!((rotated.h - 60.0).abs() < 1.0e-4);
    }

    mod proptests {
        use super::*;
        use palette::Srgb;
        use proptest::prelude::*;

        fn any_hex() -> impl Strategy<Value = String> {
            any::<[u8; 3]>().prop_map(|[r, g, b]| rgb_to_hex(Srgb::new(r, g, b)))
        }

        fn any_scheme() -> impl Strategy<Value = ColorScheme> {
            prop::sample::select(ColorScheme::ALL.to_vec())
        }

        fn any_kind() -> impl Strategy<Value = GradientKind> {
            prop::sample::select(GradientKind::ALL.to_vec())
        }

        fn within_gamut(hex: &str) -> bool {
            let lch = hex_to_perceptual(hex).unwrap();
            lch.c <= max_chroma(lch.l, lch.hue()) + 2.0e-3
        }

        proptest! {
            #[test]
            fn hex_round_trips_through_oklch(hex in any_hex()) {
                let back = hex_to_rgb(&perceptual_to_hex(hex_to_perceptual(&hex).unwrap())).unwrap();
                let orig = hex_to_rgb(&hex).unwrap();
                for (a, b) in [(back.red, orig.red), (back.green, orig.green), (back.blue, orig.blue)] {
                    prop_assert!(a.abs_diff(b) <= 1, "{hex} came back as {back:?}");
                }
            }

            #[test]
            fn palette_keeps_seed_and_length(
                hex in any_hex(),
                scheme in any_scheme(),
                count in 1usize..=20,
            ) {
                let palette = generate_palette(&hex, scheme, count).unwrap();
                prop_assert_eq!(palette.len(), count);
                prop_assert_eq!(&palette[0], &hex);
                for color in &palette {
                    prop_assert!(within_gamut(color), "{} out of gamut", color);
                }
            }

            #[test]
            fn gradients_stay_in_gamut(hex in any_hex(), kind in any_kind(), steps in 2usize..=10) {
                let colors = generate_gradient(&hex, steps, kind).unwrap();
                prop_assert_eq!(colors.len(), steps);
                for color in &colors {
                    prop_assert!(within_gamut(color), "{} out of gamut", color);
                }
            }

            #[test]
            fn value_gradient_lightness_never_decreases(hex in any_hex(), steps in 2usize..=10) {
                let lightness: Vec<f32> = generate_value_gradient(&hex, steps)
                    .unwrap()
                    .iter()
                    .map(|c| hex_to_perceptual(c).unwrap().l)
                    .collect();
                for pair in lightness.windows(2) {
                    prop_assert!(pair[1] + 1.0e-4 >= pair[0], "{hex}: {lightness:?}");
                }
            }

            #[test]
            fn sampler_reproduces_steps(hex in any_hex(), kind in any_kind(), steps in 2usize..=10) {
                let stepped = generate_gradient(&hex, steps, kind).unwrap();
                for (i, expected) in stepped.iter().enumerate() {
                    #[allow(clippy::cast_precision_loss)]
                    let position = i as f32 / (steps - 1) as f32;
                    prop_assert_eq!(&sample_gradient(&hex, position, kind).unwrap(), expected);
                }
            }
        }
    }
}
