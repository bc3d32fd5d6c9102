use std::{convert::Infallible, fmt, str::FromStr};

/// Hue step used by the analogous fan and by the fill-in pass of the palette generator.
pub(crate) const HUE_STEP_DEG: f32 = 30.0;

/// Color-theory rule used to derive related hues from a seed.
///
/// Parsing is total: any label that is not one of the named schemes falls back to
/// [`ColorScheme::Triadic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Seed plus its complement, but only when there is room for a second color.
    Dichromatic,
    /// Seed plus the hue opposite to it.
    Complementary,
    /// Seed plus the two hues flanking its complement.
    SplitComplementary,
    /// Three evenly spaced hues.
    #[default]
    Triadic,
    /// Four evenly spaced hues.
    Tetradic,
    /// A fan of neighbouring hues centered on the seed.
    Analogous,
    /// One hue, varied in lightness and chroma.
    Monochromatic,
}

impl ColorScheme {
    /// Every named scheme, in display order.
    pub const ALL: [Self; 7] = [
        Self::Dichromatic,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Analogous,
        Self::Monochromatic,
    ];

    /// Resolve a label, falling back to [`ColorScheme::Triadic`] when it is not recognized.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "dichromatic" => Self::Dichromatic,
            "complementary" => Self::Complementary,
            "split-complementary" | "splitcomplementary" => Self::SplitComplementary,
            "triadic" => Self::Triadic,
            "tetradic" => Self::Tetradic,
            "analogous" => Self::Analogous,
            "monochromatic" => Self::Monochromatic,
            _ => Self::Triadic,
        }
    }

    /// Canonical kebab-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dichromatic => "dichromatic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets, in degrees, for a palette of `count` colors (seed included).
    ///
    /// Evenly spaced schemes shed offsets as `count` shrinks instead of crowding the wheel.
    /// Monochromatic palettes never rotate the hue and always return an empty list.
    #[must_use]
    pub fn hue_offsets(self, count: usize) -> Vec<f32> {
        match self {
            Self::Complementary => vec![180.0],
            Self::Dichromatic => dichromatic(count),
            Self::SplitComplementary => vec![150.0, 210.0],
            Self::Triadic => triadic(count),
            Self::Tetradic => tetradic(count),
            Self::Analogous => analogous(count),
            Self::Monochromatic => Vec::new(),
        }
    }
}

fn dichromatic(count: usize) -> Vec<f32> {
    if count > 1 { vec![180.0] } else { Vec::new() }
}

fn triadic(count: usize) -> Vec<f32> {
    match count {
        0 | 1 => Vec::new(),
        2 => vec![120.0],
        _ => vec![120.0, 240.0],
    }
}

fn tetradic(count: usize) -> Vec<f32> {
    match count {
        0 | 1 => Vec::new(),
        2 => vec![90.0],
        3 => vec![90.0, 180.0],
        _ => vec![90.0, 180.0, 270.0],
    }
}

/// `count - 1` consecutive steps of 30°, starting `floor((count - 1) / 2)` steps below the seed.
fn analogous(count: usize) -> Vec<f32> {
    let others = count.saturating_sub(1);
    #[allow(clippy::cast_possible_wrap)]
    let start = -((others / 2) as i64);
    #[allow(clippy::cast_possible_wrap)]
    let end = start + others as i64;
    (start..end)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let k = k as f32;
            k * HUE_STEP_DEG
        })
        .collect()
}

impl FromStr for ColorScheme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<&str> for ColorScheme {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(ColorScheme::from_label(scheme.label()), scheme);
        }
        assert_eq!(
            ColorScheme::from_label(" Split_Complementary "),
            ColorScheme::SplitComplementary
        );
    }

    #[test]
    fn unknown_label_behaves_as_triadic() {
        assert_eq!(ColorScheme::from_label("pentadic"), ColorScheme::Triadic);
        assert_eq!("".parse::<ColorScheme>(), Ok(ColorScheme::Triadic));
    }

    #[test]
    fn evenly_spaced_schemes_degrade_with_count() {
        assert!(ColorScheme::Triadic.hue_offsets(1).is_empty());
        assert_eq!(ColorScheme::Triadic.hue_offsets(2), vec![120.0]);
        assert_eq!(ColorScheme::Triadic.hue_offsets(7), vec![120.0, 240.0]);

        assert_eq!(ColorScheme::Tetradic.hue_offsets(2), vec![90.0]);
        assert_eq!(ColorScheme::Tetradic.hue_offsets(3), vec![90.0, 180.0]);
        assert_eq!(ColorScheme::Tetradic.hue_offsets(4), vec![90.0, 180.0, 270.0]);

        assert!(ColorScheme::Dichromatic.hue_offsets(1).is_empty());
        assert_eq!(ColorScheme::Dichromatic.hue_offsets(2), vec![180.0]);
    }

    #[test]
    fn fixed_schemes_ignore_count() {
        assert_eq!(ColorScheme::Complementary.hue_offsets(1), vec![180.0]);
        assert_eq!(ColorScheme::SplitComplementary.hue_offsets(9), vec![150.0, 210.0]);
        assert!(ColorScheme::Monochromatic.hue_offsets(9).is_empty());
    }

    #[test]
    fn analogous_fan_is_centered_on_seed() {
        assert!(ColorScheme::Analogous.hue_offsets(1).is_empty());
        assert_eq!(ColorScheme::Analogous.hue_offsets(2), vec![0.0]);
        assert_eq!(ColorScheme::Analogous.hue_offsets(3), vec![-30.0, 0.0]);
        assert_eq!(ColorScheme::Analogous.hue_offsets(4), vec![-30.0, 0.0, 30.0]);
        assert_eq!(
            ColorScheme::Analogous.hue_offsets(5),
            vec![-60.0, -30.0, 0.0, 30.0]
        );
    }
}
