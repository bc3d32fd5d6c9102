//! Application-level configuration loading: bounds and defaults applied to palette and gradient
//! requests before they reach the color core.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::color::ColorScheme;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "CHROMA_FORGE_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Palette size bounds and defaults.
    pub palette: PaletteLimits,
    /// Gradient step bounds and defaults.
    pub gradient: GradientLimits,
}

#[derive(Debug, Clone, PartialEq)]
/// Bounds for `count` on palette requests.
pub struct PaletteLimits {
    /// Smallest palette served.
    pub min_count: usize,
    /// Largest palette served.
    pub max_count: usize,
    /// Palette size used when the request omits one.
    pub default_count: usize,
    /// Scheme used when the request omits one.
    pub default_scheme: ColorScheme,
}

#[derive(Debug, Clone, PartialEq)]
/// Bounds for `steps` and `stops` on gradient requests.
pub struct GradientLimits {
    /// Fewest steps in a stepped gradient.
    pub min_steps: usize,
    /// Most steps in a stepped gradient.
    pub max_steps: usize,
    /// Step count used when the request omits one.
    pub default_steps: usize,
    /// Upper bound on stops for a smooth gradient.
    pub max_smooth_stops: usize,
}

impl PaletteLimits {
    /// Resolve the requested count against the configured bounds.
    pub fn resolve_count(&self, requested: Option<usize>) -> usize {
        clamp_logged("count", requested, self.default_count, self.min_count, self.max_count)
    }
}

impl GradientLimits {
    /// Resolve the requested step count against the configured bounds.
    pub fn resolve_steps(&self, requested: Option<usize>) -> usize {
        clamp_logged("steps", requested, self.default_steps, self.min_steps, self.max_steps)
    }

    /// Resolve the requested smooth stop count; defaults to the maximum.
    pub fn resolve_stops(&self, requested: Option<usize>) -> usize {
        clamp_logged(
            "stops",
            requested,
            self.max_smooth_stops,
            self.min_steps,
            self.max_smooth_stops,
        )
    }
}

fn clamp_logged(name: &str, requested: Option<usize>, default: usize, min: usize, max: usize) -> usize {
    let Some(value) = requested else {
        return default;
    };
    let clamped = value.clamp(min, max);
    if clamped != value {
        info!(parameter = name, requested = value, applied = clamped, "clamped request parameter");
    }
    clamped
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        max_palette = app_config.palette.max_count,
                        max_steps = app_config.gradient.max_steps,
                        "loaded limits from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON document. Missing keys take their default value.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    palette: RawPalette,
    gradient: RawGradient,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawPalette {
    min_count: usize,
    max_count: usize,
    default_count: usize,
    default_scheme: String,
}

impl Default for RawPalette {
    fn default() -> Self {
        Self {
            min_count: 2,
            max_count: 20,
            default_count: 5,
            default_scheme: ColorScheme::default().label().to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawGradient {
    min_steps: usize,
    max_steps: usize,
    default_steps: usize,
    max_smooth_stops: usize,
}

impl Default for RawGradient {
    fn default() -> Self {
        Self {
            min_steps: 2,
            max_steps: 10,
            default_steps: 5,
            max_smooth_stops: 150,
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            palette: value.palette.into(),
            gradient: value.gradient.into(),
        }
    }
}

impl From<RawPalette> for PaletteLimits {
    fn from(value: RawPalette) -> Self {
        // a palette always holds at least the seed
        let min_count = value.min_count.max(1);
        let max_count = value.max_count.max(min_count);
        Self {
            min_count,
            max_count,
            default_count: value.default_count.clamp(min_count, max_count),
            default_scheme: ColorScheme::from_label(&value.default_scheme),
        }
    }
}

impl From<RawGradient> for GradientLimits {
    fn from(value: RawGradient) -> Self {
        // gradients need both ends
        let min_steps = value.min_steps.max(2);
        let max_steps = value.max_steps.max(min_steps);
        Self {
            min_steps,
            max_steps,
            default_steps: value.default_steps.clamp(min_steps, max_steps),
            max_smooth_stops: value.max_smooth_stops.max(min_steps),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
