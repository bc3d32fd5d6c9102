use tracing::debug;

use crate::{
    color::{ColorScheme, generate_palette},
    config::PaletteLimits,
    dto::palettes::{PaletteQuery, PaletteResponse},
    error::ServiceError,
};

/// Generate a palette for `query`, resolving defaults and clamping `count` first.
pub fn palette(limits: &PaletteLimits, query: PaletteQuery) -> Result<PaletteResponse, ServiceError> {
    let scheme = query
        .scheme
        .as_deref()
        .map_or(limits.default_scheme, ColorScheme::from_label);
    let count = limits.resolve_count(query.count);
    let colors = generate_palette(&query.seed, scheme, count)?;
    debug!(seed = %query.seed, %scheme, count, "generated palette");
    Ok(PaletteResponse {
        seed: query.seed,
        scheme: scheme.label().to_owned(),
        colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn query(scheme: Option<&str>, count: Option<usize>) -> PaletteQuery {
        PaletteQuery {
            seed: "#3b82f6".into(),
            scheme: scheme.map(str::to_owned),
            count,
        }
    }

    #[test]
    fn defaults_apply() {
        let limits = AppConfig::default().palette;
        let response = palette(&limits, query(None, None)).unwrap();
        assert_eq!(response.scheme, "triadic");
        assert_eq!(response.colors.len(), 5);
        assert_eq!(response.colors[0], "#3b82f6");
    }

    #[test]
    fn unknown_scheme_reports_triadic() {
        let limits = AppConfig::default().palette;
        let response = palette(&limits, query(Some("rainbow"), Some(3))).unwrap();
        assert_eq!(response.scheme, "triadic");
        assert_eq!(response.colors.len(), 3);
    }

    #[test]
    fn count_is_clamped() {
        let limits = AppConfig::default().palette;
        assert_eq!(palette(&limits, query(None, Some(500))).unwrap().colors.len(), 20);
        assert_eq!(palette(&limits, query(None, Some(0))).unwrap().colors.len(), 2);
    }
}
