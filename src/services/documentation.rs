use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Chroma Forge.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::colors::describe_color,
        crate::routes::palettes::get_palette,
        crate::routes::gradients::get_gradient,
        crate::routes::gradients::sample_gradient,
        crate::routes::gradients::smooth_gradient,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::colors::ColorInfoResponse,
            crate::dto::colors::RgbDto,
            crate::dto::colors::OklchDto,
            crate::dto::colors::HslDto,
            crate::dto::palettes::PaletteResponse,
            crate::dto::gradients::GradientResponse,
            crate::dto::gradients::GradientSampleResponse,
            crate::dto::gradients::GradientStopDto,
            crate::dto::gradients::SmoothGradientResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "colors", description = "Color conversions"),
        (name = "palettes", description = "Color-scheme palettes derived from a seed"),
        (name = "gradients", description = "Tonal gradients around a single color"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/healthcheck",
            "/colors",
            "/palettes",
            "/gradients",
            "/gradients/sample",
            "/gradients/smooth",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
