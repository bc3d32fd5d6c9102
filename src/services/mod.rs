/// Color description service.
pub mod color_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Gradient generation and sampling.
pub mod gradient_service;
/// Health check service.
pub mod health_service;
/// Palette generation.
pub mod palette_service;
