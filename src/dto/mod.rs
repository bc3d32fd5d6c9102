/// Color description payloads.
pub mod colors;
/// Gradient queries and payloads.
pub mod gradients;
/// Health check payload.
pub mod health;
/// Palette query and payload.
pub mod palettes;
/// Shared field validators.
pub mod validation;
