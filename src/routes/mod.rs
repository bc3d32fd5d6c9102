use axum::Router;

use crate::state::SharedState;

pub mod colors;
pub mod docs;
pub mod gradients;
pub mod health;
pub mod palettes;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(colors::router())
        .merge(palettes::router())
        .merge(gradients::router());

    api_router.merge(docs::router()).with_state(state)
}
