use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::palettes::{PaletteQuery, PaletteResponse},
    error::AppError,
    services::palette_service,
    state::SharedState,
};

/// Palette generation endpoints.
pub fn router() -> Router<SharedState> {
    Router::new().route("/palettes", get(get_palette))
}

#[utoipa::path(
    get,
    path = "/palettes",
    tag = "palettes",
    params(PaletteQuery),
    responses(
        (status = 200, description = "Palette, seed first", body = PaletteResponse),
        (status = 400, description = "Malformed seed color")
    )
)]
/// Derive a palette from a seed color using a color-theory scheme.
pub async fn get_palette(
    State(state): State<SharedState>,
    Query(query): Query<PaletteQuery>,
) -> Result<Json<PaletteResponse>, AppError> {
    query.validate()?;
    let payload = palette_service::palette(&state.config().palette, query)?;
    Ok(Json(payload))
}
