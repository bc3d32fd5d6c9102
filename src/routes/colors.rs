use axum::{Json, Router, extract::Query, routing::get};
use validator::Validate;

use crate::{
    dto::colors::{ColorInfoResponse, ColorQuery},
    error::AppError,
    services::color_service,
    state::SharedState,
};

/// Color conversion endpoints.
pub fn router() -> Router<SharedState> {
    Router::new().route("/colors", get(describe_color))
}

#[utoipa::path(
    get,
    path = "/colors",
    tag = "colors",
    params(ColorQuery),
    responses(
        (status = 200, description = "Color in hex, RGB, OKLCH and HSL", body = ColorInfoResponse),
        (status = 400, description = "Malformed hex color")
    )
)]
/// Describe a hex color in every supported color model.
pub async fn describe_color(
    Query(query): Query<ColorQuery>,
) -> Result<Json<ColorInfoResponse>, AppError> {
    query.validate()?;
    Ok(Json(color_service::describe(&query.hex)?))
}
