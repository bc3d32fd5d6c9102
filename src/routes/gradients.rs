use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::gradients::{
        GradientQuery, GradientResponse, GradientSampleQuery, GradientSampleResponse,
        SmoothGradientQuery, SmoothGradientResponse,
    },
    error::AppError,
    services::gradient_service,
    state::SharedState,
};

/// Gradient endpoints, stepped and smooth.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/gradients", get(get_gradient))
        .route("/gradients/sample", get(sample_gradient))
        .route("/gradients/smooth", get(smooth_gradient))
}

#[utoipa::path(
    get,
    path = "/gradients",
    tag = "gradients",
    params(GradientQuery),
    responses(
        (status = 200, description = "Stepped gradient", body = GradientResponse),
        (status = 400, description = "Malformed color or unknown kind")
    )
)]
/// Generate a stepped gradient around the tone of a color.
pub async fn get_gradient(
    State(state): State<SharedState>,
    Query(query): Query<GradientQuery>,
) -> Result<Json<GradientResponse>, AppError> {
    query.validate()?;
    let payload = gradient_service::stepped(&state.config().gradient, query)?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/gradients/sample",
    tag = "gradients",
    params(GradientSampleQuery),
    responses(
        (status = 200, description = "Color at the requested position", body = GradientSampleResponse),
        (status = 400, description = "Malformed color, unknown kind or position outside [0, 1]")
    )
)]
/// Evaluate the smooth gradient of a color at a single position.
pub async fn sample_gradient(
    Query(query): Query<GradientSampleQuery>,
) -> Result<Json<GradientSampleResponse>, AppError> {
    query.validate()?;
    Ok(Json(gradient_service::sample(query)?))
}

#[utoipa::path(
    get,
    path = "/gradients/smooth",
    tag = "gradients",
    params(SmoothGradientQuery),
    responses(
        (status = 200, description = "Evenly spaced gradient stops", body = SmoothGradientResponse),
        (status = 400, description = "Malformed color or unknown kind")
    )
)]
/// Evaluate the smooth gradient of a color at evenly spaced stops.
pub async fn smooth_gradient(
    State(state): State<SharedState>,
    Query(query): Query<SmoothGradientQuery>,
) -> Result<Json<SmoothGradientResponse>, AppError> {
    query.validate()?;
    let payload = gradient_service::smooth(&state.config().gradient, query)?;
    Ok(Json(payload))
}
