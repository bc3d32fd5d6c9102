use tracing::debug;

use crate::{
    color::{GradientKind, generate_gradient, sample_gradient, sample_gradient_stops},
    config::GradientLimits,
    dto::gradients::{
        GradientQuery, GradientResponse, GradientSampleQuery, GradientSampleResponse,
        GradientStopDto, SmoothGradientQuery, SmoothGradientResponse,
    },
    error::ServiceError,
};

fn parse_kind(kind: Option<&str>) -> Result<GradientKind, ServiceError> {
    Ok(kind.map(str::parse::<GradientKind>).transpose()?.unwrap_or_default())
}

/// Stepped gradient for `query`, with `steps` clamped to the configured bounds.
pub fn stepped(
    limits: &GradientLimits,
    query: GradientQuery,
) -> Result<GradientResponse, ServiceError> {
    let kind = parse_kind(query.kind.as_deref())?;
    let steps = limits.resolve_steps(query.steps);
    let colors = generate_gradient(&query.color, steps, kind)?;
    debug!(color = %query.color, %kind, steps, "generated stepped gradient");
    Ok(GradientResponse {
        color: query.color,
        kind: kind.label().to_owned(),
        colors,
    })
}

/// One point of the smooth gradient.
pub fn sample(query: GradientSampleQuery) -> Result<GradientSampleResponse, ServiceError> {
    let kind = parse_kind(query.kind.as_deref())?;
    let hex = sample_gradient(&query.color, query.position, kind)?;
    Ok(GradientSampleResponse {
        color: query.color,
        kind: kind.label().to_owned(),
        position: query.position,
        hex,
    })
}

/// Smooth gradient evaluated at evenly spaced stops.
pub fn smooth(
    limits: &GradientLimits,
    query: SmoothGradientQuery,
) -> Result<SmoothGradientResponse, ServiceError> {
    let kind = parse_kind(query.kind.as_deref())?;
    let stops = limits.resolve_stops(query.stops);
    let stops = sample_gradient_stops(&query.color, stops, kind)?
        .into_iter()
        .map(GradientStopDto::from)
        .collect::<Vec<_>>();
    debug!(color = %query.color, %kind, stops = stops.len(), "sampled smooth gradient");
    Ok(SmoothGradientResponse {
        color: query.color,
        kind: kind.label().to_owned(),
        stops,
    })
}
