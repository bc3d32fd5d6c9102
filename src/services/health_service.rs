use tracing::debug;

use crate::dto::health::HealthResponse;

/// Respond with a static health payload. The service has no backing store to probe.
pub fn health_status() -> HealthResponse {
    debug!("healthcheck");
    HealthResponse::ok()
}
