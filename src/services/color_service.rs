use tracing::debug;

use crate::{
    color::{describe_color, max_chroma},
    dto::colors::ColorInfoResponse,
    error::ServiceError,
};

/// Describe `hex` in every color model the core supports.
pub fn describe(hex: &str) -> Result<ColorInfoResponse, ServiceError> {
    let info = describe_color(hex)?;
    let limit = max_chroma(info.lch.l, info.lch.hue());
    debug!(hex = %info.hex, l = info.lch.l, c = info.lch.c, "described color");
    Ok(ColorInfoResponse::new(info, limit))
}
