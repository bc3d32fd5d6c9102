use thiserror::Error;

/// Errors raised by the color core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a strict 6-digit hex color (`#rrggbb` or `rrggbb`).
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
    /// A count-like argument is outside the domain the algorithm requires.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending argument.
        name: &'static str,
        /// Value that was supplied.
        value: String,
        /// Constraint that was violated.
        reason: &'static str,
    },
}

impl ColorError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
