//! Duration token normalization.

use thiserror::Error;

/// Marker that selects the millisecond branch.
const MILLIS_MARKER: &str = "ms";

/// Marker stripped from plain second tokens.
const SECONDS_MARKER: &str = "s";

/// Errors produced while normalizing a duration token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The numeric part left after removing the unit marker is not usable.
    #[error("malformed duration token {token:?}: {reason}")]
    Malformed { token: String, reason: String },
}

impl DurationError {
    fn malformed(token: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Converts a raw duration token such as `"123ms"` or `"4.5s"` into seconds.
///
/// Unit detection is a substring check: a token containing `"ms"` anywhere is
/// treated as milliseconds and the first occurrence is removed. Otherwise the
/// first `"s"` (if any) is removed and the rest is read as seconds.
pub fn normalize(token: &str) -> Result<f64, DurationError> {
    let (remainder, divisor) = if token.contains(MILLIS_MARKER) {
        (token.replacen(MILLIS_MARKER, "", 1), 1000.0)
    } else {
        (token.replacen(SECONDS_MARKER, "", 1), 1.0)
    };

    let remainder = remainder.trim();
    if remainder.is_empty() {
        return Err(DurationError::malformed(token, "missing numeric value"));
    }

    let value: f64 = remainder
        .parse()
        .map_err(|e: std::num::ParseFloatError| DurationError::malformed(token, e.to_string()))?;

    if !value.is_finite() {
        return Err(DurationError::malformed(token, "value is not finite"));
    }
    if value.is_sign_negative() && value != 0.0 {
        return Err(DurationError::malformed(token, "value is negative"));
    }

    // `-0` passes the sign check above; adding zero turns it into `+0`.
    Ok(value / divisor + 0.0)
}
