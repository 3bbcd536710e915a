//! Validity-window policy for menus.

use chrono::{DateTime, Utc};

use crate::error::{CartaError, CartaResult};

/// Check a validity window against the reference instant `now`.
///
/// Accepted when `start` is not in the past and `end` is strictly after
/// `start`. Guards against retroactive and inverted windows.
pub fn validate_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> CartaResult<()> {
    if start < now {
        return Err(CartaError::InvalidTimeRange {
            reason: "start_date must not be in the past".into(),
        });
    }
    if end <= start {
        return Err(CartaError::InvalidTimeRange {
            reason: "end_date must be after start_date".into(),
        });
    }
    Ok(())
}
