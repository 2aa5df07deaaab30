//! Timestamps are stored as unix milliseconds

use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};

/// Current time truncated to millisecond precision, so the value handed back
/// to callers equals the stored one
pub(crate) fn now_millis() -> Result<DateTime<Utc>> {
    from_millis(Utc::now().timestamp_millis())
}

pub(crate) fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| StorageError::Query(format!("Invalid timestamp: {}", millis)))
}
