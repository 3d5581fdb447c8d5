use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// Body of `GET /health`. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1))]
    pub version: String,
}

impl HealthResponse {
    /// A healthy report stamped with the current time.
    pub fn ok(version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Ok,
            timestamp: crate::timestamp::now(),
            version: version.into(),
        }
    }
}
