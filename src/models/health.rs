use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Reports whether the service is up, with the timestamp of the check in
/// RFC 3339 format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2026-08-30T15:30:45.123456789Z"
/// }
/// ```
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn up_reports_status_and_parsable_timestamp() {
        let response = HealthResponse::up();

        assert_eq!(response.status, "UP");
        assert!(
            DateTime::parse_from_rfc3339(&response.timestamp).is_ok(),
            "timestamp should be valid RFC3339"
        );
    }
}
