/// # Health Status Response
///
/// Operational status of the service plus the timestamp of the check.
/// Response format for the liveness endpoint.
pub mod health;

/// # Mechanism Verdicts and the Domain Validation Report
///
/// Wire types for the assessment result: the per-mechanism verdict
/// (presence, raw record text, recommendation tier and message) and the
/// aggregate report returned by `GET /validate-email`.
pub mod report;
