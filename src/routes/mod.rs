use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("UP") and `timestamp` in ISO 8601 format
pub mod health;

/// # Domain Validation Endpoint
///
/// Inspects a domain's email-authentication posture: resolves its DMARC,
/// SPF, DKIM, MTA-STS, TLS-RPT, and MX records concurrently, classifies each
/// one, and returns the assembled report.
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `domain`: bare domain name to inspect
///
/// ## Responses
/// - **200 OK**: Per-mechanism presence flags, raw record values, and
///   recommendations
/// - **400 Bad Request**: Missing or syntactically invalid domain
/// - **429 Too Many Requests**: Per-client request budget exhausted
/// - **500 Internal Server Error**: A resolver lookup failed hard
pub mod validate;

/// # API Route Configuration
///
/// Mounts the versioned API under the `/api/v1` base path.
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/v1/health - Service health status
/// GET /api/v1/validate-email?domain=example.com - Domain posture report
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(validate::configure_routes),
    );
}
