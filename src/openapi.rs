use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros; generated at compile time from the route annotations. Changes to
/// the API surface should be reflected here first to keep the published spec
/// accurate.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Domain Validation: `GET /api/v1/validate-email`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `DomainValidationReport`: Aggregate per-mechanism posture report
/// - `MechanismVerdict` / `RecommendationTier`: Per-mechanism verdict types
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::validate::validate_email,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::report::DomainValidationReport,
            crate::models::report::MechanismVerdict,
            crate::models::report::RecommendationTier
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Domain Validation", description = "Email-authentication posture inspection endpoints")
    ),
    info(
        description = "Inspects a domain's DMARC, SPF, DKIM, MTA-STS, TLS-RPT, and MX records and reports a per-mechanism assessment",
        title = "Email Posture API",
        version = "0.4.0",
    )
)]
pub struct ApiDoc;
