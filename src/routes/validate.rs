use crate::dns::RecordFetcher;
use crate::handlers::assessment::Mechanism;
use crate::handlers::syntax;
use crate::models::report::DomainValidationReport;
use crate::rate_limit::RateLimiter;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// # Domain Validation Endpoint
///
/// Resolves the six email-authentication records for a domain concurrently,
/// classifies each settled result, and returns one aggregate report.
///
/// The join is all-or-nothing: a hard resolver failure on any mechanism
/// fails the whole request, since a partial report could be misread as
/// "mechanism absent" when the truth is "unknown due to error". NXDOMAIN and
/// no-data outcomes are not failures; they classify as missing.
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `domain`: bare domain name, e.g. `example.com`
///
/// ## Responses
/// - **200 OK**: [`DomainValidationReport`] JSON
/// - **400 Bad Request**: Missing or syntactically invalid domain
/// - **429 Too Many Requests**: Per-client minute budget exhausted
/// - **500 Internal Server Error**: `{"error": "Internal server error."}`
#[utoipa::path(
    get,
    path = "/api/v1/validate-email",
    params(
        ("domain" = String, Query, description = "Domain name to inspect")
    ),
    responses(
        (status = 200, description = "Per-mechanism posture report", body = DomainValidationReport),
        (status = 400, description = "Invalid domain name"),
        (status = 429, description = "Rate limited"),
        (status = 500, description = "Resolver failure")
    ),
    tag = "Domain Validation"
)]
#[get("/validate-email")]
pub async fn validate_email(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    fetcher: web::Data<Arc<dyn RecordFetcher>>,
    limiter: web::Data<RateLimiter>,
) -> Result<impl Responder, actix_web::Error> {
    let client = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_owned();

    if !limiter.check_allowed(&client).await {
        return Ok(HttpResponse::TooManyRequests().json(json!({
            "error": "Too many requests; try again in a minute."
        })));
    }

    // The domain parameter is extracted by hand so a missing parameter gets
    // the same JSON error body as a malformed one, rather than the framework
    // default plain-text rejection
    let domain = query.get("domain").map(|d| d.trim()).unwrap_or("");
    if !syntax::is_valid_domain(domain) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Invalid domain name."
        })));
    }

    // Fan-out across all six mechanisms, fan-in on the first hard failure.
    let settled = futures::try_join!(
        fetcher.dmarc(domain),
        fetcher.spf(domain),
        fetcher.dkim(domain),
        fetcher.mta_sts(domain),
        fetcher.tls_rpt(domain),
        fetcher.mx(domain),
    );

    let (dmarc, spf, dkim, mta_sts, tls, mx) = match settled {
        Ok(results) => results,
        Err(e) => {
            log::error!("DNS resolution failed for {}: {}", domain, e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error."
            })));
        }
    };

    let report = DomainValidationReport::assemble(
        Mechanism::Dmarc.classify(&dmarc),
        Mechanism::Spf.classify(&spf),
        Mechanism::Dkim.classify(&dkim),
        Mechanism::MtaSts.classify(&mta_sts),
        Mechanism::TlsRpt.classify(&tls),
        Mechanism::Mx.classify(&mx),
    );

    Ok(HttpResponse::Ok().json(report))
}

/// Registers the domain validation endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email);
}
