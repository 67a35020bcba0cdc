use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use email_posture::dns::{DnsRecordFetcher, RecordFetcher};
use email_posture::openapi::ApiDoc;
use email_posture::rate_limit::RateLimiter;
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Posture Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Domain validation and health endpoints under `/api/v1`
/// - A shared async DNS record fetcher
/// - A per-client request rate limiter
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Validation: `GET /api/v1/validate-email?domain=<name>`
/// - Health: `GET /api/v1/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `BIND_ADDR` (default `127.0.0.1`) and `PORT` (default `8080`)
/// - `RATE_LIMIT_PER_MINUTE` (default `10`)
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let rate_limit: u32 = env::var("RATE_LIMIT_PER_MINUTE")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(10);

    let fetcher: Arc<dyn RecordFetcher> = Arc::new(DnsRecordFetcher::new());
    let fetcher = Data::new(fetcher);
    let limiter = Data::new(RateLimiter::new(rate_limit));

    // Evict departed clients' window counters once a minute so the limiter
    // map does not grow with every client address ever seen
    let sweeper = limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            sweeper.sweep_stale().await;
        }
    });

    log::info!("Starting email-posture on {}:{}", bind_addr, port);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(fetcher.clone())
            .app_data(limiter.clone())
            .configure(email_posture::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((bind_addr.as_str(), port))?
    .run()
    .await
}
