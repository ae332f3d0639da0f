pub mod dtos;
pub mod handlers;

use axum::{
    Router,
    http::{HeaderName, Method},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, health};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    paths(handlers::crawl_website, health::health_check),
    components(schemas(
        dtos::CrawlRequest,
        dtos::ErrorResponse,
        crate::crawler::CrawlResult,
        crate::extractor::PageContent,
        health::HealthResponse
    )),
    tags(
        (name = "crawl", description = "Website content extraction"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// The browser client authenticates with a static key header, not cookies,
/// so any origin and header may call in.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route(
            "/crawl-website",
            post(handlers::crawl_website).options(handlers::crawl_preflight),
        )
        .route("/healthz", get(health::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(cors_layer()),
        )
        .with_state(state)
}
