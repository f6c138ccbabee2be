use crate::handlers::{find_handler, generate_handler, last_event_handler, track_handler};
use crate::observability::health_handler;
use crate::openapi::api_doc;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the API router. Tracking routes are mounted under `prefix`
/// (empty for none); `/health` always stays at the root.
pub fn create_router(state: AppState, prefix: &str) -> Router {
    let tracking = Router::new()
        .route("/track/{code}", get(track_handler))
        .route("/last/{code}", get(last_event_handler))
        .route("/generate/{code}", get(generate_handler))
        .route("/find/{postal}/{code}", get(find_handler));

    let router = if prefix.is_empty() {
        tracking
    } else {
        Router::new().nest(prefix, tracking)
    };

    router
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Full application: API routes plus Swagger UI, request tracing and
/// permissive CORS. Served the same way over TCP and on Lambda.
pub fn create_app(state: AppState, prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state, prefix)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc(prefix)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
