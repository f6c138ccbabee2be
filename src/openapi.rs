use crate::types::{ErrorBody, Event, TrackingCode, TrackingResult};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::track_handler,
        crate::handlers::last_event_handler,
        crate::handlers::generate_handler,
        crate::handlers::find_handler
    ),
    components(schemas(TrackingResult, Event, TrackingCode, ErrorBody)),
    tags(
        (name = "Tracking", description = "Package tracking endpoints"),
        (name = "Codes", description = "Tracking code generation and lookup")
    ),
    info(
        title = "Rastreio Correios",
        description = "API de rastreio de pacotes dos correios",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// OpenAPI document with `prefix` advertised as the server URL.
pub fn api_doc(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    if !prefix.is_empty() {
        openapi.servers = Some(vec![Server::new(prefix)]);
    }
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let openapi = api_doc("");
        for path in [
            "/track/{code}",
            "/last/{code}",
            "/generate/{code}",
            "/find/{postal}/{code}",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {}", path);
        }
        assert!(openapi.servers.is_none());
    }

    #[test]
    fn test_prefix_becomes_server() {
        let servers = api_doc("/prod").servers.unwrap();
        assert_eq!(servers[0].url, "/prod");
    }
}
