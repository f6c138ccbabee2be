//! AWS Lambda entry point, for deployments behind API Gateway.
//!
//! API Gateway REST stages put the stage name in the request path, so
//! `OPENAPI_PREFIX` is usually set to the stage (e.g. `/prod`).

use axum::Router;
use tracing::info;

pub const RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

/// Set by the Lambda runtime in every function container.
pub fn is_lambda_runtime() -> bool {
    std::env::var_os(RUNTIME_API_VAR).is_some()
}

pub async fn run(app: Router) -> anyhow::Result<()> {
    info!("Serving API Gateway events through the Lambda runtime");
    lambda_http::run(app).await.map_err(|e| anyhow::anyhow!(e))
}
