use crate::code::MAX_WINDOW;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::tracking::{is_error_category, not_found_detail};
use crate::types::{ErrorBody, Event, FindParams, TrackingCode, TrackingResult};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use tracing::info;

#[utoipa::path(
    get,
    path = "/track/{code}",
    params(("code" = String, Path, description = "Tracking code")),
    responses(
        (status = 200, description = "Tracking history of the package", body = TrackingResult),
        (status = 404, description = "Carrier reported an error for the code", body = ErrorBody)
    ),
    tag = "Tracking"
)]
pub async fn track_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<TrackingResult>> {
    info!("Tracking package: code={}", code);

    let result = state.client().track(&code).await?;
    if is_error_category(&result.categoria) {
        return Err(AppError::NotFound(not_found_detail(&result)));
    }

    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/last/{code}",
    params(("code" = String, Path, description = "Tracking code")),
    responses(
        (status = 200, description = "Most recent tracking event", body = Event),
        (status = 404, description = "Package has no tracking events", body = ErrorBody)
    ),
    tag = "Tracking"
)]
pub async fn last_event_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Event>> {
    info!("Fetching last event: code={}", code);

    let result = state.client().track(&code).await?;
    let detail = not_found_detail(&result);
    result
        .eventos
        .into_iter()
        .next()
        .map(Json)
        .ok_or(AppError::NotFound(detail))
}

#[utoipa::path(
    get,
    path = "/generate/{code}",
    params(("code" = String, Path, description = "Tracking code without a valid check digit")),
    responses(
        (status = 200, description = "Code with a valid check digit", body = TrackingCode)
    ),
    tag = "Codes"
)]
pub async fn generate_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<TrackingCode>> {
    let numero = state.client().generate_valid_code(&code).await?;
    info!("Generated code: input={}, numero={:?}", code, numero);

    Ok(Json(TrackingCode { numero }))
}

#[utoipa::path(
    get,
    path = "/find/{postal}/{code}",
    params(
        ("postal" = String, Path, description = "Destination postal code (CEP)"),
        ("code" = String, Path, description = "Tracking code to search around"),
        FindParams
    ),
    responses(
        (status = 200, description = "Matching tracking code, null when none matched", body = TrackingCode),
        (status = 400, description = "Search window larger than allowed", body = ErrorBody)
    ),
    tag = "Codes"
)]
pub async fn find_handler(
    State(state): State<AppState>,
    Path((postal, code)): Path<(String, String)>,
    Query(params): Query<FindParams>,
) -> AppResult<Json<TrackingCode>> {
    info!(
        "Searching by postal code: postal={}, code={}, previous={}, next={}",
        postal, code, params.previous, params.next
    );

    if params.previous > MAX_WINDOW || params.next > MAX_WINDOW {
        return Err(AppError::InvalidInput(format!(
            "previous and next must be at most {}",
            MAX_WINDOW
        )));
    }

    let numero = state
        .client()
        .search_by_postal_code(&postal, &code, params.previous, params.next)
        .await?;

    Ok(Json(TrackingCode { numero }))
}
