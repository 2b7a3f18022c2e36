use crate::history::HistoryEntry;
use crate::infra::AppState;
use crate::service::{NgoExplanation, PartnershipService};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use bridge17::workflows::partnership::{
    EcosystemOverview, EvaluationResult, FilterOptions, FilterSelection, NgoId, RankingView,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct RankRequest {
    pub(crate) state: String,
    pub(crate) category: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankResponse {
    pub(crate) filter: FilterSelection,
    pub(crate) rows: Vec<RankingView>,
    pub(crate) results: Vec<EvaluationResult>,
}

pub(crate) fn partnership_router(service: Arc<PartnershipService>) -> Router {
    Router::new()
        .route("/api/v1/partnerships/filters", get(filters_endpoint))
        .route("/api/v1/partnerships/overview", get(overview_endpoint))
        .route("/api/v1/partnerships/rank", post(rank_endpoint))
        .route("/api/v1/partnerships/history", get(history_endpoint))
        .route("/api/v1/ngos/:ngo_id", get(ngo_endpoint))
        .with_state(service)
}

pub(crate) fn with_operational_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn filters_endpoint(
    State(service): State<Arc<PartnershipService>>,
) -> Json<FilterOptions> {
    Json(service.filters())
}

pub(crate) async fn overview_endpoint(
    State(service): State<Arc<PartnershipService>>,
) -> Json<EcosystemOverview> {
    Json(service.overview())
}

pub(crate) async fn rank_endpoint(
    State(service): State<Arc<PartnershipService>>,
    Json(payload): Json<RankRequest>,
) -> Json<RankResponse> {
    let filter = FilterSelection::new(payload.state, payload.category);
    let results = service.rank(&filter);

    Json(RankResponse {
        rows: RankingView::from_results(&results),
        filter,
        results,
    })
}

pub(crate) async fn history_endpoint(
    State(service): State<Arc<PartnershipService>>,
) -> Json<Vec<HistoryEntry>> {
    Json(service.history())
}

pub(crate) async fn ngo_endpoint(
    State(service): State<Arc<PartnershipService>>,
    Path(ngo_id): Path<String>,
) -> Result<Json<NgoExplanation>, bridge17::error::AppError> {
    service.explain(&NgoId(ngo_id)).map(Json)
}
