use axum::{extract::State, Extension, Json};
use hivecast_automation::{RunSummary, StatsSnapshot};
use hivecast_core::EnabledPlatforms;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct StatusData {
    status: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct StatsData {
    stats: StatsSnapshot,
    platforms: EnabledPlatforms,
}

/// Liveness probe.
pub(super) async fn status(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<StatusData>> {
    Json(ApiResponse {
        data: StatusData { status: "running" },
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Trigger one automation run and return its summary.
///
/// May overlap with a scheduled run; both are plain callers of the same
/// entry point and the counters tolerate the race.
pub(super) async fn run_now(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<RunSummary>> {
    let summary = state.automation.run_once().await;
    Json(ApiResponse {
        data: summary,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Current counters plus which publishers hold a credential.
pub(super) async fn read_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<StatsData>> {
    Json(ApiResponse {
        data: StatsData {
            stats: state.automation.stats(),
            platforms: state.automation.enabled_platforms(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
