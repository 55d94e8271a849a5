//! HTTP surface of the service.
//!
//! | method | path                   | body                    |
//! |--------|------------------------|-------------------------|
//! | POST   | `/api/analyze`         | `{url}`                 |
//! | POST   | `/api/video-info`      | `{url}`                 |
//! | GET    | `/api/status/{job_id}` |                         |
//! | POST   | `/api/save-summary`    | `{summary, video_id}`   |
//!
//! Every failure is answered with `{"error": "..."}`; 400 for caller input,
//! 500 for anything that went wrong downstream.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::ApiError,
    status::StatusReport,
    types::{
        SaveSummaryRequest, SaveSummaryResponse, VideoAnalysis, VideoInfoResponse,
        VideoUrlRequest,
    },
    SummaryPipeline,
};

const MISSING_URL: &str = "URL do vídeo não fornecida";
const MISSING_SUMMARY_FIELDS: &str = "Resumo ou ID do vídeo não fornecido";

pub fn router<P: SummaryPipeline>(pipeline: Arc<P>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze::<P>))
        .route("/api/video-info", post(video_info::<P>))
        .route("/api/status/{job_id}", get(status))
        .route("/api/save-summary", post(save_summary::<P>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(pipeline)
}

/// Non-empty `url` from the request body
fn required_url(body: Result<Json<VideoUrlRequest>, JsonRejection>) -> Result<String, ApiError> {
    let Json(request) = body.map_err(|e| {
        tracing::debug!(error = %e, "Invalid request body");
        ApiError::bad_request(MISSING_URL)
    })?;

    request
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request(MISSING_URL))
}

async fn analyze<P: SummaryPipeline>(
    State(pipeline): State<Arc<P>>,
    body: Result<Json<VideoUrlRequest>, JsonRejection>,
) -> Result<Json<VideoAnalysis>, ApiError> {
    let url = required_url(body)?;
    let analysis = pipeline.analyze(&url).await?;
    Ok(Json(analysis))
}

async fn video_info<P: SummaryPipeline>(
    State(pipeline): State<Arc<P>>,
    body: Result<Json<VideoUrlRequest>, JsonRejection>,
) -> Result<Json<VideoInfoResponse>, ApiError> {
    let url = required_url(body)?;
    let video_info = pipeline.video_info(&url).await?;
    Ok(Json(VideoInfoResponse { video_info }))
}

async fn status(Path(job_id): Path<String>) -> Result<Json<StatusReport>, ApiError> {
    StatusReport::simulated(&job_id)
        .map(Json)
        .map_err(|e| ApiError::bad_request(format!("job_id inválido {job_id:?}: {e}")))
}

async fn save_summary<P: SummaryPipeline>(
    State(pipeline): State<Arc<P>>,
    body: Result<Json<SaveSummaryRequest>, JsonRejection>,
) -> Result<Json<SaveSummaryResponse>, ApiError> {
    let Json(request) = body.map_err(|_| ApiError::bad_request(MISSING_SUMMARY_FIELDS))?;

    let (Some(summary), Some(video_id)) = (
        request.summary.filter(|s| !s.is_empty()),
        request.video_id.filter(|id| !id.is_empty()),
    ) else {
        return Err(ApiError::bad_request(MISSING_SUMMARY_FIELDS));
    };

    if !summary_store::is_valid_video_id(&video_id) {
        return Err(ApiError::bad_request(format!(
            "ID do vídeo inválido: {video_id:?}"
        )));
    }

    let saved = pipeline.save_summary(&video_id, &summary).await?;

    Ok(Json(SaveSummaryResponse {
        success: true,
        filename: saved.path.display().to_string(),
    }))
}
