use serde::{Deserialize, Serialize};

/// Placeholder for fields the platform does not expose
pub const UNKNOWN: &str = "unknown";

/// Display-ready description of a video, as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub channel: String,
    /// Formatted view count, e.g. `1.5K`
    pub views: String,
    pub likes: String,
    pub comments: String,
    /// `DD de <mês> de YYYY` or [`UNKNOWN`]
    pub publish_date: String,
    /// `H:MM:SS` or `M:SS`
    pub duration: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAnalysis {
    pub video_info: VideoMetadata,
    pub summary: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoUrlRequest {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfoResponse {
    pub video_info: VideoMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveSummaryRequest {
    pub summary: Option<String>,
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSummaryResponse {
    pub success: bool,
    pub filename: String,
}
