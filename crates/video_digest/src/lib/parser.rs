//! # yt-dlp Parser
//!
//! This module turns the JSON document printed by `yt-dlp --dump-single-json`
//! into [`VideoMetadata`], and holds the display formatting rules for view
//! counts, durations and publish dates.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::{
    error::Error,
    types::{VideoMetadata, UNKNOWN},
};

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Subset of the yt-dlp info dict used by the pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct YtDlpInfo {
    pub id: String,
    pub title: String,
    pub channel: Option<String>,
    pub uploader: Option<String>,
    pub view_count: Option<u64>,
    pub duration: Option<f64>,
    /// `YYYYMMDD`
    pub upload_date: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub formats: Vec<YtDlpFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtDlpFormat {
    pub format_id: String,
    pub ext: Option<String>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
}

impl YtDlpFormat {
    /// yt-dlp reports a missing track as the literal codec `"none"`
    pub fn is_audio_only(&self) -> bool {
        let has_audio = self.acodec.as_deref().is_some_and(|c| c != "none");
        let has_video = self.vcodec.as_deref().is_some_and(|c| c != "none");
        has_audio && !has_video
    }
}

impl YtDlpInfo {
    /// Parses the output of `yt-dlp --dump-single-json`
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let info = serde_json::from_str::<YtDlpInfo>(json)?;
        if info.id.is_empty() {
            return Err(Error::ParseError("yt-dlp info has an empty 'id'"));
        }
        Ok(info)
    }

    /// First audio-only format in the order yt-dlp lists them
    pub fn first_audio_format(&self) -> Option<&YtDlpFormat> {
        self.formats.iter().find(|f| f.is_audio_only())
    }
}

impl From<&YtDlpInfo> for VideoMetadata {
    fn from(info: &YtDlpInfo) -> Self {
        let channel = info
            .channel
            .as_ref()
            .or(info.uploader.as_ref())
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string());
        let duration_secs = info.duration.map(|d| d.max(0.0) as u64).unwrap_or_default();
        let publish_date = info.upload_date.as_deref().and_then(parse_upload_date);

        VideoMetadata {
            id: info.id.clone(),
            title: info.title.clone(),
            channel,
            views: format_view_count(info.view_count.unwrap_or_default()),
            likes: UNKNOWN.to_string(),
            comments: UNKNOWN.to_string(),
            publish_date: format_publish_date(publish_date),
            duration: format_duration(duration_secs),
            thumbnail: info.thumbnail.clone().unwrap_or_default(),
        }
    }
}

/// `2_300_000` -> `2.3M`, `1_500` -> `1.5K`, `500` -> `500`
pub fn format_view_count(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

/// `125` -> `2:05`, `3725` -> `1:02:05`
pub fn format_duration(total_seconds: u64) -> String {
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

pub fn format_publish_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!(
            "{:02} de {} de {}",
            date.day(),
            MONTHS_PT[date.month0() as usize],
            date.year()
        ),
        None => UNKNOWN.to_string(),
    }
}

pub fn parse_upload_date(upload_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(upload_date, "%Y%m%d").ok()
}
