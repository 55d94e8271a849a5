use std::{future::Future, path::PathBuf, sync::LazyLock};

use regex::Regex;

pub mod fs;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

pub trait SummaryStore {
    fn save_summary(
        &self,
        video_id: &str,
        summary: &str,
    ) -> impl Future<Output = anyhow::Result<SavedSummary>> + Send;
}

impl<T: SummaryStore + Send + Sync> SummaryStore for &T {
    async fn save_summary(&self, video_id: &str, summary: &str) -> anyhow::Result<SavedSummary> {
        (**self).save_summary(video_id, summary).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSummary {
    pub video_id: String,
    pub path: PathBuf,
}

/// Video ids end up in file names, so only the characters the platform uses
/// for ids are accepted.
pub fn is_valid_video_id(video_id: &str) -> bool {
    VIDEO_ID_RE.is_match(video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_platform_ids() {
        assert!(is_valid_video_id("dQw4w9WgXcQ"));
        assert!(is_valid_video_id("5_EJwYeQusM"));
        assert!(is_valid_video_id("S6w-UEOK7aI"));
    }

    #[test]
    fn test_rejects_path_like_ids() {
        assert!(!is_valid_video_id(""));
        assert!(!is_valid_video_id("../etc/passwd"));
        assert!(!is_valid_video_id("a/b"));
        assert!(!is_valid_video_id("id with spaces"));
    }
}
