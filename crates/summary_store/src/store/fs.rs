use std::path::PathBuf;

use anyhow::Context;

use crate::store::{is_valid_video_id, SavedSummary, SummaryStore};

#[derive(Debug, Clone)]
pub struct FsSummaryStore {
    pub dir: PathBuf,
}

impl FsSummaryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsSummaryStore { dir: dir.into() }
    }

    /// Deterministic location of the summary for `video_id`
    pub fn summary_path(&self, video_id: &str) -> PathBuf {
        self.dir.join(format!("resumo_{video_id}.md"))
    }
}

impl SummaryStore for FsSummaryStore {
    async fn save_summary(&self, video_id: &str, summary: &str) -> anyhow::Result<SavedSummary> {
        anyhow::ensure!(is_valid_video_id(video_id), "Invalid video id: {video_id:?}");

        tokio::fs::create_dir_all(&self.dir)
            .await
            .inspect_err(
                |e| tracing::error!(error = ?e, dir = ?self.dir, "Failed to create summaries directory"),
            )
            .context("Failed to create summaries directory")?;

        let path = self.summary_path(video_id);

        // plain write truncates, re-saving a video id replaces the old summary
        tokio::fs::write(&path, summary)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = ?e,
                    video_id = %video_id,
                    path = ?path,
                    "Failed to write summary"
                )
            })
            .context("Failed to write summary")?;

        tracing::info!(video_id = %video_id, path = ?path, "Saved summary");

        Ok(SavedSummary {
            video_id: video_id.to_string(),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("summary_store_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_save_creates_directory_and_file() {
        let dir = test_dir("create");
        let store = FsSummaryStore::new(dir.join("resumos"));

        let saved = store
            .save_summary("dQw4w9WgXcQ", "# Resumo\n\nConteúdo")
            .await
            .expect("save should succeed");

        assert_eq!(saved.path, dir.join("resumos").join("resumo_dQw4w9WgXcQ.md"));
        let content = std::fs::read_to_string(&saved.path).unwrap();
        assert_eq!(content, "# Resumo\n\nConteúdo");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_resave_overwrites() {
        let dir = test_dir("overwrite");
        let store = FsSummaryStore::new(&dir);

        store.save_summary("abc", "first version, quite long").await.unwrap();
        let saved = store.save_summary("abc", "second").await.unwrap();

        let content = std::fs::read_to_string(&saved.path).unwrap();
        assert_eq!(content, "second");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_invalid_video_id_is_rejected() {
        let dir = test_dir("invalid");
        let store = FsSummaryStore::new(&dir);

        let result = store.save_summary("../escape", "summary").await;
        assert!(result.is_err());
        assert!(!dir.exists(), "Nothing should be written for an invalid id");
    }
}
