use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};
use summary_store::{SavedSummary, SummaryStore};

#[derive(Clone, Default)]
pub struct MockSummaryStore {
    /// (video_id, summary) per call
    pub saved: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockSummaryStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl SummaryStore for MockSummaryStore {
    async fn save_summary(&self, video_id: &str, summary: &str) -> anyhow::Result<SavedSummary> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.saved
            .lock()
            .unwrap()
            .push((video_id.to_string(), summary.to_string()));
        Ok(SavedSummary {
            video_id: video_id.to_string(),
            path: PathBuf::from(format!("resumos/resumo_{video_id}.md")),
        })
    }
}
