use std::sync::{Arc, Mutex};
use video_digest::{types::VideoMetadata, yt::MetadataFetcher};

pub fn sample_metadata() -> VideoMetadata {
    VideoMetadata {
        id: "dQw4w9WgXcQ".to_string(),
        title: "Sessão plenária".to_string(),
        channel: "Canal de Teste".to_string(),
        views: "1.5K".to_string(),
        likes: "unknown".to_string(),
        comments: "unknown".to_string(),
        publish_date: "05 de março de 2024".to_string(),
        duration: "2:05".to_string(),
        thumbnail: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
    }
}

#[derive(Clone)]
pub struct MockMetadataFetcher {
    pub metadata: VideoMetadata,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockMetadataFetcher {
    fn default() -> Self {
        Self {
            metadata: sample_metadata(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockMetadataFetcher {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl MetadataFetcher for MockMetadataFetcher {
    async fn fetch_metadata(&self, url: &str) -> anyhow::Result<VideoMetadata> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.metadata.clone())
    }
}
