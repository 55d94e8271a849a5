pub mod builder;

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use anyhow::Context;
use summary_store::{SavedSummary, SummaryStore};

use crate::{
    types::{VideoAnalysis, VideoMetadata},
    yt::{AudioHandler, MetadataFetcher},
    Summarizer, Transcriber,
};

/// Operations exposed to the HTTP layer
pub trait SummaryPipeline: Send + Sync + 'static {
    fn video_info(&self, url: &str) -> impl Future<Output = anyhow::Result<VideoMetadata>> + Send;

    fn analyze(&self, url: &str) -> impl Future<Output = anyhow::Result<VideoAnalysis>> + Send;

    fn save_summary(
        &self,
        video_id: &str,
        summary: &str,
    ) -> impl Future<Output = anyhow::Result<SavedSummary>> + Send;
}

// Fetches metadata, extracts audio, transcribes and summarizes a single video per request
#[derive(Debug)]
pub struct VideoSummaryProcessor<M, A, T, S, D>
where
    M: MetadataFetcher + Send + Sync + 'static,
    A: AudioHandler + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    D: SummaryStore + Send + Sync + 'static,
{
    workdir: PathBuf,
    metadata_fetcher: M,
    audio_handler: A,
    transcriber: T,
    summarizer: S,
    store: D,
}

impl<M, A, T, S, D> VideoSummaryProcessor<M, A, T, S, D>
where
    M: MetadataFetcher + Send + Sync + 'static,
    A: AudioHandler + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    D: SummaryStore + Send + Sync + 'static,
{
    /// Downloads the audio track via the `audio_handler` into the workdir
    #[tracing::instrument(skip(self))]
    async fn extract_audio(&self, url: &str) -> anyhow::Result<AudioArtifact> {
        let path = self
            .audio_handler
            .extract_audio(url, &self.workdir)
            .await
            .context("Não foi possível extrair o áudio")?;

        Ok(AudioArtifact::new(path))
    }

    #[tracing::instrument(skip(self))]
    async fn transcribe(&self, audio: &AudioArtifact) -> anyhow::Result<String> {
        let response = self
            .transcriber
            .transcribe(audio.path())
            .await
            .map_err(|e| anyhow::anyhow!("Falha na transcrição: {e}"))?;

        Ok(response.text)
    }

    #[tracing::instrument(skip_all, fields(video_id = %video.id))]
    async fn summarize(&self, transcript: &str, video: &VideoMetadata) -> anyhow::Result<String> {
        let response = self
            .summarizer
            .summarize(transcript, video)
            .await
            .map_err(|e| anyhow::anyhow!("Falha ao gerar o resumo: {e}"))?;

        Ok(response.summary)
    }
}

impl<M, A, T, S, D> SummaryPipeline for VideoSummaryProcessor<M, A, T, S, D>
where
    M: MetadataFetcher + Send + Sync + 'static,
    A: AudioHandler + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    D: SummaryStore + Send + Sync + 'static,
{
    #[tracing::instrument(skip(self))]
    async fn video_info(&self, url: &str) -> anyhow::Result<VideoMetadata> {
        self.metadata_fetcher
            .fetch_metadata(url)
            .await
            .context("Não foi possível obter informações do vídeo")
    }

    #[tracing::instrument(skip(self))]
    async fn analyze(&self, url: &str) -> anyhow::Result<VideoAnalysis> {
        let video_info = self.video_info(url).await?;
        tracing::info!(video_id = %video_info.id, title = %video_info.title, "Analyzing video");

        // removed when dropped, whichever of the steps below fails
        let audio = self.extract_audio(url).await?;
        let transcript = self.transcribe(&audio).await?;
        let summary = self.summarize(&transcript, &video_info).await?;
        drop(audio);

        tracing::info!(video_id = %video_info.id, "Generated summary");
        Ok(VideoAnalysis {
            video_info,
            summary,
        })
    }

    #[tracing::instrument(skip(self, summary))]
    async fn save_summary(&self, video_id: &str, summary: &str) -> anyhow::Result<SavedSummary> {
        self.store
            .save_summary(video_id, summary)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to save summary"))
    }
}

/// Transcoded audio file owned by a single request, deleted on drop
#[derive(Debug)]
pub struct AudioArtifact {
    path: PathBuf,
}

impl AudioArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for AudioArtifact {
    // Drop cannot await, so this is a single blocking unlink on the worker
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::info!(path = ?self.path, "Cleaned up audio file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(error = ?e, path = ?self.path, "Failed to clean up audio file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_artifact_removes_file_on_drop() {
        let path = std::env::temp_dir().join(format!("artifact_{}.wav", std::process::id()));
        std::fs::write(&path, b"RIFF").unwrap();

        let artifact = AudioArtifact::new(&path);
        assert!(artifact.path().exists());
        drop(artifact);

        assert!(!path.exists());
    }

    #[test]
    fn test_audio_artifact_tolerates_missing_file() {
        let path = std::env::temp_dir().join(format!("artifact_missing_{}.wav", std::process::id()));
        drop(AudioArtifact::new(&path));
        assert!(!path.exists());
    }
}
