use crate::{
    types::VideoMetadata,
    yt::{audio_handler::YtDlpWrapper, ffmpeg::AudioProcessor, MetadataFetcher},
};

impl<P: AudioProcessor + Send + Sync> MetadataFetcher for YtDlpWrapper<P> {
    #[tracing::instrument(skip(self))]
    async fn fetch_metadata(&self, url: &str) -> anyhow::Result<VideoMetadata> {
        let info = self
            .dump_info(url)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch video info"))?;

        Ok(VideoMetadata::from(&info))
    }
}
