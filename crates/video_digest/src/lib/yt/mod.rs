pub mod audio_handler;
pub mod ffmpeg;
pub mod metadata;
pub mod ytdlp;

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use crate::types::VideoMetadata;

/// Resolves display metadata for a video URL
pub trait MetadataFetcher {
    fn fetch_metadata(&self, url: &str) -> impl Future<Output = anyhow::Result<VideoMetadata>> + Send;
}

/// Produces a mono 16kHz PCM WAV file for a video URL inside `workdir`
pub trait AudioHandler {
    fn extract_audio(
        &self,
        url: &str,
        workdir: &Path,
    ) -> impl Future<Output = anyhow::Result<PathBuf>> + Send;
}
