use std::{
    ops::Deref,
    path::{Path, PathBuf},
};

use crate::yt::{
    ffmpeg::{AudioProcessor, Ffmpeg},
    ytdlp::{YtDlp, YtDlpError},
    AudioHandler,
};

pub struct YtDlpWrapper<P = Ffmpeg> {
    yt_dlp: YtDlp,
    audio_processor: P,
}

impl YtDlpWrapper {
    pub fn new(yt_dlp: YtDlp) -> Self {
        Self {
            yt_dlp,
            audio_processor: Ffmpeg::default(),
        }
    }
}

impl<P: AudioProcessor> YtDlpWrapper<P> {
    pub fn with_audio_processor(yt_dlp: YtDlp, audio_processor: P) -> Self {
        Self {
            yt_dlp,
            audio_processor,
        }
    }
}

impl<P> Deref for YtDlpWrapper<P> {
    type Target = YtDlp;

    fn deref(&self) -> &Self::Target {
        &self.yt_dlp
    }
}

impl<P: AudioProcessor + Send + Sync> AudioHandler for YtDlpWrapper<P> {
    #[tracing::instrument(skip(self))]
    async fn extract_audio(&self, url: &str, workdir: &Path) -> anyhow::Result<PathBuf> {
        let info = self.dump_info(url).await?;

        let format = info
            .first_audio_format()
            .ok_or_else(|| YtDlpError::NoAudioStream {
                video_id: info.id.clone(),
            })
            .inspect_err(|e| tracing::error!(error = %e, "No audio stream to download"))?;

        tokio::fs::create_dir_all(workdir).await?;

        // XXX: same video id requested concurrently races on this name
        let temp_template = workdir.join(format!("temp_{}.%(ext)s", info.id));
        let downloaded = self
            .download_format(url, &format.format_id, &temp_template)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to download audio"))?;

        let timestamp = chrono::Utc::now().timestamp();
        let wav_path = workdir.join(format!("audio_{}_{timestamp}.wav", info.id));

        transcode_downloaded(&self.audio_processor, &downloaded, &wav_path).await?;

        tracing::info!(video_id = %info.id, path = ?wav_path, "Extracted audio");
        Ok(wav_path)
    }
}

/// Converts `downloaded` into `wav_path`, removing `downloaded` whatever the
/// outcome of the conversion. A partially written `wav_path` is removed too
/// when the conversion fails.
pub async fn transcode_downloaded<P: AudioProcessor>(
    audio_processor: &P,
    downloaded: &Path,
    wav_path: &Path,
) -> Result<(), YtDlpError> {
    let result = audio_processor.convert_to_wav(downloaded, wav_path).await;

    remove_leftover(downloaded, "downloaded audio").await;
    if result.is_err() {
        remove_leftover(wav_path, "partial wav").await;
    }

    result
}

async fn remove_leftover(path: &Path, what: &str) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::debug!(path = ?path, "Removed {what}"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(error = ?e, path = ?path, "Failed to remove {what}"),
    }
}
