use std::{future::Future, path::Path, path::PathBuf};

use tokio::process::Command;

use crate::yt::ytdlp::YtDlpError;

pub trait AudioProcessor {
    /// Transcodes `input` to mono 16kHz 16-bit PCM WAV at `output`
    fn convert_to_wav(
        &self,
        input: &Path,
        output: &Path,
    ) -> impl Future<Output = Result<(), YtDlpError>> + Send;
}

#[derive(Debug, Clone)]
pub struct Ffmpeg {
    binary: PathBuf,
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("ffmpeg"),
        }
    }
}

impl Ffmpeg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl AudioProcessor for Ffmpeg {
    async fn convert_to_wav(&self, input: &Path, output: &Path) -> Result<(), YtDlpError> {
        let result = Command::new(&self.binary)
            .arg("-y")
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(input)
            .arg("-f")
            .arg("wav")
            .arg("-acodec")
            .arg("pcm_s16le")
            .arg("-ac")
            .arg("1")
            .arg("-ar")
            .arg("16000")
            .arg(output)
            .output()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to spawn ffmpeg"))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            tracing::error!(status = %result.status, %stderr, "FFmpeg failed to transcode audio");
            let stderr = if stderr.is_empty() {
                "unknown error".to_string()
            } else {
                stderr
            };
            return Err(YtDlpError::Ffmpeg(stderr));
        }

        Ok(())
    }
}
