use std::{
    path::{Path, PathBuf},
    process::Output,
};

use tokio::process::Command;

use crate::parser::YtDlpInfo;

#[derive(Debug, thiserror::Error)]
pub enum YtDlpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{program} exited with {status}: {stderr}")]
    Command {
        program: &'static str,
        status: String,
        stderr: String,
    },
    #[error("Failed to parse yt-dlp output: {0}")]
    Parse(#[from] crate::error::Error),
    #[error("No audio-only stream available for video {video_id}")]
    NoAudioStream { video_id: String },
    #[error("yt-dlp did not report a downloaded file for format {format_id}")]
    MissingDownload { format_id: String },
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),
}

impl YtDlpError {
    pub(crate) fn from_output(program: &'static str, output: &Output) -> Self {
        YtDlpError::Command {
            program,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Thin wrapper around the `yt-dlp` executable
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: PathBuf,
    cookies_path: Option<PathBuf>,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("yt-dlp"),
            cookies_path: None,
        }
    }
}

impl YtDlp {
    pub fn new_with_cookies(cookies_path: Option<PathBuf>) -> Self {
        Self {
            cookies_path,
            ..Self::default()
        }
    }

    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.binary);
        command.arg("--no-playlist").arg("--no-warnings");
        if let Some(cookies) = &self.cookies_path {
            command.arg("--cookies").arg(cookies);
        }
        command
    }

    /// Reads the info dict for `url` without downloading any media
    #[tracing::instrument(skip(self))]
    pub async fn dump_info(&self, url: &str) -> Result<YtDlpInfo, YtDlpError> {
        let output = self
            .command()
            .arg("--dump-single-json")
            .arg("--skip-download")
            .arg(url)
            .output()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to spawn yt-dlp"))?;

        if !output.status.success() {
            return Err(YtDlpError::from_output("yt-dlp", &output));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(YtDlpInfo::from_json(&stdout)?)
    }

    /// Downloads a single format to `output_template` (a yt-dlp `-o`
    /// template) and returns the path of the written file
    #[tracing::instrument(skip(self))]
    pub async fn download_format(
        &self,
        url: &str,
        format_id: &str,
        output_template: &Path,
    ) -> Result<PathBuf, YtDlpError> {
        let output = self
            .command()
            .arg("-f")
            .arg(format_id)
            .arg("-o")
            .arg(output_template)
            .arg("--print")
            .arg("after_move:filepath")
            .arg(url)
            .output()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to spawn yt-dlp"))?;

        if !output.status.success() {
            return Err(YtDlpError::from_output("yt-dlp", &output));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let filepath = stdout
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())
            .ok_or_else(|| YtDlpError::MissingDownload {
                format_id: format_id.to_string(),
            })?;

        Ok(PathBuf::from(filepath))
    }
}
