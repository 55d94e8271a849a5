use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use video_digest::yt::{
    audio_handler::transcode_downloaded, ffmpeg::AudioProcessor, ytdlp::YtDlpError, AudioHandler,
};

/// Writes a fake WAV file into the workdir so cleanup can be observed
#[derive(Clone)]
pub struct MockAudioHandler {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub produced: Arc<Mutex<Vec<PathBuf>>>,
    pub fail_with: Option<String>,
}

impl Default for MockAudioHandler {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            produced: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockAudioHandler {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl AudioHandler for MockAudioHandler {
    async fn extract_audio(&self, url: &str, workdir: &Path) -> anyhow::Result<PathBuf> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }

        std::fs::create_dir_all(workdir)?;
        let wav_path = workdir.join("audio_mock.wav");
        std::fs::write(&wav_path, b"RIFF....WAVE")?;
        self.produced.lock().unwrap().push(wav_path.clone());
        Ok(wav_path)
    }
}

/// Goes through the real download cleanup path with a transcoder that always
/// fails
#[derive(Clone, Default)]
pub struct FailingTranscodeAudioHandler {
    pub downloaded: Arc<Mutex<Vec<PathBuf>>>,
}

struct BrokenFfmpeg;

impl AudioProcessor for BrokenFfmpeg {
    async fn convert_to_wav(&self, _input: &Path, _output: &Path) -> Result<(), YtDlpError> {
        Err(YtDlpError::Ffmpeg(
            "temp_dQw4w9WgXcQ.webm: Invalid data found when processing input".into(),
        ))
    }
}

impl AudioHandler for FailingTranscodeAudioHandler {
    async fn extract_audio(&self, _url: &str, workdir: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(workdir)?;
        let downloaded = workdir.join("temp_dQw4w9WgXcQ.webm");
        std::fs::write(&downloaded, b"partial download")?;
        self.downloaded.lock().unwrap().push(downloaded.clone());

        let wav_path = workdir.join("audio_dQw4w9WgXcQ.wav");
        transcode_downloaded(&BrokenFfmpeg, &downloaded, &wav_path).await?;
        Ok(wav_path)
    }
}
