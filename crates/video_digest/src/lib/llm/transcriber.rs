use std::{fmt::Debug, future::Future, path::Path};

use serde::Deserialize;

pub trait Transcriber {
    const TRANSCRIBER_MODEL: &'static str;

    type Error: Debug + std::fmt::Display + Send + Sync + 'static;

    /// Submits the whole file in a single request; no chunking is done so
    /// the service's size limits apply as-is
    fn transcribe(
        &self,
        audio_path: &Path,
    ) -> impl Future<Output = Result<TranscribeResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
}
