use std::{fmt::Debug, future::Future};

use serde::Deserialize;

use crate::types::VideoMetadata;

pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug + std::fmt::Display + Send + Sync + 'static;

    fn summarize(
        &self,
        transcript: &str,
        video: &VideoMetadata,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    /// Markdown, as returned by the model
    pub summary: String,
}

/// User message sent alongside the system prompt
pub fn build_user_prompt(video: &VideoMetadata, transcript: &str) -> String {
    format!(
        "Título do vídeo: {title}\n\
         Canal: {channel}\n\
         \n\
         Transcrição do vídeo:\n\
         {transcript}\n\
         \n\
         Baseado nesta transcrição, crie um resumo detalhado do vídeo em formato Markdown.",
        title = video.title,
        channel = video.channel,
    )
}
