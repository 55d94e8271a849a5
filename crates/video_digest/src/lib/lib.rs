pub mod error;
mod llm;
pub mod parser;
mod processor;
pub mod server;
pub mod status;
pub mod tracing;
pub mod types;
pub mod yt;

pub use llm::openai;
pub use llm::{
    summarizer::{build_user_prompt, Summarizer, SummaryResponse},
    transcriber::{TranscribeResponse, Transcriber},
};
pub use processor::{builder::VideoSummaryProcessorBuilder, SummaryPipeline, VideoSummaryProcessor};
