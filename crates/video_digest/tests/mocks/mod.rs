pub mod audio_handler;
pub mod metadata_fetcher;
pub mod summarizer;
pub mod summary_store;
pub mod transcriber;
