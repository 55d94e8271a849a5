//! # SummaryStore Module
//!
//! This module provides functionality for persisting generated video summaries
//! as Markdown files on the local filesystem.
//!
//! Summaries are keyed by the video id and written to a single output
//! directory as `resumo_{video_id}.md`. There is no index of saved summaries;
//! saving the same video id again overwrites the previous file.

mod store;

pub use store::fs::FsSummaryStore;
pub use store::{is_valid_video_id, SavedSummary, SummaryStore};
