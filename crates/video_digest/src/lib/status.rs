//! Synthetic job status.
//!
//! There is no job store: the status is a fixed function of the job id and
//! does not track any `analyze` request.

use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Extracting,
    Transcribing,
    Analyzing,
    Completed,
}

impl JobStatus {
    pub fn message(&self) -> &'static str {
        match self {
            JobStatus::Extracting => "Extraindo áudio do vídeo",
            JobStatus::Transcribing => "Transcrevendo o conteúdo",
            JobStatus::Analyzing => "Analisando e gerando resumo",
            JobStatus::Completed => "Análise concluída",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub job_id: String,
    pub status: JobStatus,
    pub message: &'static str,
    pub progress: u8,
}

impl StatusReport {
    /// Parses `job_id` as an integer of any length and derives the simulated
    /// status from it
    pub fn simulated(job_id: &str) -> Result<Self, Error> {
        let (status, progress) = simulate_status(job_id_mod_100(job_id)?);

        Ok(StatusReport {
            job_id: job_id.to_string(),
            status,
            message: status.message(),
            progress,
        })
    }
}

/// Signed remainder of `job_id` by 100, reduced digit by digit so ids wider
/// than `i64` still resolve
fn job_id_mod_100(job_id: &str) -> Result<i64, Error> {
    let job_id = job_id.trim();
    let (negative, digits) = match job_id.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, job_id.strip_prefix('+').unwrap_or(job_id)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::ParseError("job_id must be an integer"));
    }

    let rem = digits
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')) % 100);

    Ok(if negative { -rem } else { rem })
}

/// Bands over `job_id mod 100` (always non-negative)
pub fn simulate_status(job_id: i64) -> (JobStatus, u8) {
    let n = job_id.rem_euclid(100) as u8;

    match n {
        0..20 => (JobStatus::Extracting, n * 5),
        20..50 => (JobStatus::Transcribing, n * 2),
        50..80 => (JobStatus::Analyzing, n + 20),
        _ => (JobStatus::Completed, 100),
    }
}
