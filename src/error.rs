// src/error.rs
use thiserror::Error;

/// Stage-level failures of one pipeline run. The fallback composer
/// branches on these kinds; only delivery and configuration errors are
/// allowed to abort the process.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error("feed fetch failed: {0}")]
    FetchFailure(String),

    #[error("feed parse failed: {0}")]
    ParseFailure(String),

    #[error("generation failed: {0}")]
    GenerationFailure(String),

    #[error("generation returned blank text")]
    EmptyGeneration,

    #[error("no candidates inside the lookback window")]
    NoCandidates,
}
