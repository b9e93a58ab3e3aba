// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod bound;
pub mod candidate;
pub mod config;
pub mod deliver;
pub mod error;
pub mod fallback;
pub mod ingest;
pub mod pipeline;
pub mod prompt;
pub mod select;
pub mod summarize;

// ---- Re-exports for stable public API ----
pub use crate::candidate::Candidate;
pub use crate::config::{RadarConfig, Secrets};
pub use crate::error::RadarError;
pub use crate::pipeline::Radar;
pub use crate::select::UnknownDatePolicy;
