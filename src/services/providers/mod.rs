/// External provider abstractions
///
/// The enrichment pipeline talks to two providers: a metadata source queried by
/// title/year, and an AI summarizer. Both sit behind traits so the pipeline can
/// be driven with mocks and the concrete providers swapped out.
use crate::{error::AppResult, models::MovieMetadata};

pub mod gemini;
pub mod omdb;

/// Canonical movie metadata lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Looks up a movie by title and optional release year (empty = any).
    ///
    /// A provider-reported miss surfaces as `AppError::NotFound` carrying the
    /// provider's message; transport failures as `AppError::HttpClient`.
    /// Single attempt, no side effects.
    async fn fetch(&self, title: &str, year: &str) -> AppResult<MovieMetadata>;
}

/// AI storyline summarization
///
/// Total by contract: implementations absorb every failure and return fallback
/// text instead, so callers never see an error from this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, title: &str, year: &str) -> String;
}
