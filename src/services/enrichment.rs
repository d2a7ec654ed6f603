use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{EnrichmentStatus, Mood, MovieDraft},
    services::providers::{MetadataProvider, Summarizer},
};

/// Drives the fetch → summarize → merge pipeline behind the authoring form.
///
/// Status walks Idle → Loading → Found, dropping back to Idle on failure. The
/// metadata fetch must succeed before the summarizer runs; the summarizer is
/// total and cannot fail the pipeline. Search attempts are numbered so that a
/// superseded attempt resolving late never touches the draft (last write wins).
pub struct EnrichmentController {
    metadata: Arc<dyn MetadataProvider>,
    summarizer: Arc<dyn Summarizer>,
    state: RwLock<EnrichState>,
}

#[derive(Default)]
struct EnrichState {
    status: EnrichmentStatus,
    draft: MovieDraft,
    error: Option<String>,
    seq: u64,
}

impl EnrichmentController {
    pub fn new(metadata: Arc<dyn MetadataProvider>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            metadata,
            summarizer,
            state: RwLock::new(EnrichState::default()),
        }
    }

    pub async fn status(&self) -> EnrichmentStatus {
        self.state.read().await.status
    }

    pub async fn error_message(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Snapshot of the draft as it currently stands
    pub async fn draft(&self) -> MovieDraft {
        self.state.read().await.draft.clone()
    }

    pub async fn set_title(&self, title: &str) {
        self.state.write().await.draft.set_title(title);
    }

    pub async fn set_year(&self, year: &str) {
        self.state.write().await.draft.set_year(year);
    }

    pub async fn set_synopsis(&self, synopsis: &str) {
        self.state.write().await.draft.set_synopsis(synopsis);
    }

    pub async fn set_storyline(&self, storyline: &str) {
        self.state.write().await.draft.set_storyline(storyline);
    }

    pub async fn set_personal_review(&self, review: &str) {
        self.state.write().await.draft.set_personal_review(review);
    }

    pub async fn rate_mood(&self, mood: Mood, raw: &str) {
        self.state.write().await.draft.rate_mood(mood, raw);
    }

    /// Hands out the finished draft and resets the controller for a new
    /// authoring session. Called after a successful submission.
    pub async fn take_draft(&self) -> MovieDraft {
        let mut state = self.state.write().await;
        let draft = std::mem::take(&mut state.draft);
        state.status = EnrichmentStatus::Idle;
        state.error = None;
        draft
    }

    /// Runs one search attempt: metadata lookup, then AI storyline, then merge.
    ///
    /// A new call while a previous attempt is still loading restarts the
    /// sequence; whichever attempt is newest owns the draft fields it merges.
    pub async fn search(&self, title: &str, year: &str) -> AppResult<()> {
        if title.trim().is_empty() {
            let message = "Please enter a movie title first";
            self.state.write().await.error = Some(message.to_string());
            return Err(AppError::InvalidInput(message.to_string()));
        }

        let attempt = {
            let mut state = self.state.write().await;
            state.seq += 1;
            state.status = EnrichmentStatus::Loading;
            state.error = None;
            state.seq
        };

        tracing::info!(title, year, "Movie search started");

        let metadata = match self.metadata.fetch(title, year).await {
            Ok(metadata) => metadata,
            Err(e) => {
                let mut state = self.state.write().await;
                if state.seq == attempt {
                    state.status = EnrichmentStatus::Idle;
                    state.error = Some(e.user_message());
                }
                return Err(e);
            }
        };

        // Total: a summarizer failure comes back as fallback text, never an error.
        let storyline = self
            .summarizer
            .summarize(&metadata.title, &metadata.year)
            .await;

        let mut state = self.state.write().await;
        if state.seq == attempt {
            state.draft.apply_enrichment(&metadata, storyline);
            state.status = EnrichmentStatus::Found;
            tracing::info!(
                title = %metadata.title,
                year = %metadata.year,
                "Movie search completed"
            );
        } else {
            tracing::debug!(attempt, latest = state.seq, "Dropping superseded search result");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieMetadata;
    use crate::services::providers::{MockMetadataProvider, MockSummarizer};

    fn sample_metadata() -> MovieMetadata {
        MovieMetadata {
            title: "Inception".to_string(),
            year: "2010".to_string(),
            plot: "A thief who steals corporate secrets.".to_string(),
            poster: Some("https://img.omdbapi.com/inception.jpg".to_string()),
        }
    }

    #[tokio::test]
    async fn test_empty_title_fails_without_provider_call() {
        let mut metadata = MockMetadataProvider::new();
        metadata.expect_fetch().times(0);
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_summarize().times(0);

        let controller = EnrichmentController::new(Arc::new(metadata), Arc::new(summarizer));

        let result = controller.search("   ", "").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(controller.status().await, EnrichmentStatus::Idle);
        assert!(controller.error_message().await.is_some());
    }

    #[tokio::test]
    async fn test_fetch_failure_never_reaches_summarizer() {
        let mut metadata = MockMetadataProvider::new();
        metadata
            .expect_fetch()
            .times(1)
            .returning(|_, _| Err(AppError::NotFound("Movie not found!".to_string())));
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_summarize().times(0);

        let controller = EnrichmentController::new(Arc::new(metadata), Arc::new(summarizer));

        let result = controller.search("Nonexistent", "1999").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(controller.status().await, EnrichmentStatus::Idle);
        assert_eq!(
            controller.error_message().await.as_deref(),
            Some("Movie not found!")
        );
    }

    #[tokio::test]
    async fn test_successful_search_merges_and_reaches_found() {
        let mut metadata = MockMetadataProvider::new();
        metadata
            .expect_fetch()
            .times(1)
            .returning(|_, _| Ok(sample_metadata()));
        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_summarize()
            .withf(|title, year| title == "Inception" && year == "2010")
            .times(1)
            .returning(|_, _| "A dream within a dream.".to_string());

        let controller = EnrichmentController::new(Arc::new(metadata), Arc::new(summarizer));
        controller.set_personal_review("Mind-bending").await;

        controller.search("inception", "2010").await.unwrap();

        assert_eq!(controller.status().await, EnrichmentStatus::Found);
        let draft = controller.draft().await;
        assert_eq!(draft.title, "Inception");
        assert_eq!(draft.synopsis, "A thief who steals corporate secrets.");
        assert_eq!(draft.storyline, "A dream within a dream.");
        assert_eq!(draft.personal_review, "Mind-bending");
    }

    #[tokio::test]
    async fn test_summarizer_fallback_still_reaches_found() {
        use crate::services::providers::gemini::SUMMARY_FALLBACK;

        let mut metadata = MockMetadataProvider::new();
        metadata
            .expect_fetch()
            .times(1)
            .returning(|_, _| Ok(sample_metadata()));
        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_summarize()
            .times(1)
            .returning(|_, _| SUMMARY_FALLBACK.to_string());

        let controller = EnrichmentController::new(Arc::new(metadata), Arc::new(summarizer));
        controller.search("Inception", "").await.unwrap();

        assert_eq!(controller.status().await, EnrichmentStatus::Found);
        assert_eq!(controller.draft().await.storyline, SUMMARY_FALLBACK);
    }

    #[tokio::test]
    async fn test_take_draft_resets_session() {
        let mut metadata = MockMetadataProvider::new();
        metadata
            .expect_fetch()
            .returning(|_, _| Ok(sample_metadata()));
        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_summarize()
            .returning(|_, _| "Summary".to_string());

        let controller = EnrichmentController::new(Arc::new(metadata), Arc::new(summarizer));
        controller.search("Inception", "2010").await.unwrap();

        let draft = controller.take_draft().await;
        assert_eq!(draft.title, "Inception");
        assert_eq!(controller.status().await, EnrichmentStatus::Idle);
        assert!(controller.draft().await.title.is_empty());
    }
}
