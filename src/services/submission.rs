use std::sync::atomic::AtomicBool;

use reqwest::{multipart, Client as HttpClient};

use crate::{
    error::{AppError, AppResult},
    models::{MovieDraft, Review},
    services::FlightGuard,
};

/// Posts finished drafts and freestanding reviews to the backend collection.
///
/// Both write paths validate locally before any network traffic and carry an
/// in-flight guard, so a duplicate invocation while the first is unresolved
/// causes no second request. On failure the caller keeps the draft/text and
/// retries manually.
pub struct SubmissionService {
    http_client: HttpClient,
    backend_url: String,
    draft_in_flight: AtomicBool,
    review_in_flight: AtomicBool,
}

/// Flattens a draft into the multipart fields the movie-collection endpoint
/// expects, enforcing the submission preconditions.
pub fn submission_fields(draft: &MovieDraft) -> AppResult<Vec<(&'static str, String)>> {
    let moods = draft.moods.filter_for_submission();
    if moods.is_empty() {
        return Err(AppError::InvalidInput(
            "Please rate at least one mood".to_string(),
        ));
    }
    if draft.storyline.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "A storyline is required".to_string(),
        ));
    }
    if draft.personal_review.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "A personal review is required".to_string(),
        ));
    }

    let moods_json = serde_json::to_string(&moods)
        .map_err(|e| AppError::Submission(format!("Failed to encode mood ratings: {}", e)))?;

    Ok(vec![
        ("image_url", draft.poster_url.clone().unwrap_or_default()),
        ("title", draft.title.clone()),
        ("year", draft.year.clone()),
        ("synopsis", draft.synopsis.clone()),
        ("storyline", draft.storyline.clone()),
        ("review", draft.personal_review.clone()),
        ("moods", moods_json),
    ])
}

impl SubmissionService {
    pub fn new(http_client: HttpClient, backend_url: String) -> Self {
        Self {
            http_client,
            backend_url,
            draft_in_flight: AtomicBool::new(false),
            review_in_flight: AtomicBool::new(false),
        }
    }

    /// Submits a finished draft to the movie-collection endpoint.
    ///
    /// No partial effect is assumed on failure: the draft stays with the caller
    /// until a 2xx comes back.
    pub async fn submit_draft(&self, draft: &MovieDraft) -> AppResult<()> {
        let _guard = FlightGuard::acquire(&self.draft_in_flight).ok_or_else(|| {
            AppError::InvalidInput("A submission is already in progress".to_string())
        })?;

        let fields = submission_fields(draft)?;
        let mut form = multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }

        let url = format!("{}/api/movies", self.backend_url);
        let response = self.http_client.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, "Movie submission rejected");
            return Err(AppError::Submission("Failed to submit movie".to_string()));
        }

        tracing::info!(title = %draft.title, "Movie review submitted");
        Ok(())
    }

    /// Posts a freestanding review against an existing movie.
    ///
    /// Empty text is a no-op, not an error. On success the server's review
    /// object comes back so the caller can append it to the movie's local
    /// review list without re-fetching.
    pub async fn submit_review(&self, movie_id: i64, text: &str) -> AppResult<Option<Review>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let _guard = FlightGuard::acquire(&self.review_in_flight).ok_or_else(|| {
            AppError::InvalidInput("A review post is already in progress".to_string())
        })?;

        let url = format!("{}/api/movies/{}/reviews", self.backend_url, movie_id);
        let response = self
            .http_client
            .post(&url)
            .json(&serde_json::json!({ "review": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(%status, movie_id, "Review post rejected");
            return Err(AppError::Submission("Failed to post review".to_string()));
        }

        let review: Review = response.json().await?;
        tracing::info!(movie_id, "Review posted");
        Ok(Some(review))
    }
}
