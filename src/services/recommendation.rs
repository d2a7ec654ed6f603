use std::sync::atomic::AtomicBool;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Mood, Preference, RecommendationRequest, RecommendationResult},
    services::FlightGuard,
};

/// Hard cap on how many moods one request may carry
pub const MOOD_SELECTION_LIMIT: usize = 3;

/// Ordered, distinct mood picks for a recommendation request, capped at
/// [`MOOD_SELECTION_LIMIT`].
#[derive(Debug, Clone, Default)]
pub struct MoodSelection {
    selected: Vec<Mood>,
}

impl MoodSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a mood: selected moods are removed, new ones appended unless
    /// the selection is already at capacity (then the toggle is a no-op).
    pub fn toggle(&mut self, mood: Mood) {
        if let Some(position) = self.selected.iter().position(|m| *m == mood) {
            self.selected.remove(position);
        } else if self.selected.len() < MOOD_SELECTION_LIMIT {
            self.selected.push(mood);
        }
    }

    pub fn selected(&self) -> &[Mood] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }
}

/// Client for the backend recommender.
///
/// The submit delay paces the transition into the results view; it elapses
/// before the request goes out, and the in-flight guard makes a second submit
/// during that window (or during the request itself) a functional no-op.
pub struct RecommendationClient {
    http_client: HttpClient,
    backend_url: String,
    submit_delay: Duration,
    in_flight: AtomicBool,
}

impl RecommendationClient {
    pub fn new(http_client: HttpClient, backend_url: String, submit_delay: Duration) -> Self {
        Self {
            http_client,
            backend_url,
            submit_delay,
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn request(
        &self,
        selection: &MoodSelection,
        preference: Option<Preference>,
        personal_notes: &str,
    ) -> AppResult<RecommendationResult> {
        let preference = preference.ok_or_else(|| {
            AppError::InvalidInput("Pick congruence or incongruence first".to_string())
        })?;
        if selection.is_empty() {
            return Err(AppError::InvalidInput(
                "Select at least one mood".to_string(),
            ));
        }

        let _guard = FlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            AppError::InvalidInput("A recommendation request is already in flight".to_string())
        })?;

        // Presentation pacing: the reveal animation plays out before the
        // request is sent.
        tokio::time::sleep(self.submit_delay).await;

        let request = RecommendationRequest {
            moods: selection.selected().to_vec(),
            preference,
            personal_notes: personal_notes.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        tracing::info!(
            moods = request.moods.len(),
            preference = ?request.preference,
            "Recommendation request sent"
        );

        let url = format!("{}/movierecommendationuserinput", self.backend_url);
        let response = self.http_client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(%status, "Recommendation request rejected");
            return Err(AppError::ExternalApi(
                "Failed to fetch recommendations".to_string(),
            ));
        }

        let result: RecommendationResult = response.json().await?;
        tracing::info!(movies = result.movies.len(), "Recommendations received");
        Ok(result)
    }
}
