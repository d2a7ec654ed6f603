use std::time::Duration;

use tokio::sync::RwLock;

use crate::models::{MoodScore, RecommendationResult, ScoredMovie};

/// Display-ready projection of a recommendation result
#[derive(Debug, Clone)]
pub struct ProcessedResult {
    pub message: String,
    pub movies: Vec<ScoredMovie>,
}

/// Mood badges for one movie card
#[derive(Debug, Clone, PartialEq)]
pub enum MoodDisplay {
    /// Preferred shape: mood+score pairs, highest score first
    Scored(Vec<MoodScore>),
    /// Legacy shape: plain label list, unscored
    Labels(Vec<String>),
}

/// Applies the match-score display rule.
///
/// A uniform all-ones list means the ranker had nothing to discriminate on, so
/// everything is shown. In a mixed list a score of exactly 1 marks a candidate
/// the ranker never actually matched, so those are dropped. The asymmetry is
/// deliberate and load-bearing.
pub fn displayable(movies: &[ScoredMovie]) -> Vec<&ScoredMovie> {
    let all_ones = movies.iter().all(|m| m.match_score == 1.0);
    movies
        .iter()
        .filter(|m| all_ones || m.match_score != 1.0)
        .collect()
}

/// Mood badges for a movie: scored pairs sorted descending when the server
/// sent them, otherwise the plain label list.
pub fn mood_display(movie: &ScoredMovie) -> MoodDisplay {
    if let Some(scores) = &movie.mood_scores {
        let mut sorted = scores.clone();
        // Stable: ties keep their server-assigned relative order
        sorted.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        MoodDisplay::Scored(sorted)
    } else {
        MoodDisplay::Labels(movie.moods.clone().unwrap_or_default())
    }
}

fn process(result: &RecommendationResult) -> ProcessedResult {
    ProcessedResult {
        message: result.message.clone(),
        movies: displayable(&result.movies).into_iter().cloned().collect(),
    }
}

/// Gates visibility of the newest recommendation result behind a fixed
/// presentation delay.
///
/// A result is never shown the instant it arrives; `reveal` resolves after the
/// delay. Replacing the result while a reveal is pending makes that reveal
/// come back empty, and the replacement runs its own full delay.
pub struct ResultsView {
    state: RwLock<ViewState>,
    reveal_delay: Duration,
}

#[derive(Default)]
struct ViewState {
    result: Option<RecommendationResult>,
    epoch: u64,
}

impl ResultsView {
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            state: RwLock::new(ViewState::default()),
            reveal_delay,
        }
    }

    /// Replaces any prior result and restarts the reveal window
    pub async fn set_result(&self, result: RecommendationResult) {
        let mut state = self.state.write().await;
        state.result = Some(result);
        state.epoch += 1;
    }

    /// Resolves to the processed result once the reveal delay has elapsed, or
    /// to nothing if the result was replaced in the meantime.
    pub async fn reveal(&self) -> Option<ProcessedResult> {
        let epoch = {
            let state = self.state.read().await;
            state.result.as_ref()?;
            state.epoch
        };

        tokio::time::sleep(self.reveal_delay).await;

        let state = self.state.read().await;
        if state.epoch != epoch {
            return None;
        }
        state.result.as_ref().map(process)
    }
}
