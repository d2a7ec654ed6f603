use serde::{Deserialize, Serialize};

use super::mood::Mood;

/// Whether recommendations should reinforce or contrast the stated mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Congruence,
    Incongruence,
}

/// Payload posted to the recommendation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRequest {
    pub moods: Vec<Mood>,
    pub preference: Preference,
    #[serde(rename = "personalNotes")]
    pub personal_notes: String,
    /// ISO-8601, stamped when the request goes out
    pub timestamp: String,
}

/// Per-mood relevance assigned by the recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodScore {
    pub mood: String,
    pub score: f64,
}

/// A ranked candidate movie in a recommendation response
///
/// Older backend revisions send a plain `moods` label list; newer ones send
/// scored `mood_scores`. Either may be present, not both required.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredMovie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub storyline: Option<String>,
    pub match_score: f64,
    #[serde(default)]
    pub moods: Option<Vec<String>>,
    #[serde(default)]
    pub mood_scores: Option<Vec<MoodScore>>,
    #[serde(default)]
    pub reviews: Option<Vec<String>>,
}

/// Full response from the recommender; immutable once received
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResult {
    pub message: String,
    pub movies: Vec<ScoredMovie>,
}

/// A review object as returned by the per-movie review endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<i64>,
    pub review: String,
    pub created_at: String,
}
