pub mod draft;
pub mod mood;
pub mod recommendation;

pub use draft::{EnrichmentStatus, MovieDraft, MovieMetadata};
pub use mood::{clamp_intensity, Mood, MoodVector};
pub use recommendation::{
    MoodScore, Preference, RecommendationRequest, RecommendationResult, Review, ScoredMovie,
};
