use serde::Serialize;

use super::mood::{Mood, MoodVector};

/// Visible state of the metadata search driving the authoring form
///
/// Idle is both the initial and the post-error state. Found is terminal for a
/// given search attempt; a new search restarts at Loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentStatus {
    #[default]
    Idle,
    Loading,
    Found,
}

/// Canonical movie metadata as returned by the metadata provider
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMetadata {
    pub title: String,
    pub year: String,
    pub plot: String,
    /// None when the provider reports its "no poster" sentinel
    pub poster: Option<String>,
}

/// An in-progress movie review record
///
/// Created empty when the authoring form opens, mutated field by field through
/// the named update operations below, and discarded on successful submission.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MovieDraft {
    pub title: String,
    /// Free text; the provider may return year ranges like "2010–2012"
    pub year: String,
    pub poster_url: Option<String>,
    /// Objective plot from the metadata provider
    pub synopsis: String,
    /// AI summary, or the fallback text when summarization failed
    pub storyline: String,
    pub personal_review: String,
    pub moods: MoodVector,
}

impl MovieDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_year(&mut self, year: &str) {
        self.year = year.to_string();
    }

    pub fn set_synopsis(&mut self, synopsis: &str) {
        self.synopsis = synopsis.to_string();
    }

    pub fn set_storyline(&mut self, storyline: &str) {
        self.storyline = storyline.to_string();
    }

    pub fn set_personal_review(&mut self, review: &str) {
        self.personal_review = review.to_string();
    }

    pub fn rate_mood(&mut self, mood: Mood, raw: &str) {
        self.moods.rate(mood, raw);
    }

    /// Merges a completed enrichment pass into the draft: canonical title and
    /// year, provider plot as synopsis, the summarizer's storyline, and the
    /// poster URL when the provider has one.
    pub fn apply_enrichment(&mut self, metadata: &MovieMetadata, storyline: String) {
        self.title = metadata.title.clone();
        self.year = metadata.year.clone();
        self.synopsis = metadata.plot.clone();
        self.storyline = storyline;
        self.poster_url = metadata.poster.clone();
    }
}
