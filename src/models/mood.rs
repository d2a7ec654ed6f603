use std::collections::HashMap;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The twelve fixed moods movies are rated against.
///
/// The full label string is the wire format everywhere: the submission payload's
/// mood map keys, the recommendation request's `moods` array, and the backend's
/// seeded mood table all carry these exact strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Love,
    Happy,
    Hopeful,
    Excited,
    Reflective,
    Calm,
    Curious,
    Intense,
    Lonely,
    Angry,
    Hopeless,
    Scared,
}

impl Mood {
    pub const ALL: [Mood; 12] = [
        Mood::Love,
        Mood::Happy,
        Mood::Hopeful,
        Mood::Excited,
        Mood::Reflective,
        Mood::Calm,
        Mood::Curious,
        Mood::Intense,
        Mood::Lonely,
        Mood::Angry,
        Mood::Hopeless,
        Mood::Scared,
    ];

    /// Canonical label string, matching the backend's seed list
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Love => "Love · Romance · Family · Community · Belonging · Home",
            Mood::Happy => "Happy · Playful · Bright · Feel-good · Carefree",
            Mood::Hopeful => "Hopeful · Healing · Optimistic · Reassuring",
            Mood::Excited => "Excited · Adventurous · Fun · Escapist",
            Mood::Reflective => "Reflective · Introspective · Contemplative About Life",
            Mood::Calm => "Calm · Peaceful · Relaxed · Soft · Gentle",
            Mood::Curious => "Curious · Engaged · Intrigued · Mentally Active",
            Mood::Intense => "Intense · Emotional · Cathartic · Bittersweet",
            Mood::Lonely => "Lonely · Isolated · Unseen · Longing",
            Mood::Angry => "Angry · Frustrated · Irritated · Stressed",
            Mood::Hopeless => "Hopeless · Sad · Heartbroken · Melancholy",
            Mood::Scared => "Scared · Anxious · Uneasy · Tense · Nervous",
        }
    }

    /// Parses a canonical label string back into a mood
    pub fn from_label(label: &str) -> Option<Mood> {
        Mood::ALL.iter().find(|m| m.label() == label).copied()
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Mood::from_label(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown mood label: {}", label)))
    }
}

/// Parses a raw intensity input into a value in [0, 1].
///
/// Non-numeric input (including empty) counts as 0; NaN counts as 0.
pub fn clamp_intensity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_nan() => 0.0,
        Ok(value) => value.clamp(0.0, 1.0),
        Err(_) => 0.0,
    }
}

/// Per-mood intensity ratings for one movie
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodVector(HashMap<Mood, f64>);

impl MoodVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a raw intensity input for a mood, clamped into [0, 1]
    pub fn rate(&mut self, mood: Mood, raw: &str) {
        self.0.insert(mood, clamp_intensity(raw));
    }

    pub fn get(&self, mood: Mood) -> Option<f64> {
        self.0.get(&mood).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Mood, &f64)> {
        self.0.iter()
    }

    /// Keeps only positively rated moods; zero and negative entries never leave
    /// the client.
    pub fn filter_for_submission(&self) -> MoodVector {
        MoodVector(
            self.0
                .iter()
                .filter(|(_, &value)| value > 0.0)
                .map(|(&mood, &value)| (mood, value))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_intensity_in_range() {
        assert_eq!(clamp_intensity("0.5"), 0.5);
        assert_eq!(clamp_intensity("0"), 0.0);
        assert_eq!(clamp_intensity("1"), 1.0);
    }

    #[test]
    fn test_clamp_intensity_clamps_out_of_range() {
        assert_eq!(clamp_intensity("1.5"), 1.0);
        assert_eq!(clamp_intensity("-0.2"), 0.0);
    }

    #[test]
    fn test_clamp_intensity_non_numeric_maps_to_zero() {
        assert_eq!(clamp_intensity(""), 0.0);
        assert_eq!(clamp_intensity("abc"), 0.0);
        assert_eq!(clamp_intensity("NaN"), 0.0);
    }

    #[test]
    fn test_filter_for_submission_drops_non_positive() {
        let mut vector = MoodVector::new();
        vector.rate(Mood::Happy, "0.8");
        vector.rate(Mood::Calm, "0");
        vector.rate(Mood::Scared, "");
        let filtered = vector.filter_for_submission();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.get(Mood::Happy), Some(0.8));
    }

    #[test]
    fn test_filter_for_submission_preserves_positive() {
        let mut vector = MoodVector::new();
        vector.rate(Mood::Happy, "0.8");
        vector.rate(Mood::Lonely, "0.1");
        vector.rate(Mood::Intense, "1.0");
        let filtered = vector.filter_for_submission();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_mood_label_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_label(mood.label()), Some(mood));
        }
    }

    #[test]
    fn test_mood_serializes_as_label() {
        let json = serde_json::to_string(&Mood::Calm).unwrap();
        assert_eq!(json, "\"Calm · Peaceful · Relaxed · Soft · Gentle\"");
    }

    #[test]
    fn test_mood_vector_serializes_as_label_keyed_map() {
        let mut vector = MoodVector::new();
        vector.rate(Mood::Happy, "0.8");
        let json: serde_json::Value = serde_json::to_value(&vector).unwrap();
        assert_eq!(
            json["Happy · Playful · Bright · Feel-good · Carefree"],
            serde_json::json!(0.8)
        );
    }
}
