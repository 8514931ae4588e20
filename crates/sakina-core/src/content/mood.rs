//! Moods a user can check in with, and the content each one draws from.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Supplication, SupplicationCategory, Verse, VerseCategory};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Anxious,
    Sad,
    Grateful,
    Stressed,
    Peaceful,
}

impl Mood {
    pub const ALL: &'static [Mood] = &[
        Mood::Anxious,
        Mood::Sad,
        Mood::Grateful,
        Mood::Stressed,
        Mood::Peaceful,
    ];

    /// Label used in storage keys and offset hashing.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Grateful => "grateful",
            Mood::Stressed => "stressed",
            Mood::Peaceful => "peaceful",
        }
    }

    /// Short comforting message shown with the mood's content.
    pub fn message(&self) -> &'static str {
        match self {
            Mood::Anxious => "Allah is with you. Let's breathe together and remember His presence.",
            Mood::Sad => "Every hardship has an ease with it. Allah has not forgotten you.",
            Mood::Grateful => "Alhamdulillah! Gratitude multiplies blessings.",
            Mood::Stressed => {
                "Take a moment to breathe. Allah does not burden you beyond your capacity."
            }
            Mood::Peaceful => "May this peace remain in your heart. Continue in remembrance.",
        }
    }

    pub fn verse_categories(&self) -> &'static [VerseCategory] {
        use VerseCategory::*;
        match self {
            Mood::Anxious => &[Anxiety, Trust],
            Mood::Sad => &[Hope, Patience],
            Mood::Grateful => &[Gratitude],
            Mood::Stressed => &[Stress, Patience],
            Mood::Peaceful => &[Gratitude, Trust],
        }
    }

    pub fn supplication_categories(&self) -> &'static [SupplicationCategory] {
        use SupplicationCategory::*;
        match self {
            Mood::Anxious => &[Anxiety, Calm],
            Mood::Sad => &[Calm],
            Mood::Grateful => &[Gratitude, Morning],
            Mood::Stressed => &[Anxiety, Calm],
            Mood::Peaceful => &[Morning],
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.label() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "mood".into(),
                message: format!("unknown mood '{wanted}'"),
            })
    }
}

/// One verse and one supplication picked for a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodContent<'a> {
    pub verse: &'a Verse,
    pub supplication: &'a Supplication,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    #[test]
    fn parse_mood_labels() {
        assert_eq!("Anxious".parse::<Mood>().unwrap(), Mood::Anxious);
        assert_eq!("peaceful".parse::<Mood>().unwrap(), Mood::Peaceful);
        assert!("angry".parse::<Mood>().is_err());
    }

    #[test]
    fn every_builtin_mood_has_content() {
        let catalog = Catalog::builtin();
        for mood in Mood::ALL {
            assert!(
                !catalog.verses_in(mood.verse_categories()).is_empty(),
                "no verses for {mood}"
            );
            assert!(
                !catalog.supplications_in(mood.supplication_categories()).is_empty(),
                "no supplications for {mood}"
            );
        }
    }
}
