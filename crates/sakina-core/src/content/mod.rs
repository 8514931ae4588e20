//! Content catalog types.
//!
//! Catalog entries are static, defined at build time and never mutated. The
//! rotation engine only needs an item's stable id, exposed through
//! [`ContentItem`].

pub mod catalog;
pub mod mood;

pub use catalog::{Catalog, PROMPTS, REMEMBRANCES, SUPPLICATIONS, VERSES};
pub use mood::{Mood, MoodContent};

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Anything the selector can rotate through.
pub trait ContentItem {
    /// Stable identifier recorded in the recency ledger.
    fn id(&self) -> Cow<'_, str>;
}

impl<T: ContentItem + ?Sized> ContentItem for &T {
    fn id(&self) -> Cow<'_, str> {
        (**self).id()
    }
}

/// Generates a category enum with string labels and parsing.
macro_rules! category_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($label => Ok($name::$variant),)+
                    other => Err(ValidationError::InvalidValue {
                        field: stringify!($name).to_string(),
                        message: format!("unknown category '{other}'"),
                    }),
                }
            }
        }
    };
}

category_enum! {
    /// Theme of a verse.
    VerseCategory {
        Stress => "stress",
        Anxiety => "anxiety",
        Fear => "fear",
        Gratitude => "gratitude",
        Patience => "patience",
        Hope => "hope",
        Trust => "trust",
    }
}

category_enum! {
    /// When or why a supplication is recited.
    SupplicationCategory {
        Calm => "calm",
        Morning => "morning",
        Evening => "evening",
        Sleep => "sleep",
        Anxiety => "anxiety",
        Gratitude => "gratitude",
    }
}

/// A Qur'anic verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub id: &'static str,
    pub arabic: &'static str,
    pub translation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<&'static str>,
    pub reference: &'static str,
    pub category: VerseCategory,
}

/// A supplication (dua).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplication {
    pub id: &'static str,
    pub arabic: &'static str,
    pub translation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<&'static str>,
    pub occasion: &'static str,
    pub category: SupplicationCategory,
}

/// A remembrance phrase (dhikr) and how many times to repeat it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemembrancePhrase {
    pub id: &'static str,
    pub arabic: &'static str,
    pub translation: &'static str,
    pub transliteration: &'static str,
    pub count: u32,
    pub benefit: &'static str,
}

/// A reflection prompt. Prompts are plain strings, so the position in the
/// prompt list stands in as the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prompt<'a> {
    pub position: usize,
    pub text: &'a str,
}

impl ContentItem for Verse {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id)
    }
}

impl ContentItem for Supplication {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id)
    }
}

impl ContentItem for RemembrancePhrase {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id)
    }
}

impl ContentItem for Prompt<'_> {
    fn id(&self) -> Cow<'_, str> {
        Cow::Owned(self.position.to_string())
    }
}
