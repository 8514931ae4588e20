//! Content stream facades.
//!
//! Each stream fixes a catalog (optionally filtered), a storage key for its
//! recency history and an offset. Callers ask for "today's X" and always get
//! an item back unless the catalog they supplied is empty.

use crate::clock::Clock;
use crate::content::{
    Catalog, Mood, MoodContent, Prompt, RemembrancePhrase, Supplication,
    SupplicationCategory, Verse, VerseCategory,
};
use crate::diagnostics::Diagnostics;
use crate::error::ValidationError;
use crate::rotation::{char_code_sum, first_char_code, Selector};
use crate::storage::{Config, KeyValueStore, OffsetConfig};

pub const VERSE_STREAM_KEY: &str = "sakina-recent-ayat";
pub const SUPPLICATION_STREAM_KEY: &str = "sakina-recent-duas";
pub const REMEMBRANCE_STREAM_KEY: &str = "sakina-recent-adhkar";
pub const PROMPT_STREAM_KEY: &str = "sakina-recent-sabr-prompts";

/// Offset added to the mood hash for the supplication half of a mood pair.
pub const MOOD_SUPPLICATION_OFFSET: i64 = 1000;

pub fn mood_verse_key(mood: &str) -> String {
    format!("sakina-recent-mood-ayat-{mood}")
}

pub fn mood_supplication_key(mood: &str) -> String {
    format!("sakina-recent-mood-duas-{mood}")
}

/// Daily content for one user: every stream shares the same store and clock.
pub struct DailyContent<'c, S, C> {
    selector: Selector<S>,
    clock: C,
    catalog: Catalog<'c>,
    offsets: OffsetConfig,
}

impl<'c, S: KeyValueStore, C: Clock> DailyContent<'c, S, C> {
    /// Streams with default tuning.
    pub fn new(store: S, clock: C, catalog: Catalog<'c>) -> Self {
        Self::from_config(store, clock, catalog, &Config::default(), Diagnostics::default())
    }

    pub fn from_config(
        store: S,
        clock: C,
        catalog: Catalog<'c>,
        config: &Config,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            selector: Selector::from_config(store, &config.rotation, diagnostics),
            clock,
            catalog,
            offsets: config.offsets.clone(),
        }
    }

    pub fn selector(&self) -> &Selector<S> {
        &self.selector
    }

    pub fn catalog(&self) -> &Catalog<'c> {
        &self.catalog
    }

    /// Today's verse, optionally restricted to one category.
    pub fn daily_verse(&self, category: Option<VerseCategory>) -> Result<&'c Verse, ValidationError> {
        let day = self.clock.day_context();
        match category {
            None => self.selector.select_with_avoidance(
                self.catalog.verses,
                &day,
                VERSE_STREAM_KEY,
                self.offsets.verse,
            ),
            Some(category) => {
                let filtered = self.catalog.verses_in(&[category]);
                let offset = self.offsets.verse + first_char_code(category.as_str());
                self.selector
                    .select_with_avoidance(&filtered, &day, VERSE_STREAM_KEY, offset)
                    .copied()
            }
        }
    }

    /// Today's supplication, optionally restricted to one category.
    pub fn daily_supplication(
        &self,
        category: Option<SupplicationCategory>,
    ) -> Result<&'c Supplication, ValidationError> {
        let day = self.clock.day_context();
        match category {
            None => self.selector.select_with_avoidance(
                self.catalog.supplications,
                &day,
                SUPPLICATION_STREAM_KEY,
                self.offsets.supplication,
            ),
            Some(category) => {
                let filtered = self.catalog.supplications_in(&[category]);
                let offset = self.offsets.supplication + first_char_code(category.as_str());
                self.selector
                    .select_with_avoidance(&filtered, &day, SUPPLICATION_STREAM_KEY, offset)
                    .copied()
            }
        }
    }

    /// Today's remembrance phrase.
    pub fn daily_remembrance(&self) -> Result<&'c RemembrancePhrase, ValidationError> {
        self.selector.select_with_avoidance(
            self.catalog.remembrances,
            &self.clock.day_context(),
            REMEMBRANCE_STREAM_KEY,
            self.offsets.remembrance,
        )
    }

    /// One verse and one supplication for `mood` from pre-filtered lists.
    ///
    /// Recency is tracked per mood, so checking in as "sad" does not push
    /// items out of the "anxious" history.
    pub fn mood_content(
        &self,
        mood: &str,
        verses: &[&'c Verse],
        supplications: &[&'c Supplication],
    ) -> Result<MoodContent<'c>, ValidationError> {
        let day = self.clock.day_context();
        let mood_offset = char_code_sum(mood);

        let verse = *self.selector.select_with_avoidance(
            verses,
            &day,
            &mood_verse_key(mood),
            mood_offset,
        )?;
        let supplication = *self.selector.select_with_avoidance(
            supplications,
            &day,
            &mood_supplication_key(mood),
            mood_offset + MOOD_SUPPLICATION_OFFSET,
        )?;

        Ok(MoodContent {
            verse,
            supplication,
        })
    }

    /// [`Self::mood_content`] with the lists filtered from the catalog by the
    /// mood's categories.
    pub fn mood_content_for(&self, mood: Mood) -> Result<MoodContent<'c>, ValidationError> {
        let verses = self.catalog.verses_in(mood.verse_categories());
        let supplications = self.catalog.supplications_in(mood.supplication_categories());
        self.mood_content(mood.label(), &verses, &supplications)
    }

    /// Today's reflection prompt.
    pub fn daily_prompt(&self) -> Result<&'c str, ValidationError> {
        let prompts: Vec<Prompt<'c>> = self
            .catalog
            .prompts
            .iter()
            .copied()
            .enumerate()
            .map(|(position, text)| Prompt { position, text })
            .collect();

        let picked = self.selector.select_with_avoidance(
            &prompts,
            &self.clock.day_context(),
            PROMPT_STREAM_KEY,
            self.offsets.prompt,
        )?;
        Ok(picked.text)
    }

    /// Ids recently shown on `stream_key`, most recent first.
    pub fn recent_ids(&self, stream_key: &str) -> Vec<String> {
        self.selector
            .ledger()
            .get_recent(stream_key, self.selector.window_size())
    }
}
