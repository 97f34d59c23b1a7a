//! Translation models
//!
//! Content fields are stored once in the authoring language; translations
//! are per-entity, per-field overlay records resolved at serving time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::ids::TranslationId;
use crate::types::Language;

/// A translated value for one field of one entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub id: TranslationId,
    pub entity: TranslatedEntity,
    /// Field name on the entity, e.g. "name" or "description"
    pub field: String,
    pub language: Language,
    pub value: String,
    pub source: TranslationSource,
    pub updated_at: DateTime<Utc>,
}

/// The entity a translation belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatedEntity {
    pub kind: TranslatedEntityKind,
    pub id: Uuid,
}

/// Entity kinds that carry translatable fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TranslatedEntityKind {
    Venue,
    Menu,
    Section,
    Item,
}

/// Provenance of a translated value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TranslationSource {
    Human,
    Machine,
}

/// Translations loaded for a single entity, ready for lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationBundle {
    pub entries: Vec<Translation>,
}

impl TranslationBundle {
    pub fn new(entries: Vec<Translation>) -> Self {
        Self { entries }
    }

    /// Resolve `field` for `requested`, falling back to `fallback`.
    ///
    /// Within a language, human translations win over machine ones.
    pub fn resolve(&self, field: &str, requested: Language, fallback: Language) -> Option<&str> {
        self.best(field, requested)
            .or_else(|| self.best(field, fallback))
    }

    fn best(&self, field: &str, language: Language) -> Option<&str> {
        let mut machine = None;
        for entry in &self.entries {
            if entry.field != field || entry.language != language {
                continue;
            }
            match entry.source {
                TranslationSource::Human => return Some(entry.value.as_str()),
                TranslationSource::Machine => machine = Some(entry.value.as_str()),
            }
        }
        machine
    }
}

/// Input for creating or replacing a translation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertTranslationInput {
    pub entity: TranslatedEntity,
    #[validate(length(min = 1, max = 64))]
    pub field: String,
    pub language: Language,
    #[validate(length(min = 1, max = 2000))]
    pub value: String,
    pub source: TranslationSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(field: &str, language: Language, value: &str, source: TranslationSource) -> Translation {
        Translation {
            id: TranslationId::new(),
            entity: TranslatedEntity {
                kind: TranslatedEntityKind::Item,
                id: Uuid::new_v4(),
            },
            field: field.to_string(),
            language,
            value: value.to_string(),
            source,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn human_wins_over_machine_within_a_language() {
        let bundle = TranslationBundle::new(vec![
            entry("name", Language::Thai, "ผัดไทยเครื่อง", TranslationSource::Machine),
            entry("name", Language::Thai, "ผัดไทย", TranslationSource::Human),
        ]);
        assert_eq!(
            bundle.resolve("name", Language::Thai, Language::English),
            Some("ผัดไทย")
        );
    }

    #[test]
    fn falls_back_when_requested_language_is_missing() {
        let bundle = TranslationBundle::new(vec![entry(
            "name",
            Language::English,
            "Pad Thai",
            TranslationSource::Human,
        )]);
        assert_eq!(
            bundle.resolve("name", Language::Japanese, Language::English),
            Some("Pad Thai")
        );
    }

    #[test]
    fn unknown_field_resolves_to_none() {
        let bundle = TranslationBundle::new(vec![]);
        assert_eq!(bundle.resolve("name", Language::Thai, Language::English), None);
    }
}
