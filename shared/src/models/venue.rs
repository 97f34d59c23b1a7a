//! Venue models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{OrganizationId, ThemeId, VenueId};
use crate::types::{Currency, GpsCoordinates, Language};

/// A physical location serving menus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub organization_id: OrganizationId,
    pub name: String,
    /// URL-safe identifier, unique within the organization
    pub slug: String,
    pub address: Option<String>,
    pub location: Option<GpsCoordinates>,
    /// IANA timezone identifier, e.g. "Asia/Bangkok"
    pub timezone: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency: Currency,
    pub default_language: Language,
    /// Always contains `default_language`
    pub supported_languages: Vec<Language>,
    pub theme_id: Option<ThemeId>,
    pub status: VenueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Venue {
    /// Whether menus can be served to guests in `language`
    pub fn supports(&self, language: Language) -> bool {
        self.default_language == language || self.supported_languages.contains(&language)
    }
}

/// Operational status of a venue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VenueStatus {
    Active,
    TemporarilyClosed,
    Archived,
}

/// Deduplicate a language set, keeping the default first
pub fn normalize_language_set(default: Language, others: &[Language]) -> Vec<Language> {
    let mut languages = vec![default];
    for &language in others {
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    languages
}

/// Input for creating a venue
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVenueInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(custom = "crate::validation::slug_rule")]
    pub slug: String,
    #[validate(length(max = 300))]
    pub address: Option<String>,
    pub location: Option<GpsCoordinates>,
    #[validate(custom = "crate::validation::timezone_rule")]
    pub timezone: String,
    pub currency: Currency,
    pub default_language: Language,
    pub supported_languages: Vec<Language>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_set_keeps_default_first_and_dedupes() {
        let set = normalize_language_set(
            Language::Thai,
            &[Language::English, Language::Thai, Language::English],
        );
        assert_eq!(set, vec![Language::Thai, Language::English]);
    }
}
