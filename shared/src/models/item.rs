//! Menu item models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{ItemId, SectionId};
use crate::types::{MediaReference, Money};

/// A dish or drink listed in a menu section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub section_id: SectionId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    /// Original price shown struck through when discounting
    pub compare_at_price: Option<Money>,
    pub media: Vec<MediaReference>,
    pub dietary_tags: Vec<DietaryTag>,
    pub allergens: Vec<Allergen>,
    pub spice_level: Option<SpiceLevel>,
    pub status: ItemStatus,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Percent discount implied by the compare-at price, if meaningful.
    ///
    /// Returns `None` when there is no compare-at price, the currencies
    /// differ, or the compare-at price does not exceed the current price.
    pub fn discount_percent(&self) -> Option<Decimal> {
        let compare = self.compare_at_price?;
        if compare.currency != self.price.currency {
            return None;
        }
        if compare.amount <= Decimal::ZERO || compare.amount <= self.price.amount {
            return None;
        }
        let discount = (compare.amount - self.price.amount) / compare.amount * Decimal::from(100);
        Some(discount.round_dp(1))
    }
}

/// Availability of an item to guests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Available,
    /// Shown greyed out until restocked
    SoldOut,
    Hidden,
}

/// Dietary suitability tags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
    Halal,
    Kosher,
}

/// Declarable allergens (the EU-14 list)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Gluten,
    Crustaceans,
    Eggs,
    Fish,
    Peanuts,
    Soybeans,
    Milk,
    TreeNuts,
    Celery,
    Mustard,
    Sesame,
    Sulphites,
    Lupin,
    Molluscs,
}

/// Heat indicator shown next to an item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    Mild,
    Medium,
    Hot,
    ExtraHot,
}

impl std::fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpiceLevel::Mild => write!(f, "Mild"),
            SpiceLevel::Medium => write!(f, "Medium"),
            SpiceLevel::Hot => write!(f, "Hot"),
            SpiceLevel::ExtraHot => write!(f, "Extra Hot"),
        }
    }
}

/// Input for creating a menu item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(custom = "crate::validation::price_rule")]
    pub price: Money,
    #[validate(custom = "crate::validation::price_rule")]
    pub compare_at_price: Option<Money>,
    pub dietary_tags: Vec<DietaryTag>,
    pub allergens: Vec<Allergen>,
    pub spice_level: Option<SpiceLevel>,
}
