//! Common types used across the platform

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::MediaId;

/// Languages menus can be authored and served in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Thai,
    Japanese,
    Chinese,
    Korean,
    French,
    German,
    Spanish,
    Arabic,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Thai => "th",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
            Language::Korean => "ko",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Arabic => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "th" => Some(Language::Thai),
            "ja" => Some(Language::Japanese),
            "zh" => Some(Language::Chinese),
            "ko" => Some(Language::Korean),
            "fr" => Some(Language::French),
            "de" => Some(Language::German),
            "es" => Some(Language::Spanish),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }
}

/// Currencies prices can be quoted in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Thb,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Sgd,
    Aud,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Thb => "THB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Sgd => "SGD",
            Currency::Aud => "AUD",
        }
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        match code.to_ascii_uppercase().as_str() {
            "THB" => Some(Currency::Thb),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            "JPY" => Some(Currency::Jpy),
            "SGD" => Some(Currency::Sgd),
            "AUD" => Some(Currency::Aud),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Thb => "฿",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Sgd => "S$",
            Currency::Aud => "A$",
        }
    }

    /// Minor-unit digits shown for the currency (zero for yen)
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }
}

/// A monetary amount in a specific currency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Display form with the currency symbol, e.g. "฿120.00"
    pub fn format(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.prec$}", self.currency.symbol(), self.amount, prec = places)
    }
}

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Media reference for logos, item photos and documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaReference {
    pub id: MediaId,
    pub file_type: MediaType,
    pub url: String,
    /// Alternative text for screen readers
    pub alt_text: Option<String>,
    pub original_filename: Option<String>,
}

/// Types of media files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Document,
    Video,
}

/// Pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, per_page: u32, total_items: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total_items.div_ceil(per_page as u64) as u32
        };
        Self {
            page,
            per_page,
            total_items,
            total_pages,
        }
    }
}

/// Date range for queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Inclusive on both ends
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
