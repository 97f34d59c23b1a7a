//! Request validation utilities for the QR Menu Platform
//!
//! Standalone checks shared by the backend request layer and the WASM
//! bundle for offline validation, plus the custom rules backing
//! `validator` derives on input structs.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::{Color, ColorParseError};
use crate::types::{Language, Money};

/// Upper bound for any single price, in major units
pub const MAX_PRICE: i64 = 1_000_000;

// ============================================================================
// Menu Content Validations
// ============================================================================

/// Validate a URL slug (lowercase alphanumeric and hyphens)
pub fn validate_slug(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() {
        return Err("Slug cannot be empty");
    }
    if slug.len() > 64 {
        return Err("Slug must be at most 64 characters");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Slug must be lowercase alphanumeric with hyphens");
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err("Slug cannot start or end with a hyphen");
    }
    if slug.contains("--") {
        return Err("Slug cannot contain consecutive hyphens");
    }
    Ok(())
}

/// Derive a valid slug from a display name.
///
/// Lowercases, maps whitespace and underscores to hyphens, drops anything
/// outside ASCII alphanumerics, collapses runs of hyphens and trims them
/// from both ends. The result can be empty for names with no usable
/// characters.
pub fn normalize_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        let mapped = match c {
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            'a'..='z' | '0'..='9' => Some(c),
            ' ' | '\t' | '_' | '-' => Some('-'),
            _ => None,
        };
        if let Some(mapped) = mapped {
            if mapped == '-' && slug.ends_with('-') {
                continue;
            }
            slug.push(mapped);
        }
    }
    let truncated: String = slug.trim_matches('-').chars().take(64).collect();
    truncated.trim_end_matches('-').to_string()
}

/// Validate a price amount (non-negative, bounded, at most 2 decimal places)
pub fn validate_price(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    if amount > Decimal::from(MAX_PRICE) {
        return Err("Price exceeds the maximum");
    }
    if amount.normalize().scale() > 2 {
        return Err("Price cannot have more than 2 decimal places");
    }
    Ok(())
}

/// Validate a printable QR short code (uppercase alphanumeric with hyphens)
pub fn validate_short_code(code: &str) -> Result<(), &'static str> {
    if code.len() < 4 {
        return Err("Short code must be at least 4 characters");
    }
    if code.len() > 16 {
        return Err("Short code must be at most 16 characters");
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Short code must be uppercase alphanumeric with hyphens");
    }
    if code.starts_with('-') || code.ends_with('-') {
        return Err("Short code cannot start or end with a hyphen");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

/// Validate an international phone number
/// Accepts digits with optional leading +, spaces, dashes and parentheses
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let trimmed = phone.trim();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if rest
        .chars()
        .any(|c| !c.is_ascii_digit() && !matches!(c, ' ' | '-' | '(' | ')'))
    {
        return Err("Phone number contains invalid characters");
    }
    let digits = rest.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 7 {
        return Err("Phone number is too short");
    }
    if digits > 15 {
        return Err("Phone number is too long");
    }
    Ok(())
}

// ============================================================================
// Locale & Presentation Validations
// ============================================================================

/// Validate an ISO 639-1 language code against the supported set
pub fn validate_language_code(code: &str) -> Result<(), &'static str> {
    match Language::from_code(code) {
        Some(_) => Ok(()),
        None => Err("Unsupported language code"),
    }
}

/// Validate an IANA timezone identifier shape, e.g. "Asia/Bangkok".
///
/// Checks the format only; resolving the zone against the tz database is
/// the backend's job.
pub fn validate_timezone(timezone: &str) -> Result<(), &'static str> {
    if timezone.is_empty() {
        return Err("Timezone cannot be empty");
    }
    if timezone.len() > 64 {
        return Err("Timezone must be at most 64 characters");
    }
    let segments: Vec<&str> = timezone.split('/').collect();
    if segments.len() > 3 {
        return Err("Timezone has too many segments");
    }
    for segment in segments {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return Err("Timezone segments must start with a letter"),
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+')) {
            return Err("Timezone contains invalid characters");
        }
    }
    Ok(())
}

/// Validate a "#rrggbb" hex color string
pub fn validate_hex_color(color: &str) -> Result<(), &'static str> {
    match Color::from_hex(color) {
        Ok(_) => Ok(()),
        Err(ColorParseError::Format) => Err("Color must be in #rrggbb format"),
        Err(ColorParseError::Digit) => Err("Color contains invalid hex digits"),
    }
}

// ============================================================================
// Rules backing `validator` derives on input structs
// ============================================================================

pub fn slug_rule(slug: &str) -> Result<(), ValidationError> {
    validate_slug(slug).map_err(|_| ValidationError::new("slug"))
}

pub fn timezone_rule(timezone: &str) -> Result<(), ValidationError> {
    validate_timezone(timezone).map_err(|_| ValidationError::new("timezone"))
}

pub fn price_rule(price: &Money) -> Result<(), ValidationError> {
    validate_price(price.amount).map_err(|_| ValidationError::new("price"))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use validator::Validate;

    use super::*;
    use crate::models::CreateVenueInput;
    use crate::types::Currency;

    // ========================================================================
    // Menu Content Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_slug_valid() {
        assert!(validate_slug("dinner").is_ok());
        assert!(validate_slug("late-night-menu").is_ok());
        assert!(validate_slug("menu2").is_ok());
        assert!(validate_slug("a").is_ok());
    }

    #[test]
    fn test_validate_slug_invalid() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Dinner").is_err()); // Uppercase
        assert!(validate_slug("late night").is_err()); // Space
        assert!(validate_slug("-menu").is_err()); // Leading hyphen
        assert!(validate_slug("menu-").is_err()); // Trailing hyphen
        assert!(validate_slug("late--night").is_err()); // Consecutive hyphens
        assert!(validate_slug(&"a".repeat(65)).is_err()); // Too long
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("Late Night Menu"), "late-night-menu");
        assert_eq!(normalize_slug("  Chef's_Specials  "), "chefs-specials");
        assert_eq!(normalize_slug("Café 24/7"), "caf-247");
        assert_eq!(normalize_slug("เมนูพิเศษ"), "");
    }

    #[test]
    fn test_validate_price_valid() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(12050, 2)).is_ok()); // 120.50
        assert!(validate_price(Decimal::from(MAX_PRICE)).is_ok());
    }

    #[test]
    fn test_validate_price_invalid() {
        assert!(validate_price(Decimal::from(-1)).is_err());
        assert!(validate_price(Decimal::from(MAX_PRICE + 1)).is_err());
        assert!(validate_price(Decimal::new(12345, 3)).is_err()); // 12.345
    }

    #[test]
    fn test_validate_price_ignores_trailing_zeros() {
        // 120.500 normalizes to 120.5
        assert!(validate_price(Decimal::new(120500, 3)).is_ok());
    }

    #[test]
    fn test_validate_short_code() {
        assert!(validate_short_code("SUKHUMVIT-0042").is_ok());
        assert!(validate_short_code("QR12").is_ok());
        assert!(validate_short_code("qr12").is_err()); // Lowercase
        assert!(validate_short_code("QR1").is_err()); // Too short
        assert!(validate_short_code("SUKHUMVIT-00421234").is_err()); // Too long
        assert!(validate_short_code("-QR12").is_err());
    }

    // ========================================================================
    // General Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.th").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_phone_valid() {
        assert!(validate_phone("0812345678").is_ok());
        assert!(validate_phone("081-234-5678").is_ok());
        assert!(validate_phone("+66 81 234 5678").is_ok());
        assert!(validate_phone("(02) 123 4567").is_ok());
    }

    #[test]
    fn test_validate_phone_invalid() {
        assert!(validate_phone("12345").is_err()); // Too short
        assert!(validate_phone("1234567890123456").is_err()); // Too long
        assert!(validate_phone("call me").is_err());
    }

    // ========================================================================
    // Locale & Presentation Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_language_code() {
        assert!(validate_language_code("th").is_ok());
        assert!(validate_language_code("EN").is_ok()); // Case insensitive
        assert!(validate_language_code("xx").is_err());
        assert!(validate_language_code("").is_err());
    }

    #[test]
    fn test_validate_timezone_valid() {
        assert!(validate_timezone("Asia/Bangkok").is_ok());
        assert!(validate_timezone("America/Argentina/Buenos_Aires").is_ok());
        assert!(validate_timezone("Etc/GMT+7").is_ok());
        assert!(validate_timezone("UTC").is_ok());
    }

    #[test]
    fn test_validate_timezone_invalid() {
        assert!(validate_timezone("").is_err());
        assert!(validate_timezone("Asia/กรุงเทพ").is_err());
        assert!(validate_timezone("7/Eleven").is_err()); // Segment starts with digit
        assert!(validate_timezone("A/B/C/D").is_err()); // Too many segments
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("#b45309").is_ok());
        assert!(validate_hex_color("b45309").is_err());
        assert!(validate_hex_color("#fff").is_err());
        assert!(validate_hex_color("#gggggg").is_err());
    }

    // ========================================================================
    // Derive Integration Tests
    // ========================================================================

    #[test]
    fn create_venue_input_runs_custom_rules() {
        let input = CreateVenueInput {
            name: "Sukhumvit Soi 11".to_string(),
            slug: "sukhumvit-soi-11".to_string(),
            address: None,
            location: None,
            timezone: "Asia/Bangkok".to_string(),
            currency: Currency::Thb,
            default_language: Language::Thai,
            supported_languages: vec![Language::Thai, Language::English],
        };
        assert!(input.validate().is_ok());

        let bad = CreateVenueInput {
            slug: "Sukhumvit Soi 11".to_string(),
            timezone: "not a zone!".to_string(),
            ..input
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("slug"));
        assert!(errors.field_errors().contains_key("timezone"));
    }

    // ========================================================================
    // Properties
    // ========================================================================

    proptest! {
        #[test]
        fn normalized_slugs_always_validate(name in "[A-Za-z0-9][A-Za-z0-9 _-]{0,80}") {
            let slug = normalize_slug(&name);
            prop_assert!(validate_slug(&slug).is_ok(), "{name:?} -> {slug:?}");
        }
    }
}
