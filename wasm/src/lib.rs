//! WebAssembly module for the QR Menu Platform
//!
//! Provides client-side computation for:
//! - Menu availability checks against venue schedules
//! - QR payload decoding
//! - Price formatting
//! - Theme contrast checks
//! - Offline input validation

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::ids::*;
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate a menu or venue slug
#[wasm_bindgen]
pub fn is_valid_slug(slug: &str) -> bool {
    validate_slug(slug).is_ok()
}

/// Derive a URL-safe slug from a display name
#[wasm_bindgen]
pub fn slug_from_name(name: &str) -> String {
    normalize_slug(name)
}

/// Check whether a schedule (as JSON) is active at a venue-local time
/// formatted as "YYYY-MM-DDTHH:MM:SS"
#[wasm_bindgen]
pub fn is_schedule_active(schedule_json: &str, local_datetime: &str) -> Result<bool, JsValue> {
    let schedule: Schedule = serde_json::from_str(schedule_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))?;
    let local = NaiveDateTime::parse_from_str(local_datetime, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime: {}", e)))?;
    Ok(schedule.is_active_at(local))
}

/// Decode a scanned QR token into its JSON payload
#[wasm_bindgen]
pub fn decode_qr_token(token: &str) -> Result<String, JsValue> {
    let payload = QrPayload::decode(token).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&payload).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a price for display, e.g. "฿120.00"
#[wasm_bindgen]
pub fn format_price(amount: f64, currency_code: &str) -> Result<String, JsValue> {
    let currency = Currency::from_code(currency_code)
        .ok_or_else(|| JsValue::from_str("Unsupported currency code"))?;
    let amount = Decimal::try_from(amount)
        .map_err(|e| JsValue::from_str(&format!("Invalid amount: {}", e)))?;
    Ok(Money::new(amount, currency).format())
}

/// WCAG contrast ratio between two "#rrggbb" colors
#[wasm_bindgen]
pub fn color_contrast_ratio(foreground: &str, background: &str) -> Result<f64, JsValue> {
    let fg = Color::from_hex(foreground).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let bg = Color::from_hex(background).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(contrast_ratio(fg, bg))
}

/// Whether a foreground/background pair meets WCAG AA for body text
#[wasm_bindgen]
pub fn is_readable(foreground: &str, background: &str) -> Result<bool, JsValue> {
    Ok(color_contrast_ratio(foreground, background)? >= 4.5)
}
