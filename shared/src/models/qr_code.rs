//! QR code models
//!
//! A printed QR code carries an encoded payload; scanning resolves it to a
//! venue's published menus or to one specific menu.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::ids::{MenuId, QrCodeId, VenueId};
use crate::types::Language;

/// Payload format version embedded in printed codes
pub const QR_PAYLOAD_VERSION: u8 = 1;

/// A printed QR code placed at a table or entrance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCode {
    pub id: QrCodeId,
    pub venue_id: VenueId,
    /// Set when the code targets one menu rather than the whole venue
    pub menu_id: Option<MenuId>,
    /// Operator-facing label, e.g. "Table 12"
    pub label: String,
    /// Printable code for manual entry, e.g. "SUKHUMVIT-0042"
    pub short_code: String,
    pub target: QrTarget,
    pub scan_count: u64,
    pub last_scanned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// What scanning a code lands on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QrTarget {
    /// The venue's list of published menus
    Venue,
    Menu,
}

/// Generate a printable short code
pub fn generate_short_code(venue_code: &str, sequence: u32) -> String {
    format!("{}-{:04}", venue_code.to_ascii_uppercase(), sequence)
}

/// Payload embedded in printed QR codes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QrPayload {
    pub version: u8,
    pub venue_id: VenueId,
    pub menu_id: Option<MenuId>,
    /// Optional language hint printed for a specific audience
    pub language: Option<Language>,
}

impl QrPayload {
    pub fn for_venue(venue_id: VenueId) -> Self {
        Self {
            version: QR_PAYLOAD_VERSION,
            venue_id,
            menu_id: None,
            language: None,
        }
    }

    pub fn for_menu(venue_id: VenueId, menu_id: MenuId) -> Self {
        Self {
            version: QR_PAYLOAD_VERSION,
            venue_id,
            menu_id: Some(menu_id),
            language: None,
        }
    }

    /// URL-safe token for embedding in a QR deep link
    pub fn encode(&self) -> String {
        // All payload fields serialize infallibly
        let json = serde_json::to_vec(self).expect("QR payload serializes to JSON");
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Decode a scanned token back into a payload
    pub fn decode(token: &str) -> Result<Self, QrPayloadError> {
        let bytes = URL_SAFE_NO_PAD.decode(token)?;
        let payload: QrPayload = serde_json::from_slice(&bytes)?;
        if payload.version != QR_PAYLOAD_VERSION {
            return Err(QrPayloadError::UnsupportedVersion(payload.version));
        }
        Ok(payload)
    }
}

/// Reasons a scanned token fails to resolve
#[derive(Debug, Error)]
pub enum QrPayloadError {
    #[error("invalid payload encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("invalid payload body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("unsupported payload version {0}")]
    UnsupportedVersion(u8),
}

/// Input for creating a QR code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQrCodeInput {
    #[validate(length(min = 1, max = 64))]
    pub label: String,
    pub target: QrTarget,
    pub menu_id: Option<MenuId>,
    pub language: Option<Language>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_payload_round_trips() {
        let payload = QrPayload::for_venue(VenueId::new());
        let decoded = QrPayload::decode(&payload.encode()).unwrap();
        assert_eq!(payload, decoded);
    }

    #[test]
    fn menu_payload_keeps_the_language_hint() {
        let mut payload = QrPayload::for_menu(VenueId::new(), MenuId::new());
        payload.language = Some(Language::Japanese);
        let decoded = QrPayload::decode(&payload.encode()).unwrap();
        assert_eq!(decoded.language, Some(Language::Japanese));
        assert!(decoded.menu_id.is_some());
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(matches!(
            QrPayload::decode("!!not base64!!"),
            Err(QrPayloadError::Encoding(_))
        ));
        // Valid base64, invalid body
        let token = URL_SAFE_NO_PAD.encode(b"not json");
        assert!(matches!(
            QrPayload::decode(&token),
            Err(QrPayloadError::Body(_))
        ));
    }

    #[test]
    fn future_versions_are_rejected() {
        let mut payload = QrPayload::for_venue(VenueId::new());
        payload.version = 9;
        assert!(matches!(
            QrPayload::decode(&payload.encode()),
            Err(QrPayloadError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn short_codes_are_uppercase_and_padded() {
        assert_eq!(generate_short_code("sukhumvit", 42), "SUKHUMVIT-0042");
    }
}
