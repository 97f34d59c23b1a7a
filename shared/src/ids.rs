//! Branded identifier types
//!
//! Newtype wrappers over [`Uuid`] so an id for one entity cannot be passed
//! where another entity's id is expected. The serialized form is a plain
//! UUID string, interchangeable with unbranded id columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a branded id fails to parse
#[derive(Debug, Error)]
#[error("invalid {kind} id: {source}")]
pub struct ParseIdError {
    /// Entity kind the id was parsed for
    pub kind: &'static str,
    #[source]
    pub source: uuid::Error,
}

macro_rules! define_id {
    ($name:ident, $kind:literal) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self).map_err(|source| ParseIdError {
                    kind: $kind,
                    source,
                })
            }
        }
    };
}

define_id!(OrganizationId, "organization");
define_id!(UserId, "user");
define_id!(RoleId, "role");
define_id!(VenueId, "venue");
define_id!(MenuId, "menu");
define_id!(SectionId, "section");
define_id!(ItemId, "item");
define_id!(ScheduleId, "schedule");
define_id!(TranslationId, "translation");
define_id!(SubscriptionId, "subscription");
define_id!(QrCodeId, "qr_code");
define_id!(ThemeId, "theme");
define_id!(MediaId, "media");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        let id = MenuId::new();
        let parsed: MenuId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<VenueId>().unwrap_err();
        assert_eq!(err.kind, "venue");
    }

    #[test]
    fn serializes_as_plain_uuid_string() {
        let id = ItemId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
