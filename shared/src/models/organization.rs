//! Organization models
//!
//! An organization is the ownership and billing root: venues, themes and
//! the subscription all hang off it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::OrganizationId;
use crate::types::Language;

/// A tenant organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    /// URL-safe identifier used in public menu links
    pub slug: String,
    pub billing_email: Option<String>,
    pub default_language: Language,
    pub status: OrganizationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle status of an organization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationStatus {
    Active,
    Suspended,
    /// Awaiting removal once the retention window passes
    PendingDeletion,
}

/// Input for registering a new organization
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrganizationInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(custom = "crate::validation::slug_rule")]
    pub slug: String,
    #[validate(email)]
    pub billing_email: Option<String>,
    pub default_language: Language,
}
