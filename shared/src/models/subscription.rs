//! Subscription and plan models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{OrganizationId, SubscriptionId};

/// Days a past-due subscription keeps serving menus before expiring
pub const PAST_DUE_GRACE_DAYS: i64 = 14;

/// Billing plan tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    Free,
    Starter,
    Professional,
    Enterprise,
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionPlan::Free => write!(f, "Free"),
            SubscriptionPlan::Starter => write!(f, "Starter"),
            SubscriptionPlan::Professional => write!(f, "Professional"),
            SubscriptionPlan::Enterprise => write!(f, "Enterprise"),
        }
    }
}

impl SubscriptionPlan {
    /// Feature ceilings enforced at creation time by the backend
    pub fn limits(&self) -> PlanLimits {
        match self {
            SubscriptionPlan::Free => PlanLimits {
                max_venues: 1,
                max_menus_per_venue: 1,
                max_items_per_menu: 30,
                max_languages: 1,
                custom_themes: false,
                qr_analytics: false,
            },
            SubscriptionPlan::Starter => PlanLimits {
                max_venues: 1,
                max_menus_per_venue: 3,
                max_items_per_menu: 150,
                max_languages: 2,
                custom_themes: false,
                qr_analytics: true,
            },
            SubscriptionPlan::Professional => PlanLimits {
                max_venues: 5,
                max_menus_per_venue: 10,
                max_items_per_menu: 500,
                max_languages: 5,
                custom_themes: true,
                qr_analytics: true,
            },
            SubscriptionPlan::Enterprise => PlanLimits {
                max_venues: 50,
                max_menus_per_venue: 50,
                max_items_per_menu: 5000,
                max_languages: 9,
                custom_themes: true,
                qr_analytics: true,
            },
        }
    }
}

/// What a plan allows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanLimits {
    pub max_venues: u32,
    pub max_menus_per_venue: u32,
    pub max_items_per_menu: u32,
    pub max_languages: u32,
    pub custom_themes: bool,
    pub qr_analytics: bool,
}

/// An organization's subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub organization_id: OrganizationId,
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
    /// When set, the subscription lapses instead of renewing
    pub cancel_at_period_end: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Billing state of a subscription
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trialing,
    Active,
    PastDue,
    Canceled,
    Expired,
}

impl SubscriptionStatus {
    /// Whether menus stay publicly served under this status
    pub fn is_usable(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Trialing | SubscriptionStatus::Active | SubscriptionStatus::PastDue
        )
    }

    /// Allowed billing moves; enforcement is the caller's job
    pub fn can_transition_to(&self, next: &SubscriptionStatus) -> bool {
        use SubscriptionStatus::*;
        matches!(
            (self, next),
            (Trialing, Active)
                | (Trialing, Canceled)
                | (Trialing, Expired)
                | (Active, PastDue)
                | (Active, Canceled)
                | (PastDue, Active)
                | (PastDue, Canceled)
                | (PastDue, Expired)
                | (Canceled, Active)
                | (Expired, Active)
        )
    }
}
