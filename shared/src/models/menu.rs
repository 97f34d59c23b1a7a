//! Menu models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{MenuId, ScheduleId, VenueId};

/// A menu published by a venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub venue_id: VenueId,
    pub name: String,
    /// URL-safe identifier, unique within the venue
    pub slug: String,
    pub description: Option<String>,
    /// Service window gating when the menu is shown to guests
    pub schedule_id: Option<ScheduleId>,
    pub display_order: i32,
    pub status: MenuStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Publication workflow state of a menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MenuStatus {
    Draft,
    Published,
    Archived,
}

impl std::fmt::Display for MenuStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuStatus::Draft => write!(f, "Draft"),
            MenuStatus::Published => write!(f, "Published"),
            MenuStatus::Archived => write!(f, "Archived"),
        }
    }
}

impl MenuStatus {
    /// Allowed workflow moves; enforcement is the caller's job
    pub fn can_transition_to(&self, next: &MenuStatus) -> bool {
        use MenuStatus::*;
        matches!(
            (self, next),
            (Draft, Published) | (Published, Draft) | (Published, Archived) | (Archived, Draft)
        )
    }
}

/// Input for creating a menu
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMenuInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(custom = "crate::validation::slug_rule")]
    pub slug: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub schedule_id: Option<ScheduleId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publication_workflow_moves() {
        use MenuStatus::*;
        assert!(Draft.can_transition_to(&Published));
        assert!(Published.can_transition_to(&Draft));
        assert!(Published.can_transition_to(&Archived));
        assert!(Archived.can_transition_to(&Draft));

        assert!(!Draft.can_transition_to(&Archived));
        assert!(!Archived.can_transition_to(&Published));
        assert!(!Draft.can_transition_to(&Draft));
    }
}
