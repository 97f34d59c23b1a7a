//! User and role models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{OrganizationId, RoleId, UserId};
use crate::types::Language;

/// A user account on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub organization_id: OrganizationId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub preferred_language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A role defining permissions within an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub organization_id: OrganizationId,
    pub name: String,
    /// System roles are created with the organization and cannot be edited
    pub is_system_role: bool,
    pub permissions: Vec<Permission>,
    pub created_at: DateTime<Utc>,
}

/// A permission granting access to a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permission {
    pub resource: Resource,
    pub actions: Vec<Action>,
}

/// Resources that can be accessed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Organization,
    Venue,
    Menu,
    Section,
    Item,
    Schedule,
    Translation,
    Subscription,
    QrCode,
    Theme,
    User,
    Role,
}

/// Actions that can be performed on resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Publish,
    Export,
}

/// Input for inviting a user into an organization
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InviteUserInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub role_id: RoleId,
    pub preferred_language: Language,
}

/// Default roles created for new organizations
pub fn default_roles() -> Vec<(&'static str, Vec<Permission>)> {
    let content_resources = [Resource::Menu, Resource::Section, Resource::Item];

    vec![
        (
            "owner",
            vec![Permission {
                resource: Resource::Organization,
                actions: vec![
                    Action::View,
                    Action::Create,
                    Action::Edit,
                    Action::Delete,
                    Action::Publish,
                    Action::Export,
                ],
            }],
        ),
        (
            "manager",
            [
                Resource::Venue,
                Resource::Menu,
                Resource::Section,
                Resource::Item,
                Resource::Schedule,
                Resource::Translation,
                Resource::QrCode,
                Resource::Theme,
            ]
            .into_iter()
            .map(|resource| Permission {
                resource,
                actions: vec![
                    Action::View,
                    Action::Create,
                    Action::Edit,
                    Action::Delete,
                    Action::Publish,
                ],
            })
            .chain(std::iter::once(Permission {
                resource: Resource::Subscription,
                actions: vec![Action::View],
            }))
            .collect(),
        ),
        (
            "editor",
            content_resources
                .iter()
                .cloned()
                .chain(std::iter::once(Resource::Translation))
                .map(|resource| Permission {
                    resource,
                    actions: vec![Action::View, Action::Create, Action::Edit],
                })
                .collect(),
        ),
        (
            "viewer",
            content_resources
                .iter()
                .cloned()
                .chain(std::iter::once(Resource::Venue))
                .map(|resource| Permission {
                    resource,
                    actions: vec![Action::View],
                })
                .collect(),
        ),
    ]
}
