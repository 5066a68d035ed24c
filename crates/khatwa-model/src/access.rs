//! Entitlement data supplied by the access collaborator.

use serde::{Deserialize, Serialize};

/// How a viewer came to have (or not have) access to a course.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccessPlan {
    #[default]
    None,
    Enrollment,
    Subscription {
        name: String,
    },
}

/// Result of an access check for one course.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessGrant {
    pub has_access: bool,
    pub plan: AccessPlan,
}

impl AccessGrant {
    pub fn denied() -> Self {
        Self::default()
    }

    pub fn granted(plan: AccessPlan) -> Self {
        Self {
            has_access: true,
            plan,
        }
    }
}
