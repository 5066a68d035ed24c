//! Access checks backed by enrollment and subscription records.
//!
//! ```toml
//! [subscription]
//! plan = "annual"
//! active = true
//!
//! [enrollment]
//! courses = ["internal-audit-101"]
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use khatwa_model::{AccessGrant, AccessPlan, CourseId};

use crate::error::{ContentError, Result};

/// Answers whether the current viewer may open protected content of a course.
pub trait AccessService {
    fn check_access(&self, course_id: &CourseId) -> AccessGrant;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(default)]
    pub courses: BTreeSet<CourseId>,
}

/// Entitlement records for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entitlements {
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub enrollment: Enrollment,
}

impl Entitlements {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::io(path, source))?;
        toml::from_str(&text).map_err(|source| ContentError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the file, treating a missing file as "no entitlements".
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no entitlements file");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn enrolled_course_ids(&self) -> &BTreeSet<CourseId> {
        &self.enrollment.courses
    }
}

impl AccessService for Entitlements {
    /// An active subscription covers every course; otherwise enrollment decides.
    fn check_access(&self, course_id: &CourseId) -> AccessGrant {
        if let Some(subscription) = &self.subscription
            && subscription.active
        {
            return AccessGrant::granted(AccessPlan::Subscription {
                name: subscription.plan.clone(),
            });
        }
        if self.enrollment.courses.contains(course_id) {
            return AccessGrant::granted(AccessPlan::Enrollment);
        }
        AccessGrant::denied()
    }
}

/// Always answers with the same grant.
#[derive(Debug, Clone, Default)]
pub struct FixedAccess(pub AccessGrant);

impl AccessService for FixedAccess {
    fn check_access(&self, _course_id: &CourseId) -> AccessGrant {
        self.0.clone()
    }
}
