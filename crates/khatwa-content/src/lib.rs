#![deny(unsafe_code)]

//! Content and entitlement collaborators for course navigation.

pub mod entitlements;
pub mod error;
pub mod paths;
pub mod source;
pub mod validate;

pub use crate::entitlements::{AccessService, Enrollment, Entitlements, FixedAccess, Subscription};
pub use crate::error::{ContentError, Result};
pub use crate::paths::{CONTENT_ENV_VAR, content_root, entitlements_path};
pub use crate::source::{
    ContentSource, DirectoryContentSource, InMemoryContentSource, read_course_file,
};
pub use crate::validate::validate_course_tree;
