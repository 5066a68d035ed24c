//! Course navigation state for Khatwa course outlines.
//!
//! The [`NavigationController`] owns a [`khatwa_model::CourseTree`], the latest
//! [`khatwa_model::AccessGrant`] and a serializable [`NavigationState`]. The
//! presentation layer only reads that state and dispatches [`Intent`]s; the
//! host application carries out the returned [`Effect`]s.

pub mod access;
pub mod controller;
pub mod intent;
pub mod materials;
pub mod progress;
pub mod route;
pub mod search;
pub mod state;

pub use access::AccessPolicy;
pub use controller::NavigationController;
pub use intent::{Effect, Intent, Key};
pub use materials::{MaterialEntry, collect_materials};
pub use progress::{compute_course_progress, compute_progress, effective_progress};
pub use route::lesson_route;
pub use search::filter_lessons;
pub use state::{FocusTarget, NavigationState, Selection};
