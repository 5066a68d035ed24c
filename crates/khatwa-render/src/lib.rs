//! Presentation adapter for Khatwa course outlines.
//!
//! - [`build_view`] projects a course tree and navigation state into rows
//! - [`render_outline`] turns those rows into plain text
//! - [`materials_table`] and [`progress_table`] build terminal tables

pub mod kind_style;
pub mod outline;
pub mod tables;
pub mod view;

pub use kind_style::{KindStyle, LOCK_GLYPH, kind_style};
pub use outline::{progress_label, render_outline};
pub use tables::{apply_table_style, materials_table, progress_table};
pub use view::{
    AccordionView, FilePanel, FileRow, GroupRow, LessonRow, ModuleBody, ModuleRow, NO_FILES,
    NO_LESSONS, NO_MODULES, build_view,
};
