//! CLI library components for the Khatwa course navigator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod script;
