//! CLI argument definitions for the Khatwa course navigator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use khatwa_model::ResourceKind;

#[derive(Parser)]
#[command(
    name = "khatwa",
    version,
    about = "Khatwa course navigator - browse course outlines from the terminal",
    long_about = "Browse Khatwa course outlines from the terminal.\n\n\
                  Renders the module accordion, lists course materials, reports\n\
                  progress, and replays navigation scripts against a course."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding course files and entitlements.toml
    /// (default: $KHATWA_CONTENT_DIR, then ./content).
    #[arg(long = "content-dir", value_name = "DIR", global = true)]
    pub content_dir: Option<PathBuf>,

    /// Where access decisions come from.
    #[arg(long = "access", value_enum, default_value = "auto", global = true)]
    pub access: AccessArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the module accordion of a course.
    Outline(OutlineArgs),

    /// List every resource of a course.
    Materials(MaterialsArgs),

    /// Show per-module and overall progress.
    Progress(CourseArgs),

    /// Replay a navigation script and print each effect.
    Navigate(NavigateArgs),
}

#[derive(Parser)]
pub struct CourseArgs {
    #[arg(value_name = "COURSE_ID")]
    pub course_id: String,
}

#[derive(Parser)]
pub struct OutlineArgs {
    #[arg(value_name = "COURSE_ID")]
    pub course_id: String,

    /// Expand this module.
    #[arg(long = "expand", value_name = "MODULE_ID")]
    pub expand: Option<String>,

    /// Select this lesson (expands its module).
    #[arg(long = "select", value_name = "LESSON_ID")]
    pub select: Option<String>,

    /// Select this resource group and show its files.
    #[arg(long = "group", value_name = "SUB_AXIS_ID")]
    pub group: Option<String>,

    /// Only show lessons whose title contains this text.
    #[arg(long = "search", value_name = "QUERY")]
    pub search: Option<String>,
}

#[derive(Parser)]
pub struct MaterialsArgs {
    #[arg(value_name = "COURSE_ID")]
    pub course_id: String,

    /// Only list resources of this kind.
    #[arg(long = "kind", value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Parser)]
pub struct NavigateArgs {
    #[arg(value_name = "COURSE_ID")]
    pub course_id: String,

    /// Script with one intent per line.
    ///
    /// Lines are `toggle <module>`, `select <lesson>`, `group <sub-axis>`,
    /// `open <lesson> <resource>`, `download <lesson> <resource>` or
    /// `key <enter|space|up|down>`. Blank lines and `#` comments are skipped.
    #[arg(long = "script", value_name = "FILE")]
    pub script: PathBuf,
}

/// Access decision source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AccessArg {
    /// Read entitlements.toml from the content directory.
    Auto,
    /// Treat the viewer as enrolled.
    Granted,
    /// Treat the viewer as having no access.
    Denied,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Video,
    Audio,
    Pdf,
    Word,
    Excel,
    Other,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Video => ResourceKind::Video,
            KindArg::Audio => ResourceKind::Audio,
            KindArg::Pdf => ResourceKind::Pdf,
            KindArg::Word => ResourceKind::Word,
            KindArg::Excel => ResourceKind::Excel,
            KindArg::Other => ResourceKind::Other,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
