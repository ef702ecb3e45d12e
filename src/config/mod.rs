pub mod toml_config;

use crate::core::decorator::GOOD_PREFIX;
use crate::core::iter::{PerfectScoreFilter, PERFECT_SCORE};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-university")]
#[command(about = "Interactive, in-memory university management menu")]
pub struct CliConfig {
    /// Optional TOML file with grading and presentation settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved settings the facade runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub perfect_score: f64,
    pub include_ungraded: bool,
    pub decorator_prefix: String,
    /// Adds the teacher listing and subject assignment entries to the menu.
    pub staff_options: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            perfect_score: PERFECT_SCORE,
            include_ungraded: true,
            decorator_prefix: GOOD_PREFIX.to_string(),
            staff_options: false,
        }
    }
}

impl Settings {
    pub fn perfect_score_filter(&self) -> PerfectScoreFilter {
        PerfectScoreFilter {
            perfect_score: self.perfect_score,
            include_ungraded: self.include_ungraded,
        }
    }
}
