pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::console::IoConsole;
pub use crate::app::menu::{Menu, MenuChoice};
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    decorator::Decorated,
    facade::{GradeEntry, SubjectAssignment, UniversityFacade},
    factory::PersonFactory,
    iter::{PerfectScoreFilter, StudentList},
    observer::{Observable, StudentCountObserver},
    registry::{Registry, SharedRegistry, University},
};
pub use crate::utils::error::{Result, UniversityError};
