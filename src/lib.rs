pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ArgsSource, ReaderSource};
pub use config::InputSettings;
pub use core::session::PromptSession;
pub use domain::model::{Sides, Verdict};
pub use domain::triangle::is_triangle;
pub use utils::error::{Result, TriangleError};
