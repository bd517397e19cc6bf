pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{InMemorySessionStore, PlaceholderTextGenerator, StaticFareSource};
pub use app::ConciergeRepl;
pub use crate::core::coordinator::Coordinator;
pub use crate::core::labeler::{filter_and_rank, label};
pub use utils::error::{ConciergeError, Result};
