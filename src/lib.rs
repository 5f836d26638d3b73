pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{http::router, memory::InMemoryStore};
pub use app::server::Server;
pub use config::ServiceConfig;
pub use crate::core::{directory::TeacherDirectory, patch::PatchSemantics};
pub use utils::error::{DirectoryError, Result};
