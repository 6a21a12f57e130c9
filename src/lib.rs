pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{seed::SeedData, toml_config::AppConfig};
pub use core::app::Filmorate;
pub use domain::model::{Film, Genre, MpaRating, User};
pub use utils::error::{FilmorateError, Result};
