pub mod seed;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "filmorate")]
#[command(about = "Loads films and users into an in-memory store and reports on them")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML application config")]
    pub config: Option<String>,

    #[arg(long, help = "Path to a TOML seed file with films, users, likes and friendships")]
    pub seed: Option<String>,

    #[arg(long, help = "How many popular films to report (defaults to the config value)")]
    pub popular: Option<i64>,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
