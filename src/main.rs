use anyhow::Context;
use clap::Parser;
use filmorate::core::reference::ReferenceCatalog;
use filmorate::core::user_store::InMemoryUserStorage;
use filmorate::utils::error::ErrorCategory;
use filmorate::utils::{logger, validation::Validate};
use filmorate::{AppConfig, CliConfig, Filmorate, FilmorateError, SeedData};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => AppConfig::default(),
    };

    if config.logging.json {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting {}", config.app.name);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let app = Filmorate::with_parts(
        Arc::new(ReferenceCatalog::standard()),
        Arc::new(InMemoryUserStorage::new()),
        config.ranking.default_popular_count,
    );

    if let Err(e) = run(&app, &cli) {
        tracing::error!("Run failed: {} (status {})", e, e.status_code());
        eprintln!("{}", e.user_friendly_message());
        let exit_code = match e.category() {
            ErrorCategory::NotFound | ErrorCategory::BadRequest => 2,
            ErrorCategory::Internal => 1,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run(app: &Filmorate, cli: &CliConfig) -> Result<(), FilmorateError> {
    if let Some(path) = &cli.seed {
        let summary = SeedData::from_file(path)?.apply(app)?;
        println!(
            "Loaded {} users, {} films, {} likes, {} friendships",
            summary.users, summary.films, summary.likes, summary.friendships
        );
    }

    let popular = app.popular_films(cli.popular)?;
    if cli.json {
        let report = serde_json::json!({
            "popular": popular,
            "users": app.list_users(),
        });
        println!("{}", report);
        return Ok(());
    }

    println!("Popular films:");
    for (rank, film) in popular.iter().enumerate() {
        println!(
            "{:>3}. [{}] {} ({} likes)",
            rank + 1,
            film.id,
            film.name,
            film.like_count()
        );
    }

    println!("Users:");
    for user in app.list_users() {
        println!(
            "  [{}] {} <{}>, {} friends",
            user.id,
            user.name,
            user.email,
            user.friends.len()
        );
    }

    Ok(())
}
