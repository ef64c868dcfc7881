mod cli;
mod simulate;

use std::path::Path;

use folio_common::{FolioError, Result};
use folio_config::FolioConfig;
use folio_fx::ProjectNavigator;
use serde::Serialize;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

const DEFAULT_LOG_DIRECTIVE: &str = "folio=info";

fn load_config(args: &Args) -> (FolioConfig, Option<String>) {
    let loaded = match args.config.as_deref() {
        Some(path) => folio_config::load_config_from(Path::new(path)),
        None => folio_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (FolioConfig::default(), Some(e.to_string())),
    }
}

fn init_logging(args: &Args, config: &FolioConfig) {
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("folio={}", config.logging.level.as_str()));
    let filter = match directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse())
    {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| FolioError::Serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
struct ProjectListing {
    id: usize,
    title: String,
    short_title: String,
    images: usize,
}

fn list_projects(config: &FolioConfig) -> Result<()> {
    let navigator = ProjectNavigator::from_config(&config.projects);
    if navigator.is_empty() {
        tracing::warn!("no projects configured");
    }
    let listing: Vec<ProjectListing> = navigator
        .projects()
        .iter()
        .map(|p| ProjectListing {
            id: p.id,
            title: p.title.clone(),
            short_title: p.short_title(),
            images: p.images.len(),
        })
        .collect();
    print_json(&listing)
}

fn run(args: &Args, config: &FolioConfig) -> Result<()> {
    match &args.command {
        Command::Simulate(sim) => print_json(&simulate::simulate(config, sim)),
        Command::Config => {
            println!("{}", folio_config::config_to_json(config));
            Ok(())
        }
        Command::Projects => list_projects(config),
    }
}

fn main() {
    let args = cli::parse();

    let (config, load_error) = load_config(&args);
    init_logging(&args, &config);

    tracing::info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
