//! fleetview CLI: query aggregated server group views from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fleetview::config::Config;
use fleetview::error::Error;
use fleetview::provider::{FileProviderSource, ProviderSource, RestProviderSource};
use fleetview::view;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

/// Version injected at compile time via FLEETVIEW_VERSION env var (set by
/// CI/CD), or the crate version for local builds.
pub const VERSION: &str = match option_env!("FLEETVIEW_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Aggregated server group views across cloud providers
#[derive(Parser, Debug)]
#[command(name = "fleetview", version = VERSION, about, long_about = None)]
struct Args {
    /// Provider document (JSON file); repeatable
    #[arg(short, long)]
    provider: Vec<PathBuf>,

    /// Remote provider endpoint as <cloud>=<url>; repeatable
    #[arg(short, long)]
    endpoint: Vec<String>,

    /// Bearer token sent to remote provider endpoints
    #[arg(long)]
    token: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List an application's server groups across all providers
    List {
        /// Application name (falls back to the last queried one)
        application: Option<String>,

        /// Only query providers with this cloud provider id
        #[arg(long)]
        cloud_provider: Option<String>,

        /// Emit the denormalized expanded view instead of the summary
        #[arg(long)]
        expand: bool,
    },
    /// Look up one server group by account, region, and name
    Get {
        account: String,
        region: String,
        name: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) {
    let Some(tracing_level) = level.to_tracing_level() else {
        return;
    };

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!("fleetview {} started with log level: {:?}", VERSION, level);
}

/// Assemble the provider list from CLI flags, falling back to remembered
/// configuration when no flags are given.
fn build_providers(args: &Args, config: &Config) -> Result<Vec<Arc<dyn ProviderSource>>> {
    let paths = if args.provider.is_empty() {
        config.providers.clone()
    } else {
        args.provider.clone()
    };
    let endpoints = if args.endpoint.is_empty() {
        config.endpoints.clone()
    } else {
        args.endpoint.clone()
    };

    let mut providers: Vec<Arc<dyn ProviderSource>> = Vec::new();

    for path in &paths {
        providers.push(Arc::new(FileProviderSource::from_path(path)?));
    }

    for spec in &endpoints {
        let (cloud, url) = spec
            .split_once('=')
            .with_context(|| format!("Invalid endpoint '{}'; expected <cloud>=<url>", spec))?;
        let mut source = RestProviderSource::new(cloud, url)?;
        if let Some(token) = &args.token {
            source = source.with_token(token);
        }
        providers.push(Arc::new(source));
    }

    if providers.is_empty() {
        anyhow::bail!("No providers configured; pass --provider and/or --endpoint");
    }

    Ok(providers)
}

fn print_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level);

    let mut config = Config::load();
    let providers = build_providers(&args, &config)?;

    match &args.command {
        Command::List {
            application,
            cloud_provider,
            expand,
        } => {
            let application = application
                .clone()
                .or_else(|| config.effective_application())
                .context("No application given and none remembered; pass one as an argument")?;

            let listing = view::server_groups(
                &providers,
                &application,
                cloud_provider.as_deref(),
                *expand,
            )
            .await?;
            print_output(&listing, args.output)?;

            if let Err(err) = config.remember_query(&application, cloud_provider.as_deref()) {
                tracing::warn!("Failed to save config: {:#}", err);
            }
        }
        Command::Get {
            account,
            region,
            name,
        } => match view::get_server_group(&providers, account, region, name).await {
            Ok(group) => print_output(&group, args.output)?,
            Err(err @ Error::NotFound { .. }) => {
                eprintln!("Error: {}", err);
                std::process::exit(2);
            }
            Err(err) => return Err(err.into()),
        },
    }

    Ok(())
}
