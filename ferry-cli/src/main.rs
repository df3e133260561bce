//! Ferry CLI - move issues between GitHub repositories

mod commands;

use clap::{Parser, Subcommand};
use ferry_core::Config;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::MigrateArgs;

/// Ferry: transfer every issue of one GitHub repository into another
#[derive(Parser, Debug)]
#[command(name = "ferry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging, on top of any RUST_LOG directives)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// GraphQL endpoint (overrides config and env)
    #[arg(long, global = true, env = "FERRY_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Transfer all issues from a source repository to a destination repository
    #[command(visible_alias = "m")]
    Migrate(MigrateArgs),

    /// Show current configuration
    Config,
}

/// RUST_LOG directives (default `info`), raised to `debug` by `--verbose`
fn log_filter(verbose: bool, directives: Option<String>) -> EnvFilter {
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(cli.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    match cli.command {
        Some(Commands::Version) => {
            println!("ferry {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Migrate(args)) => {
            let config = Config::load_with_overrides(cli.api_url, args.page_size, args.max_pages)?;
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Config) => {
            let config = Config::load_with_overrides(cli.api_url, None, None)?;
            commands::show_config(&config);
        }
        None => {
            println!("Ferry - transfer issues between GitHub repositories");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
