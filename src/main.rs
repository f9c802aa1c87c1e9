use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelf::shelf_core::config::Config;
use shelf::shelf_core::MatchMode;

#[derive(Parser)]
#[command(name = "shelf", version, about = "Prefix keyword search over a product catalog")]
struct Cli {
    /// Optional TOML config file; skipped when absent.
    #[arg(long, global = true, default_value = "shelf.toml")]
    config: PathBuf,

    /// Catalog JSON file (overrides config).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Listen port (overrides config and $PORT).
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Verbose logging, including per-request spans.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Load the catalog and serve HTTP (default).
    Serve,
    /// Resolve one query against the catalog, print JSON and exit.
    Query {
        /// Query text; multiple words are combined.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Match any word instead of all of them.
        #[arg(long)]
        any: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = shelf::default_log_filter(cli.debug);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::load(Some(&cli.config))?;
    shelf::Overrides {
        catalog: cli.catalog,
        port: cli.port,
    }
    .apply(&mut config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => tokio::runtime::Runtime::new()?.block_on(shelf::serve(config)),
        Command::Query { words, any } => {
            let index = shelf::build_index(&config)?;
            let mode = if any { MatchMode::Any } else { MatchMode::All };
            println!("{}", shelf::query_to_json(&index, &words.join(" "), mode)?);
            Ok(())
        }
    }
}
