use chwilio::config::Config;
use chwilio::{ContentIndex, Locale, SearchEngine, Strategy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "chwilio", about = "Chwilio — bilingual site search")]
struct Cli {
    /// Config file to use instead of ~/.config/chwilio/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/chwilio-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one query and print the ranked results.
    Search {
        query: String,
        /// Locale tag (en or cy; anything else searches en).
        #[arg(long)]
        locale: Option<String>,
        /// Maximum results (defaults to the configured limit).
        #[arg(long)]
        limit: Option<usize>,
        /// Override the configured ranking strategy.
        #[arg(long)]
        strategy: Option<Strategy>,
        /// Print `{"results": [...]}` instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Serve the search endpoint over HTTP.
    Serve {
        /// Address to bind (defaults to [server] bind).
        #[arg(long)]
        bind: Option<String>,
    },
    /// Validate a JSON index file.
    Check { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config load failed, using defaults");
            Config::defaults()
        }),
    };

    match cli.command {
        Command::Search {
            query,
            locale,
            limit,
            strategy,
            json,
        } => {
            let mut config = config;
            if let Some(strategy) = strategy {
                config.search.strategy = strategy;
            }
            let engine = SearchEngine::from_config(&config)?;
            let locale = locale.map_or(config.search.locale(), |tag| Locale::resolve(&tag));
            let limit = limit.unwrap_or(config.search.limit);
            let results = engine.search_locale(&query, locale, limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "results": results }))?);
            } else if results.is_empty() {
                println!("No results for {query:?}. Try different keywords.");
            } else {
                for (rank, result) in results.iter().enumerate() {
                    println!("{:>2}. {}  [{}]", rank + 1, result.title, result.category);
                    println!("    {}", result.url);
                    println!("    {}", result.excerpt);
                }
            }
            Ok(())
        }
        Command::Serve { bind } => {
            let engine = Arc::new(SearchEngine::from_config(&config)?);
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(chwilio::server::serve(engine, config.search.locale(), &bind))
        }
        Command::Check { file } => {
            let index = ContentIndex::load(&file)?;
            println!("{}: {} entries OK", file.display(), index.len());
            Ok(())
        }
    }
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let filter = |fallback: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback))
    };

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/chwilio-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!("chwilio debug log started — tail -f /tmp/chwilio-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter("warn"))
            .init();
    }
    Ok(())
}
