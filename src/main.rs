//! Query agent — process entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Resolve effective log level (CLI `-v` flags > env > config)
//!   4. Init logger once
//!   5. Load the knowledge store
//!   6. Build the completion provider and the query pipeline
//!   7. Answer a single `--query`, or serve the HTTP channel until Ctrl-C

use std::sync::Arc;

use tracing::info;

use query_agent::error::AppError;
use query_agent::knowledge::KnowledgeStore;
use query_agent::llm::providers;
use query_agent::pipeline::QueryPipeline;
use query_agent::{config, logger};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let config = config::load(args.config_path.as_deref())?;

    let (effective_log_level, force_cli_level) = logger::effective_level(args.log_level, &config.log_level);
    logger::init(effective_log_level, force_cli_level)?;

    info!(
        service = %config.service_name,
        configured_log_level = %config.log_level,
        effective_log_level = %effective_log_level,
        provider = %config.llm.provider,
        model = %config.llm.openai.model,
        "config loaded"
    );

    let store = KnowledgeStore::load(&config.knowledge.reasons, &config.knowledge.issues)?;
    let provider = providers::build(&config.llm, config.llm_api_key.clone())?;
    let pipeline = Arc::new(QueryPipeline::new(Arc::new(store), provider));

    if let Some(query) = args.query {
        let out = pipeline.handle(&query).await?;
        println!("{}", out.reply);
        return Ok(());
    }

    serve(&config, pipeline).await
}

#[cfg(feature = "channel-axum")]
async fn serve(config: &config::Config, pipeline: Arc<QueryPipeline>) -> Result<(), AppError> {
    use query_agent::comms::axum_channel::AxumChannel;
    use tokio_util::sync::CancellationToken;

    if !config.comms.axum_channel.enabled {
        return Err(AppError::Config(
            "no channel enabled: set [comms.axum_channel] enabled = true or pass --query".into(),
        ));
    }

    // Ctrl-C handler — cancels the token so the server shuts down gracefully.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    AxumChannel::new("axum0", config.comms.axum_channel.bind.clone(), pipeline)
        .run(shutdown)
        .await
}

#[cfg(not(feature = "channel-axum"))]
async fn serve(_config: &config::Config, _pipeline: Arc<QueryPipeline>) -> Result<(), AppError> {
    Err(AppError::Config(
        "built without an HTTP channel; pass --query to answer a single query".into(),
    ))
}

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
    query: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;
    let mut query = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: query-agent [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -q, --query <TEXT>         Answer a single query on stdout and exit");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "-q" | "--query" => {
                if let Some(text) = iter.next() {
                    query = Some(text);
                } else {
                    eprintln!("error: -q/--query requires a text argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    CliArgs { log_level: logger::level_for_verbosity(verbosity), config_path, query }
}
