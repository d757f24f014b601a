//! Waypointer interpreter: interactive driver for agent commands.
//!
//! Loads the waypoint catalog from config, embeds it through a local Ollama
//! server, then interprets commands from stdin. Results go to stdout as
//! JSON; logs go to stderr.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use wpt_interpreter::config::InterpreterConfig;
use wpt_interpreter::embedder::OllamaEmbedder;
use wpt_interpreter::{CommandInterpreter, RuleBasedClassifier, repl};
use wpt_matcher::WaypointMatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "wpt-interpreter starting"
    );

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/etc/waypointer/interpreter.toml".to_string());

    let config = InterpreterConfig::from_file(&config_path)?;
    tracing::info!(
        waypoints = config.waypoints.len(),
        top_k = config.matching.top_k,
        min_score = config.matching.min_score,
        min_margin = config.matching.min_margin,
        "config loaded"
    );

    // ── Embedding provider + matcher ────────────────────────────
    tracing::info!(
        host = %config.ollama.host,
        model = %config.ollama.model,
        "ollama embeddings enabled"
    );
    let embedder = Arc::new(OllamaEmbedder::new(config.ollama.clone())?);
    let matcher = WaypointMatcher::new(embedder);

    let interpreter =
        CommandInterpreter::from_config(&config, Box::new(RuleBasedClassifier::new()), matcher);
    interpreter.set_waypoints(config.waypoints.clone()).await?;

    // ── Command loop ────────────────────────────────────────────
    eprintln!("Type a command (or 'exit'):\n");
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let handled = repl::run(&interpreter, stdin, &mut stdout).await?;

    tracing::info!(commands = handled, "wpt-interpreter stopped");
    Ok(())
}
