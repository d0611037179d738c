//! Ask a single question against a snapshot
//!
//! Usage: cargo run --bin ask -- [--json] "How many projects in California?"
//!
//! Reads the snapshot from `DATA_DIR` (default `data/sample`) and the engine
//! config from `ENGINE_CONFIG` when set.

use anyhow::Context;
use farm_query_engine::{Dataset, EngineConfig, JsonFormatter, PlainTextFormatter, QueryEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_query_engine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut json = false;
    let mut words = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            words.push(arg);
        }
    }
    let query = words.join(" ");

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data/sample".to_string());
    let dataset = Dataset::load(&data_dir)
        .with_context(|| format!("Failed to load snapshot from {}", data_dir))?;
    let engine = QueryEngine::new(EngineConfig::from_env()?);

    tracing::info!(intent = %engine.classify(&query, dataset.projects(), dataset.funders()), "Answering");
    let result = engine.process(&query, dataset.projects(), dataset.funders());

    if json {
        println!("{}", JsonFormatter::format(&result)?);
    } else {
        print!("{}", PlainTextFormatter::format(&result));
    }

    Ok(())
}
