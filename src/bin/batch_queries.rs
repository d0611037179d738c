//! Answer a file of queries, one per line, as JSON lines
//!
//! Runs the batch sequentially and again in parallel (rayon), checks that
//! both passes agree, then prints one JSON object per query.
//!
//! Usage: cargo run --release --bin batch_queries -- queries.txt

use anyhow::{bail, Context};
use farm_query_engine::{Dataset, EngineConfig, QueryEngine, QueryResult};
use rayon::prelude::*;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_query_engine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: batch_queries <queries.txt>"),
    };
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read queries: {}", path))?;
    let queries: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data/sample".to_string());
    let dataset = Dataset::load(&data_dir)
        .with_context(|| format!("Failed to load snapshot from {}", data_dir))?;
    let engine = QueryEngine::new(EngineConfig::from_env()?);

    // =======================================================================
    // SEQUENTIAL
    // =======================================================================
    let seq_start = Instant::now();
    let sequential: Vec<QueryResult> = queries
        .iter()
        .map(|q| engine.process(q, dataset.projects(), dataset.funders()))
        .collect();
    let seq_time = seq_start.elapsed();

    // =======================================================================
    // PARALLEL
    // =======================================================================
    let par_start = Instant::now();
    let parallel: Vec<QueryResult> = queries
        .par_iter()
        .map(|q| engine.process(q, dataset.projects(), dataset.funders()))
        .collect();
    let par_time = par_start.elapsed();

    tracing::info!(
        queries = queries.len(),
        sequential_us = seq_time.as_micros() as u64,
        parallel_us = par_time.as_micros() as u64,
        "Batch complete"
    );

    if sequential != parallel {
        bail!("parallel results diverged from sequential results");
    }

    for (query, result) in queries.iter().zip(&sequential) {
        let line = serde_json::json!({
            "query": query,
            "intent": engine.classify(query, dataset.projects(), dataset.funders()),
            "result": result,
        });
        println!("{}", line);
    }

    Ok(())
}
