//! Command line interface to the training-plan optimizer.
//!
//! Loads a catalog, runs one combination search, prints the ranked
//! response as text or JSON. Exits non-zero on catalog or search
//! failures; an infeasible (empty) result is a normal zero-exit outcome.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trainplan::catalog::{load_catalog, ActivityCatalog};
use trainplan::search::{SearchConfig, SearchResult, SearchRunner};
use trainplan::Result;

#[derive(Debug, Parser)]
#[command(name = "trainplan", version, about = "Finds the best activity combinations under time and freshness budgets")]
struct Cli {
    /// Path to a JSON catalog (array of activity records).
    #[arg(long, required_unless_present = "builtin", conflicts_with = "builtin")]
    catalog: Option<PathBuf>,

    /// Use the built-in example catalog instead of a file.
    #[arg(long)]
    builtin: bool,

    /// Available time in hours.
    #[arg(long, default_value_t = 10)]
    time: u32,

    /// Available freshness (0..=ceiling).
    #[arg(long, default_value_t = 80)]
    resource: i32,

    /// Upper bound of the freshness scale.
    #[arg(long, default_value_t = 100)]
    ceiling: i32,

    /// Number of combinations to return.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Cap on repetitions of any single activity.
    #[arg(long)]
    max_count: Option<u32>,

    /// Restrict the search to these activities (comma-separated names).
    #[arg(long, value_delimiter = ',')]
    only: Option<Vec<String>>,

    /// Abort (or truncate, with --best-effort) after this many search nodes.
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Return partial results on cancellation or node exhaustion.
    #[arg(long)]
    best_effort: bool,

    /// Split the search across worker threads (needs the `parallel` feature).
    #[arg(long)]
    parallel: bool,

    /// Print the response as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None if cli.builtin => ActivityCatalog::builtin(),
        // clap enforces --catalog unless --builtin is given.
        None => unreachable!(),
    };
    if let Some(names) = &cli.only {
        catalog = catalog.restrict(names)?;
    }

    let mut config = SearchConfig::default()
        .with_available_time(cli.time)
        .with_available_resource(cli.resource)
        .with_resource_ceiling(cli.ceiling)
        .with_top_n(cli.top)
        .with_best_effort(cli.best_effort)
        .with_parallel(cli.parallel);
    if let Some(count) = cli.max_count {
        config = config.with_max_count_per_activity(count);
    }
    if let Some(nodes) = cli.max_nodes {
        config = config.with_max_nodes(nodes);
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    if let Err(err) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::Relaxed)) {
        tracing::warn!(%err, "could not install ctrl-c handler; searches are not interruptible");
    }

    let result = SearchRunner::run_with_cancel(&catalog, &config, Some(cancel))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_text(&result);
    }
    Ok(())
}

fn print_text(result: &SearchResult) {
    if result.is_infeasible() {
        println!("no feasible combination under the given budgets");
        return;
    }

    for (index, combination) in result.combinations.iter().enumerate() {
        println!("{:2}. {}", index + 1, combination.describe());
        println!(
            "    score {} | duration {}h | freshness cost {}",
            combination.score, combination.total_duration, combination.total_resource_cost
        );
        if combination.skill_totals.len() > 1 {
            let breakdown = combination
                .skill_totals
                .iter()
                .map(|(dimension, points)| format!("{dimension} {points}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("    {breakdown}");
        }
    }

    println!(
        "({} feasible candidates, {} nodes visited, {} pruned, {} ms)",
        result.feasible_count, result.nodes_visited, result.nodes_pruned, result.elapsed_ms
    );
}
