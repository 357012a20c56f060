//! CalHome trainer CLI.
//!
//! Trains the estimator from a housing CSV, reports the default-slider
//! estimate, and can dump the fitted pair as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use calhome_core::{HousingBlock, FEATURE_NAMES};
use calhome_trainer::{CsvLayout, Dataset, ForestParams, TrainerParams};

#[derive(Parser, Debug)]
#[command(name = "calhome-train")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deterministic trainer for the CalHome value estimator", long_about = None)]
struct Args {
    /// Input CSV dataset path
    #[arg(short, long)]
    input: PathBuf,

    /// Input uses the raw census column layout
    #[arg(long)]
    raw: bool,

    /// Download the dataset to the input path first (raw layout)
    #[cfg(feature = "fetch")]
    #[arg(long, value_name = "URL", num_args = 0..=1,
          default_missing_value = calhome_trainer::fetch::DATASET_URL)]
    fetch: Option<String>,

    /// Number of trees in the forest
    #[arg(long, default_value = "100")]
    trees: usize,

    /// Maximum tree depth
    #[arg(long, default_value = "16")]
    max_depth: usize,

    /// Minimum samples per leaf
    #[arg(long, default_value = "3")]
    min_samples_leaf: usize,

    /// Seed for the train/test shuffle and the bootstrap draws
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Fraction of rows held out as the test split
    #[arg(long, default_value = "0.2")]
    test_fraction: f64,

    /// Write the fitted estimator as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("CalHome trainer v{}", env!("CARGO_PKG_VERSION"));

    #[cfg(feature = "fetch")]
    if let Some(url) = &args.fetch {
        calhome_trainer::fetch::fetch_dataset(url, &args.input)?;
    }

    let layout = if args.raw {
        CsvLayout::RawCensus
    } else {
        CsvLayout::Canonical
    };

    info!("loading dataset from {}", args.input.display());
    let dataset = match layout {
        CsvLayout::Canonical => Dataset::from_csv(&args.input),
        CsvLayout::RawCensus => Dataset::from_raw_csv(&args.input),
    }
    .context("failed to load dataset")?;
    info!("loaded {} rows", dataset.len());

    for (name, (min, max)) in FEATURE_NAMES.iter().zip(dataset.feature_stats()) {
        info!("  {name}: min={min:.4}, max={max:.4}");
    }

    let params = TrainerParams {
        test_fraction: args.test_fraction,
        split_seed: args.seed,
        forest: ForestParams {
            num_trees: args.trees,
            max_depth: args.max_depth,
            min_samples_leaf: args.min_samples_leaf,
            seed: args.seed,
        },
    };

    info!(
        "training: {} trees, max depth {}, min leaf {}, seed {}",
        params.forest.num_trees,
        params.forest.max_depth,
        params.forest.min_samples_leaf,
        params.forest.seed
    );

    let estimator = calhome_trainer::build_estimator(&dataset, &params)?;
    info!(
        "fitted {} trees over {} nodes",
        estimator.model.tree_count(),
        estimator.model.total_nodes()
    );

    let default_block = HousingBlock::default();
    let estimate = estimator
        .estimate(&default_block)
        .context("default-slider estimate failed")?;
    info!(
        "default sliders estimate: {} ({})",
        estimate.formatted, estimate.tier
    );

    if let Some(output) = &args.output {
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string(&estimator).context("failed to serialize estimator")?;
        std::fs::write(output, json)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!("saved estimator to {}", output.display());
    }

    Ok(())
}
