use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use basket::{io, mine_association_rules, MiningParams};

/// FP-Growth association rule miner.
#[derive(Parser, Debug)]
#[command(name = "basket", version, about)]
struct Args {
    /// Transaction file: one `<label> <transaction-id> <item-id>` triple
    /// per line.
    #[arg(long)]
    dataset: PathBuf,

    /// Minimum support threshold, in (0, 1].
    #[arg(long, default_value_t = 0.2222)]
    min_sup: f64,

    /// Minimum confidence threshold, in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    min_conf: f64,

    /// Output CSV path.
    #[arg(long)]
    output: PathBuf,
}

fn main() -> basket::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let params = MiningParams::new(args.min_sup, args.min_conf)?;

    let start = Instant::now();
    let transactions = io::read_transactions(&args.dataset)?;
    info!(transactions = transactions.len(), "loaded dataset");

    let rules = mine_association_rules(&transactions, &params)?;
    io::write_rules_csv(&rules, &args.output)?;

    info!(rules = rules.len(), elapsed = ?start.elapsed(), "done");
    Ok(())
}
