use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use qsort3::{input, qsort_counted, Last, Leftmost, MedianOfThree, RandomPivot, SortStats};

/// Reads `n a_1 .. a_n` and prints the values in non-decreasing order.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pivot selection strategy
    #[arg(long, value_enum, default_value_t = Pivot::Random)]
    pivot: Pivot,

    /// Seed for the random pivot strategy (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print comparison and swap counts to stderr
    #[arg(long)]
    stats: bool,

    /// Input file (stdin when omitted)
    #[arg(index = 1)]
    input: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Pivot {
    /// Uniformly random index
    Random,
    /// First element of the range
    First,
    /// Last element of the range
    Last,
    /// Median of first, middle and last
    Median,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut values = input::parse_sequence(&raw).context("malformed input")?;
    info!(n = values.len(), pivot = ?args.pivot, seed = ?args.seed, "read sequence");

    let stats: SortStats = match (args.pivot, args.seed) {
        (Pivot::Random, Some(seed)) => qsort_counted(&mut values, &mut RandomPivot::seeded(seed)),
        (Pivot::Random, None) => qsort_counted(&mut values, &mut RandomPivot::thread()),
        (Pivot::First, _) => qsort_counted(&mut values, &mut Leftmost),
        (Pivot::Last, _) => qsort_counted(&mut values, &mut Last),
        (Pivot::Median, _) => qsort_counted(&mut values, &mut MedianOfThree),
    };
    info!(comparisons = stats.comparisons, swaps = stats.swaps, "sorted sequence");

    if args.stats {
        eprintln!("comparisons: {} swaps: {}", stats.comparisons, stats.swaps);
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for (i, x) in values.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{x}")?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
