use anyhow::Context;
use bin_radix_sort::harness::Width;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_REPS: usize = 1;
const DEFAULT_SIZE: usize = 10;

/// Compare the recursive and iterative binary radix sorts against `sort_unstable`.
///
/// Invoked either as `bin-radix-bench [REPS] [SIZE]` or with `--reps`/`--size`; the flags win when
/// both are given.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of repetitions per width [default: 1]
    #[arg(value_name = "REPS")]
    reps_pos: Option<usize>,

    /// Number of values to sort per repetition [default: 10]
    #[arg(value_name = "SIZE")]
    size_pos: Option<usize>,

    /// Number of repetitions per width
    #[arg(short, long)]
    reps: Option<usize>,

    /// Number of values to sort per repetition
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Random seed, drawn from entropy when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Key widths to benchmark, all of them by default
    #[arg(short, long, value_enum)]
    width: Vec<Width>,
}

impl Args {
    fn reps(&self) -> usize {
        self.reps.or(self.reps_pos).unwrap_or(DEFAULT_REPS)
    }

    fn size(&self) -> usize {
        self.size.or(self.size_pos).unwrap_or(DEFAULT_SIZE)
    }

    fn widths(&self) -> Vec<Width> {
        if self.width.is_empty() {
            Width::ALL.to_vec()
        } else {
            self.width.clone()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let (reps, size) = (args.reps(), args.size());

    println!("Reps: {}", reps);
    println!("Vector size: {}", size);

    for width in args.widths() {
        info!("sorting {}-bit keys", width.bits());
        let report = width
            .benchmark(&mut rng, reps, size)
            .with_context(|| format!("sorting {} values failed verification (seed {})", width.type_name(), seed))?;
        print!("{}", report);
    }

    info!("all outputs matched the reference sort");

    Ok(())
}
