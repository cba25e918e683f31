use clap::Parser;

/// CLI arguments for the stick simulation
#[derive(Parser, Debug)]
#[command(name = "stick_ants", about = "🐜 Monte Carlo ants-on-a-stick simulator")]
pub struct Args {
    /// Number of ants
    #[arg(short = 'n', long = "ants", default_value_t = 7)]
    pub ants: usize,

    /// Stick length
    #[arg(short = 'l', long = "length", default_value_t = 100.0)]
    pub length: f64,

    /// Ant speed magnitude
    #[arg(short = 's', long = "speed", default_value_t = 1.0)]
    pub speed: f64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Total number of trials
    #[arg(short = 't', long = "trials", default_value_t = 3000)]
    pub trials: u64,

    /// Number of groups the trials are averaged over
    #[arg(long, default_value_t = 1)]
    pub groups: u64,

    /// Trace a single trial step by step instead of aggregating
    #[arg(long, default_value_t = false)]
    pub trace: bool,

    /// Suppress the per-ant probability table (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
