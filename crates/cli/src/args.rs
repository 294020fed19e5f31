use clap::Parser;
use fermat_core::RelativeMiss;

/// Search for near misses to Fermat's Last Theorem.
///
/// Examines every pair (x, y) with 10 ≤ x, y ≤ k and reports each time
/// x^n + y^n comes relatively closer to a perfect n-th power.
#[derive(Debug, Parser)]
#[command(name = "fermat-near-miss", version)]
pub struct Cli {
    /// Exponent n (3 through 11). Prompted for if omitted.
    #[arg(short = 'n', long)]
    pub exponent: Option<u32>,

    /// Upper bound k for both x and y (at least 10). Prompted for if omitted.
    #[arg(short = 'k', long)]
    pub upper_bound: Option<u64>,

    /// Stop once a near miss falls below this ratio (e.g. 0.001 or 1/1000).
    #[arg(long, value_name = "RATIO")]
    pub stop_below: Option<RelativeMiss>,

    /// Wait for Enter before exiting.
    #[arg(long)]
    pub pause: bool,

    /// Increase log verbosity on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the default log filter implied by `--verbose`.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
