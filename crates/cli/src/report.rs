//! Text rendering of scan results.
//!
//! Relative misses are converted to `f64` here and nowhere else.

use std::io::{self, Write};

use fermat_core::{MissRecord, RelativeMiss, SearchParameters};
use fermat_solvers::scan::{Solution, Status};

/// Returns the banner printed before the scan starts.
#[must_use]
pub fn searching(params: &SearchParameters) -> String {
    format!(
        "Searching for near misses with n={}, x,y in [10, {}] ...",
        params.exponent(),
        params.upper_bound()
    )
}

/// Returns the line printed for each new best.
#[must_use]
pub fn new_best(record: &MissRecord) -> String {
    format!(
        "New best near miss found: x={}, y={}, z={} | absolute miss = {} | relative miss = {}",
        record.x(),
        record.y(),
        record.z,
        record.absolute_miss,
        relative(&record.relative_miss),
    )
}

/// Writes the end-of-search summary.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary<W: Write>(
    out: &mut W,
    params: &SearchParameters,
    solution: &Solution,
) -> io::Result<()> {
    writeln!(out, "Search complete.")?;

    if solution.status == Status::StoppedByObserver {
        writeln!(
            out,
            "  Stopped early after {} of {} pairs.",
            solution.pairs,
            params.pair_count()
        )?;
    }

    match &solution.best {
        Some(record) => {
            writeln!(out, "Smallest relative miss found:")?;
            writeln!(
                out,
                "  x={}, y={}, z={}  absolute miss = {}  relative miss = {}",
                record.x(),
                record.y(),
                record.z,
                record.absolute_miss,
                relative(&record.relative_miss),
            )
        }
        None => writeln!(
            out,
            "  No near misses recorded (this is unexpected for the given search space)."
        ),
    }
}

/// Renders a ratio as a 12-place decimal followed by a 6-place percentage.
fn relative(miss: &RelativeMiss) -> String {
    let value = miss.to_f64();
    format!("{value:.12} ({:.6}%)", value * 100.0)
}
