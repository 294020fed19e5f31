mod args;
mod prompt;
mod report;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use fermat_core::{RelativeMiss, SearchParameters};
use fermat_observers::StopBelow;
use fermat_solvers::scan::{self, Action, Event};
use tracing_subscriber::EnvFilter;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .init();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    writeln!(out, "Fermat Near Miss Search: ")?;

    let params = match (cli.exponent, cli.upper_bound) {
        (Some(n), Some(k)) => SearchParameters::new(n, k)
            .with_context(|| format!("invalid parameters n={n}, k={k}"))?,
        _ => prompt::read_parameters(&mut input, &mut out)?,
    };

    run(&params, cli.stop_below, &mut out)?;

    if cli.pause {
        write!(out, "Press Enter to exit...")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
    }

    Ok(())
}

/// Runs one scan, printing each new best and the final summary to `out`.
fn run<W: Write>(
    params: &SearchParameters,
    stop_below: Option<RelativeMiss>,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "{}", report::searching(params))?;
    tracing::info!(
        n = params.exponent(),
        k = params.upper_bound(),
        pairs = params.pair_count(),
        "starting scan"
    );

    let mut write_error = None;
    let printer = |event: &Event<'_>| -> Option<Action> {
        if let Event::NewBest { record, .. } = event
            && let Err(err) = writeln!(out, "{}", report::new_best(record))
        {
            write_error = Some(err);
            return Some(Action::StopEarly);
        }
        None
    };

    let solution = match stop_below {
        Some(threshold) => scan::scan(params, (printer, StopBelow::new(threshold))),
        None => scan::scan(params, printer),
    };

    if let Some(err) = write_error {
        return Err(err).context("failed to write search results");
    }

    report::write_summary(out, params, &solution).context("failed to write search summary")
}
