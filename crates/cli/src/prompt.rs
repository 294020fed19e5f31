use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use fermat_core::{ParamsError, SearchParameters};
use thiserror::Error;

const EXPONENT_PROMPT: &str = "Enter the value for exponent n (2 < n < 12): ";
const UPPER_BOUND_PROMPT: &str = "Enter the value for the upper bound k (k ≥ 10): ";

/// Errors in user-supplied parameter text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{name} must be an integer, got {value:?}")]
    NotAnInteger { name: &'static str, value: String },

    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Parses and validates `n` and `k` from text.
///
/// Integers that are negative or too large for their field fail the same
/// range check as any other out-of-range value.
///
/// # Errors
///
/// Returns an error if either value is not an integer or falls outside the
/// supported domain.
pub fn parse_parameters(n: &str, k: &str) -> Result<SearchParameters, InputError> {
    let n = parse_integer("n", n)?;
    let k = parse_integer("k", k)?;

    let exponent = u32::try_from(n).map_err(|_| ParamsError::InvalidExponent)?;
    let upper_bound = u64::try_from(k).map_err(|_| ParamsError::InvalidUpperBound)?;

    Ok(SearchParameters::new(exponent, upper_bound)?)
}

/// Prompts for `n` and `k` until a valid pair is entered.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if input ends first.
pub fn read_parameters<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<SearchParameters>
where
    R: BufRead,
    W: Write,
{
    loop {
        let n = ask(input, output, EXPONENT_PROMPT)?;
        let k = ask(input, output, UPPER_BOUND_PROMPT)?;

        match parse_parameters(&n, &k) {
            Ok(params) => return Ok(params),
            Err(err) => {
                tracing::debug!(%err, %n, %k, "rejected parameters");
                writeln!(output, "Input error: {err}. Please try again.")?;
            }
        }
    }
}

/// Writes `prompt` and reads one trimmed line.
fn ask<R, W>(input: &mut R, output: &mut W, prompt: &str) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("input ended before search parameters were entered");
    }
    Ok(line.trim().to_owned())
}

fn parse_integer(name: &'static str, value: &str) -> Result<i128, InputError> {
    value.parse().map_err(|_| InputError::NotAnInteger {
        name,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn run(input: &str) -> (anyhow::Result<SearchParameters>, String) {
        let mut input = Cursor::new(input.as_bytes());
        let mut output = Vec::new();
        let result = read_parameters(&mut input, &mut output);
        (result, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn parses_valid_parameters() {
        let params = parse_parameters("5", "25").expect("valid parameters");
        assert_eq!((params.exponent(), params.upper_bound()), (5, 25));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(
            parse_parameters("three", "10"),
            Err(InputError::NotAnInteger {
                name: "n",
                value: "three".to_owned(),
            })
        );
        assert_eq!(
            parse_parameters("3", "10.5"),
            Err(InputError::NotAnInteger {
                name: "k",
                value: "10.5".to_owned(),
            })
        );
    }

    #[test]
    fn out_of_range_integers_fail_the_domain_check() {
        assert_eq!(
            parse_parameters("-3", "10"),
            Err(InputError::Params(ParamsError::InvalidExponent))
        );
        assert_eq!(
            parse_parameters("99999999999", "10"),
            Err(InputError::Params(ParamsError::InvalidExponent))
        );
        assert_eq!(
            parse_parameters("3", "-10"),
            Err(InputError::Params(ParamsError::InvalidUpperBound))
        );
        assert_eq!(
            parse_parameters("12", "10"),
            Err(InputError::Params(ParamsError::InvalidExponent))
        );
    }

    #[test]
    fn prompts_once_for_valid_input() {
        let (result, output) = run("3\n10\n");

        let params = result.expect("valid parameters");
        assert_eq!((params.exponent(), params.upper_bound()), (3, 10));
        assert_eq!(output, format!("{EXPONENT_PROMPT}{UPPER_BOUND_PROMPT}"));
    }

    #[test]
    fn retries_after_bad_input() {
        let (result, output) = run("2\n10\n 4 \n 15\n");

        let params = result.expect("valid parameters");
        assert_eq!((params.exponent(), params.upper_bound()), (4, 15));
        assert_eq!(
            output,
            format!(
                "{EXPONENT_PROMPT}{UPPER_BOUND_PROMPT}\
                 Input error: n must be an integer such that: 2 < n < 12 (3 through 11). \
                 Please try again.\n\
                 {EXPONENT_PROMPT}{UPPER_BOUND_PROMPT}"
            )
        );
    }

    #[test]
    fn errors_when_input_ends() {
        let (result, _) = run("3\n");
        assert!(result.is_err());
    }
}
