//! The five-line on-disk instance format.
//!
//! ```text
//! 100           (population)
//! 3             (days)
//! 100, 500, 250 (seats per day)
//! 50, 100, 150  (transport prices)
//! 10, 1, 100    (holding prices)
//! ```
//!
//! Lines 3–5 are comma-separated and must each carry exactly as many
//! entries as line 2 declares. People, days, and seats are integers;
//! prices may be fractional.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Instance;
use crate::validation::ValidationError;

/// A failure while reading or interpreting an instance file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before the expected line.
    #[error("line {line} missing: expected {expected}")]
    MissingLine {
        /// 1-based line number.
        line: usize,
        /// What the line should have contained.
        expected: &'static str,
    },

    /// A field could not be parsed as a number.
    #[error("line {line}: cannot parse {value:?} as {expected}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending field, trimmed.
        value: String,
        /// What the field should have been.
        expected: &'static str,
    },

    /// A per-day line carries the wrong number of entries.
    #[error("line {line}: {expected} {kind} entries declared but {actual} found")]
    WrongEntryCount {
        /// 1-based line number.
        line: usize,
        /// Which per-day array the line holds.
        kind: &'static str,
        /// Entries declared on the days line.
        expected: usize,
        /// Entries actually present.
        actual: usize,
    },

    /// The parsed values do not form a valid instance.
    #[error("instance fails validation ({} problems)", .0.len())]
    InvalidInstance(Vec<ValidationError>),
}

/// Parses the five-line instance format from a string.
///
/// # Example
///
/// ```
/// use evac_schedule::parse::parse_instance;
///
/// let instance = parse_instance("100\n3\n100, 500, 250\n50, 100, 150\n10, 1, 100\n").unwrap();
/// assert_eq!(instance.population(), 100);
/// assert_eq!(instance.days(), 3);
/// ```
pub fn parse_instance(input: &str) -> Result<Instance, ParseError> {
    let mut lines = input.lines();

    let population: u32 = parse_field(next_line(&mut lines, 1, "population")?, 1, "population")?;
    let days: usize = parse_field(next_line(&mut lines, 2, "day count")?, 2, "day count")?;

    let capacity: Vec<u32> =
        parse_day_line(next_line(&mut lines, 3, "capacities")?, 3, "capacity", days)?;
    let transport_price: Vec<f64> = parse_day_line(
        next_line(&mut lines, 4, "transport prices")?,
        4,
        "transport price",
        days,
    )?;
    let holding_price: Vec<f64> = parse_day_line(
        next_line(&mut lines, 5, "holding prices")?,
        5,
        "holding price",
        days,
    )?;

    Instance::new(population, capacity, transport_price, holding_price)
        .map_err(ParseError::InvalidInstance)
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Instance, ParseError> {
    parse_instance(&fs::read_to_string(path)?)
}

fn next_line<'a>(
    lines: &mut std::str::Lines<'a>,
    line: usize,
    expected: &'static str,
) -> Result<&'a str, ParseError> {
    lines
        .next()
        .ok_or(ParseError::MissingLine { line, expected })
}

fn parse_field<T: FromStr>(
    raw: &str,
    line: usize,
    expected: &'static str,
) -> Result<T, ParseError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: trimmed.to_string(),
        expected,
    })
}

fn parse_day_line<T: FromStr>(
    raw: &str,
    line: usize,
    kind: &'static str,
    days: usize,
) -> Result<Vec<T>, ParseError> {
    let entries: Vec<T> = raw
        .split(',')
        .map(|field| parse_field(field, line, kind))
        .collect::<Result<_, _>>()?;

    if entries.len() != days {
        return Err(ParseError::WrongEntryCount {
            line,
            kind,
            expected: days,
            actual: entries.len(),
        });
    }
    Ok(entries)
}
