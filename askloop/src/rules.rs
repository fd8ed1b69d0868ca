//! # Parsing & Validation Rules
//!
//! The canned transforms behind the typed readers of
//! [`crate::reader::ValidatedReader`]. Every rule is a plain function that
//! takes the raw input (or an already parsed value) and returns either the
//! accepted value or a [`Rejected`] describing what went wrong. Rules are
//! chained with [`Result::and_then`] and `?`, and the first failure wins.
//!
//! ## Rules
//! - Type parsing for integers, reals and ISO dates via [`DesiredType`]
//! - Half-open numeric ranges with [`in_range`]
//! - Half-open date ranges with [`date_in_range`]
//! - Caller predicates over the raw text with [`satisfies`]
//! - Option membership with [`one_of`]
//!
//! ## Example
//! ```rust
//! use askloop::rules::{in_range, parse_real};
//!
//! let accepted = parse_real("3.5").and_then(|v| in_range(v, -5.4, 9.0));
//! assert_eq!(accepted, Ok(3.5));
//!
//! let rejected = parse_real("9").and_then(|v| in_range(v, -5.4, 9.0));
//! assert_eq!(
//!     rejected.unwrap_err().to_string(),
//!     "9 is out of range [-5.4, 9)"
//! );
//! ```
use chrono::NaiveDate;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Why a single input line was turned down.
///
/// Each variant renders a distinct human-readable message so an operator can
/// tell a format problem from a range or predicate problem:
/// - [`Format`](Rejected::Format): could not be parsed as the [`DesiredType`].
/// - [`OutOfRange`](Rejected::OutOfRange): parsed, but outside `[min, max)`.
/// - [`DateOutOfRange`](Rejected::DateOutOfRange): same, for dates.
/// - [`Predicate`](Rejected::Predicate): a caller rule returned `false`.
/// - [`NotAnOption`](Rejected::NotAnOption): not one of the allowed strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejected {
    #[error("'{input}' is not a valid {expected}: {reason}")]
    Format {
        input: String,
        expected: DesiredType,
        reason: String,
    },
    #[error("{value} is out of range [{min}, {max})")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("date {date} is out of range [{min}, {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
    #[error("{0}")]
    Predicate(String),
    #[error("'{input}' is not one of the options: {}", .options.join(", "))]
    NotAnOption {
        input: String,
        options: Vec<String>,
    },
}

/// The type a raw line is expected to parse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    Integer,
    Real,
    IsoDate,
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "number"),
            Self::IsoDate => write!(f, "date (YYYY-MM-DD)"),
        }
    }
}

/// Parses `input`, ignoring surrounding whitespace, into `T`.
///
/// The parser's own error message becomes the `reason` of the resulting
/// [`Rejected::Format`].
pub fn parse_as<T>(input: &str, expected: DesiredType) -> Result<T, Rejected>
where
    T: FromStr,
    T::Err: Display,
{
    input.trim().parse::<T>().map_err(|e| Rejected::Format {
        input: input.to_string(),
        expected,
        reason: e.to_string(),
    })
}

/// Base-10 integer.
pub fn parse_int(input: &str) -> Result<i64, Rejected> {
    parse_as(input, DesiredType::Integer)
}

/// Floating point number. `inf` and `NaN` parse, but never pass [`in_range`].
pub fn parse_real(input: &str) -> Result<f64, Rejected> {
    parse_as(input, DesiredType::Real)
}

/// Calendar date in `YYYY-MM-DD` form, no time component.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, Rejected> {
    parse_as(input, DesiredType::IsoDate)
}

/// Accepts `value` when `min <= value < max`.
pub fn in_range(value: f64, min: f64, max: f64) -> Result<f64, Rejected> {
    // written as a positive test so NaN falls through to the error
    if min <= value && value < max {
        Ok(value)
    } else {
        Err(Rejected::OutOfRange { value, min, max })
    }
}

/// Accepts `date` when `min <= date < max`.
pub fn date_in_range(
    date: NaiveDate,
    min: NaiveDate,
    max: NaiveDate,
) -> Result<NaiveDate, Rejected> {
    if min <= date && date < max {
        Ok(date)
    } else {
        Err(Rejected::DateOutOfRange { date, min, max })
    }
}

/// Runs `predicate` on the raw `input`; `message` becomes the rejection text.
pub fn satisfies<'a, P>(input: &'a str, predicate: P, message: &str) -> Result<&'a str, Rejected>
where
    P: Fn(&str) -> bool,
{
    if predicate(input) {
        Ok(input)
    } else {
        Err(Rejected::Predicate(message.to_string()))
    }
}

/// Exact, case-sensitive membership of `input` in `options`.
pub fn one_of<'a, S>(input: &'a str, options: &[S]) -> Result<&'a str, Rejected>
where
    S: AsRef<str>,
{
    if options.iter().any(|option| option.as_ref() == input) {
        Ok(input)
    } else {
        Err(Rejected::NotAnOption {
            input: input.to_string(),
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
        })
    }
}
