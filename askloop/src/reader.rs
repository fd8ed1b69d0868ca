//! # Validated Reads
//!
//! [`ValidatedReader`] repeatedly prompts on a [`TextChannel`] until the
//! answer passes a transform. It is implemented for every channel, so the
//! methods are available on any `LineChannel`, `ScriptedChannel` or
//! `&mut dyn TextChannel`.
//!
//! ## Behaviour
//! - Prompts until the transform accepts the line. There is no attempt limit
//!   and no timeout: the caller is blocked until the operator gets it right.
//! - On every rejection it writes `"<error prompt> <reason>"` as one line and
//!   asks again.
//! - Only [`ChannelError`]s end a read without a value, and they are
//!   returned the moment they happen.
//!
//! ## Example
//! ```rust
//! use askloop::{ScriptedChannel, ValidatedReader};
//!
//! let mut io = ScriptedChannel::new(["abc", "3.5", "42"]);
//! let n = io.read_int("Input integer", "Wrong integer").unwrap();
//!
//! assert_eq!(n, 42);
//! assert_eq!(io.output().len(), 2);
//! ```

use crate::{
    channel::TextChannel,
    error::ChannelError,
    rules::{self, Rejected},
};
use chrono::NaiveDate;
use std::fmt::Display;
use tracing::{debug, trace};

/// Retrying, validating reads over a [`TextChannel`].
///
/// Every method is built on [`read_validated`](ValidatedReader::read_validated);
/// the typed ones only supply a canned transform from [`crate::rules`].
/// Ranges are half-open everywhere: `min` is accepted, `max` is not.
pub trait ValidatedReader: TextChannel {
    /// Prompts until `transform` accepts the line and returns its value.
    ///
    /// A failed transform prints `error_prompt`, a space and the failure,
    /// then prompts again.
    fn read_validated<T, E, F>(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        mut transform: F,
    ) -> Result<T, ChannelError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Display,
    {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            let line = self.read_line(prompt)?;

            match transform(&line) {
                Ok(value) => {
                    trace!(attempt, "input accepted");
                    return Ok(value);
                }
                Err(e) => {
                    debug!(attempt, reason = %e, "input rejected");
                    self.write_line(&format!("{error_prompt} {e}"))?;
                }
            }
        }
    }

    /// Base-10 integer.
    fn read_int(&mut self, prompt: &str, error_prompt: &str) -> Result<i64, ChannelError> {
        self.read_validated(prompt, error_prompt, rules::parse_int)
    }

    /// Any floating point number.
    fn read_double(&mut self, prompt: &str, error_prompt: &str) -> Result<f64, ChannelError> {
        self.read_validated(prompt, error_prompt, rules::parse_real)
    }

    /// A number in `[min, max)`.
    fn read_number_range(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        min: f64,
        max: f64,
    ) -> Result<f64, ChannelError> {
        self.read_validated(prompt, error_prompt, |input| {
            rules::parse_real(input).and_then(|value| rules::in_range(value, min, max))
        })
    }

    /// A number in `[min, max)` whose raw text also satisfies `predicate`.
    ///
    /// Checks run in order (parse, range, predicate) and the predicate only
    /// sees lines that already passed the range check. A predicate failure
    /// is reported with `predicate_error` rather than a range message.
    fn read_number_range_with_predicate<P>(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        predicate_error: &str,
        min: f64,
        max: f64,
        predicate: P,
    ) -> Result<f64, ChannelError>
    where
        P: Fn(&str) -> bool,
    {
        self.read_validated(prompt, error_prompt, |input| {
            let value = rules::parse_real(input).and_then(|v| rules::in_range(v, min, max))?;
            rules::satisfies(input, &predicate, predicate_error)?;
            Ok::<_, Rejected>(value)
        })
    }

    /// A line for which `predicate` holds, returned unchanged.
    fn read_string_predicate<P>(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        predicate: P,
    ) -> Result<String, ChannelError>
    where
        P: Fn(&str) -> bool,
    {
        self.read_validated(prompt, error_prompt, |input| {
            if predicate(input) {
                Ok(input.to_string())
            } else {
                Err(Rejected::Predicate(format!(
                    "'{input}' does not satisfy the required condition"
                )))
            }
        })
    }

    /// A line that is exactly one of `options` (case-sensitive).
    fn read_string_options<S>(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        options: &[S],
    ) -> Result<String, ChannelError>
    where
        S: AsRef<str>,
    {
        self.read_validated(prompt, error_prompt, |input| {
            rules::one_of(input, options).map(str::to_string)
        })
    }

    /// A calendar date written as `YYYY-MM-DD`.
    fn read_iso_date(
        &mut self,
        prompt: &str,
        error_prompt: &str,
    ) -> Result<NaiveDate, ChannelError> {
        self.read_validated(prompt, error_prompt, rules::parse_iso_date)
    }

    /// A `YYYY-MM-DD` date in `[min, max)`.
    fn read_iso_date_range(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        min: NaiveDate,
        max: NaiveDate,
    ) -> Result<NaiveDate, ChannelError> {
        self.read_validated(prompt, error_prompt, |input| {
            rules::parse_iso_date(input).and_then(|date| rules::date_in_range(date, min, max))
        })
    }
}

impl<C: TextChannel + ?Sized> ValidatedReader for C {}
