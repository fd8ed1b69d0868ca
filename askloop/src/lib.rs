#![cfg_attr(docsrs, feature(doc_cfg))]
//! # askloop
//!
//! Prompt-until-valid console reads for interactive CLI applications.
//!
//! Every read asks a question on a [`TextChannel`], runs the answer through a
//! transform and, if the transform rejects it, prints the error prompt with
//! the reason and asks again. Nothing but a failing channel (closed input,
//! broken pipe) makes a read return without a value.
//!
//! ## Features
//! - Generic retry primitive: [`ValidatedReader::read_validated`]
//! - Integers and reals: [`read_int`](ValidatedReader::read_int),
//!   [`read_double`](ValidatedReader::read_double)
//! - Half-open numeric ranges, optionally with a predicate on the raw text
//! - Predicate-constrained strings and enumerated options
//! - ISO `YYYY-MM-DD` dates and half-open date ranges
//! - Menu [`Item`]s bound to a channel
//!
//! ### Available Features
//!
//! | Feature | Description                                                      |
//! |---------|------------------------------------------------------------------|
//! | `stdio` | (default) [`LineChannel::stdio`], a channel over stdin/stdout.    |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use askloop::{LineChannel, ValidatedReader};
//!
//! let mut io = LineChannel::stdio();
//! let threads = io
//!     .read_number_range("Enter scan threads [1, 17):", "Wrong value", 1.0, 17.0)
//!     .expect("stdin closed");
//! let mode = io
//!     .read_string_options("Mode (quick/deep)?", "Wrong mode", &["quick", "deep"])
//!     .expect("stdin closed");
//! println!("{threads} threads, {mode} mode");
//! ```
//!
//! ## Scripted input
//!
//! ```rust
//! use askloop::{ScriptedChannel, ValidatedReader};
//!
//! let mut io = ScriptedChannel::new(["1962-13-12", "1962-04-12"]);
//! let date = io.read_iso_date("Input date", "string is not date").unwrap();
//! assert_eq!(date.to_string(), "1962-04-12");
//! assert_eq!(io.output().len(), 1);
//! ```
//!
//! ## Error Handling
//!
//! - [`rules::Rejected`]: why one line was turned down; never returned, only
//!   printed after the error prompt.
//! - [`ChannelError`]: the channel itself failed; returned from every read.

pub mod channel;
pub mod error;
pub mod menu;
pub mod reader;
pub mod rules;
pub mod testing;

pub use channel::{LineChannel, TextChannel};
#[cfg(feature = "stdio")]
pub use channel::StdioChannel;
pub use error::ChannelError;
pub use menu::Item;
pub use reader::ValidatedReader;
pub use testing::ScriptedChannel;
