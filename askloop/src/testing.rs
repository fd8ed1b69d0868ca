//! A scripted [`TextChannel`] for tests and non-interactive runs.

use crate::{channel::TextChannel, error::ChannelError};
use std::collections::VecDeque;

/// Answers prompts from a fixed list of lines and records everything written.
///
/// Once the script is used up, [`read_line`](TextChannel::read_line) fails
/// with [`ChannelError::Closed`].
///
/// ```rust
/// use askloop::{ScriptedChannel, TextChannel};
///
/// let mut io = ScriptedChannel::new(["yes"]);
/// assert_eq!(io.read_line("Continue?").unwrap(), "yes");
/// assert!(io.read_line("Again?").unwrap_err().is_closed());
/// assert_eq!(io.prompts(), ["Continue?", "Again?"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedChannel {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedChannel {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every chunk passed to `write_str`, in order. `write_line` produces one
    /// chunk per call.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl TextChannel for ScriptedChannel {
    fn read_line(&mut self, prompt: &str) -> Result<String, ChannelError> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(ChannelError::Closed)
    }

    fn write_str(&mut self, text: &str) -> Result<(), ChannelError> {
        self.output.push(text.to_string());
        Ok(())
    }
}
