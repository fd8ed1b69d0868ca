//! # Text Channels
//!
//! A [`TextChannel`] is the only thing the readers need from the outside
//! world: show a prompt and get one line back, and print some text. Where the
//! line actually comes from (a terminal, a file, a socket, a test script) is
//! up to the implementation.
//!
//! [`LineChannel`] covers anything with a [`BufRead`] input side and a
//! [`Write`] output side. With the `stdio` feature (on by default)
//! [`LineChannel::stdio`] wires it to the process' stdin and stdout.
//!
//! ## Example
//! ```rust
//! use askloop::channel::{LineChannel, TextChannel};
//!
//! let mut io = LineChannel::new("Ada\n".as_bytes(), Vec::new());
//! let name = io.read_line("Your name?").unwrap();
//! io.write_line(&format!("Hello, {name}")).unwrap();
//!
//! let (_, written) = io.into_inner();
//! assert_eq!(String::from_utf8(written).unwrap(), "Your name?\nHello, Ada\n");
//! ```

use crate::error::ChannelError;
use std::{
    fmt::Display,
    io::{BufRead, Write},
};

/// Prompt-and-read-a-line plus write-some-text.
///
/// Both operations block. A channel that has no more input must answer
/// [`read_line`](TextChannel::read_line) with [`ChannelError::Closed`]
/// instead of handing out empty lines forever.
pub trait TextChannel {
    /// Shows `prompt` and blocks for one line of input, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, ChannelError>;

    /// Writes `text` as is.
    fn write_str(&mut self, text: &str) -> Result<(), ChannelError>;

    /// Writes `value` followed by a newline.
    fn write_line(&mut self, value: &dyn Display) -> Result<(), ChannelError> {
        self.write_str(&format!("{value}\n"))
    }
}

/// A [`TextChannel`] over a buffered reader and a writer.
///
/// Prompts are written on their own line and flushed before reading. Input
/// that is not valid UTF-8 is decoded lossily, with `U+FFFD` in place of the
/// bad bytes.
#[derive(Debug)]
pub struct LineChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Gives back the reader and the writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> TextChannel for LineChannel<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, ChannelError> {
        writeln!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ChannelError::Closed);
        }
        // invalid UTF-8 is still a line; the transform gets to reject it
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn write_str(&mut self, text: &str) -> Result<(), ChannelError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "stdio")] {
        use std::io::{self, StdinLock, Stdout};

        /// [`LineChannel`] bound to the process' stdin and stdout.
        pub type StdioChannel = LineChannel<StdinLock<'static>, Stdout>;

        impl LineChannel<StdinLock<'static>, Stdout> {
            /// Locks stdin for the lifetime of the channel.
            #[cfg_attr(docsrs, doc(cfg(feature = "stdio")))]
            pub fn stdio() -> StdioChannel {
                LineChannel::new(io::stdin().lock(), io::stdout())
            }
        }
    }
}
