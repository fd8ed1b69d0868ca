//! Menu items: a label, an action that runs against a channel, and whether
//! choosing it should leave the menu.

use crate::{channel::TextChannel, error::ChannelError};
use std::fmt;

type Action = Box<dyn FnMut(&mut dyn TextChannel) -> Result<(), ChannelError>>;

/// A labelled action bound to a [`TextChannel`].
///
/// ```rust
/// use askloop::{Item, ScriptedChannel, ValidatedReader};
///
/// let mut double = Item::of("Double a number", |io| {
///     let n = io.read_int("Number?", "Wrong integer")?;
///     io.write_line(&(n * 2))
/// });
/// let mut io = ScriptedChannel::new(["21"]);
/// double.perform(&mut io).unwrap();
/// assert_eq!(io.output(), ["42\n"]);
/// assert!(!double.is_exit());
/// ```
pub struct Item {
    label: String,
    action: Action,
    exit: bool,
}

impl Item {
    pub fn new<F>(label: impl Into<String>, action: F, exit: bool) -> Self
    where
        F: FnMut(&mut dyn TextChannel) -> Result<(), ChannelError> + 'static,
    {
        Self {
            label: label.into(),
            action: Box::new(action),
            exit,
        }
    }

    /// An item that keeps the menu running.
    pub fn of<F>(label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut dyn TextChannel) -> Result<(), ChannelError> + 'static,
    {
        Self::new(label, action, false)
    }

    /// "Exit": does nothing and ends the menu.
    pub fn exit() -> Self {
        Self::new("Exit", |_| Ok(()), true)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }

    /// Runs the action. Channel failures inside the action are passed on.
    pub fn perform(&mut self, io: &mut dyn TextChannel) -> Result<(), ChannelError> {
        (self.action)(io)
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("label", &self.label)
            .field("exit", &self.exit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reader::ValidatedReader, testing::ScriptedChannel};

    #[test]
    fn test_exit_item() {
        let mut item = Item::exit();
        assert_eq!(item.label(), "Exit");
        assert!(item.is_exit());

        let mut io = ScriptedChannel::default();
        item.perform(&mut io).unwrap();
        assert!(io.output().is_empty());
        assert!(io.prompts().is_empty());
    }

    #[test]
    fn test_of_defaults_to_not_exit() {
        let item = Item::of("Greet", |io| io.write_line(&"hello"));
        assert!(!item.is_exit());
        assert_eq!(item.label(), "Greet");
    }

    #[test]
    fn test_new_with_exit_flag() {
        let item = Item::new("Quit and save", |_| Ok(()), true);
        assert!(item.is_exit());
    }

    #[test]
    fn test_perform_runs_action_each_time() {
        let mut count = 0;
        let mut item = Item::of("Count", move |io| {
            count += 1;
            io.write_line(&count)
        });
        let mut io = ScriptedChannel::default();
        item.perform(&mut io).unwrap();
        item.perform(&mut io).unwrap();
        assert_eq!(io.output(), ["1\n", "2\n"]);
    }

    #[test]
    fn test_perform_passes_channel_failure() {
        let mut item = Item::of("Read", |io| io.read_int("n?", "Wrong").map(drop));
        let mut io = ScriptedChannel::new(["nope"]);
        assert!(item.perform(&mut io).unwrap_err().is_closed());
        assert_eq!(io.output().len(), 1);
    }

    #[test]
    fn test_debug_hides_action() {
        let item = Item::exit();
        assert_eq!(format!("{item:?}"), "Item { label: \"Exit\", exit: true, .. }");
    }
}
