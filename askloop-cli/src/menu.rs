use askloop::{ChannelError, Item, TextChannel, ValidatedReader};
use tracing::{info, warn};

/// Lists `items`, performs the chosen one, and repeats until an exit item runs.
///
/// An empty menu has nothing to select and returns at once.
pub fn run(items: &mut [Item], io: &mut dyn TextChannel) -> Result<(), ChannelError> {
    if items.is_empty() {
        warn!("menu has no items");
        return Ok(());
    }
    let count = items.len();
    let prompt = format!("Select item [1-{count}]:");

    loop {
        for (number, item) in items.iter().enumerate() {
            io.write_line(&format!("{}. {}", number + 1, item.label()))?;
        }

        let choice = io.read_validated(&prompt, "Wrong selection.", |s| {
            s.trim()
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=count).contains(n))
                .map(|n| n - 1)
                .ok_or_else(|| format!("'{s}' is not a number between 1 and {count}"))
        })?;

        let item = &mut items[choice];
        info!(item = item.label(), "menu item selected");
        item.perform(io)?;
        if item.is_exit() {
            return Ok(());
        }
    }
}
