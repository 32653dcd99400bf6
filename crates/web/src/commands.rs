use watchlist::{CardAction, KeyValueStore, Result, Watchlist};

/// A card button press, decoded from the clicked element's `data-action` and
/// `data-id` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCommand {
    Add(String),
    Remove(String),
}

impl CardCommand {
    pub fn parse(action: Option<&str>, id: Option<&str>) -> Option<Self> {
        let action = CardAction::from_class(action?)?;
        let id = id.filter(|id| !id.is_empty())?.to_string();
        Some(match action {
            CardAction::Add => CardCommand::Add(id),
            CardAction::Remove => CardCommand::Remove(id),
        })
    }

    /// Run the command. Adds take the coin record from the current results,
    /// never from the markup. Returns whether favorites changed.
    pub fn apply<S: KeyValueStore>(&self, watchlist: &mut Watchlist<S>) -> Result<bool> {
        match self {
            CardCommand::Add(id) => watchlist.add_result(id),
            CardCommand::Remove(id) => watchlist.remove_favorite(id),
        }
    }
}
