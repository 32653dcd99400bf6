use watchlist::CoinRecord;

pub const HELP: &str = "\
Type a coin name and press Enter to search.
  /add <n|id>   add the n-th result (or the result with this id) to favorites
  /rm <id>      remove a favorite
  /fav          show favorites
  /results      show the last results
  /help         show this help
  /quit         exit";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Search field contents followed by Enter. May be empty.
    Search(String),
    Add(String),
    Remove(String),
    Favorites,
    Results,
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    pub fn parse(line: &str) -> Input {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let command = match line.strip_prefix('/') {
            Some(command) => command.trim(),
            None => return Input::Search(line.to_string()),
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        match (name, argument) {
            ("add", arg) if !arg.is_empty() => Input::Add(arg.to_string()),
            ("rm" | "remove", arg) if !arg.is_empty() => Input::Remove(arg.to_string()),
            ("fav" | "favorites", "") => Input::Favorites,
            ("results", "") => Input::Results,
            ("help", "") => Input::Help,
            ("quit" | "exit" | "q", "") => Input::Quit,
            _ => Input::Unknown(line.to_string()),
        }
    }
}

/// Resolve an `/add` argument: a 1-based position in the shown results, or
/// a coin id.
pub fn resolve_result<'a>(results: &'a [CoinRecord], target: &str) -> Option<&'a CoinRecord> {
    if let Ok(position) = target.parse::<usize>() {
        if let Some(coin) = position.checked_sub(1).and_then(|i| results.get(i)) {
            return Some(coin);
        }
    }
    results.iter().find(|coin| coin.id == target)
}
