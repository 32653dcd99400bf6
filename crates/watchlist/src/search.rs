//! Search over the market listing: trigger rules, the name filter, and the
//! generation counter that keeps an older response from overwriting a newer
//! search.

use log::debug;
use shared::{CoinRecord, MarketEntry};

/// Most cards a search ever shows.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// What the user did in the search area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTrigger {
    /// The search button was activated.
    Button,
    /// A key went down in the search field. Carries the key name.
    Key(String),
}

impl SearchTrigger {
    pub fn fires(&self) -> bool {
        match self {
            SearchTrigger::Button => true,
            SearchTrigger::Key(key) => key == "Enter",
        }
    }
}

/// Keep the entries whose name contains `query` ignoring case, in listing
/// order, capped at [`SEARCH_RESULT_LIMIT`].
pub fn filter_market(entries: Vec<MarketEntry>, query: &str) -> Vec<CoinRecord> {
    let needle = query.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .take(SEARCH_RESULT_LIMIT)
        .map(CoinRecord::from)
        .collect()
}

/// Handle for one issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Hands out tickets; only the most recent one is current.
#[derive(Debug, Default)]
pub struct SearchSession {
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `query`. An empty query issues nothing and leaves
    /// the current ticket valid.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        if query.is_empty() {
            return None;
        }
        self.generation += 1;
        Some(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        let current = ticket.generation == self.generation;
        if !current {
            debug!(
                "Search #{} for '{}' superseded by #{}",
                ticket.generation, ticket.query, self.generation
            );
        }
        current
    }
}
