//! Page state owned by a single controller: favorites, the search session, the
//! current results and both rendered panels. Front-ends call into it on user
//! events and repaint from [`Watchlist::results_panel`] and
//! [`Watchlist::favorites_panel`].

use log::{error, info};
use shared::{CoinRecord, MarketEntry};

use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::render::{render_favorites, render_results, render_search_error, Panel};
use crate::search::{filter_market, SearchSession, SearchTicket, SearchTrigger};
use crate::storage::KeyValueStore;

pub struct Watchlist<S> {
    favorites: FavoritesStore<S>,
    session: SearchSession,
    results: Vec<CoinRecord>,
    results_panel: Panel,
    favorites_panel: Panel,
}

impl<S: KeyValueStore> Watchlist<S> {
    /// Load favorites from `storage` and render the initial panels.
    pub fn new(storage: S) -> Self {
        let favorites = FavoritesStore::load(storage);
        let favorites_panel = render_favorites(favorites.entries());
        Watchlist {
            favorites,
            session: SearchSession::new(),
            results: Vec::new(),
            results_panel: render_results(&[]),
            favorites_panel,
        }
    }

    /// Handle a search event. Returns a ticket when a fetch should be issued.
    pub fn start_search(&mut self, trigger: &SearchTrigger, query: &str) -> Option<SearchTicket> {
        if !trigger.fires() {
            return None;
        }
        let ticket = self.session.begin(query)?;
        info!("Search #{} for '{}'", ticket.generation(), ticket.query());
        Some(ticket)
    }

    /// Apply the outcome of a fetch. Returns `false` when the ticket was
    /// superseded and the outcome was dropped.
    pub fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<MarketEntry>>,
    ) -> bool {
        if !self.session.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(entries) => {
                self.results = filter_market(entries, ticket.query());
                self.results_panel = render_results(&self.results);
                info!(
                    "Search #{} matched {} coins",
                    ticket.generation(),
                    self.results.len()
                );
            }
            Err(e) => {
                error!("Search #{} failed: {}", ticket.generation(), e);
                self.results.clear();
                self.results_panel = render_search_error(&e.to_string());
            }
        }
        true
    }

    /// Bookmark a coin. Returns whether favorites changed.
    pub fn add_favorite(&mut self, coin: CoinRecord) -> Result<bool> {
        let changed = self.favorites.add(coin).map_err(|e| {
            error!("Could not save favorites: {}", e);
            e
        })?;
        if changed {
            self.favorites_panel = render_favorites(self.favorites.entries());
        }
        Ok(changed)
    }

    /// Bookmark the search result with this id, if one is shown.
    pub fn add_result(&mut self, id: &str) -> Result<bool> {
        match self.find_result(id).cloned() {
            Some(coin) => self.add_favorite(coin),
            None => Ok(false),
        }
    }

    pub fn remove_favorite(&mut self, id: &str) -> Result<bool> {
        let changed = self.favorites.remove(id).map_err(|e| {
            error!("Could not save favorites: {}", e);
            e
        })?;
        if changed {
            self.favorites_panel = render_favorites(self.favorites.entries());
        }
        Ok(changed)
    }

    pub fn find_result(&self, id: &str) -> Option<&CoinRecord> {
        self.results.iter().find(|coin| coin.id == id)
    }

    pub fn results(&self) -> &[CoinRecord] {
        &self.results
    }

    pub fn favorites(&self) -> &[CoinRecord] {
        self.favorites.entries()
    }

    pub fn results_panel(&self) -> &Panel {
        &self.results_panel
    }

    pub fn favorites_panel(&self) -> &Panel {
        &self.favorites_panel
    }

    pub fn into_storage(self) -> S {
        self.favorites.into_storage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WatchlistError;
    use crate::render::{CardAction, NO_FAVORITES};
    use crate::storage::MemoryStore;

    fn market() -> Vec<MarketEntry> {
        vec![
            MarketEntry {
                id: "bitcoin".to_string(),
                name: "Bitcoin".to_string(),
                current_price: Some(50000.0),
            },
            MarketEntry {
                id: "litecoin".to_string(),
                name: "Litecoin".to_string(),
                current_price: Some(80.0),
            },
            MarketEntry {
                id: "ether".to_string(),
                name: "Ether".to_string(),
                current_price: Some(3000.0),
            },
        ]
    }

    fn search(watchlist: &mut Watchlist<MemoryStore>, query: &str) {
        let ticket = watchlist.start_search(&SearchTrigger::Button, query).unwrap();
        assert!(watchlist.finish_search(&ticket, Ok(market())));
    }

    #[test]
    fn test_starts_with_empty_favorites_message() {
        let watchlist = Watchlist::new(MemoryStore::new());
        assert_eq!(watchlist.favorites_panel().empty_message, Some(NO_FAVORITES));
        assert!(watchlist.results_panel().is_empty());
    }

    #[test]
    fn test_non_firing_key_and_empty_query_issue_nothing() {
        let mut watchlist = Watchlist::new(MemoryStore::new());
        assert!(watchlist
            .start_search(&SearchTrigger::Key("b".to_string()), "bit")
            .is_none());
        assert!(watchlist.start_search(&SearchTrigger::Button, "").is_none());
    }

    #[test]
    fn test_empty_query_keeps_previous_results() {
        let mut watchlist = Watchlist::new(MemoryStore::new());
        search(&mut watchlist, "coin");

        assert!(watchlist
            .start_search(&SearchTrigger::Key("Enter".to_string()), "")
            .is_none());
        assert_eq!(watchlist.results().len(), 2);
    }

    #[test]
    fn test_results_render_as_add_cards() {
        let mut watchlist = Watchlist::new(MemoryStore::new());
        search(&mut watchlist, "COIN");

        let panel = watchlist.results_panel();
        assert_eq!(panel.cards.len(), 2);
        assert_eq!(panel.cards[0].name, "Bitcoin");
        assert_eq!(panel.cards[1].name, "Litecoin");
        assert!(panel.cards.iter().all(|c| c.action == CardAction::Add));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut watchlist = Watchlist::new(MemoryStore::new());
        let older = watchlist.start_search(&SearchTrigger::Button, "ether").unwrap();
        let newer = watchlist.start_search(&SearchTrigger::Button, "bit").unwrap();

        // The newer request completes first, then the older one arrives
        assert!(watchlist.finish_search(&newer, Ok(market())));
        assert!(!watchlist.finish_search(&older, Ok(market())));

        assert_eq!(watchlist.results().len(), 1);
        assert_eq!(watchlist.results()[0].id, "bitcoin");
    }

    #[test]
    fn test_failed_search_shows_error() {
        let mut watchlist = Watchlist::new(MemoryStore::new());
        search(&mut watchlist, "coin");

        let ticket = watchlist.start_search(&SearchTrigger::Button, "bit").unwrap();
        let outcome = Err(WatchlistError::Api {
            status: 503,
            body: "unavailable".to_string(),
        });
        assert!(watchlist.finish_search(&ticket, outcome));

        assert!(watchlist.results().is_empty());
        let error = watchlist.results_panel().error.as_deref().unwrap();
        assert!(error.contains("503"));
    }

    #[test]
    fn test_add_result_and_remove_update_panel() {
        let mut watchlist = Watchlist::new(MemoryStore::new());
        search(&mut watchlist, "coin");

        assert!(watchlist.add_result("litecoin").unwrap());
        assert!(!watchlist.add_result("litecoin").unwrap());
        assert!(!watchlist.add_result("ether").unwrap());

        let panel = watchlist.favorites_panel();
        assert_eq!(panel.cards.len(), 1);
        assert_eq!(panel.cards[0].action, CardAction::Remove);
        assert_eq!(panel.cards[0].price_label, "$80");

        assert!(watchlist.remove_favorite("litecoin").unwrap());
        assert!(!watchlist.remove_favorite("litecoin").unwrap());
        assert_eq!(watchlist.favorites_panel().to_html(), "<p>No favorites</p>");
    }

    #[test]
    fn test_favorites_survive_new_controller() {
        let mut watchlist = Watchlist::new(MemoryStore::new());
        watchlist
            .add_favorite(CoinRecord::new("btc-1", "Bitcoin", 50000.0))
            .unwrap();

        let reloaded = Watchlist::new(watchlist.into_storage());
        assert_eq!(
            reloaded.favorites(),
            &[CoinRecord::new("btc-1", "Bitcoin", 50000.0)]
        );
        assert_eq!(reloaded.favorites_panel().cards.len(), 1);
    }
}
