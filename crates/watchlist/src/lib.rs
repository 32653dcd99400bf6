// Watchlist core - coin search, favorites persistence and rendering
// Shared by the browser and terminal front-ends

pub mod config;
pub mod controller;
pub mod error;
pub mod favorites;
pub mod market;
pub mod render;
pub mod search;
pub mod storage;

pub use config::WatchConfig;
pub use controller::Watchlist;
pub use error::{Result, WatchlistError};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use market::MarketClient;
pub use render::{CardAction, Panel};
pub use search::{SearchTicket, SearchTrigger, SEARCH_RESULT_LIMIT};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Re-export shared types for convenience
pub use shared::{CoinRecord, MarketEntry};
