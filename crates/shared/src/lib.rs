// Shared types and utilities for the watchlist core and its front-ends

pub mod logging;
pub mod types;

pub use logging::{console_level, level_filter};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::init_logging;
pub use types::{CoinRecord, MarketEntry};
