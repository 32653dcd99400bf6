// Browser front-end - compiled to WebAssembly and loaded by static/index.html
// Only the card command decoding is platform independent

pub mod commands;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

pub use commands::CardCommand;

// Element ids of the four page regions
pub const SEARCH_INPUT_ID: &str = "s";
pub const SEARCH_BUTTON_ID: &str = "b";
pub const RESULTS_ID: &str = "r";
pub const FAVORITES_ID: &str = "f";
