//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: async work that must stay on the main thread
//!   (save dialogs, form submissions via `async_compat`)
//! - `rayon::spawn`: CPU-heavy work (image decoding)
//! - `slint::invoke_from_event_loop`: returning results from rayon workers
//!   to the UI thread

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
