//! Thelin TUI - Terminal review interface for the Thelin Orchestrator
//!
//! Renders the review dashboard over the backend HTTP API: book additions,
//! business ideas, clarifying questions, and raw lifelogs. Each screen owns
//! its fetch state; network calls run on spawned tasks and report back
//! through the event channel, so the render loop never blocks on I/O.

pub mod app;
pub mod controller;
pub mod events;
pub mod session;
pub mod state;
pub mod ui;
pub mod view;

pub use app::App;
pub use session::Session;
pub use state::AppState;
