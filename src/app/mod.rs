//! Application-Schicht: State, Controller, Events, Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod location;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, FocusMarker, FocusState, MapPhase, UiState, ViewState};
