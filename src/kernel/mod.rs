//! Headless application core (state/action/effect).

pub mod action;
pub mod dialog;
pub mod effect;
pub mod menu;
pub mod services;
pub mod state;
pub mod store;
pub mod viewport;

pub use action::{Action, FileOp};
pub use dialog::{ColorDialogState, FileDialogMode, FileDialogRow, FileDialogState};
pub use effect::Effect;
pub use menu::{MenuBarState, MenuItem};
pub use state::{AppState, FocusTarget, StatusLevel, StatusMessage};
pub use store::{DispatchResult, Store};
pub use viewport::ViewportState;
