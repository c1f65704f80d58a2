//! Application State — zentrale Datenhaltung.
//!
//! Der `AppState` besitzt den Szenenzustand der Projektion, den Drag-Zustand
//! der Zeichenfläche, UI-Zustand und die Laufzeit-Optionen.

mod app_state;
mod drag;
mod ui;

pub use app_state::AppState;
pub use drag::DragState;
pub use ui::UiState;
