use crate::core::SlotId;
use std::path::PathBuf;

/// UI-bezogener Zustand außerhalb der Szene.
#[derive(Debug, Default)]
pub struct UiState {
    /// Zuletzt fokussiertes Label-Feld
    pub focused_slot: Option<SlotId>,
    /// Cursor-Position (Zeichenindex) im zuletzt fokussierten Feld
    pub focused_cursor: Option<usize>,
    /// Speichern-Dialog für den PNG-Export anzeigen
    pub show_export_dialog: bool,
    /// Pfad des letzten erfolgreichen Exports
    pub last_export_path: Option<PathBuf>,
    /// Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
