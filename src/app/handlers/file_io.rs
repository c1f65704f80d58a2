//! Handler für Export und Optionen-Datei.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Öffnet den Speichern-Dialog für den Export.
pub fn request_export(state: &mut AppState) {
    use_cases::export::request_export_dialog(state);
}

/// Exportiert das zugeschnittene PNG.
pub fn export_png(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::export::export_png(state, path)
}

/// Speichert die Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    use_cases::options::save_options(state, &path)
}
