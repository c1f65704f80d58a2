//! Native Datei-Dialoge (rfd).

use crate::app::{AppIntent, UiState};

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState, default_file_name: &str) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let file_name = ui_state
            .last_export_path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(default_file_name);

        let mut dialog = rfd::FileDialog::new()
            .add_filter("PNG-Bild", &["png"])
            .set_file_name(file_name);
        if let Some(dir) = ui_state.last_export_path.as_deref().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            events.push(AppIntent::ExportPathSelected { path });
        }
    }

    events
}
