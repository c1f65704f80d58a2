//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Übernimmt neue Optionen und leitet die Szenen-Proportionen neu ab.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.scene.set_proportions(options.scene_proportions());
    state.options = options;
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    apply_options(state, EditorOptions::default());
    state.ui.status_message = Some("Optionen zurückgesetzt".to_string());
}

/// Speichert die aktuellen Optionen als TOML-Datei.
pub fn save_options(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)?;
    state.ui.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}
