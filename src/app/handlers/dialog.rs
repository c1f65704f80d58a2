//! Handler für Optionen und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Übernimmt neue Optionen (ohne sie zu speichern).
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    use_cases::options::apply_options(state, options);
}

/// Setzt Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    use_cases::options::reset_options(state);
}
