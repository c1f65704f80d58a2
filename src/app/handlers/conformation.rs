//! Handler für Konformation und Drehung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ConformationKind;

/// Setzt die Konformation.
pub fn set_conformation(state: &mut AppState, kind: ConformationKind) {
    use_cases::conformation::set_conformation(state, kind);
}

/// Setzt den ekliptischen Versatz.
pub fn set_eclipsed_offset(state: &mut AppState, degrees: f32) {
    use_cases::conformation::set_eclipsed_offset(state, degrees);
}

/// Führt einen Drehschritt aus.
pub fn rotate_step(state: &mut AppState) {
    use_cases::conformation::rotate_step(state);
}
