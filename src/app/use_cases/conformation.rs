//! Use-Case-Funktionen für Konformation und Drehschritte.

use crate::app::AppState;
use crate::core::ConformationKind;

/// Wechselt die Konformation; Drehschritte beginnen neu.
pub fn set_conformation(state: &mut AppState, kind: ConformationKind) {
    state.scene.set_conformation(kind);
    log::info!(
        "Konformation: {} (Rotation {:.1}°)",
        kind.label(),
        state.scene.conformation.effective_rotation()
    );
}

/// Setzt den ekliptischen Versatz in Grad.
pub fn set_eclipsed_offset(state: &mut AppState, degrees: f32) {
    if !degrees.is_finite() {
        log::warn!("Ekliptischer Versatz ignoriert: {}", degrees);
        return;
    }
    state.scene.set_eclipsed_offset(degrees);
}

/// Dreht die hinteren Bindungen um einen Schritt weiter.
pub fn rotate_step(state: &mut AppState) {
    state.scene.conformation.rotate_step();
    log::info!(
        "Drehschritt {} → Rotation {:.1}°",
        state.scene.conformation.rotations_applied(),
        state.scene.conformation.effective_rotation()
    );
}
