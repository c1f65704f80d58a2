//! Anwenden der Frame-Geometrie auf den Szenenzustand.

use crate::app::AppState;
use crate::core::apply_frame;

/// Berechnet die Geometrie des aktuellen Zustands und schreibt die
/// Standard-Positionen aller Labels, die der Geometrie folgen.
pub fn apply_current_frame(state: &mut AppState) {
    let frame = state.frame();
    apply_frame(&mut state.scene.substituents, &frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConformationKind, SlotId};
    use glam::Vec2;

    #[test]
    fn dragged_label_survives_frame_application() {
        let mut state = AppState::new();
        let slot = SlotId::ALL[1];
        state.scene.set_dragged(slot, true);
        state.scene.set_position(slot, Vec2::new(12.0, 34.0));

        state.scene.set_conformation(ConformationKind::Eclipsed);
        apply_current_frame(&mut state);

        assert_eq!(
            state.scene.substituent(slot).position,
            Some(Vec2::new(12.0, 34.0))
        );
    }

    #[test]
    fn back_labels_follow_conformation_change() {
        let mut state = AppState::new();
        let slot = SlotId::ALL[3];
        let before = state.scene.substituent(slot).position;

        state.scene.set_conformation(ConformationKind::Eclipsed);
        apply_current_frame(&mut state);

        assert_ne!(state.scene.substituent(slot).position, before);
    }
}
