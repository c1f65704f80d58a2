//! Drag-Geste für Labels: Idle → Dragging → Idle.
//!
//! Beim Greifen werden `dragging` und `dragged` gesetzt; `dragged` bleibt
//! nach dem Loslassen dauerhaft gesetzt, die Position gehört dann dem Benutzer.

use crate::app::{AppState, DragState};
use crate::core::SlotId;
use glam::Vec2;

/// Beginnt eine Drag-Geste für `slot` an Zeigerposition `pointer`.
pub fn begin(state: &mut AppState, slot: SlotId, pointer: Vec2) {
    // Eine verwaiste Geste (Loslassen außerhalb des Fensters) sauber beenden
    end(state);

    let Some(position) = state.scene.substituent(slot).position else {
        log::warn!("Drag ignoriert: Position von {} noch nicht aufgelöst", slot);
        return;
    };

    state.scene.set_dragging(slot, true);
    state.scene.set_dragged(slot, true);
    state.drag = DragState::Dragging {
        slot,
        offset: pointer - position,
    };
    log::debug!("Label-Drag gestartet: {}", slot);
}

/// Lässt das gezogene Label dem Zeiger folgen.
pub fn update(state: &mut AppState, pointer: Vec2) {
    if let DragState::Dragging { slot, offset } = state.drag {
        state.scene.set_position(slot, pointer - offset);
    }
}

/// Beendet die laufende Geste (no-op im Idle-Zustand).
pub fn end(state: &mut AppState) {
    if let DragState::Dragging { slot, .. } = std::mem::take(&mut state.drag) {
        state.scene.set_dragging(slot, false);
        log::debug!("Label-Drag beendet: {}", slot);
    }
}
