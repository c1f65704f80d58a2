use crate::core::SlotId;
use glam::Vec2;

/// Zustand der Drag-Geste auf der Zeichenfläche (Idle → Dragging → Idle).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Ein Label wird gezogen
    Dragging {
        /// Gezogener Slot
        slot: SlotId,
        /// Zeigerposition minus Label-Position beim Greifen
        offset: Vec2,
    },
}

impl DragState {
    /// Slot der laufenden Geste, falls vorhanden.
    pub fn active_slot(&self) -> Option<SlotId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { slot, .. } => Some(*slot),
        }
    }

    /// Gibt `true` zurück, solange eine Geste läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
