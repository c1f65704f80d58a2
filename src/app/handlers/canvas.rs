//! Handler für Zeichenfläche: Label-Drag und Canvas-Größe.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SlotId;

/// Beginnt das Ziehen eines Labels.
pub fn begin_drag(state: &mut AppState, slot: SlotId, pointer: glam::Vec2) {
    use_cases::drag::begin(state, slot, pointer);
}

/// Aktualisiert die Position des gezogenen Labels.
pub fn update_drag(state: &mut AppState, pointer: glam::Vec2) {
    use_cases::drag::update(state, pointer);
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end(state);
}

/// Aktualisiert die Canvas-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
