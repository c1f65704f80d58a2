//! Handler für Label-Text, Farben und Tiefstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Rgba, SlotId};

/// Setzt den Label-Text.
pub fn set_label(state: &mut AppState, slot: SlotId, text: String) {
    use_cases::labels::set_label(state, slot, text);
}

/// Merkt Fokus und Cursor eines Label-Felds.
pub fn set_label_focus(state: &mut AppState, slot: SlotId, cursor: Option<usize>) {
    use_cases::labels::set_focus(state, slot, cursor);
}

/// Setzt die Textfarbe.
pub fn set_color(state: &mut AppState, slot: SlotId, color: Rgba) {
    use_cases::labels::set_color(state, slot, color);
}

/// Fügt eine tiefgestellte Ziffer ein.
pub fn insert_subscript(state: &mut AppState, slot: SlotId, cursor: Option<usize>, digit: u8) {
    use_cases::labels::insert_subscript(state, slot, cursor, digit);
}

/// Stellt Ziffern im Label automatisch tief.
pub fn auto_subscript(state: &mut AppState, slot: SlotId) {
    use_cases::labels::auto_subscript(state, slot);
}
