//! Use-Case-Funktionen für Label-Text, Farbe und Tiefstellungen.

use crate::app::AppState;
use crate::core::chem_text::{insert_at_char, subscript_digit, subscript_digits};
use crate::core::{Rgba, SlotId};

/// Setzt den Label-Text eines Slots.
pub fn set_label(state: &mut AppState, slot: SlotId, text: String) {
    state.scene.set_label(slot, text);
}

/// Setzt die Textfarbe eines Slots.
pub fn set_color(state: &mut AppState, slot: SlotId, color: Rgba) {
    state.scene.set_color(slot, color);
}

/// Merkt das zuletzt fokussierte Label-Feld und dessen Cursor.
pub fn set_focus(state: &mut AppState, slot: SlotId, cursor: Option<usize>) {
    state.ui.focused_slot = Some(slot);
    state.ui.focused_cursor = cursor;
}

/// Fügt eine tiefgestellte Ziffer an der Cursor-Position ein.
///
/// Ohne bekannten Cursor wird am Ende angehängt. Der Cursor wandert hinter
/// die eingefügte Ziffer.
pub fn insert_subscript(state: &mut AppState, slot: SlotId, cursor: Option<usize>, digit: u8) {
    let Some(glyph) = subscript_digit(digit) else {
        log::warn!("Keine Tiefstellung für Ziffer {}", digit);
        return;
    };

    let label = &state.scene.substituent(slot).label;
    let index = cursor.unwrap_or_else(|| label.chars().count());
    let (text, new_cursor) = insert_at_char(label, index, glyph.encode_utf8(&mut [0; 4]));

    state.scene.set_label(slot, text);
    state.ui.focused_slot = Some(slot);
    state.ui.focused_cursor = Some(new_cursor);
}

/// Stellt alle Ziffern hinter Elementsymbolen/Klammern tief.
pub fn auto_subscript(state: &mut AppState, slot: SlotId) {
    let converted = subscript_digits(&state.scene.substituent(slot).label);
    state.scene.set_label(slot, converted);
}
