//! Keyboard-Shortcuts für die Zeichenfläche.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let text_focused = ui.ctx().memory(|m| m.focused().is_some());
    if text_focused {
        return events;
    }

    let (modifiers, key_r_pressed) =
        ui.input(|i| (i.modifiers, i.key_pressed(egui::Key::R)));

    if key_r_pressed && !modifiers.command {
        events.push(AppIntent::RotateRequested);
    }

    events
}
