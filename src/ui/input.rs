//! Zeichenflächen-Input: Maus-Events → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, AppState};
use crate::core::measure_label_widths;
use crate::render::PainterTextMeasure;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Default)]
pub struct InputState {
    /// Primäre Taste wurde auf der Zeichenfläche gedrückt und ist noch unten
    primary_down_on_canvas: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Events der Zeichenfläche und gibt AppIntents zurück.
    ///
    /// Positionen werden in Canvas-Koordinaten (Ursprung oben links in
    /// `response.rect`) übergeben.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;
        let to_canvas = |p: egui::Pos2| glam::Vec2::new(p.x - rect.min.x, p.y - rect.min.y);

        events.push(AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        let (primary_pressed, primary_released, press_origin, latest_pos, delta) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.delta(),
            )
        });

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle)
        if primary_pressed && response.hovered() {
            if let Some(pos) = press_origin {
                let measure = PainterTextMeasure::new(ui.painter());
                let label_widths = measure_label_widths(
                    &state.scene.substituents,
                    &measure,
                    state.options.font_size,
                );
                events.push(AppIntent::PointerPressed {
                    pos: to_canvas(pos),
                    label_widths,
                });
                self.primary_down_on_canvas = true;
            }
        }

        if self.primary_down_on_canvas && delta != egui::Vec2::ZERO {
            if let Some(pos) = latest_pos {
                events.push(AppIntent::PointerMoved {
                    pos: to_canvas(pos),
                });
            }
        }

        if primary_released && self.primary_down_on_canvas {
            events.push(AppIntent::PointerReleased);
            self.primary_down_on_canvas = false;
        }

        if state.drag.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        events
    }
}
