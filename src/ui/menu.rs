//! Top-Menü (Datei, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Als PNG exportieren...").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                if ui.button("Optionen zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let mut options = state.options.clone();
                let mut changed = false;

                changed |= ui
                    .checkbox(&mut options.dashed_back_bonds, "Hintere Bindungen gestrichelt")
                    .changed();
                changed |= ui
                    .checkbox(&mut options.dashed_back_circle, "Hinteren Kreis gestrichelt")
                    .changed();

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Schriftgröße:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut options.font_size).range(6.0..=48.0))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Linienstärke:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut options.line_width)
                                .speed(0.1)
                                .range(0.5..=8.0),
                        )
                        .changed();
                });

                if changed {
                    events.push(AppIntent::OptionsChanged {
                        options: Box::new(options),
                    });
                }

                ui.separator();

                if ui.button("Drehen (R)").clicked() {
                    events.push(AppIntent::RotateRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
