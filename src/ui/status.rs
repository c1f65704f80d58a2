//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let conformation = &state.scene.conformation;
    let [width, height] = state.scene.dimensions.canvas_size;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Konformation: {} | Rotation: {:.1}° | Drehschritte: {}",
                conformation.kind.label(),
                conformation.effective_rotation(),
                conformation.rotations_applied()
            ));

            ui.separator();

            ui.label(format!("Zeichenfläche: {:.0}×{:.0}", width, height));

            if let Some(slot) = state.drag.active_slot() {
                ui.separator();
                ui.label(format!("Ziehe: {}", slot));
            }

            if let Some(msg) = &state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
