//! Substituenten-Panel (linke Seitenleiste): Labels, Farben, Konformation, Export.

use crate::app::{AppIntent, AppState};
use crate::core::chem_text::subscript_digit;
use crate::core::{ConformationKind, Rgba, Side, SlotId};
use crate::shared::rgba_to_u8;

/// Rendert das Substituenten-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("properties_panel")
        .default_width(240.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Substituenten");
            ui.separator();

            for side in [Side::Front, Side::Back] {
                render_side(ui, state, side, &mut events);
                ui.add_space(4.0);
            }

            render_subscript_buttons(ui, state, &mut events);

            ui.separator();
            render_conformation(ui, state, &mut events);

            ui.separator();
            if ui.button("Als PNG exportieren...").clicked() {
                events.push(AppIntent::ExportRequested);
            }
        });

    events
}

fn render_side(ui: &mut egui::Ui, state: &AppState, side: Side, events: &mut Vec<AppIntent>) {
    let title = match side {
        Side::Front => "Vorderes Atom",
        Side::Back => "Hinteres Atom",
    };
    ui.label(egui::RichText::new(title).strong());

    egui::Grid::new(("substituents", side.label()))
        .num_columns(4)
        .spacing([6.0, 4.0])
        .show(ui, |ui| {
            for slot in SlotId::ALL.into_iter().filter(|s| s.side() == side) {
                render_slot_row(ui, state, slot, events);
                ui.end_row();
            }
        });
}

fn render_slot_row(ui: &mut egui::Ui, state: &AppState, slot: SlotId, events: &mut Vec<AppIntent>) {
    let substituent = state.scene.substituent(slot);

    ui.label(format!("{}", slot.index() + 1));

    let mut text = substituent.label.clone();
    let output = egui::TextEdit::singleline(&mut text)
        .desired_width(90.0)
        .show(ui);
    if output.response.changed() {
        events.push(AppIntent::LabelEdited {
            slot,
            text: text.clone(),
        });
    }
    if output.response.has_focus() {
        let cursor = output.cursor_range.map(|range| range.primary.index);
        if state.ui.focused_slot != Some(slot) || state.ui.focused_cursor != cursor {
            events.push(AppIntent::LabelCursorMoved { slot, cursor });
        }
    }

    let mut color = substituent.color;
    if color_edit(ui, &mut color) {
        events.push(AppIntent::ColorChanged { slot, color });
    }

    if ui
        .small_button("x₂")
        .on_hover_text("Ziffern automatisch tiefstellen")
        .clicked()
    {
        events.push(AppIntent::AutoSubscriptRequested { slot });
    }
}

fn render_subscript_buttons(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let has_focus = state.ui.focused_slot.is_some();

    ui.label("Tiefstellen:");
    ui.horizontal_wrapped(|ui| {
        for digit in 0..=9u8 {
            let Some(glyph) = subscript_digit(digit) else {
                continue;
            };
            let button = egui::Button::new(glyph.to_string()).min_size(egui::vec2(20.0, 0.0));
            let response = ui.add_enabled(has_focus, button);
            if response.clicked() {
                events.push(AppIntent::SubscriptDigitRequested { digit });
            }
        }
    });
}

fn render_conformation(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let conformation = &state.scene.conformation;

    ui.label(egui::RichText::new("Konformation").strong());

    let mut kind = conformation.kind;
    ui.horizontal(|ui| {
        ui.radio_value(&mut kind, ConformationKind::Staggered, "Gestaffelt");
        ui.radio_value(&mut kind, ConformationKind::Eclipsed, "Ekliptisch");
    });
    if kind != conformation.kind {
        events.push(AppIntent::ConformationSelected { kind });
    }

    let mut offset = conformation.eclipsed_offset_deg;
    ui.horizontal(|ui| {
        ui.label("Versatz:");
        let response = ui.add_enabled(
            conformation.kind == ConformationKind::Eclipsed,
            egui::DragValue::new(&mut offset)
                .speed(1.0)
                .range(-180.0..=180.0)
                .suffix("°"),
        );
        if response.changed() {
            events.push(AppIntent::EclipsedOffsetChanged { degrees: offset });
        }
    });

    if ui
        .button("⟳ Drehen")
        .on_hover_text("Hintere Bindungen um 60° weiterdrehen (R)")
        .clicked()
    {
        events.push(AppIntent::RotateRequested);
    }
}

/// Farb-Editor für sRGB-[f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, color: &mut Rgba) -> bool {
    let [r, g, b, a] = rgba_to_u8(*color);
    let mut c = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
    if ui.color_edit_button_srgba(&mut c).changed() {
        let [r, g, b, a] = c.to_srgba_unmultiplied();
        *color = [r, g, b, a].map(|v| v as f32 / 255.0);
        return true;
    }
    false
}
