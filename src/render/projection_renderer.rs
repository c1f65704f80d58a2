//! Erzeugt die Zeichenbefehle einer Newman-Projektion aus der Render-Szene.

use crate::core::BondKind;
use crate::shared::{DrawCommand, RenderScene, StrokeStyle};

/// Baut die vollständige Zeichenliste für einen Frame.
///
/// Reihenfolge: hinterer Kreis, hintere Bindungen + Labels, vorderer Punkt,
/// vordere Bindungen + Labels.
pub fn build_draw_list(scene: &RenderScene) -> Vec<DrawCommand> {
    let options = &scene.options;
    let frame = &scene.frame;
    let mut commands = Vec::with_capacity(16);

    let circle_stroke = StrokeStyle {
        width: options.line_width,
        color: options.line_color,
        dash: options.dashed_back_circle.then_some(options.dash_pattern),
    };
    if frame.circle_radius > 0.0 {
        commands.push(DrawCommand::StrokeCircle {
            center: frame.center,
            radius: frame.circle_radius,
            stroke: circle_stroke,
        });
    }

    let back = BondKind::Back {
        rotation_degrees: frame.rotation_degrees,
        occlusion_radius: frame.circle_radius,
    };
    push_bonds(scene, back, &mut commands);

    if options.front_atom_radius > 0.0 {
        commands.push(DrawCommand::FillCircle {
            center: frame.center,
            radius: options.front_atom_radius,
            color: options.line_color,
        });
    }

    push_bonds(scene, BondKind::Front, &mut commands);

    commands
}

fn push_bonds(scene: &RenderScene, kind: BondKind, commands: &mut Vec<DrawCommand>) {
    let options = &scene.options;
    let (bonds, dash) = match kind {
        BondKind::Front => (&scene.frame.front, None),
        BondKind::Back { .. } => (
            &scene.frame.back,
            options.dashed_back_bonds.then_some(options.dash_pattern),
        ),
    };
    let stroke = StrokeStyle {
        width: options.line_width,
        color: options.line_color,
        dash,
    };

    for bond in bonds {
        if let Some((from, to)) = bond.segment {
            commands.push(DrawCommand::StrokeLine { from, to, stroke });
        }

        let substituent = &scene.substituents[bond.slot.flat()];
        if substituent.label.is_empty() {
            continue;
        }
        commands.push(DrawCommand::FillText {
            text: substituent.label.clone(),
            position: bond.label_draw_position(substituent),
            align: bond.alignment.align,
            baseline: bond.alignment.baseline,
            color: substituent.color,
            font_size: options.font_size,
        });
    }
}
