//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::hit_test;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos, label_widths } => {
            let hit = hit_test(
                &state.scene.substituents,
                pos,
                &label_widths,
                state.options.hit_box_height,
            );
            match hit {
                Some(slot) => vec![AppCommand::BeginLabelDrag { slot, pointer: pos }],
                None => vec![],
            }
        }
        AppIntent::PointerMoved { pos } => {
            if state.drag.is_dragging() {
                vec![AppCommand::UpdateLabelDrag { pointer: pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => {
            if state.drag.is_dragging() {
                vec![AppCommand::EndLabelDrag]
            } else {
                vec![]
            }
        }
        AppIntent::ViewportResized { size } => {
            if state.scene.dimensions.canvas_size == size {
                vec![]
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }

        AppIntent::LabelEdited { slot, text } => vec![AppCommand::SetLabel { slot, text }],
        AppIntent::LabelCursorMoved { slot, cursor } => {
            vec![AppCommand::SetLabelFocus { slot, cursor }]
        }
        AppIntent::ColorChanged { slot, color } => vec![AppCommand::SetColor { slot, color }],
        AppIntent::SubscriptDigitRequested { digit } => match state.ui.focused_slot {
            Some(slot) => vec![AppCommand::InsertSubscript {
                slot,
                cursor: state.ui.focused_cursor,
                digit,
            }],
            None => {
                log::debug!("Tiefstellung ignoriert: kein Label-Feld fokussiert");
                vec![]
            }
        },
        AppIntent::AutoSubscriptRequested { slot } => {
            vec![AppCommand::ApplyAutoSubscript { slot }]
        }

        AppIntent::ConformationSelected { kind } => {
            if state.scene.conformation.kind == kind {
                vec![]
            } else {
                vec![AppCommand::SetConformation { kind }]
            }
        }
        AppIntent::EclipsedOffsetChanged { degrees } => {
            vec![AppCommand::SetEclipsedOffset { degrees }]
        }
        AppIntent::RotateRequested => vec![AppCommand::RotateStep],

        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportPng { path }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
