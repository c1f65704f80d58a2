//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Nach den Commands wird die Frame-Geometrie neu angewendet, damit
    /// nicht gezogene Labels an ihren Bindungsenden bleiben.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        if commands.is_empty() {
            return Ok(());
        }

        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));
        use_cases::frame::apply_current_frame(state);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichenfläche ===
            AppCommand::BeginLabelDrag { slot, pointer } => {
                handlers::canvas::begin_drag(state, slot, pointer)
            }
            AppCommand::UpdateLabelDrag { pointer } => handlers::canvas::update_drag(state, pointer),
            AppCommand::EndLabelDrag => handlers::canvas::end_drag(state),
            AppCommand::SetViewportSize { size } => {
                handlers::canvas::set_viewport_size(state, size)
            }

            // === Substituenten ===
            AppCommand::SetLabel { slot, text } => handlers::editing::set_label(state, slot, text),
            AppCommand::SetLabelFocus { slot, cursor } => {
                handlers::editing::set_label_focus(state, slot, cursor)
            }
            AppCommand::SetColor { slot, color } => {
                handlers::editing::set_color(state, slot, color)
            }
            AppCommand::InsertSubscript {
                slot,
                cursor,
                digit,
            } => handlers::editing::insert_subscript(state, slot, cursor, digit),
            AppCommand::ApplyAutoSubscript { slot } => {
                handlers::editing::auto_subscript(state, slot)
            }

            // === Konformation ===
            AppCommand::SetConformation { kind } => {
                handlers::conformation::set_conformation(state, kind)
            }
            AppCommand::SetEclipsedOffset { degrees } => {
                handlers::conformation::set_eclipsed_offset(state, degrees)
            }
            AppCommand::RotateStep => handlers::conformation::rotate_step(state),

            // === Export & Optionen ===
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::ExportPng { path } => handlers::file_io::export_png(state, &path)?,
            AppCommand::SaveOptions => handlers::file_io::save_options(state)?,
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, *options),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
