use super::{DragState, UiState};
use crate::app::{use_cases, CommandLog};
use crate::core::{compute_frame, FrameLayout, SceneState};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Szenenzustand der Projektion (Substituenten, Konformation, Abmessungen)
    pub scene: SceneState,
    /// Drag-Geste auf der Zeichenfläche
    pub drag: DragState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Proportionen, Farben, Linien)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    ///
    /// Wendet sofort einen Frame an, damit alle Label-Positionen aufgelöst
    /// (und damit treffbar) sind, bevor die erste Eingabe eintrifft.
    pub fn with_options(options: EditorOptions) -> Self {
        let scene = SceneState::new(
            &options.default_labels,
            &options.default_colors,
            options.default_canvas_size,
            options.scene_proportions(),
        );
        let mut state = Self {
            scene,
            drag: DragState::Idle,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        };
        use_cases::frame::apply_current_frame(&mut state);
        state
    }

    /// Berechnet die Frame-Geometrie für den aktuellen Zustand.
    pub fn frame(&self) -> FrameLayout {
        compute_frame(&self.scene, &self.options.layout_params())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
