//! Newman Projection Editor.
//!
//! Interaktiver Editor für Newman-Projektionen mit egui: Substituenten
//! beschriften, Konformation wählen, Labels verschieben, als PNG exportieren.

use newman_projection_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Newman Projection Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([960.0, 640.0])
                .with_title("Newman Projection Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Newman Projection Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        // Auch ein Resize zählt: der Frame wurde noch mit der alten Größe gezeichnet
        let recorded_before = self.state.command_log.total_recorded();
        self.process_events(events);
        let state_changed = self.state.command_log.total_recorded() != recorded_before;

        self.maybe_request_repaint(ctx, state_changed);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(
            &mut self.state.ui,
            &self.state.options.export_file_name,
        ));

        egui::CentralPanel::default().show(ctx, |ui| {
            // Quadratische Zeichenfläche, zentriert im verfügbaren Bereich
            let available = ui.max_rect();
            let side = available.width().min(available.height()).max(1.0);
            let rect = egui::Rect::from_center_size(available.center(), egui::vec2(side, side));
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            events.extend(
                self.input
                    .collect_viewport_events(ui, &response, &self.state),
            );

            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

            let scene = self.controller.build_render_scene(&self.state);
            let commands = render::build_draw_list(&scene);
            render::paint_draw_list(&painter, rect.min, &commands);
        });

        events
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, state_changed: bool) {
        if state_changed
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_export_dialog
        {
            ctx.request_repaint();
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }
}
