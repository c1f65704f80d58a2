use newman_projection_editor::render::{export_png_bytes, CropRect, ExportError};
use newman_projection_editor::{app, AppCommand, AppController, AppIntent, AppState};

fn temp_png(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "newman_projection_{}_{}.png",
        name,
        std::process::id()
    ))
}

#[test]
fn test_export_roundtrip_has_crop_dimensions() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = temp_png("roundtrip");

    controller
        .handle_intent(&mut state, AppIntent::ExportPathSelected { path: path.clone() })
        .expect("Export sollte ohne Fehler durchlaufen");

    let image = image::open(&path).expect("Exportiertes PNG sollte lesbar sein");
    assert_eq!((image.width(), image.height()), (300, 300));
    assert_eq!(state.ui.last_export_path.as_deref(), Some(path.as_path()));
    assert!(state.ui.status_message.is_some());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_export_bytes_follow_canvas_size() {
    let mut state = AppState::new();
    state.scene.resize([240.0, 240.0]);
    let scene = app::build_render_scene(&state);
    let crop = CropRect::for_canvas(scene.dimensions.canvas_size, 1.0 / 8.0);

    let bytes = export_png_bytes(&scene, crop).expect("PNG sollte kodierbar sein");
    let image = image::load_from_memory(&bytes).expect("PNG sollte dekodierbar sein");

    assert_eq!((image.width(), image.height()), (180, 180));
    // Ecke des Ausschnitts liegt außerhalb der Zeichnung: weißer Hintergrund
    assert_eq!(image.to_rgba8().get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn test_export_with_empty_crop_fails() {
    let state = AppState::new();
    let scene = app::build_render_scene(&state);
    let crop = CropRect {
        x: 500,
        y: 500,
        width: 10,
        height: 10,
    };

    let result = export_png_bytes(&scene, crop);

    assert!(matches!(result, Err(ExportError::EmptyCrop)));
}

#[test]
fn test_export_request_only_opens_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_export_dialog);
    assert_eq!(
        state.command_log.last(),
        Some(&AppCommand::RequestExportDialog)
    );
}

#[test]
fn test_export_to_missing_directory_reports_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir()
        .join("newman_projection_missing_dir")
        .join("sub")
        .join("out.png");

    let result = controller.handle_intent(&mut state, AppIntent::ExportPathSelected { path });

    assert!(result.is_err());
    assert!(state.ui.last_export_path.is_none());
}
