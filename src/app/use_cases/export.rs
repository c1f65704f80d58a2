//! PNG-Export des aktuellen Bildausschnitts.

use crate::app::{render_scene, AppState};
use crate::render::raster::{export_png_file, CropRect};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Öffnet den Speichern-Dialog für den Export über UI-State.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Rendert die Szene, schneidet den konfigurierten Ausschnitt zu und
/// schreibt ihn als PNG nach `path`.
pub fn export_png(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let scene = render_scene::build(state);
    let crop = CropRect::for_canvas(
        scene.dimensions.canvas_size,
        state.options.export_crop_margin_ratio,
    );

    export_png_file(&scene, crop, path)
        .with_context(|| format!("PNG-Export nach {} fehlgeschlagen", path.display()))?;

    let msg = format!(
        "Exportiert: {} ({}×{})",
        path.display(),
        crop.width,
        crop.height
    );
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    state.ui.last_export_path = Some(PathBuf::from(path));
    Ok(())
}
