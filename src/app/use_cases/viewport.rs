//! Use-Case-Funktionen für die Größe der Zeichenfläche.

use crate::app::AppState;

/// Leitet die Szenen-Abmessungen aus der neuen Canvas-Größe ab.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.scene.resize(size);
    log::debug!("Canvas-Größe: {:.0}×{:.0}", size[0], size[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn resize_updates_scene_dimensions() {
        let mut state = AppState::new();

        resize(&mut state, [300.0, 300.0]);

        let dims = state.scene.dimensions;
        assert_eq!(dims.canvas_size, [300.0, 300.0]);
        assert_eq!(dims.center, Vec2::new(150.0, 150.0));
        assert_eq!(dims.bond_length, 60.0);
    }
}
