//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::SlotId;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let substituents = &state.scene.substituents;

    RenderScene {
        dimensions: state.scene.dimensions,
        conformation: state.scene.conformation.kind,
        frame: state.frame(),
        substituents: SlotId::ALL.map(|slot| substituents.get(slot).clone()),
        options: state.options.clone(),
    }
}
