//! Verträge zwischen den Layern.
//!
//! `app` baut die `RenderScene`, `render` konsumiert sie; beide lesen die
//! `EditorOptions`. So bleibt `render` frei von App-Abhängigkeiten.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{rgba_to_u8, DrawCommand, RenderScene, StrokeStyle};
