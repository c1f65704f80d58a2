//! Rendering der Newman-Projektion.
//!
//! `projection_renderer` erzeugt aus der `RenderScene` eine Zeichenliste;
//! `painter` zeichnet sie mit egui auf den Bildschirm, `raster` rendert sie
//! für den PNG-Export.

mod painter;
mod projection_renderer;
pub mod raster;

pub use crate::shared::{DrawCommand, RenderScene};
pub use painter::{align2, paint_draw_list, PainterTextMeasure};
pub use projection_renderer::build_draw_list;
pub use raster::{export_png_bytes, CropRect, ExportError};
