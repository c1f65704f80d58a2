//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{
    ConformationKind, FrameLayout, Rgba, SceneDimensions, Substituent, TextAlign, TextBaseline,
    SLOT_COUNT,
};
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Abmessungen der Projektion
    pub dimensions: SceneDimensions,
    /// Aktive Konformation
    pub conformation: ConformationKind,
    /// Geometrie aller Bindungen für diesen Frame
    pub frame: FrameLayout,
    /// Schnappschuss der Substituenten (Reihenfolge wie `SlotId::ALL`)
    pub substituents: [Substituent; SLOT_COUNT],
    /// Laufzeit-Optionen für Farben, Größen, Linien
    pub options: EditorOptions,
}

/// Linienstil eines Strichs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Linienstärke
    pub width: f32,
    /// Linienfarbe
    pub color: Rgba,
    /// Strich-/Lückenlänge (None = durchgezogen)
    pub dash: Option<[f32; 2]>,
}

/// Einzelner Zeichenbefehl gegen eine 2D-Zeichenfläche (Canvas-Koordinaten).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Kreis-Umriss
    StrokeCircle {
        center: Vec2,
        radius: f32,
        stroke: StrokeStyle,
    },
    /// Gefüllter Kreis
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Gerades Liniensegment
    StrokeLine {
        from: Vec2,
        to: Vec2,
        stroke: StrokeStyle,
    },
    /// Gefüllter Text am Ankerpunkt
    FillText {
        text: String,
        position: Vec2,
        align: TextAlign,
        baseline: TextBaseline,
        color: Rgba,
        font_size: f32,
    },
}

/// Wandelt eine sRGB-Farbe (0..1, nicht vormultipliziert) in 8-Bit-Kanäle.
pub fn rgba_to_u8(color: Rgba) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}
