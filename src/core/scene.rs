//! Szenenzustand: Abmessungen der Projektion und die sechs Substituenten.

use super::conformation::{ConformationConfig, ConformationKind};
use super::substituent::{Rgba, SlotId, Substituent, SubstituentSet, SLOT_COUNT};
use glam::Vec2;

/// Proportionen der Projektion relativ zur Canvas-Breite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneProportions {
    /// Bindungslänge = Canvas-Breite × `bond_length_ratio`
    pub bond_length_ratio: f32,
    /// Kreisradius = Canvas-Breite × `circle_radius_ratio`
    pub circle_radius_ratio: f32,
}

impl Default for SceneProportions {
    fn default() -> Self {
        Self {
            bond_length_ratio: 1.0 / 5.0,
            circle_radius_ratio: 2.0 / 15.0,
        }
    }
}

/// Aus der Canvas-Größe abgeleitete Abmessungen der Projektion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneDimensions {
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Mittelpunkt der Projektion
    pub center: Vec2,
    /// Länge einer Bindung
    pub bond_length: f32,
    /// Radius des hinteren (verdeckenden) Kreises
    pub circle_radius: f32,
}

impl SceneDimensions {
    /// Leitet die Abmessungen aus der Canvas-Größe ab.
    pub fn from_canvas(canvas_size: [f32; 2], proportions: SceneProportions) -> Self {
        let width = canvas_size[0].max(0.0);
        let height = canvas_size[1].max(0.0);
        Self {
            canvas_size: [width, height],
            center: Vec2::new(width / 2.0, height / 2.0),
            bond_length: width * proportions.bond_length_ratio,
            circle_radius: width * proportions.circle_radius_ratio,
        }
    }
}

/// Maßgeblicher Zustand einer Projektion über alle Redraws hinweg.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    /// Die sechs Substituenten
    pub substituents: SubstituentSet,
    /// Konformation und Drehschritte
    pub conformation: ConformationConfig,
    /// Abmessungen für die aktuelle Canvas-Größe
    pub dimensions: SceneDimensions,
    proportions: SceneProportions,
}

impl SceneState {
    /// Erstellt den Szenenzustand aus Startwerten.
    pub fn new(
        labels: &[String; SLOT_COUNT],
        colors: &[Rgba; SLOT_COUNT],
        canvas_size: [f32; 2],
        proportions: SceneProportions,
    ) -> Self {
        Self {
            substituents: SubstituentSet::new(labels, colors),
            conformation: ConformationConfig::default(),
            dimensions: SceneDimensions::from_canvas(canvas_size, proportions),
            proportions,
        }
    }

    /// Liefert den Substituenten eines Slots.
    pub fn substituent(&self, slot: SlotId) -> &Substituent {
        self.substituents.get(slot)
    }

    /// Setzt das Label eines Slots.
    pub fn set_label(&mut self, slot: SlotId, label: impl Into<String>) {
        self.substituents.get_mut(slot).label = label.into();
    }

    /// Setzt die Textfarbe eines Slots.
    pub fn set_color(&mut self, slot: SlotId, color: Rgba) {
        self.substituents.get_mut(slot).color = color;
    }

    /// Wechselt die Konformation (Drehschritte beginnen neu).
    pub fn set_conformation(&mut self, kind: ConformationKind) {
        self.conformation.set_kind(kind);
    }

    /// Setzt den ekliptischen Versatz in Grad.
    pub fn set_eclipsed_offset(&mut self, degrees: f32) {
        self.conformation.eclipsed_offset_deg = degrees;
    }

    /// Setzt das Flag für eine laufende Drag-Geste.
    pub fn set_dragging(&mut self, slot: SlotId, dragging: bool) {
        self.substituents.get_mut(slot).dragging = dragging;
    }

    /// Setzt das Flag für eine vom Benutzer übernommene Position.
    pub fn set_dragged(&mut self, slot: SlotId, dragged: bool) {
        self.substituents.get_mut(slot).dragged = dragged;
    }

    /// Setzt die Zeichenposition eines Slots.
    pub fn set_position(&mut self, slot: SlotId, position: Vec2) {
        self.substituents.get_mut(slot).position = Some(position);
    }

    /// Leitet die Abmessungen für eine neue Canvas-Größe ab.
    pub fn resize(&mut self, canvas_size: [f32; 2]) {
        self.dimensions = SceneDimensions::from_canvas(canvas_size, self.proportions);
    }

    /// Ersetzt die Proportionen (z.B. nach Options-Änderung).
    pub fn set_proportions(&mut self, proportions: SceneProportions) {
        self.proportions = proportions;
        self.dimensions = SceneDimensions::from_canvas(self.dimensions.canvas_size, proportions);
    }
}
