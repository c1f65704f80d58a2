//! Substituenten: sechs feste Slots (3 vorne, 3 hinten) mit Label, Farbe und Position.

use glam::Vec2;

/// Farbe als RGBA (nicht vormultipliziert, 0.0–1.0).
pub type Rgba = [f32; 4];

/// Anzahl der Substituenten pro Atom.
pub const SUBSTITUENTS_PER_SIDE: usize = 3;
/// Gesamtzahl der Substituenten-Slots.
pub const SLOT_COUNT: usize = 2 * SUBSTITUENTS_PER_SIDE;

/// Seite der Projektion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Vorderes Atom (Punkt in der Mitte)
    Front,
    /// Hinteres Atom (Kreis)
    Back,
}

impl Side {
    /// Anzeigename für UI und Log.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Front => "vorne",
            Side::Back => "hinten",
        }
    }
}

/// Stabile Identität eines Substituenten-Slots (Seite + Index 0..3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    side: Side,
    index: usize,
}

impl SlotId {
    /// Alle Slots in fester Reihenfolge: vorne 0→2, dann hinten 0→2.
    pub const ALL: [SlotId; SLOT_COUNT] = [
        SlotId::at(Side::Front, 0),
        SlotId::at(Side::Front, 1),
        SlotId::at(Side::Front, 2),
        SlotId::at(Side::Back, 0),
        SlotId::at(Side::Back, 1),
        SlotId::at(Side::Back, 2),
    ];

    const fn at(side: Side, index: usize) -> Self {
        Self { side, index }
    }

    /// Erstellt eine Slot-ID, falls der Index existiert.
    pub fn new(side: Side, index: usize) -> Option<Self> {
        (index < SUBSTITUENTS_PER_SIDE).then_some(Self { side, index })
    }

    /// Seite des Slots.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Index innerhalb der Seite (0..3).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Flacher Index (0..6).
    pub fn flat(&self) -> usize {
        match self.side {
            Side::Front => self.index,
            Side::Back => SUBSTITUENTS_PER_SIDE + self.index,
        }
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side.label(), self.index + 1)
    }
}

/// Datensatz eines Substituenten.
#[derive(Debug, Clone, PartialEq)]
pub struct Substituent {
    /// Beschriftung (darf Unicode-Tiefstellungen enthalten)
    pub label: String,
    /// Textfarbe
    pub color: Rgba,
    /// Zeichenposition des Labels (None = noch nicht aufgelöst, nicht treffbar)
    pub position: Option<Vec2>,
    /// Position gehört dauerhaft dem Drag-Controller
    pub dragged: bool,
    /// Aktive Drag-Geste läuft
    pub dragging: bool,
}

impl Substituent {
    /// Erstellt einen Substituenten ohne aufgelöste Position.
    pub fn new(label: impl Into<String>, color: Rgba) -> Self {
        Self {
            label: label.into(),
            color,
            position: None,
            dragged: false,
            dragging: false,
        }
    }

    /// Gibt `true` zurück, wenn die Position aus der Geometrie neu berechnet wird.
    pub fn follows_geometry(&self) -> bool {
        !self.dragging && !self.dragged
    }
}

/// Die sechs Substituenten einer Projektion.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstituentSet {
    front: [Substituent; SUBSTITUENTS_PER_SIDE],
    back: [Substituent; SUBSTITUENTS_PER_SIDE],
}

impl SubstituentSet {
    /// Erstellt die Slots aus Labels und Farben (Reihenfolge wie [`SlotId::ALL`]).
    pub fn new(labels: &[String; SLOT_COUNT], colors: &[Rgba; SLOT_COUNT]) -> Self {
        let make = |flat: usize| Substituent::new(labels[flat].clone(), colors[flat]);
        Self {
            front: [make(0), make(1), make(2)],
            back: [make(3), make(4), make(5)],
        }
    }

    /// Liefert den Substituenten eines Slots.
    pub fn get(&self, slot: SlotId) -> &Substituent {
        match slot.side() {
            Side::Front => &self.front[slot.index()],
            Side::Back => &self.back[slot.index()],
        }
    }

    /// Liefert den Substituenten eines Slots (mutable).
    pub fn get_mut(&mut self, slot: SlotId) -> &mut Substituent {
        match slot.side() {
            Side::Front => &mut self.front[slot.index()],
            Side::Back => &mut self.back[slot.index()],
        }
    }

    /// Iteriert in Hit-Test-Reihenfolge: vorne 0→2, dann hinten 0→2.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Substituent)> {
        SlotId::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}
