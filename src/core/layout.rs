//! Label-Platzierung: Bindungsend-Positionen, Textausrichtung und Frame-Anwendung.
//!
//! `compute_frame` ist rein und liefert die Geometrie aller sechs Bindungen.
//! `apply_frame` ist der einzige Schritt, der Positionen in den Substituenten
//! schreibt – und zwar nur für Slots, die nicht per Drag übernommen wurden.

use super::geometry::{bond_endpoint, BondKind};
use super::scene::{SceneDimensions, SceneState};
use super::substituent::{Side, SlotId, Substituent, SubstituentSet, SUBSTITUENTS_PER_SIDE};
use glam::Vec2;

/// Toleranz, ab der eine Bindung als senkrecht gilt (Canvas-Einheiten).
pub const VERTICAL_BOND_TOLERANCE: f32 = 1e-3;

/// Horizontale Textausrichtung relativ zum Ankerpunkt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Text beginnt am Ankerpunkt
    Left,
    /// Text endet am Ankerpunkt
    Right,
}

/// Vertikale Text-Baseline relativ zum Ankerpunkt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// Oberkante am Ankerpunkt (Bindung zeigt nach unten)
    Top,
    /// Vertikal zentriert
    Middle,
    /// Unterkante am Ankerpunkt (Bindung zeigt nach oben)
    Bottom,
}

/// Ausrichtung eines Labels für einen Frame (wird nie pro Substituent gespeichert).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAlignment {
    /// Horizontale Ausrichtung
    pub align: TextAlign,
    /// Vertikale Baseline
    pub baseline: TextBaseline,
    /// Horizontaler Versatz der Zeichenposition
    pub nudge_x: f32,
}

/// Parameter der Label-Platzierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Zusätzlicher Abstand des Labels hinter dem Bindungsende
    pub substituent_offset: f32,
    /// Horizontaler Versatz für Labels an senkrechten Bindungen
    pub vertical_nudge: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            substituent_offset: 5.0,
            vertical_nudge: -7.0,
        }
    }
}

/// Bestimmt die Textausrichtung aus dem Quadranten des Bindungsendes.
pub fn resolve_alignment(endpoint: Vec2, center: Vec2, vertical_nudge: f32) -> LabelAlignment {
    let dx = endpoint.x - center.x;

    if dx.abs() <= VERTICAL_BOND_TOLERANCE {
        let baseline = if endpoint.y > center.y {
            TextBaseline::Top
        } else if endpoint.y < center.y {
            TextBaseline::Bottom
        } else {
            TextBaseline::Middle
        };
        return LabelAlignment {
            align: TextAlign::Left,
            baseline,
            nudge_x: vertical_nudge,
        };
    }

    LabelAlignment {
        align: if dx >= 0.0 {
            TextAlign::Left
        } else {
            TextAlign::Right
        },
        baseline: TextBaseline::Middle,
        nudge_x: 0.0,
    }
}

/// Standard-Position eines Labels: Bindungsende plus `substituent_offset`.
pub fn snapped_label_position(
    center: Vec2,
    angle: f32,
    bond_length: f32,
    substituent_offset: f32,
) -> Vec2 {
    bond_endpoint(center, angle, bond_length + substituent_offset)
}

/// Geometrie einer einzelnen Bindung in einem Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondLayout {
    /// Slot des Substituenten an dieser Bindung
    pub slot: SlotId,
    /// Bindungswinkel in Radiant
    pub angle: f32,
    /// Bindungsende
    pub endpoint: Vec2,
    /// Zu zeichnendes Segment (None = nicht zeichnen)
    pub segment: Option<(Vec2, Vec2)>,
    /// Label-Position am Bindungsende
    pub snapped_label_position: Vec2,
    /// Textausrichtung für diesen Frame
    pub alignment: LabelAlignment,
}

impl BondLayout {
    /// Zeichenposition des Labels inkl. Versatz für senkrechte Bindungen.
    pub fn label_draw_position(&self, substituent: &Substituent) -> Vec2 {
        let base = substituent.position.unwrap_or(self.snapped_label_position);
        base + Vec2::new(self.alignment.nudge_x, 0.0)
    }
}

/// Geometrie aller sechs Bindungen für einen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Mittelpunkt der Projektion
    pub center: Vec2,
    /// Radius des hinteren Kreises
    pub circle_radius: f32,
    /// Effektive Rotation der hinteren Bindungen in Grad
    pub rotation_degrees: f32,
    /// Vordere Bindungen (Index 0..3)
    pub front: [BondLayout; SUBSTITUENTS_PER_SIDE],
    /// Hintere Bindungen (Index 0..3)
    pub back: [BondLayout; SUBSTITUENTS_PER_SIDE],
}

impl FrameLayout {
    /// Bindung eines Slots.
    pub fn bond(&self, slot: SlotId) -> &BondLayout {
        match slot.side() {
            Side::Front => &self.front[slot.index()],
            Side::Back => &self.back[slot.index()],
        }
    }

    /// Alle Bindungen in Slot-Reihenfolge (vorne, dann hinten).
    pub fn bonds(&self) -> impl Iterator<Item = &BondLayout> {
        self.front.iter().chain(self.back.iter())
    }
}

/// Berechnet die drei Bindungen einer Bindungsart.
pub fn layout_bonds(
    kind: BondKind,
    dimensions: &SceneDimensions,
    params: &LayoutParams,
) -> [BondLayout; SUBSTITUENTS_PER_SIDE] {
    let side = kind.side();
    let angles = kind.angles();
    let center = dimensions.center;

    std::array::from_fn(|index| {
        let angle = angles[index];
        let endpoint = bond_endpoint(center, angle, dimensions.bond_length);
        BondLayout {
            slot: SlotId::ALL[match side {
                Side::Front => index,
                Side::Back => SUBSTITUENTS_PER_SIDE + index,
            }],
            angle,
            endpoint,
            segment: kind.visible_segment(center, endpoint),
            snapped_label_position: snapped_label_position(
                center,
                angle,
                dimensions.bond_length,
                params.substituent_offset,
            ),
            alignment: resolve_alignment(endpoint, center, params.vertical_nudge),
        }
    })
}

/// Berechnet die Frame-Geometrie aus dem Szenenzustand (ohne Seiteneffekte).
pub fn compute_frame(scene: &SceneState, params: &LayoutParams) -> FrameLayout {
    let dimensions = &scene.dimensions;
    let rotation_degrees = scene.conformation.effective_rotation();
    let back_kind = BondKind::Back {
        rotation_degrees,
        occlusion_radius: dimensions.circle_radius,
    };

    FrameLayout {
        center: dimensions.center,
        circle_radius: dimensions.circle_radius,
        rotation_degrees,
        front: layout_bonds(BondKind::Front, dimensions, params),
        back: layout_bonds(back_kind, dimensions, params),
    }
}

/// Schreibt die Standard-Positionen aller nicht gezogenen Substituenten.
///
/// Gezogene Substituenten (`dragged`) behalten ihre Position unverändert.
pub fn apply_frame(substituents: &mut SubstituentSet, frame: &FrameLayout) {
    for bond in frame.bonds() {
        let substituent = substituents.get_mut(bond.slot);
        if substituent.follows_geometry() {
            substituent.position = Some(bond.snapped_label_position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conformation::ConformationKind;
    use crate::core::scene::SceneProportions;
    use crate::core::substituent::SLOT_COUNT;
    use approx::assert_abs_diff_eq;

    fn scene_300() -> SceneState {
        let labels = ["F0", "F1", "F2", "B0", "B1", "B2"].map(String::from);
        SceneState::new(
            &labels,
            &[[0.0, 0.0, 0.0, 1.0]; SLOT_COUNT],
            [300.0, 300.0],
            SceneProportions::default(),
        )
    }

    fn slot(side: Side, index: usize) -> SlotId {
        SlotId::new(side, index).expect("Slot existiert")
    }

    #[test]
    fn upward_bond_uses_bottom_baseline_and_nudge() {
        let center = Vec2::new(150.0, 150.0);
        let alignment = resolve_alignment(center + Vec2::new(0.0, -60.0), center, -7.0);
        assert_eq!(alignment.align, TextAlign::Left);
        assert_eq!(alignment.baseline, TextBaseline::Bottom);
        assert_abs_diff_eq!(alignment.nudge_x, -7.0);
    }

    #[test]
    fn downward_bond_uses_top_baseline() {
        let center = Vec2::new(150.0, 150.0);
        let alignment = resolve_alignment(center + Vec2::new(0.0, 60.0), center, -7.0);
        assert_eq!(alignment.baseline, TextBaseline::Top);
    }

    #[test]
    fn side_bonds_align_away_from_center() {
        let center = Vec2::new(150.0, 150.0);
        let right = resolve_alignment(center + Vec2::new(60.0, 0.0), center, -7.0);
        assert_eq!(right.align, TextAlign::Left);
        assert_eq!(right.baseline, TextBaseline::Middle);
        assert_abs_diff_eq!(right.nudge_x, 0.0);

        let left = resolve_alignment(center + Vec2::new(-52.0, 30.0), center, -7.0);
        assert_eq!(left.align, TextAlign::Right);
        assert_eq!(left.baseline, TextBaseline::Middle);
    }

    #[test]
    fn eclipsed_without_offset_places_labels_on_vertical_axis() {
        let mut scene = scene_300();
        scene.set_conformation(ConformationKind::Eclipsed);
        let params = LayoutParams::default();
        let frame = compute_frame(&scene, &params);
        apply_frame(&mut scene.substituents, &frame);

        let front0 = scene
            .substituent(slot(Side::Front, 0))
            .position
            .expect("aufgelöst");
        assert_abs_diff_eq!(front0.x, 150.0, epsilon = 1e-3);
        assert_abs_diff_eq!(front0.y, 85.0, epsilon = 1e-3);

        let back0 = scene
            .substituent(slot(Side::Back, 0))
            .position
            .expect("aufgelöst");
        assert_abs_diff_eq!(back0.x, 150.0, epsilon = 1e-3);
        assert_abs_diff_eq!(back0.y, 215.0, epsilon = 1e-3);
    }

    #[test]
    fn back_segments_start_outside_circle_and_front_segments_at_center() {
        let scene = scene_300();
        let frame = compute_frame(&scene, &LayoutParams::default());

        for bond in &frame.back {
            let (start, _) = bond.segment.expect("Segment sichtbar");
            assert_abs_diff_eq!(start.distance(frame.center), 40.0, epsilon = 1e-3);
        }
        for bond in &frame.front {
            let (start, end) = bond.segment.expect("Segment sichtbar");
            assert_eq!(start, frame.center);
            assert_eq!(end, bond.endpoint);
        }
    }

    #[test]
    fn dragged_positions_survive_rotation_changes() {
        let mut scene = scene_300();
        let params = LayoutParams::default();
        let frame = compute_frame(&scene, &params);
        apply_frame(&mut scene.substituents, &frame);

        let moved = slot(Side::Back, 1);
        let custom = Vec2::new(12.0, 34.0);
        scene.set_position(moved, custom);
        scene.set_dragged(moved, true);

        let free = slot(Side::Back, 0);
        let before = scene.substituent(free).position;

        for _ in 0..5 {
            scene.conformation.rotate_step();
            let frame = compute_frame(&scene, &params);
            apply_frame(&mut scene.substituents, &frame);
            assert_eq!(scene.substituent(moved).position, Some(custom));
        }

        assert_ne!(scene.substituent(free).position, before);
    }

    #[test]
    fn label_draw_position_prefers_stored_position() {
        let scene = scene_300();
        let frame = compute_frame(&scene, &LayoutParams::default());
        let bond = frame.bond(slot(Side::Front, 0));

        let mut substituent = scene.substituent(bond.slot).clone();
        let unresolved = bond.label_draw_position(&substituent);
        assert_abs_diff_eq!(unresolved.x, bond.snapped_label_position.x - 7.0, epsilon = 1e-4);

        substituent.position = Some(Vec2::new(20.0, 20.0));
        assert_eq!(bond.label_draw_position(&substituent), Vec2::new(13.0, 20.0));
    }
}
