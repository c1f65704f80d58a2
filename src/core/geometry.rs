//! Geometrie-Engine: Bindungswinkel und sichtbare Bindungssegmente.
//!
//! Alle Funktionen sind seiteneffektfrei. Winkel in Radiant, Bildschirm-
//! Konvention (y wächst nach unten): `-π/2` zeigt nach oben, `+π/2` nach unten.

use super::substituent::Side;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Winkelabstand zwischen den drei Bindungen eines Atoms (120°).
pub const BOND_SPACING: f32 = TAU / 3.0;

/// Winkel der vorderen Bindungen: Bindung 0 senkrecht nach oben, dann +120°/+240°.
///
/// Unabhängig von Konformation und Rotation – die vorderen Bindungen drehen nie.
pub fn front_angles() -> [f32; 3] {
    spread_from(-FRAC_PI_2)
}

/// Winkel der hinteren Bindungen, um `rotation_degrees` gedreht.
///
/// Basislage: Bindung 0 senkrecht nach unten, Bindungen 1/2 bei +120°/+240°.
/// Die Rotation wird vorher auf `[0, 360)` reduziert.
pub fn back_angles(rotation_degrees: f32) -> [f32; 3] {
    let rotation = rotation_degrees.rem_euclid(360.0).to_radians();
    spread_from(FRAC_PI_2 + rotation)
}

fn spread_from(first: f32) -> [f32; 3] {
    [first, first + BOND_SPACING, first + 2.0 * BOND_SPACING]
}

/// Endpunkt einer Bindung der Länge `length` unter `angle` ausgehend von `center`.
pub fn bond_endpoint(center: Vec2, angle: f32, length: f32) -> Vec2 {
    center + Vec2::from_angle(angle) * length
}

/// Sichtbarer Teil einer hinteren Bindung außerhalb des Verdeckungskreises.
///
/// Schnittpunkt über die Strahl-Parametrisierung `t = radius / |endpoint - center|`.
/// Liefert `None` für eine Bindung der Länge 0 und für Bindungen, die
/// vollständig im Kreis liegen.
pub fn visible_bond_segment(center: Vec2, endpoint: Vec2, circle_radius: f32) -> Option<(Vec2, Vec2)> {
    let delta = endpoint - center;
    let distance = delta.length();
    if distance <= f32::EPSILON || distance <= circle_radius {
        return None;
    }

    let t = circle_radius / distance;
    Some((center + delta * t, endpoint))
}

/// Bindungsart inklusive der Parameter, die jede Art zum Zeichnen braucht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BondKind {
    /// Vordere Bindungen: voll sichtbar, nie rotiert
    Front,
    /// Hintere Bindungen: rotiert und hinter dem Kreis verdeckt
    Back {
        /// Effektive Rotation in Grad
        rotation_degrees: f32,
        /// Radius des verdeckenden Kreises
        occlusion_radius: f32,
    },
}

impl BondKind {
    /// Seite der Projektion, zu der die Bindungen gehören.
    pub fn side(&self) -> Side {
        match self {
            BondKind::Front => Side::Front,
            BondKind::Back { .. } => Side::Back,
        }
    }

    /// Die drei Bindungswinkel dieser Bindungsart.
    pub fn angles(&self) -> [f32; 3] {
        match *self {
            BondKind::Front => front_angles(),
            BondKind::Back {
                rotation_degrees, ..
            } => back_angles(rotation_degrees),
        }
    }

    /// Zu zeichnendes Segment einer Bindung von `center` nach `endpoint`.
    pub fn visible_segment(&self, center: Vec2, endpoint: Vec2) -> Option<(Vec2, Vec2)> {
        match *self {
            BondKind::Front => {
                if center.distance(endpoint) <= f32::EPSILON {
                    None
                } else {
                    Some((center, endpoint))
                }
            }
            BondKind::Back {
                occlusion_radius, ..
            } => visible_bond_segment(center, endpoint, occlusion_radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::PI;

    fn assert_same_direction(a: f32, b: f32) {
        assert_abs_diff_eq!(a.cos(), b.cos(), epsilon = 1e-5);
        assert_abs_diff_eq!(a.sin(), b.sin(), epsilon = 1e-5);
    }

    #[test]
    fn front_angles_start_upwards_with_120_degree_spacing() {
        let angles = front_angles();
        assert_relative_eq!(angles[0], -FRAC_PI_2);
        assert_relative_eq!(angles[1] - angles[0], 2.0 * PI / 3.0, epsilon = 1e-6);
        assert_relative_eq!(angles[2] - angles[1], 2.0 * PI / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn back_angles_without_rotation_start_downwards() {
        let angles = back_angles(0.0);
        assert_relative_eq!(angles[0], FRAC_PI_2);
        assert_relative_eq!(angles[1] - angles[0], BOND_SPACING, epsilon = 1e-6);
        assert_relative_eq!(angles[2] - angles[1], BOND_SPACING, epsilon = 1e-6);
    }

    #[test]
    fn back_angles_are_base_layout_rotated() {
        let base = back_angles(0.0);
        for rotation in [15.0_f32, 60.0, 137.5, 300.0, -45.0] {
            let rotated = back_angles(rotation);
            for i in 0..3 {
                assert_same_direction(rotated[i], base[i] + rotation.to_radians());
            }
        }
    }

    #[test]
    fn back_angles_are_periodic_in_360_degrees() {
        for rotation in [0.0_f32, 30.0, 60.0, 199.0, -120.0] {
            let a = back_angles(rotation);
            let b = back_angles(rotation + 360.0);
            for i in 0..3 {
                assert_same_direction(a[i], b[i]);
            }
        }
    }

    #[test]
    fn visible_segment_starts_on_circle_boundary() {
        let center = Vec2::new(150.0, 150.0);
        let radius = 40.0;
        for angle in back_angles(37.0) {
            let endpoint = bond_endpoint(center, angle, 60.0);
            let (start, end) =
                visible_bond_segment(center, endpoint, radius).expect("Bindung ragt aus dem Kreis");
            assert_relative_eq!(start.distance(center), radius, epsilon = 1e-3);
            assert_eq!(end, endpoint);
        }
    }

    #[test]
    fn zero_length_bond_is_skipped() {
        let center = Vec2::new(10.0, 10.0);
        assert!(visible_bond_segment(center, center, 5.0).is_none());
        assert!(BondKind::Front.visible_segment(center, center).is_none());
    }

    #[test]
    fn bond_inside_circle_is_fully_hidden() {
        let center = Vec2::ZERO;
        assert!(visible_bond_segment(center, Vec2::new(3.0, 0.0), 5.0).is_none());
    }

    #[test]
    fn bond_kind_dispatches_angles_and_sides() {
        let back = BondKind::Back {
            rotation_degrees: 60.0,
            occlusion_radius: 40.0,
        };
        assert_eq!(BondKind::Front.side(), Side::Front);
        assert_eq!(back.side(), Side::Back);
        assert_eq!(BondKind::Front.angles(), front_angles());
        assert_eq!(back.angles(), back_angles(60.0));
    }
}
