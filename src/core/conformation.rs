//! Konformation (gestaffelt/ekliptisch) und effektive Rotation der hinteren Bindungen.

use serde::{Deserialize, Serialize};

/// Rotation pro Drehschritt in Grad.
pub const ROTATION_STEP_DEG: f32 = 60.0;

/// Art der Konformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConformationKind {
    /// Gestaffelt (60° versetzt)
    #[default]
    Staggered,
    /// Ekliptisch (deckungsgleich, plus einstellbarer Versatz)
    Eclipsed,
}

impl ConformationKind {
    /// Anzeigename für UI und Log.
    pub fn label(&self) -> &'static str {
        match self {
            ConformationKind::Staggered => "gestaffelt",
            ConformationKind::Eclipsed => "ekliptisch",
        }
    }

    /// Schrittzähler direkt nach Auswahl der Konformation.
    ///
    /// Gestaffelt startet bei Schritt 1 (kanonische 60°), ekliptisch bei 0.
    pub fn initial_steps(&self) -> u32 {
        match self {
            ConformationKind::Staggered => 1,
            ConformationKind::Eclipsed => 0,
        }
    }
}

/// Konfiguration der Konformation inklusive Drehschritt-Zähler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConformationConfig {
    /// Gewählte Konformation
    pub kind: ConformationKind,
    /// Versatz der ekliptischen Konformation in Grad
    pub eclipsed_offset_deg: f32,
    /// Anzahl ausgeführter Drehschritte ("Rotate"-Aktion)
    pub step_count: u32,
}

impl Default for ConformationConfig {
    fn default() -> Self {
        Self::new(ConformationKind::default())
    }
}

impl ConformationConfig {
    /// Erstellt eine Konfiguration ohne Versatz und ohne Drehschritte.
    pub fn new(kind: ConformationKind) -> Self {
        Self {
            kind,
            eclipsed_offset_deg: 0.0,
            step_count: kind.initial_steps(),
        }
    }

    /// Wechselt die Konformation. Der Drehschritt-Zähler beginnt neu.
    pub fn set_kind(&mut self, kind: ConformationKind) {
        self.kind = kind;
        self.step_count = kind.initial_steps();
    }

    /// Drehschritte seit Auswahl der Konformation (modulo volle Umdrehung).
    pub fn rotations_applied(&self) -> u32 {
        (self.step_count + 6 - self.kind.initial_steps()) % 6
    }

    /// Führt einen Drehschritt aus.
    pub fn rotate_step(&mut self) {
        // mod 6 hält Winkel und Parität und verhindert Überlauf
        self.step_count = (self.step_count + 1) % 6;
    }

    /// Effektive Rotation der hinteren Bindungen in Grad.
    ///
    /// `step_count * 60`, bei gerader Schrittzahl zusätzlich der ekliptische
    /// Versatz. Gestaffelt ohne Drehschritte ergibt so die festen 60°.
    pub fn effective_rotation(&self) -> f32 {
        let steps = self.step_count % 6;
        let rotation = steps as f32 * ROTATION_STEP_DEG;
        if steps % 2 == 0 {
            rotation + self.eclipsed_offset_deg
        } else {
            rotation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn staggered_without_steps_is_sixty_degrees() {
        let mut config = ConformationConfig::new(ConformationKind::Staggered);
        config.eclipsed_offset_deg = 12.0;
        assert_relative_eq!(config.effective_rotation(), 60.0);
    }

    #[test]
    fn eclipsed_returns_offset_directly() {
        let mut config = ConformationConfig::new(ConformationKind::Eclipsed);
        assert_relative_eq!(config.effective_rotation(), 0.0);
        config.eclipsed_offset_deg = 15.0;
        assert_relative_eq!(config.effective_rotation(), 15.0);
    }

    #[test]
    fn steps_alternate_between_plain_and_offset_rotation() {
        let mut config = ConformationConfig::new(ConformationKind::Staggered);
        config.eclipsed_offset_deg = 10.0;

        assert_relative_eq!(config.effective_rotation(), 60.0);
        config.rotate_step();
        assert_relative_eq!(config.effective_rotation(), 130.0);
        config.rotate_step();
        assert_relative_eq!(config.effective_rotation(), 180.0);
        config.rotate_step();
        assert_relative_eq!(config.effective_rotation(), 250.0);
    }

    #[test]
    fn first_staggered_step_changes_rotation() {
        let mut config = ConformationConfig::new(ConformationKind::Staggered);
        let before = config.effective_rotation();
        config.rotate_step();
        assert!((config.effective_rotation() - before).abs() > 1.0);
        assert_eq!(config.rotations_applied(), 1);
    }

    #[test]
    fn eclipsed_steps_apply_same_parity_rule() {
        let mut config = ConformationConfig::new(ConformationKind::Eclipsed);
        config.eclipsed_offset_deg = 5.0;
        config.rotate_step();
        assert_relative_eq!(config.effective_rotation(), 60.0);
        config.rotate_step();
        assert_relative_eq!(config.effective_rotation(), 125.0);
    }

    #[test]
    fn six_steps_are_a_full_turn() {
        let mut config = ConformationConfig::new(ConformationKind::Eclipsed);
        config.eclipsed_offset_deg = 20.0;
        let start = config.effective_rotation();
        for _ in 0..6 {
            config.rotate_step();
        }
        assert_relative_eq!(config.effective_rotation(), start);
    }

    #[test]
    fn changing_kind_resets_steps() {
        let mut config = ConformationConfig::new(ConformationKind::Staggered);
        config.rotate_step();
        config.rotate_step();
        config.set_kind(ConformationKind::Eclipsed);
        assert_eq!(config.step_count, 0);

        config.rotate_step();
        config.set_kind(ConformationKind::Staggered);
        assert_eq!(config.rotations_applied(), 0);
        assert_relative_eq!(config.effective_rotation(), 60.0);
    }
}
