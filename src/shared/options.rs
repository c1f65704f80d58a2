//! Zentrale Konfiguration für den Newman-Projektions-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::hit_test::LABEL_HIT_BOX_HEIGHT;
use crate::core::{LayoutParams, Rgba, SceneProportions, SLOT_COUNT};
use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Bindungslänge relativ zur Canvas-Breite.
pub const BOND_LENGTH_RATIO: f32 = 1.0 / 5.0;
/// Radius des hinteren Kreises relativ zur Canvas-Breite.
pub const CIRCLE_RADIUS_RATIO: f32 = 2.0 / 15.0;
/// Abstand des Labels hinter dem Bindungsende.
pub const SUBSTITUENT_OFFSET: f32 = 5.0;
/// Radius des gefüllten vorderen Atom-Punkts.
pub const FRONT_ATOM_RADIUS: f32 = 10.0;
/// Standard-Canvas-Größe in Pixeln.
pub const DEFAULT_CANVAS_SIZE: [f32; 2] = [400.0, 400.0];

// ── Text ────────────────────────────────────────────────────────────

/// Schriftgröße der Labels.
pub const FONT_SIZE: f32 = 16.0;
/// Höhe der Label-Hitbox (unabhängig von der Schriftgröße).
pub const HIT_BOX_HEIGHT: f32 = LABEL_HIT_BOX_HEIGHT;
/// Horizontaler Versatz für Labels an senkrechten Bindungen.
pub const VERTICAL_LABEL_NUDGE: f32 = -7.0;

// ── Linien ──────────────────────────────────────────────────────────

/// Linienstärke für Bindungen und Kreis.
pub const LINE_WIDTH: f32 = 1.0;
/// Linienfarbe (RGBA: Schwarz).
pub const LINE_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
/// Strich-/Lückenlänge gestrichelter Linien.
pub const DASH_PATTERN: [f32; 2] = [5.0, 5.0];

// ── Export ──────────────────────────────────────────────────────────

/// Rand des Export-Ausschnitts relativ zur Canvas-Größe (pro Seite).
pub const EXPORT_CROP_MARGIN_RATIO: f32 = 1.0 / 8.0;
/// Vorgeschlagener Dateiname beim Export.
pub const EXPORT_FILE_NAME: &str = "newman_projection.png";

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `newman_projection_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Bindungslänge relativ zur Canvas-Breite
    pub bond_length_ratio: f32,
    /// Kreisradius relativ zur Canvas-Breite
    pub circle_radius_ratio: f32,
    /// Abstand des Labels hinter dem Bindungsende
    pub substituent_offset: f32,
    /// Radius des vorderen Atom-Punkts
    pub front_atom_radius: f32,
    /// Canvas-Größe beim Start [Breite, Höhe]
    pub default_canvas_size: [f32; 2],

    // ── Text ────────────────────────────────────────────────────
    /// Schriftgröße der Labels
    pub font_size: f32,
    /// Höhe der Label-Hitbox
    pub hit_box_height: f32,
    /// Horizontaler Versatz für Labels an senkrechten Bindungen
    pub vertical_label_nudge: f32,

    // ── Linien ──────────────────────────────────────────────────
    /// Linienstärke
    pub line_width: f32,
    /// Linienfarbe
    pub line_color: Rgba,
    /// Strich-/Lückenlänge
    pub dash_pattern: [f32; 2],
    /// Hintere Bindungen gestrichelt zeichnen
    pub dashed_back_bonds: bool,
    /// Hinteren Kreis gestrichelt zeichnen
    pub dashed_back_circle: bool,

    // ── Substituenten ───────────────────────────────────────────
    /// Start-Labels (vorne 1–3, hinten 1–3)
    pub default_labels: [String; SLOT_COUNT],
    /// Start-Farben (vorne 1–3, hinten 1–3)
    pub default_colors: [Rgba; SLOT_COUNT],

    // ── Export ──────────────────────────────────────────────────
    /// Rand des Export-Ausschnitts relativ zur Canvas-Größe
    pub export_crop_margin_ratio: f32,
    /// Vorgeschlagener Dateiname
    pub export_file_name: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            bond_length_ratio: BOND_LENGTH_RATIO,
            circle_radius_ratio: CIRCLE_RADIUS_RATIO,
            substituent_offset: SUBSTITUENT_OFFSET,
            front_atom_radius: FRONT_ATOM_RADIUS,
            default_canvas_size: DEFAULT_CANVAS_SIZE,

            font_size: FONT_SIZE,
            hit_box_height: HIT_BOX_HEIGHT,
            vertical_label_nudge: VERTICAL_LABEL_NUDGE,

            line_width: LINE_WIDTH,
            line_color: LINE_COLOR,
            dash_pattern: DASH_PATTERN,
            dashed_back_bonds: true,
            dashed_back_circle: true,

            default_labels: ["CH₃", "H", "H", "CH₃", "H", "H"].map(String::from),
            default_colors: [LINE_COLOR; SLOT_COUNT],

            export_crop_margin_ratio: EXPORT_CROP_MARGIN_RATIO,
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("newman_projection_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("newman_projection_editor.toml")
    }

    /// Proportionen der Projektion für den Szenenzustand.
    pub fn scene_proportions(&self) -> SceneProportions {
        SceneProportions {
            bond_length_ratio: self.bond_length_ratio,
            circle_radius_ratio: self.circle_radius_ratio,
        }
    }

    /// Parameter der Label-Platzierung.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            substituent_offset: self.substituent_offset,
            vertical_nudge: self.vertical_label_nudge,
        }
    }
}
