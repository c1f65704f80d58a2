use crate::core::{ConformationKind, Rgba, SlotId, SLOT_COUNT};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Primäre Maustaste auf der Zeichenfläche gedrückt (Canvas-Koordinaten).
    /// Die UI liefert die gemessenen Label-Breiten für den Hit-Test mit.
    PointerPressed {
        pos: glam::Vec2,
        label_widths: [f32; SLOT_COUNT],
    },
    /// Zeiger bewegt (Canvas-Koordinaten)
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Größe der Zeichenfläche hat sich geändert
    ViewportResized { size: [f32; 2] },

    // ── Substituenten ───────────────────────────────────────────
    /// Label-Text eines Slots wurde bearbeitet
    LabelEdited { slot: SlotId, text: String },
    /// Cursor/Fokus in einem Label-Feld hat sich geändert
    LabelCursorMoved { slot: SlotId, cursor: Option<usize> },
    /// Textfarbe eines Slots wurde geändert
    ColorChanged { slot: SlotId, color: Rgba },
    /// Tiefgestellte Ziffer in das zuletzt fokussierte Feld einfügen
    SubscriptDigitRequested { digit: u8 },
    /// Ziffern im Label eines Slots automatisch tiefstellen
    AutoSubscriptRequested { slot: SlotId },

    // ── Konformation ────────────────────────────────────────────
    /// Konformation gewählt
    ConformationSelected { kind: ConformationKind },
    /// Ekliptischer Versatz geändert (Grad)
    EclipsedOffsetChanged { degrees: f32 },
    /// Hintere Bindungen um einen Schritt drehen
    RotateRequested,

    // ── Export & Optionen ───────────────────────────────────────
    /// PNG-Export angefordert (zeigt Speichern-Dialog)
    ExportRequested,
    /// Zielpfad für den PNG-Export gewählt
    ExportPathSelected { path: PathBuf },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen als TOML speichern
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
