use crate::core::{ConformationKind, Rgba, SlotId};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Drag ────────────────────────────────────────────────────
    /// Drag-Geste für ein getroffenes Label beginnen
    BeginLabelDrag { slot: SlotId, pointer: glam::Vec2 },
    /// Gezogenes Label dem Zeiger folgen lassen
    UpdateLabelDrag { pointer: glam::Vec2 },
    /// Drag-Geste beenden
    EndLabelDrag,

    // ── Substituenten ───────────────────────────────────────────
    /// Label-Text setzen
    SetLabel { slot: SlotId, text: String },
    /// Fokus/Cursor eines Label-Felds merken
    SetLabelFocus { slot: SlotId, cursor: Option<usize> },
    /// Textfarbe setzen
    SetColor { slot: SlotId, color: Rgba },
    /// Tiefgestellte Ziffer an Cursor-Position einfügen (None = am Ende)
    InsertSubscript {
        slot: SlotId,
        cursor: Option<usize>,
        digit: u8,
    },
    /// Ziffern im Label automatisch tiefstellen
    ApplyAutoSubscript { slot: SlotId },

    // ── Konformation ────────────────────────────────────────────
    /// Konformation setzen (setzt Drehschritte zurück)
    SetConformation { kind: ConformationKind },
    /// Ekliptischen Versatz setzen
    SetEclipsedOffset { degrees: f32 },
    /// Einen Drehschritt ausführen
    RotateStep,

    // ── Viewport ────────────────────────────────────────────────
    /// Canvas-Größe setzen
    SetViewportSize { size: [f32; 2] },

    // ── Export, Optionen & Anwendungssteuerung ──────────────────
    /// Speichern-Dialog für den Export anfordern
    RequestExportDialog,
    /// Zugeschnittenes PNG schreiben
    ExportPng { path: PathBuf },
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen als TOML speichern
    SaveOptions,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
