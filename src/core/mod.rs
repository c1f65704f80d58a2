//! Core-Domänentypen: Geometrie, Konformation, Substituenten, Label-Layout, Hit-Test.
//!
//! Keine UI-Abhängigkeiten. Alle Geometriefunktionen sind seiteneffektfrei;
//! Zustandsänderungen laufen ausschließlich über `SceneState` und `apply_frame`.

pub mod chem_text;
pub mod conformation;
pub mod geometry;
pub mod layout;
pub mod scene;
pub mod substituent;

pub use conformation::{ConformationConfig, ConformationKind};
pub use geometry::{back_angles, front_angles, visible_bond_segment, BondKind};
pub use hit_test::{hit_test, measure_label_widths, ApproxTextMeasure, TextMeasure};
pub use layout::{
    apply_frame, compute_frame, resolve_alignment, FrameLayout, LabelAlignment, LayoutParams,
    TextAlign, TextBaseline,
};
pub use scene::{SceneDimensions, SceneProportions, SceneState};
pub use substituent::{Rgba, Side, SlotId, Substituent, SubstituentSet, SLOT_COUNT};
