//! Newman Projection Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState, UiState};
pub use core::{
    ConformationConfig, ConformationKind, FrameLayout, SceneState, Side, SlotId, Substituent,
};
pub use shared::{DrawCommand, EditorOptions, RenderScene};
