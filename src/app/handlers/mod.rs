//! Dünne Handler pro Feature-Bereich.
//!
//! Der Controller dispatcht jeden `AppCommand` an genau eine Handler-Funktion,
//! die an den passenden Use-Case weiterreicht.

pub mod canvas;
pub mod conformation;
pub mod dialog;
pub mod editing;
pub mod file_io;
