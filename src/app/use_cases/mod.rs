//! Use-Cases der Application-Layer-Orchestrierung.

pub mod conformation;
pub mod drag;
pub mod export;
pub mod frame;
pub mod labels;
pub mod options;
pub mod viewport;
