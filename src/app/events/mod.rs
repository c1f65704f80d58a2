//! Events des Intent/Command-Datenflusses.
//!
//! `AppIntent` beschreibt, was die UI will; `AppCommand` ist der mutierende
//! Schritt, den der Controller ausführt und im `CommandLog` festhält.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
