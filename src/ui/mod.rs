//! egui-Oberfläche: Menü, Substituenten-Panel, Statusleiste, Zeichenflächen-Input.
//!
//! Alle Panels lesen den `AppState` nur und liefern `AppIntent`s zurück;
//! mutiert wird ausschließlich im Controller.

mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod properties;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
