//! UI-Komponenten: Menü, Status-Bar, Listen-Panel, Popup, Dialoge, Input.

pub mod input;
pub mod list_panel;
pub mod menu;
pub mod options_dialog;
pub mod popup;
pub mod status;

pub use input::InputState;
pub use list_panel::render_list_panel;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use popup::show_popup;
pub use status::render_status_bar;
