//! UI-Komponenten: Editor-Panel, Graph-Flächen, Dialoge, Status-Bar.

pub mod canvas;
mod context_menu;
pub mod dialogs;
mod graph_view;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Panels, Dialogs).
/// Modifier-Abfrage und Zeichenfläche sind als Host-Fähigkeiten in eigene
/// Dateien extrahiert.
pub mod keyframes;
pub mod modifiers;
pub mod options_dialog;
pub mod panel;
pub mod status;

pub use canvas::EguiCanvas;
pub use dialogs::{
    handle_file_dialogs, show_delete_all_confirm, show_rename_preset_dialog,
    show_save_preset_dialog,
};
pub use keyframes::render_keyframe_panel;
pub use modifiers::EguiModifiers;
pub use options_dialog::show_options_dialog;
pub use panel::render_editor_panel;
pub use status::render_status_bar;
