//! Handler für den Optionen-Dialog.

use crate::app::EditorState;
use crate::shared::EditorOptions;

pub fn open_dialog(state: &mut EditorState) {
    state.ui.show_options_dialog = true;
}

pub fn close_dialog(state: &mut EditorState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut EditorState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&EditorOptions::config_path())
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut EditorState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.options.save_to_file(&EditorOptions::config_path())
}
