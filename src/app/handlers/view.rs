//! Handler für Tabs, Zwischenablage und Apply-on-Drag.

use crate::app::preferences::{store_value, PreferenceStore, PREF_ACTIVE_TAB, PREF_APPLY_ON_DRAG};
use crate::app::{ClipboardFormat, EditorState, EditorTab};

pub fn set_active_tab(state: &mut EditorState, tab: EditorTab) {
    state.active_tab = tab;
}

/// Persistiert den aktiven Tab als Index.
pub fn persist_active_tab(state: &EditorState, preferences: &mut dyn PreferenceStore) {
    store_value(
        preferences,
        PREF_ACTIVE_TAB,
        serde_json::json!(state.active_tab.index()),
    );
}

/// Legt die Kurve im gewünschten Format in den Zwischenablage-Ausgang.
pub fn copy_to_clipboard(state: &mut EditorState, format: ClipboardFormat) {
    let curve = state.curve.bezier();
    let text = match format {
        ClipboardFormat::Css => curve.to_css(),
        ClipboardFormat::ValueList => curve.to_value_list(),
    };
    log::info!("In Zwischenablage: {}", text);
    state.ui.set_status(format!("Copied {text}"));
    state.ui.clipboard_out = Some(text);
}

pub fn set_apply_on_drag(
    state: &mut EditorState,
    preferences: &mut dyn PreferenceStore,
    enabled: bool,
) {
    state.apply_on_drag = enabled;
    store_value(preferences, PREF_APPLY_ON_DRAG, serde_json::json!(enabled));
    log::info!("Apply-on-Drag: {}", enabled);
}
