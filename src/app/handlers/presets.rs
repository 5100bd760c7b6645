//! Handler für die Preset-Verwaltung.
//!
//! Jede Änderung der Sammlung wird sofort persistiert. Namensfehler landen
//! als Statusmeldung, der Dialog bleibt dann offen.

use crate::app::preferences::{save_presets, PreferenceStore};
use crate::app::EditorState;
use anyhow::Context;

/// Entfernt die Markierung des aktiven Presets.
pub fn clear_active(state: &mut EditorState) {
    state.active_preset = None;
}

/// Übernimmt die Kurve eines Presets.
pub fn select(state: &mut EditorState, name: &str) {
    match state.presets.get(name) {
        Some(curve) => {
            state.set_curve(curve);
            state.active_preset = Some(name.to_string());
            log::info!("Preset '{}' gewählt: {}", name, curve);
        }
        None => {
            log::warn!("Preset '{}' nicht gefunden", name);
            state.ui.set_status(format!("No preset named '{name}'"));
        }
    }
}

pub fn open_save_dialog(state: &mut EditorState) {
    state.ui.preset_name_input.clear();
    state.ui.show_save_preset_dialog = true;
}

/// Speichert die aktuelle Kurve unter `name`.
pub fn save(state: &mut EditorState, preferences: &mut dyn PreferenceStore, name: &str) {
    match state.presets.save(name, state.curve.bezier()) {
        Ok(saved) => {
            log::info!("Preset '{}' gespeichert", saved);
            state.ui.set_status(format!("Saved preset '{saved}'"));
            state.active_preset = Some(saved);
            state.ui.show_save_preset_dialog = false;
            save_presets(preferences, &state.presets);
        }
        Err(e) => {
            log::warn!("Preset nicht gespeichert: {}", e);
            state.ui.set_status(format!("Cannot save preset: {e}"));
        }
    }
}

pub fn open_rename_dialog(state: &mut EditorState, name: String) {
    state.ui.rename_input = name.clone();
    state.ui.rename_target = Some(name);
}

pub fn rename(
    state: &mut EditorState,
    preferences: &mut dyn PreferenceStore,
    old: &str,
    new: &str,
) {
    match state.presets.rename(old, new) {
        Ok(renamed) => {
            log::info!("Preset '{}' umbenannt in '{}'", old, renamed);
            if state.active_preset.as_deref() == Some(old) {
                state.active_preset = Some(renamed.clone());
            }
            state.ui.set_status(format!("Renamed '{old}' to '{renamed}'"));
            state.ui.rename_target = None;
            save_presets(preferences, &state.presets);
        }
        Err(e) => {
            log::warn!("Preset nicht umbenannt: {}", e);
            state.ui.set_status(format!("Cannot rename preset: {e}"));
        }
    }
}

pub fn delete(state: &mut EditorState, preferences: &mut dyn PreferenceStore, name: &str) {
    match state.presets.delete(name) {
        Ok(_) => {
            log::info!("Preset '{}' gelöscht", name);
            if state.active_preset.as_deref() == Some(name) {
                state.active_preset = None;
            }
            state.ui.set_status(format!("Deleted preset '{name}'"));
            save_presets(preferences, &state.presets);
        }
        Err(e) => {
            log::warn!("Preset nicht gelöscht: {}", e);
            state.ui.set_status(format!("Cannot delete preset: {e}"));
        }
    }
}

pub fn open_delete_all_confirm(state: &mut EditorState) {
    state.ui.show_delete_all_confirm = true;
}

/// Löscht alle Presets. Beim nächsten Laden greifen wieder die eingebauten.
pub fn delete_all(state: &mut EditorState, preferences: &mut dyn PreferenceStore) {
    let count = state.presets.len();
    state.presets.clear();
    state.active_preset = None;
    state.ui.show_delete_all_confirm = false;
    save_presets(preferences, &state.presets);
    log::info!("{} Presets gelöscht", count);
    state.ui.set_status(format!("Deleted {count} preset(s)"));
}

pub fn close_dialogs(state: &mut EditorState) {
    state.ui.show_save_preset_dialog = false;
    state.ui.rename_target = None;
    state.ui.show_delete_all_confirm = false;
}

pub fn request_import(state: &mut EditorState) {
    state.ui.show_import_dialog = true;
}

/// Importiert Presets aus einer JSON-Datei; gleiche Namen werden überschrieben.
pub fn import(
    state: &mut EditorState,
    preferences: &mut dyn PreferenceStore,
    path: &str,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Preset-Datei nicht lesbar: {path}"))?;
    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Preset-Datei {} ist kein JSON: {}", path, e);
            state.ui.set_status(format!("Import failed: {e}"));
            return Ok(());
        }
    };

    match state.presets.merge_json(value) {
        Ok(count) => {
            log::info!("{} Presets importiert aus {}", count, path);
            state.ui.set_status(format!("Imported {count} preset(s)"));
            save_presets(preferences, &state.presets);
        }
        Err(e) => {
            log::warn!("Import fehlgeschlagen: {}", e);
            state.ui.set_status(format!("Import failed: {e}"));
        }
    }
    Ok(())
}

pub fn request_export(state: &mut EditorState) {
    state.ui.show_export_dialog = true;
}

/// Exportiert alle Presets als formatiertes JSON.
pub fn export(state: &mut EditorState, path: &str) -> anyhow::Result<()> {
    let content = state.presets.export_pretty()?;
    std::fs::write(path, content).with_context(|| format!("Export nach {path} fehlgeschlagen"))?;
    log::info!("{} Presets exportiert nach {}", state.presets.len(), path);
    state
        .ui
        .set_status(format!("Exported {} preset(s)", state.presets.len()));
    Ok(())
}
