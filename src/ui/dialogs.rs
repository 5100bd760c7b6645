//! Datei-Dialoge und Preset-Fenster.

use crate::app::{EditorIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Standard-Dateiname beim Export.
const EXPORT_FILE_NAME: &str = "easing_presets.json";

/// Verarbeitet ausstehende Import-/Export-Dialoge und gibt Intents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<EditorIntent> {
    let mut events = Vec::new();

    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Easing Presets", &["json"])
            .pick_file()
        {
            events.push(EditorIntent::ImportFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Easing Presets", &["json"])
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
        {
            events.push(EditorIntent::ExportFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Fenster zum Speichern der aktuellen Kurve als Preset.
pub fn show_save_preset_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<EditorIntent> {
    let mut events = Vec::new();

    if !ui_state.show_save_preset_dialog {
        return events;
    }

    egui::Window::new("Preset speichern")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Name:");
            let response = ui.text_edit_singleline(&mut ui_state.preset_name_input);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Speichern").clicked() || submitted {
                    events.push(EditorIntent::SavePresetConfirmed {
                        name: ui_state.preset_name_input.clone(),
                    });
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(EditorIntent::PresetDialogCancelled);
                }
            });
        });

    events
}

/// Fenster zum Umbenennen eines Presets.
pub fn show_rename_preset_dialog(
    ctx: &egui::Context,
    ui_state: &mut UiState,
) -> Vec<EditorIntent> {
    let mut events = Vec::new();

    let Some(target) = ui_state.rename_target.clone() else {
        return events;
    };

    egui::Window::new("Preset umbenennen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Neuer Name für \"{}\":", target));
            let response = ui.text_edit_singleline(&mut ui_state.rename_input);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Umbenennen").clicked() || submitted {
                    events.push(EditorIntent::RenamePresetConfirmed {
                        old: target.clone(),
                        new: ui_state.rename_input.clone(),
                    });
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(EditorIntent::PresetDialogCancelled);
                }
            });
        });

    events
}

/// Rückfrage vor dem Löschen aller Presets.
pub fn show_delete_all_confirm(ctx: &egui::Context, ui_state: &UiState) -> Vec<EditorIntent> {
    let mut events = Vec::new();

    if !ui_state.show_delete_all_confirm {
        return events;
    }

    egui::Window::new("Alle Presets löschen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("⚠ Alle gespeicherten Presets werden entfernt.")
                        .color(egui::Color32::YELLOW),
                );
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button("Löschen").clicked() {
                        events.push(EditorIntent::DeleteAllPresetsConfirmed);
                    }
                    if ui.button("Abbrechen").clicked() {
                        events.push(EditorIntent::PresetDialogCancelled);
                    }
                });
            });
        });

    events
}
