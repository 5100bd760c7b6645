//! Kontextmenü der Graph-Flächen: Presets, Zwischenablage, Einstellungen.

use crate::app::{ClipboardFormat, EditorIntent, EditorState};

/// Erstellt einen Button, der bei Klick einen Intent emittiert und das Menü schließt.
fn button_intent(
    ui: &mut egui::Ui,
    label: &str,
    intent: EditorIntent,
    events: &mut Vec<EditorIntent>,
) {
    if ui.button(label).clicked() {
        events.push(intent);
        ui.close();
    }
}

/// Zeigt das Kontextmenü bei Rechtsklick auf `response`.
pub fn show_graph_context_menu(
    response: &egui::Response,
    state: &EditorState,
    events: &mut Vec<EditorIntent>,
) {
    response.context_menu(|ui| {
        ui.label("Presets");
        button_intent(
            ui,
            "💾 Preset speichern…",
            EditorIntent::SavePresetDialogRequested,
            events,
        );

        if let Some(active) = &state.active_preset {
            button_intent(
                ui,
                &format!("✏ \"{}\" umbenennen…", active),
                EditorIntent::RenamePresetDialogRequested {
                    name: active.clone(),
                },
                events,
            );
            button_intent(
                ui,
                &format!("🗑 \"{}\" löschen", active),
                EditorIntent::DeletePresetRequested {
                    name: active.clone(),
                },
                events,
            );
        }

        button_intent(
            ui,
            "📂 Presets importieren…",
            EditorIntent::ImportPresetsRequested,
            events,
        );
        button_intent(
            ui,
            "📤 Presets exportieren…",
            EditorIntent::ExportPresetsRequested,
            events,
        );
        if !state.presets.is_empty() {
            button_intent(
                ui,
                "Alle Presets löschen…",
                EditorIntent::DeleteAllPresetsRequested,
                events,
            );
        }

        ui.separator();
        ui.label("Zwischenablage");
        button_intent(
            ui,
            "📋 Als CSS kopieren",
            EditorIntent::CopyCurveRequested {
                format: ClipboardFormat::Css,
            },
            events,
        );
        button_intent(
            ui,
            "📋 Als Werteliste kopieren",
            EditorIntent::CopyCurveRequested {
                format: ClipboardFormat::ValueList,
            },
            events,
        );

        ui.separator();
        let mut apply_on_drag = state.apply_on_drag;
        if ui
            .checkbox(&mut apply_on_drag, "Nach Drag automatisch anwenden")
            .changed()
        {
            events.push(EditorIntent::ApplyOnDragToggled);
            ui.close();
        }
        button_intent(
            ui,
            "⚙ Optionen…",
            EditorIntent::OptionsDialogRequested,
            events,
        );
    });
}
