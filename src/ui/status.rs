//! Status-Bar am unteren Bildschirmrand.

use crate::app::EditorState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &EditorState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(state.curve.bezier().to_css());

            ui.separator();

            let preset = state.active_preset.as_deref().unwrap_or("Custom");
            ui.label(format!("Preset: {}", preset));

            ui.separator();

            ui.label(format!("Tab: {}", state.active_tab.label()));

            if state.apply_on_drag {
                ui.separator();
                ui.label("Apply-on-Drag");
            }

            // Statusnachricht (Fitting, Presets, Parse-Fehler)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
