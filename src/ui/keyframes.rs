//! Keyframe-Liste des Standalone-Dokuments mit Selektion per Checkbox.

use crate::app::MemoryDocument;

/// Rendert die Keyframe-Liste als Side-Panel.
///
/// Die Selektion gehört dem Dokument (Host-Zustand) und wird direkt geändert,
/// nicht über den Controller.
pub fn render_keyframe_panel(ctx: &egui::Context, document: &mut MemoryDocument) {
    egui::SidePanel::right("keyframe_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Keyframes");
            ui.separator();

            let keyframes = document.keyframes().to_vec();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for keyframe in &keyframes {
                    let id = keyframe.id.0.as_str();
                    let mut selected = document.is_selected(id);
                    let label = format!(
                        "{} @ {:.0}: {:.2}",
                        keyframe.path, keyframe.frame, keyframe.value
                    );
                    ui.horizontal(|ui| {
                        if ui.checkbox(&mut selected, label).changed() {
                            if selected {
                                document.select(id);
                            } else {
                                document.deselect(id);
                            }
                        }
                        if keyframe.tangent_locked {
                            ui.label("🔒").on_hover_text("Tangenten gesperrt");
                        }
                    });
                }
            });

            ui.separator();
            if ui.button("Auswahl aufheben").clicked() {
                document.clear_selection();
            }
        });
}
