//! Optionen-Dialog für Layout, Modifier, Keyframe-Spannen und Farben.

use crate::app::{EditorIntent, EditorState};
use crate::shared::ModifierKey;

const MODIFIER_KEYS: [ModifierKey; 3] = [ModifierKey::Shift, ModifierKey::Alt, ModifierKey::Ctrl];

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &EditorState) -> Vec<EditorIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.collapsing("Graphen", |ui| {
                changed |= drag_value(ui, "Größe (px):", &mut opts.graph_width, 160.0..=600.0, 1.0);
                opts.graph_height = opts.graph_width;
                changed |= drag_value(ui, "Rand (px):", &mut opts.graph_padding, 10.0..=80.0, 0.5);
                changed |= drag_value(
                    ui,
                    "Handle-Radius:",
                    &mut opts.handle_radius,
                    3.0..=15.0,
                    0.1,
                );
                changed |= drag_value(
                    ui,
                    "Treffer-Faktor:",
                    &mut opts.hit_radius_factor,
                    1.0..=4.0,
                    0.05,
                );
                ui.horizontal(|ui| {
                    ui.label("Abtastpunkte (Speed):");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.velocity_sample_count).range(10..=500))
                        .changed();
                });
            });

            ui.collapsing("Modifier", |ui| {
                changed |= modifier_combo(
                    ui,
                    "Achse sperren:",
                    "axis_lock_key",
                    &mut opts.axis_lock_key,
                );
                changed |= modifier_combo(ui, "Spiegeln:", "mirror_key", &mut opts.mirror_key);
            });

            ui.collapsing("Einzel-Keyframe", |ui| {
                changed |= drag_value(
                    ui,
                    "Zeitspanne (Frames):",
                    &mut opts.single_key_frame_span,
                    1.0..=600.0,
                    1.0,
                );
                changed |= drag_value(
                    ui,
                    "Wertespanne:",
                    &mut opts.single_key_value_span,
                    1.0..=10_000.0,
                    1.0,
                );
            });

            ui.collapsing("Farben", |ui| {
                changed |= color_edit(ui, "Kurve:", &mut opts.curve_color);
                changed |= color_edit(ui, "Handle 1 / Out:", &mut opts.handle_out_color);
                changed |= color_edit(ui, "Handle 2 / In:", &mut opts.handle_in_color);
                changed |= color_edit(ui, "Führungslinien:", &mut opts.guide_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(EditorIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(EditorIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(EditorIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

fn modifier_combo(ui: &mut egui::Ui, label: &str, id: &str, key: &mut ModifierKey) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(format!("{:?}", key))
            .show_ui(ui, |ui| {
                for candidate in MODIFIER_KEYS {
                    changed |= ui
                        .selectable_value(key, candidate, format!("{:?}", candidate))
                        .changed();
                }
            });
    });
    changed
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}
