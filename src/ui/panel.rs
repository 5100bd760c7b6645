//! Haupt-Panel: Tabs, aktiver Graph, Bézier-Feld, Preset-Auswahl, Get/Apply.

use super::context_menu::show_graph_context_menu;
use super::graph_view::render_graph;
use crate::app::{EditorIntent, EditorState, EditorTab, GraphKind};

/// Anzeigename, wenn kein Preset aktiv ist.
const CUSTOM_PRESET_LABEL: &str = "Custom";

/// Rendert das Editor-Panel und gibt erzeugte Events zurück.
pub fn render_editor_panel(ui: &mut egui::Ui, state: &mut EditorState) -> Vec<EditorIntent> {
    let mut events = Vec::new();

    render_tabs(ui, state, &mut events);
    ui.add_space(4.0);

    let graph = match state.active_tab {
        EditorTab::Speed => GraphKind::Speed,
        EditorTab::Value => GraphKind::Value,
    };
    let response = render_graph(ui, state, graph, &mut events);
    show_graph_context_menu(&response, state, &mut events);

    ui.add_space(6.0);
    render_bezier_field(ui, state, &mut events);
    ui.add_space(4.0);
    render_preset_combo(ui, state, &mut events);
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if ui
            .button("⬇ Get")
            .on_hover_text("Kurve aus den gewählten Keyframes ableiten")
            .clicked()
        {
            events.push(EditorIntent::GetEasingRequested);
        }
        if ui
            .button("⬆ Apply")
            .on_hover_text("Kurve auf die gewählten Keyframes anwenden")
            .clicked()
        {
            events.push(EditorIntent::ApplyEasingRequested);
        }
    });

    events
}

fn render_tabs(ui: &mut egui::Ui, state: &EditorState, events: &mut Vec<EditorIntent>) {
    ui.horizontal(|ui| {
        for tab in [EditorTab::Speed, EditorTab::Value] {
            let selected = state.active_tab == tab;
            if ui
                .add(egui::Button::new(tab.label()).selected(selected))
                .clicked()
                && !selected
            {
                events.push(EditorIntent::TabSelected { tab });
            }
        }
    });
}

/// Textfeld `x1, y1, x2, y2`; übernommen wird bei Enter.
fn render_bezier_field(ui: &mut egui::Ui, state: &mut EditorState, events: &mut Vec<EditorIntent>) {
    ui.horizontal(|ui| {
        ui.label("Bézier:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.ui.bezier_text)
                .desired_width(state.options.graph_width - 60.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            events.push(EditorIntent::BezierTextSubmitted {
                text: state.ui.bezier_text.clone(),
            });
        }
    });
}

fn render_preset_combo(ui: &mut egui::Ui, state: &EditorState, events: &mut Vec<EditorIntent>) {
    let selected_text = state
        .active_preset
        .as_deref()
        .unwrap_or(CUSTOM_PRESET_LABEL);

    ui.horizontal(|ui| {
        ui.label("Preset:");
        egui::ComboBox::from_id_salt("preset_combo")
            .selected_text(selected_text)
            .width(state.options.graph_width - 60.0)
            .show_ui(ui, |ui| {
                for name in state.presets.names() {
                    let is_active = state.active_preset.as_deref() == Some(name);
                    if ui.selectable_label(is_active, name).clicked() {
                        events.push(EditorIntent::PresetSelected {
                            name: name.to_string(),
                        });
                    }
                }
            });
    });
}
