//! Graph-Fläche: Pointer-Eingaben sammeln und Graph zeichnen.

use super::canvas::EguiCanvas;
use crate::app::{EditorIntent, EditorState, GraphKind};
use crate::render::{render_speed_graph, render_value_graph, GraphStyle};
use glam::Vec2;

/// Zeichnet den Graphen `graph`, hängt die Pointer-Intents dieses Frames an `events`
/// an und gibt die Response der Fläche zurück (für das Kontextmenü).
///
/// Positionen werden in lokale Pixel der Zeichenfläche umgerechnet.
/// `press_origin()` liefert die exakte Klickposition vor der Drag-Schwelle.
pub fn render_graph(
    ui: &mut egui::Ui,
    state: &EditorState,
    graph: GraphKind,
    events: &mut Vec<EditorIntent>,
) -> egui::Response {
    let layout = state.options.graph_layout();
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(layout.width, layout.height),
        egui::Sense::click_and_drag(),
    );
    let to_local = |p: egui::Pos2| Vec2::new(p.x - rect.min.x, p.y - rect.min.y);

    if response.drag_started_by(egui::PointerButton::Primary) {
        let press_pos = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = press_pos {
            events.push(EditorIntent::GraphPointerPressed {
                graph,
                pos: to_local(pos),
            });
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(EditorIntent::GraphPointerMoved {
                graph,
                pos: to_local(pos),
            });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        events.push(EditorIntent::GraphPointerReleased { graph });
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let mut canvas = EguiCanvas::new(rect.min, ui.visuals());
    let style = GraphStyle::from_options(&state.options);
    let curve = state.curve.bezier();
    match graph {
        GraphKind::Value => render_value_graph(&mut canvas, &curve, &layout, &style),
        GraphKind::Speed => render_speed_graph(
            &mut canvas,
            &curve,
            &layout,
            &style,
            state.options.velocity_sample_count,
        ),
    }
    canvas.paint(&painter);

    response
}
