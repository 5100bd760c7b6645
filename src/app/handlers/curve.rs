//! Handler für Kurven-Drags und direkte Kurveneingabe.

use crate::app::interaction::ModifierSource;
use crate::app::{EditorState, GraphKind};
use crate::core::BezierCurve;
use glam::Vec2;

/// Startet einen Drag, falls ein Handle getroffen wurde.
pub fn begin_drag(state: &mut EditorState, graph: GraphKind, pos: Vec2) {
    let layout = state.options.graph_layout();
    let hit_radius = state.options.hit_radius();
    let started = match graph {
        GraphKind::Value => state.value_graph.press(&state.curve, &layout, hit_radius, pos),
        GraphKind::Speed => state.speed_graph.press(&state.curve, &layout, hit_radius, pos),
    };
    if !started {
        log::debug!("{:?}-Graph: kein Handle bei ({:.1}, {:.1})", graph, pos.x, pos.y);
    }
}

/// Bewegt das gegriffene Handle und hält das Textfeld synchron.
pub fn update_drag(
    state: &mut EditorState,
    graph: GraphKind,
    pos: Vec2,
    modifiers: &dyn ModifierSource,
) {
    let layout = state.options.graph_layout();
    let moved = match graph {
        GraphKind::Value => state
            .value_graph
            .drag_move(&mut state.curve, &layout, pos, modifiers),
        GraphKind::Speed => state
            .speed_graph
            .drag_move(&mut state.curve, &layout, pos, modifiers),
    };
    if moved {
        state.sync_bezier_text();
    }
}

/// Beendet den Drag auf der angegebenen Fläche.
pub fn end_drag(state: &mut EditorState, graph: GraphKind) {
    let ended = match graph {
        GraphKind::Value => state.value_graph.release().is_some(),
        GraphKind::Speed => state.speed_graph.release().is_some(),
    };
    if ended {
        log::info!("Kurve nach Drag: {}", state.curve.bezier());
    }
}

/// Übernimmt eine Kurve aus der Texteingabe.
pub fn set_curve(state: &mut EditorState, curve: BezierCurve) {
    state.set_curve(curve);
    state.ui.set_status(format!("Curve set to {}", curve.to_css()));
    log::info!("Kurve gesetzt: {}", curve);
}

/// Meldet eine ungültige Texteingabe; die Kurve bleibt unverändert.
pub fn reject_text(state: &mut EditorState, text: &str, reason: &str) {
    log::warn!("Ungültige Bézier-Eingabe '{}': {}", text, reason);
    state.ui.set_status(format!("Invalid curve: {reason}"));
    state.sync_bezier_text();
}
