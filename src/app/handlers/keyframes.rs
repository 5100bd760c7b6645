//! Handler für Get/Apply gegen das Animationsdokument.

use crate::app::document::AnimationDocument;
use crate::app::fitting::{apply_easing, extract_easing, Extraction, SingleKeySpan};
use crate::app::EditorState;

fn single_key_span(state: &EditorState) -> SingleKeySpan {
    SingleKeySpan {
        frames: state.options.single_key_frame_span,
        values: state.options.single_key_value_span,
    }
}

/// Get: leitet die Kurve aus der Keyframe-Selektion ab.
///
/// Fehler landen als Statusmeldung; die Kurve bleibt dann unverändert.
pub fn extract(state: &mut EditorState, document: &mut dyn AnimationDocument) {
    match extract_easing(document, single_key_span(state)) {
        Ok(Extraction::Fitted { curve, report }) => {
            state.set_curve(curve);
            state.active_preset = None;
            state.ui.set_status(format!(
                "Read {} from {} attribute group(s)",
                curve.to_css(),
                report.succeeded()
            ));
        }
        Ok(Extraction::Unchanged) => {
            state
                .ui
                .set_status("Keyframe has no tangent handle, curve unchanged");
        }
        Err(e) => {
            log::warn!("Get fehlgeschlagen: {}", e);
            state.ui.set_status(format!("Get failed: {e}"));
        }
    }
}

/// Apply: schreibt die Kurve in die Keyframe-Selektion.
pub fn apply(state: &mut EditorState, document: &mut dyn AnimationDocument) {
    let curve = state.curve.bezier();
    match apply_easing(document, &curve, single_key_span(state)) {
        Ok(report) if report.failed() > 0 => {
            state.ui.set_status(format!(
                "Applied to {} pair(s), {} group(s) failed",
                report.pairs(),
                report.failed()
            ));
        }
        Ok(report) => {
            state
                .ui
                .set_status(format!("Applied to {} pair(s)", report.pairs()));
        }
        Err(e) => {
            log::warn!("Apply fehlgeschlagen: {}", e);
            state.ui.set_status(format!("Apply failed: {e}"));
        }
    }
}
