use super::*;
use crate::app::memory_document::{MemoryDocument, MemoryKeyframe};
use crate::core::TangentData;
use approx::assert_relative_eq;
use glam::Vec2;

fn path(attr: &str) -> AttributePath {
    AttributePath::new("layer#1", attr)
}

/// Zwei Keyframes (Frame 0 → 30, Wert 0 → 100) mit Handles (10,20) / (-10,-20).
fn two_key_doc() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.insert(
        MemoryKeyframe::new("a", path("x"), 0.0, 0.0)
            .with_handles(None, Some(Vec2::new(10.0, 20.0))),
    );
    doc.insert(
        MemoryKeyframe::new("b", path("x"), 30.0, 100.0)
            .with_handles(Some(Vec2::new(-10.0, -20.0)), None),
    );
    doc.select("a");
    doc.select("b");
    doc
}

fn fitted(extraction: Extraction) -> BezierCurve {
    match extraction {
        Extraction::Fitted { curve, .. } => curve,
        Extraction::Unchanged => panic!("Kurve erwartet"),
    }
}

/// Dokument-Wrapper, der für ein Attribut jeden Schreib-/Lesezugriff scheitern lässt.
struct FlakyDocument {
    inner: MemoryDocument,
    broken: AttributePath,
}

impl AnimationDocument for FlakyDocument {
    fn selected_keyframe_ids(&self) -> anyhow::Result<Vec<KeyframeId>> {
        self.inner.selected_keyframe_ids()
    }
    fn attribute_of_keyframe(&self, id: &KeyframeId) -> anyhow::Result<String> {
        self.inner.attribute_of_keyframe(id)
    }
    fn frame_of_keyframe(&self, id: &KeyframeId) -> anyhow::Result<f32> {
        self.inner.frame_of_keyframe(id)
    }
    fn value_at(&self, path: &AttributePath, frame: f32) -> anyhow::Result<f32> {
        if path == &self.broken {
            anyhow::bail!("value read failed");
        }
        self.inner.value_at(path, frame)
    }
    fn current_frame(&self) -> f32 {
        self.inner.current_frame()
    }
    fn set_current_frame(&mut self, frame: f32) -> anyhow::Result<()> {
        self.inner.set_current_frame(frame)
    }
    fn tangent_data(&self, id: &KeyframeId) -> anyhow::Result<TangentData> {
        self.inner.tangent_data(id)
    }
    fn set_interpolation(&mut self, id: &KeyframeId, mode: Interpolation) -> anyhow::Result<()> {
        self.inner.set_interpolation(id, mode)
    }
    fn set_tangent(
        &mut self,
        path: &AttributePath,
        frame: f32,
        side: TangentSide,
        offset: Vec2,
    ) -> anyhow::Result<()> {
        if path == &self.broken {
            anyhow::bail!("tangent write failed");
        }
        self.inner.set_tangent(path, frame, side, offset)
    }
    fn unlock_tangent(&mut self, path: &AttributePath, frame: f32) -> anyhow::Result<()> {
        self.inner.unlock_tangent(path, frame)
    }
}

/// Zwei selektierte Keyframes, davon einer mit unlesbarem Attributpfad.
fn doc_with_unreadable_key() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.insert(
        MemoryKeyframe::new("ok", path("x"), 5.0, 1.0)
            .with_handles(None, Some(Vec2::new(15.0, 40.0))),
    );
    doc.insert(MemoryKeyframe::new("bad", AttributePath::new("layer#1", ""), 20.0, 2.0));
    doc.select("ok");
    doc.select("bad");
    doc
}

#[test]
fn test_selection_counts_unreadable_keys() {
    let doc = doc_with_unreadable_key();
    let selection = collect_groups(&doc).expect("Selektion lesbar");
    assert_eq!(selection.selected, 2);
    assert_eq!(selection.groups.len(), 1);
    assert_eq!(selection.skipped(), 1);
}

// ── Extract ──

#[test]
fn test_extract_two_keyframes_matches_handles() {
    let mut doc = two_key_doc();
    let curve = fitted(extract_easing(&mut doc, SingleKeySpan::default()).expect("Fit klappt"));
    assert_relative_eq!(curve.x1, 1.0 / 3.0, epsilon = 1e-3);
    assert_relative_eq!(curve.y1, 0.2, epsilon = 1e-4);
    assert_relative_eq!(curve.x2, 2.0 / 3.0, epsilon = 1e-3);
    assert_relative_eq!(curve.y2, 0.8, epsilon = 1e-4);
}

#[test]
fn test_extract_without_selection_fails() {
    let mut doc = two_key_doc();
    doc.clear_selection();
    assert!(matches!(
        extract_easing(&mut doc, SingleKeySpan::default()),
        Err(EasingError::NoSelection)
    ));
}

#[test]
fn test_extract_single_key_without_handle_is_noop() {
    let mut doc = MemoryDocument::new();
    doc.insert(MemoryKeyframe::new("solo", path("x"), 5.0, 1.0));
    doc.select("solo");
    assert!(matches!(
        extract_easing(&mut doc, SingleKeySpan::default()),
        Ok(Extraction::Unchanged)
    ));
}

#[test]
fn test_extract_single_key_mirrors_out_handle() {
    let mut doc = MemoryDocument::new();
    doc.insert(
        MemoryKeyframe::new("solo", path("x"), 5.0, 1.0)
            .with_handles(None, Some(Vec2::new(15.0, 40.0))),
    );
    doc.select("solo");
    let curve = fitted(extract_easing(&mut doc, SingleKeySpan::default()).expect("Fit klappt"));
    assert_relative_eq!(curve.x1, 0.5);
    assert_relative_eq!(curve.y1, 0.4);
    assert_relative_eq!(curve.x2, 0.5);
    assert_relative_eq!(curve.y2, 0.6);
}

#[test]
fn test_extract_missing_handles_contribute_linear() {
    let mut doc = two_key_doc();
    // Drittes Keyframe ohne Handles → Paar (b, c) trägt (0,0,1,1) bei
    doc.insert(MemoryKeyframe::new("c", path("x"), 60.0, 0.0));
    doc.select("c");
    let curve = fitted(extract_easing(&mut doc, SingleKeySpan::default()).expect("Fit klappt"));
    assert_relative_eq!(curve.x1, (1.0 / 3.0) / 2.0, epsilon = 1e-3);
    assert_relative_eq!(curve.y1, 0.1, epsilon = 1e-4);
    assert_relative_eq!(curve.x2, (2.0 / 3.0 + 1.0) / 2.0, epsilon = 1e-3);
    assert_relative_eq!(curve.y2, 0.9, epsilon = 1e-4);
}

#[test]
fn test_extract_ignores_groups_with_single_key() {
    let mut doc = two_key_doc();
    doc.insert(
        MemoryKeyframe::new("lonely", path("y"), 0.0, 3.0)
            .with_handles(None, Some(Vec2::new(50.0, 50.0))),
    );
    doc.select("lonely");
    let extraction = extract_easing(&mut doc, SingleKeySpan::default()).expect("Fit muss klappen");
    let Extraction::Fitted { curve, report } = extraction else {
        panic!("Kurve erwartet");
    };
    assert_eq!(report.groups.len(), 1);
    assert_relative_eq!(curve.y1, 0.2, epsilon = 1e-4);
}

#[test]
fn test_extract_keys_on_different_attributes_fail() {
    let mut doc = MemoryDocument::new();
    doc.insert(MemoryKeyframe::new("a", path("x"), 0.0, 0.0));
    doc.insert(MemoryKeyframe::new("b", path("y"), 10.0, 5.0));
    doc.select("a");
    doc.select("b");
    assert!(matches!(
        extract_easing(&mut doc, SingleKeySpan::default()),
        Err(EasingError::NoPairs)
    ));
}

#[test]
fn test_extract_two_selected_with_unreadable_key_does_not_mirror_single() {
    let mut doc = doc_with_unreadable_key();
    assert!(matches!(
        extract_easing(&mut doc, SingleKeySpan::default()),
        Err(EasingError::NoPairs)
    ));
}

#[test]
fn test_extract_restores_current_frame() {
    let mut doc = two_key_doc();
    doc.set_current_frame(17.0).expect("Frame setzen");
    extract_easing(&mut doc, SingleKeySpan::default()).expect("Fit muss klappen");
    assert_eq!(doc.current_frame(), 17.0);
}

#[test]
fn test_extract_continues_after_group_failure() {
    let mut inner = two_key_doc();
    inner.insert(MemoryKeyframe::new("c", path("broken"), 0.0, 0.0));
    inner.insert(MemoryKeyframe::new("d", path("broken"), 10.0, 1.0));
    inner.select("c");
    inner.select("d");
    let mut doc = FlakyDocument {
        inner,
        broken: path("broken"),
    };
    let extraction =
        extract_easing(&mut doc, SingleKeySpan::default()).expect("eine Gruppe reicht");
    let Extraction::Fitted { curve, report } = extraction else {
        panic!("Kurve erwartet");
    };
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    assert_relative_eq!(curve.y1, 0.2, epsilon = 1e-4);
}

// ── Apply ──

#[test]
fn test_apply_writes_handles_for_pair() {
    let mut doc = two_key_doc();
    let curve = BezierCurve::new(0.25, 0.1, 0.75, 0.9);
    let report =
        apply_easing(&mut doc, &curve, SingleKeySpan::default()).expect("Apply muss klappen");
    assert_eq!(report.pairs(), 1);

    let a = doc.keyframe("a").expect("a existiert");
    let b = doc.keyframe("b").expect("b existiert");
    let out = a.tangents.right_handle.expect("Out-Handle gesetzt");
    let inn = b.tangents.left_handle.expect("In-Handle gesetzt");
    assert_relative_eq!(out.x, 7.5);
    assert_relative_eq!(out.y, 10.0, epsilon = 1e-4);
    assert_relative_eq!(inn.x, -7.5);
    assert_relative_eq!(inn.y, -10.0, epsilon = 1e-4);
    assert_eq!(a.tangents.interpolation, Interpolation::Bezier);
    assert_eq!(b.tangents.interpolation, Interpolation::Bezier);
}

#[test]
fn test_apply_then_extract_returns_same_curve() {
    let mut doc = two_key_doc();
    let curve = BezierCurve::new(0.1, 0.7, 0.6, 1.2);
    apply_easing(&mut doc, &curve, SingleKeySpan::default()).expect("Apply muss klappen");
    let back = fitted(extract_easing(&mut doc, SingleKeySpan::default()).expect("Fit klappt"));
    for (a, e) in back.to_array().iter().zip(curve.to_array()) {
        assert_relative_eq!(*a, e, epsilon = 1e-4);
    }
}

#[test]
fn test_apply_single_key_uses_synthetic_span() {
    let mut doc = MemoryDocument::new();
    doc.insert(MemoryKeyframe::new("solo", path("x"), 12.0, 3.0).locked());
    doc.select("solo");
    let curve = BezierCurve::new(0.5, 0.2, 0.5, 0.8);
    apply_easing(&mut doc, &curve, SingleKeySpan::default()).expect("Apply muss klappen");

    let key = doc.keyframe("solo").expect("solo existiert");
    assert!(!key.tangent_locked, "Tangente muss entsperrt sein");
    let out = key.tangents.right_handle.expect("Out-Handle gesetzt");
    let inn = key.tangents.left_handle.expect("In-Handle gesetzt");
    assert_relative_eq!(out.x, 15.0);
    assert_relative_eq!(out.y, 20.0, epsilon = 1e-4);
    assert_relative_eq!(inn.x, -15.0);
    assert_relative_eq!(inn.y, -20.0, epsilon = 1e-4);
}

#[test]
fn test_apply_two_selected_with_unreadable_key_skips_synthetic_span() {
    let mut doc = doc_with_unreadable_key();
    let before = doc.keyframe("ok").expect("ok existiert").clone();
    assert!(matches!(
        apply_easing(&mut doc, &BezierCurve::DEFAULT, SingleKeySpan::default()),
        Err(EasingError::NoPairs)
    ));
    assert_eq!(doc.keyframe("ok").expect("ok existiert"), &before);
}

#[test]
fn test_apply_unlocks_locked_tangents() {
    let mut doc = MemoryDocument::new();
    doc.insert(MemoryKeyframe::new("a", path("x"), 0.0, 0.0).locked());
    doc.insert(MemoryKeyframe::new("b", path("x"), 10.0, 10.0).locked());
    doc.select("a");
    doc.select("b");
    apply_easing(&mut doc, &BezierCurve::LINEAR, SingleKeySpan::default())
        .expect("Apply muss klappen");
    assert!(doc.keyframes().iter().all(|k| !k.tangent_locked));
}

#[test]
fn test_apply_without_selection_fails() {
    let mut doc = MemoryDocument::new();
    assert!(matches!(
        apply_easing(&mut doc, &BezierCurve::DEFAULT, SingleKeySpan::default()),
        Err(EasingError::NoSelection)
    ));
}

#[test]
fn test_apply_partial_failure_reports_per_group() {
    let mut inner = two_key_doc();
    inner.insert(MemoryKeyframe::new("c", path("broken"), 0.0, 0.0));
    inner.insert(MemoryKeyframe::new("d", path("broken"), 10.0, 1.0));
    inner.select("c");
    inner.select("d");
    let mut doc = FlakyDocument {
        inner,
        broken: path("broken"),
    };
    doc.set_current_frame(4.0).expect("Frame setzen");

    let report = apply_easing(&mut doc, &BezierCurve::DEFAULT, SingleKeySpan::default())
        .expect("eine Gruppe reicht");
    assert_eq!(report.groups.len(), 2);
    assert_eq!(report.succeeded(), 1);
    let broken = report
        .groups
        .iter()
        .find(|g| g.path == path("broken"))
        .expect("Gruppe gemeldet");
    assert!(broken.outcome.is_err());
    assert_eq!(doc.current_frame(), 4.0);
}

#[test]
fn test_apply_all_groups_failing_is_error_and_restores_frame() {
    let mut inner = MemoryDocument::new();
    inner.insert(MemoryKeyframe::new("c", path("broken"), 0.0, 0.0));
    inner.insert(MemoryKeyframe::new("d", path("broken"), 10.0, 1.0));
    inner.select("c");
    inner.select("d");
    let mut doc = FlakyDocument {
        inner,
        broken: path("broken"),
    };
    doc.set_current_frame(8.0).expect("Frame setzen");
    assert!(matches!(
        apply_easing(&mut doc, &BezierCurve::DEFAULT, SingleKeySpan::default()),
        Err(EasingError::AllGroupsFailed(1))
    ));
    assert_eq!(doc.current_frame(), 8.0);
}
