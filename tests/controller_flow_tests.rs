use approx::assert_relative_eq;
use easing_curve_editor::app::preferences::{PREF_ACTIVE_TAB, PREF_APPLY_ON_DRAG, PREF_PRESETS};
use easing_curve_editor::core::AttributePath;
use easing_curve_editor::{
    BezierCurve, ClipboardFormat, DragModifier, EditorController, EditorIntent, EditorState,
    EditorTab, GraphKind, HostContext, MemoryDocument, MemoryKeyframe, MemoryPreferenceStore,
    ModifierSource, PreferenceStore,
};
use glam::Vec2;

struct NoModifiers;

impl ModifierSource for NoModifiers {
    fn is_held(&self, _modifier: DragModifier) -> bool {
        false
    }
}

/// Editor mit Speicher-Dokument und Speicher-Präferenzen.
struct Harness {
    controller: EditorController,
    state: EditorState,
    document: MemoryDocument,
    preferences: MemoryPreferenceStore,
}

impl Harness {
    fn new() -> Self {
        Self {
            controller: EditorController::new(),
            state: EditorState::new(),
            document: MemoryDocument::new(),
            preferences: MemoryPreferenceStore::new(),
        }
    }

    /// Zwei Keyframes (Frame 0 → 30, Wert 0 → 100), beide selektiert.
    fn with_two_keyframes() -> Self {
        let mut harness = Self::new();
        let path = AttributePath::new("layer#1", "x");
        harness.document.insert(
            MemoryKeyframe::new("a", path.clone(), 0.0, 0.0)
                .with_handles(None, Some(Vec2::new(10.0, 20.0))),
        );
        harness.document.insert(
            MemoryKeyframe::new("b", path, 30.0, 100.0)
                .with_handles(Some(Vec2::new(-10.0, -20.0)), None),
        );
        harness.document.select("a");
        harness.document.select("b");
        harness
    }

    fn send(&mut self, intent: EditorIntent) {
        let mut host = HostContext {
            document: &mut self.document,
            preferences: &mut self.preferences,
            modifiers: &NoModifiers,
        };
        self.controller
            .handle_intent(&mut self.state, &mut host, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Drag im Value-Graphen von `from` nach `to` (lokale Pixel).
    fn drag_value(&mut self, from: Vec2, to: Vec2) {
        self.send(EditorIntent::GraphPointerPressed {
            graph: GraphKind::Value,
            pos: from,
        });
        self.send(EditorIntent::GraphPointerMoved {
            graph: GraphKind::Value,
            pos: to,
        });
        self.send(EditorIntent::GraphPointerReleased {
            graph: GraphKind::Value,
        });
    }
}

// Standard-Layout: 260 px, Rand 30 → Plot 200 px. Startkurve (0.5, 0, 0, 1).
const CP1_PIXEL: Vec2 = Vec2::new(130.0, 230.0);

#[test]
fn test_value_drag_updates_curve_and_text() {
    let mut h = Harness::new();
    h.state.active_preset = Some("Default".to_string());

    h.drag_value(CP1_PIXEL, Vec2::new(180.0, 130.0));

    let curve = h.state.curve.bezier();
    assert_relative_eq!(curve.x1, 0.75);
    assert_relative_eq!(curve.y1, 0.5);
    assert_relative_eq!(curve.x2, 0.0);
    assert_relative_eq!(curve.y2, 1.0);
    assert_eq!(h.state.ui.bezier_text, curve.to_value_list());
    assert!(h.state.active_preset.is_none(), "Drag löscht das aktive Preset");
    assert!(!h.state.is_dragging());
}

#[test]
fn test_speed_view_follows_value_drag() {
    let mut h = Harness::new();

    h.drag_value(CP1_PIXEL, Vec2::new(180.0, 130.0));

    let speed = h.state.curve.speed();
    assert_relative_eq!(speed.out_influence, 75.0, epsilon = 1e-4);
    let back = easing_curve_editor::core::speed_to_bezier(&speed);
    assert_relative_eq!(back.x1, 0.75, epsilon = 1e-4);
    assert_relative_eq!(back.y1, 0.5, epsilon = 1e-4);
}

#[test]
fn test_press_outside_handles_does_not_change_curve() {
    let mut h = Harness::new();
    let before = h.state.curve.bezier();

    h.drag_value(Vec2::new(5.0, 5.0), Vec2::new(200.0, 200.0));

    assert_eq!(h.state.curve.bezier(), before);
}

#[test]
fn test_apply_on_drag_writes_keyframes_after_release() {
    let mut h = Harness::with_two_keyframes();
    h.send(EditorIntent::ApplyOnDragToggled);
    assert!(h.state.apply_on_drag);
    assert_eq!(
        h.preferences.get(PREF_APPLY_ON_DRAG).expect("lesbar"),
        Some(serde_json::json!(true))
    );

    h.drag_value(CP1_PIXEL, Vec2::new(180.0, 130.0));

    // Out-Handle des ersten Keys: x = 0.75 · 30, y = 0.5 · 100
    let a = h.document.keyframe("a").expect("Keyframe a");
    let out = a.tangents.right_handle.expect("Out-Handle gesetzt");
    assert_relative_eq!(out.x, 22.5, epsilon = 1e-3);
    assert_relative_eq!(out.y, 50.0, epsilon = 1e-3);
}

#[test]
fn test_drag_without_apply_on_drag_leaves_keyframes_alone() {
    let mut h = Harness::with_two_keyframes();
    let before = h.document.keyframes().to_vec();

    h.drag_value(CP1_PIXEL, Vec2::new(180.0, 130.0));

    assert_eq!(h.document.keyframes(), before.as_slice());
}

#[test]
fn test_get_reads_curve_from_selected_keyframes() {
    let mut h = Harness::with_two_keyframes();

    h.send(EditorIntent::GetEasingRequested);

    let curve = h.state.curve.bezier();
    assert_relative_eq!(curve.x1, 1.0 / 3.0, epsilon = 1e-3);
    assert_relative_eq!(curve.y1, 0.2, epsilon = 1e-4);
    assert_relative_eq!(curve.x2, 2.0 / 3.0, epsilon = 1e-3);
    assert_relative_eq!(curve.y2, 0.8, epsilon = 1e-4);
    assert_eq!(h.state.ui.bezier_text, curve.to_value_list());
}

#[test]
fn test_get_without_selection_reports_status_and_keeps_curve() {
    let mut h = Harness::new();
    let before = h.state.curve.bezier();

    h.send(EditorIntent::GetEasingRequested);

    assert_eq!(h.state.curve.bezier(), before);
    assert!(h.state.ui.status_message.is_some());
}

#[test]
fn test_apply_then_get_returns_same_curve() {
    let mut h = Harness::with_two_keyframes();
    h.send(EditorIntent::BezierTextSubmitted {
        text: "0.3, 0.1, 0.7, 0.9".to_string(),
    });
    h.send(EditorIntent::ApplyEasingRequested);

    h.state.set_curve(BezierCurve::LINEAR);
    h.send(EditorIntent::GetEasingRequested);

    let curve = h.state.curve.bezier();
    assert_relative_eq!(curve.x1, 0.3, epsilon = 1e-4);
    assert_relative_eq!(curve.y1, 0.1, epsilon = 1e-4);
    assert_relative_eq!(curve.x2, 0.7, epsilon = 1e-4);
    assert_relative_eq!(curve.y2, 0.9, epsilon = 1e-4);
}

#[test]
fn test_invalid_text_keeps_curve_and_resets_field() {
    let mut h = Harness::new();
    let before = h.state.curve.bezier();

    h.send(EditorIntent::BezierTextSubmitted {
        text: "0.1, abc".to_string(),
    });

    assert_eq!(h.state.curve.bezier(), before);
    assert_eq!(h.state.ui.bezier_text, before.to_value_list());
    assert!(h.state.ui.status_message.is_some());
}

#[test]
fn test_tab_selection_is_persisted() {
    let mut h = Harness::new();

    h.send(EditorIntent::TabSelected {
        tab: EditorTab::Value,
    });

    assert_eq!(h.state.active_tab, EditorTab::Value);
    assert_eq!(
        h.preferences.get(PREF_ACTIVE_TAB).expect("lesbar"),
        Some(serde_json::json!(1))
    );

    let mut restored = EditorState::new();
    restored.restore_preferences(&h.preferences);
    assert_eq!(restored.active_tab, EditorTab::Value);
}

#[test]
fn test_preset_save_select_rename_delete_flow() {
    let mut h = Harness::new();
    h.send(EditorIntent::BezierTextSubmitted {
        text: "0.1, 0.2, 0.3, 0.4".to_string(),
    });

    h.send(EditorIntent::SavePresetDialogRequested);
    assert!(h.state.ui.show_save_preset_dialog);
    h.send(EditorIntent::SavePresetConfirmed {
        name: "Mine".to_string(),
    });
    assert!(!h.state.ui.show_save_preset_dialog);
    assert_eq!(h.state.active_preset.as_deref(), Some("Mine"));
    assert!(h.preferences.has_key(PREF_PRESETS));

    h.send(EditorIntent::PresetSelected {
        name: "Linear".to_string(),
    });
    assert_eq!(h.state.curve.bezier(), BezierCurve::LINEAR);

    h.send(EditorIntent::RenamePresetDialogRequested {
        name: "Mine".to_string(),
    });
    h.send(EditorIntent::RenamePresetConfirmed {
        old: "Mine".to_string(),
        new: "Ours".to_string(),
    });
    assert!(h.state.presets.get("Mine").is_none());
    assert_eq!(
        h.state.presets.get("Ours"),
        Some(BezierCurve::new(0.1, 0.2, 0.3, 0.4))
    );

    h.send(EditorIntent::DeletePresetRequested {
        name: "Ours".to_string(),
    });
    assert!(h.state.presets.get("Ours").is_none());

    let mut restored = EditorState::new();
    restored.restore_preferences(&h.preferences);
    assert_eq!(restored.presets, h.state.presets);
}

#[test]
fn test_delete_all_presets_requires_confirmation() {
    let mut h = Harness::new();

    h.send(EditorIntent::DeleteAllPresetsRequested);
    assert!(h.state.ui.show_delete_all_confirm);
    assert!(!h.state.presets.is_empty());

    h.send(EditorIntent::DeleteAllPresetsConfirmed);
    assert!(h.state.presets.is_empty());
    assert!(!h.state.ui.show_delete_all_confirm);
}

#[test]
fn test_export_then_import_presets() {
    let path = std::env::temp_dir().join(format!(
        "easing_presets_flow_{}.json",
        std::process::id()
    ));
    let path_str = path.to_string_lossy().into_owned();

    let mut exporter = Harness::new();
    exporter.send(EditorIntent::SavePresetConfirmed {
        name: "Exported".to_string(),
    });
    exporter.send(EditorIntent::ExportFileSelected {
        path: path_str.clone(),
    });

    let mut importer = Harness::new();
    importer.send(EditorIntent::DeleteAllPresetsConfirmed);
    importer.send(EditorIntent::ImportFileSelected { path: path_str });

    assert_eq!(importer.state.presets, exporter.state.presets);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_import_missing_file_is_error() {
    let mut h = Harness::new();
    let mut host = HostContext {
        document: &mut h.document,
        preferences: &mut h.preferences,
        modifiers: &NoModifiers,
    };

    let result = h.controller.handle_intent(
        &mut h.state,
        &mut host,
        EditorIntent::ImportFileSelected {
            path: "/nonexistent/presets.json".to_string(),
        },
    );

    assert!(result.is_err());
}

#[test]
fn test_copy_curve_fills_clipboard_outbox() {
    let mut h = Harness::new();

    h.send(EditorIntent::CopyCurveRequested {
        format: ClipboardFormat::Css,
    });

    assert_eq!(
        h.state.ui.clipboard_out.as_deref(),
        Some("cubic-bezier(0.50, 0.00, 0.00, 1.00)")
    );
}
