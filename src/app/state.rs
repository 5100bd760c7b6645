//! Editor State: zentrale Datenhaltung einer Editor-Sitzung.

use super::interaction::{SpeedGraphInteraction, ValueGraphInteraction};
use super::preferences::{
    load_presets, load_value, PreferenceStore, PREF_ACTIVE_TAB, PREF_APPLY_ON_DRAG,
};
use crate::core::{BezierCurve, CurveState, PresetLibrary};
use crate::shared::EditorOptions;

/// Tab des Editor-Fensters; der Index wird persistiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Speed,
    Value,
}

impl EditorTab {
    pub fn index(self) -> u8 {
        match self {
            EditorTab::Speed => 0,
            EditorTab::Value => 1,
        }
    }

    /// Unbekannte Indizes ergeben `None`.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(EditorTab::Speed),
            1 => Some(EditorTab::Value),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EditorTab::Speed => "Speed",
            EditorTab::Value => "Value",
        }
    }
}

/// Format beim Kopieren der Kurve in die Zwischenablage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardFormat {
    /// `cubic-bezier(x1, y1, x2, y2)`
    Css,
    /// `x1, y1, x2, y2`
    ValueList,
}

/// UI-bezogener Zustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Inhalt des Bézier-Textfelds
    pub bezier_text: String,
    /// Letzte nutzerrelevante Meldung (Status-Bar)
    pub status_message: Option<String>,
    /// Text, den die UI beim nächsten Frame in die Zwischenablage schreibt
    pub clipboard_out: Option<String>,
    /// Eingabe im Preset-Speichern-Dialog
    pub preset_name_input: String,
    /// Ob der Preset-Speichern-Dialog angezeigt wird
    pub show_save_preset_dialog: bool,
    /// Preset, das gerade umbenannt wird
    pub rename_target: Option<String>,
    /// Eingabe im Umbenennen-Dialog
    pub rename_input: String,
    /// Ob die Rückfrage "alle Presets löschen" angezeigt wird
    pub show_delete_all_confirm: bool,
    /// Ob der Import-Dateidialog geöffnet werden soll
    pub show_import_dialog: bool,
    /// Ob der Export-Dateidialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Ob der Optionen-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Statusmeldung.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

/// Hauptzustand des Editors
pub struct EditorState {
    /// Kanonische Kurve beider Graphen
    pub curve: CurveState,
    pub presets: PresetLibrary,
    /// Zuletzt gewähltes Preset; wird bei jeder manuellen Änderung gelöscht
    pub active_preset: Option<String>,
    pub active_tab: EditorTab,
    /// Kurve nach jedem Drag automatisch auf die Keyframes anwenden
    pub apply_on_drag: bool,
    pub value_graph: ValueGraphInteraction,
    pub speed_graph: SpeedGraphInteraction,
    /// Laufzeit-Optionen (Layout, Farben, Modifier)
    pub options: EditorOptions,
    pub ui: UiState,
}

impl EditorState {
    /// Erstellt einen Zustand mit Standardkurve und eingebauten Presets.
    pub fn new() -> Self {
        let curve = CurveState::new(BezierCurve::DEFAULT);
        let ui = UiState {
            bezier_text: curve.bezier().to_value_list(),
            ..UiState::default()
        };
        Self {
            curve,
            presets: PresetLibrary::default(),
            active_preset: None,
            active_tab: EditorTab::default(),
            apply_on_drag: false,
            value_graph: ValueGraphInteraction::new(),
            speed_graph: SpeedGraphInteraction::new(),
            options: EditorOptions::default(),
            ui,
        }
    }

    /// Übernimmt Presets, Apply-on-Drag und Tab aus dem Präferenz-Speicher.
    ///
    /// Fehlende oder fehlerhafte Einträge behalten ihre Standardwerte.
    pub fn restore_preferences(&mut self, store: &dyn PreferenceStore) {
        self.presets = load_presets(store);
        if let Some(enabled) = load_value::<bool>(store, PREF_APPLY_ON_DRAG) {
            self.apply_on_drag = enabled;
        }
        if let Some(tab) =
            load_value::<u8>(store, PREF_ACTIVE_TAB).and_then(EditorTab::from_index)
        {
            self.active_tab = tab;
        }
        log::info!(
            "Präferenzen übernommen: {} Presets, Apply-on-Drag {}, Tab {}",
            self.presets.len(),
            self.apply_on_drag,
            self.active_tab.label()
        );
    }

    /// Setzt die Kurve und synchronisiert das Textfeld.
    pub fn set_curve(&mut self, curve: BezierCurve) {
        self.curve.set_bezier(curve);
        self.sync_bezier_text();
    }

    /// Schreibt die aktuelle Kurve ins Textfeld.
    pub fn sync_bezier_text(&mut self) {
        self.ui.bezier_text = self.curve.bezier().to_value_list();
    }

    pub fn is_dragging(&self) -> bool {
        self.value_graph.is_dragging() || self.speed_graph.is_dragging()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
