//! EditorIntent- und EditorCommand-Enums für den Intent/Command-Datenfluss.
//!
//! Intents sind Eingaben aus UI/System ohne Mutationslogik. Commands sind
//! mutierende Schritte, die der Controller zentral ausführt.

use super::state::{ClipboardFormat, EditorTab};
use crate::core::BezierCurve;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Welche Graph-Fläche ein Pointer-Event betrifft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Value,
    Speed,
}

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Pointer gedrückt (lokale Pixel der Graph-Fläche)
    GraphPointerPressed { graph: GraphKind, pos: Vec2 },
    /// Pointer bewegt während gedrückt
    GraphPointerMoved { graph: GraphKind, pos: Vec2 },
    /// Pointer losgelassen
    GraphPointerReleased { graph: GraphKind },
    /// Tab gewechselt
    TabSelected { tab: EditorTab },
    /// Bézier-Textfeld bestätigt
    BezierTextSubmitted { text: String },
    /// Preset im Dropdown gewählt
    PresetSelected { name: String },
    /// Speichern-Dialog öffnen
    SavePresetDialogRequested,
    /// Aktuelle Kurve unter Namen speichern
    SavePresetConfirmed { name: String },
    /// Umbenennen-Dialog für ein Preset öffnen
    RenamePresetDialogRequested { name: String },
    RenamePresetConfirmed { old: String, new: String },
    DeletePresetRequested { name: String },
    /// Rückfrage "alle löschen" öffnen
    DeleteAllPresetsRequested,
    DeleteAllPresetsConfirmed,
    /// Offene Preset-Dialoge schließen
    PresetDialogCancelled,
    ImportPresetsRequested,
    ImportFileSelected { path: String },
    ExportPresetsRequested,
    ExportFileSelected { path: String },
    CopyCurveRequested { format: ClipboardFormat },
    ApplyOnDragToggled,
    /// Get: Kurve aus der Keyframe-Selektion ableiten
    GetEasingRequested,
    /// Apply: Kurve auf die Keyframe-Selektion schreiben
    ApplyEasingRequested,
    OptionsDialogRequested,
    CloseOptionsDialogRequested,
    /// Optionen im Dialog geändert (Live-Übernahme)
    OptionsChanged { options: EditorOptions },
    ResetOptionsRequested,
}

#[derive(Debug, Clone)]
pub enum EditorCommand {
    // === Drags ===
    BeginDrag { graph: GraphKind, pos: Vec2 },
    UpdateDrag { graph: GraphKind, pos: Vec2 },
    EndDrag { graph: GraphKind },
    /// Markierung des aktiven Presets entfernen (manuelle Änderung)
    ClearActivePreset,

    // === Ansicht ===
    SetActiveTab { tab: EditorTab },
    PersistActiveTab,
    CopyToClipboard { format: ClipboardFormat },

    // === Kurve ===
    SetCurve { curve: BezierCurve },
    /// Ungültige Texteingabe melden und Textfeld zurücksetzen
    RejectBezierText { text: String, reason: String },

    // === Presets ===
    SelectPreset { name: String },
    OpenSavePresetDialog,
    SavePreset { name: String },
    OpenRenamePresetDialog { name: String },
    RenamePreset { old: String, new: String },
    DeletePreset { name: String },
    OpenDeleteAllConfirm,
    DeleteAllPresets,
    ClosePresetDialogs,
    RequestImportDialog,
    ImportPresets { path: String },
    RequestExportDialog,
    ExportPresets { path: String },
    SetApplyOnDrag { enabled: bool },

    // === Keyframes ===
    ExtractEasing,
    ApplyEasing,

    // === Optionen ===
    OpenOptionsDialog,
    CloseOptionsDialog,
    ApplyOptions { options: EditorOptions },
    ResetOptions,
}
