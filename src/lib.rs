//! Easing-Kurven-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AnimationDocument, ClipboardFormat, DragModifier, EditorCommand, EditorController,
    EditorIntent, EditorState, EditorTab, GraphKind, HostContext, JsonFilePreferenceStore,
    MemoryDocument, MemoryKeyframe, MemoryPreferenceStore, ModifierSource, PreferenceStore,
    UiState,
};
pub use core::{BezierCurve, CurveState, HostHandles, PresetLibrary, SpeedCurve};
pub use shared::{EditorOptions, GraphLayout, ModifierKey};
