//! Application-Layer: Controller, State, Events, Fitting und Interaktion.

pub mod controller;
pub mod document;
pub mod events;
/// Keyframe-Fitting
///
/// Leitet eine Bézier aus der Keyframe-Selektion ab und schreibt sie zurück.
pub mod fitting;
pub mod handlers;
pub mod interaction;
mod intent_mapping;
pub mod memory_document;
pub mod preferences;
/// Editor State
///
/// Kurve, Presets, Tabs, Drag-Automaten und UI-Zustand einer Sitzung.
pub mod state;

pub use controller::{EditorController, HostContext};
pub use document::{AnimationDocument, TimeCursorGuard};
pub use events::{EditorCommand, EditorIntent, GraphKind};
pub use fitting::{
    apply_easing, extract_easing, EasingError, Extraction, FitReport, GroupReport, SingleKeySpan,
};
pub use interaction::{DragModifier, ModifierSource};
pub use memory_document::{MemoryDocument, MemoryKeyframe};
pub use preferences::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use state::{ClipboardFormat, EditorState, EditorTab, UiState};
