//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod layout;
pub mod options;

pub use layout::GraphLayout;
pub use options::{EditorOptions, ModifierKey};
