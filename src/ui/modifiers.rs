//! Modifier-Abfrage über den egui-Eingabezustand.

use crate::app::{DragModifier, ModifierSource};
use crate::shared::{EditorOptions, ModifierKey};

/// Liest bei jeder Abfrage den aktuellen Tastenzustand aus dem Context.
pub struct EguiModifiers {
    ctx: egui::Context,
    axis_lock_key: ModifierKey,
    mirror_key: ModifierKey,
}

impl EguiModifiers {
    pub fn new(ctx: &egui::Context, options: &EditorOptions) -> Self {
        Self {
            ctx: ctx.clone(),
            axis_lock_key: options.axis_lock_key,
            mirror_key: options.mirror_key,
        }
    }
}

impl ModifierSource for EguiModifiers {
    fn is_held(&self, modifier: DragModifier) -> bool {
        let key = match modifier {
            DragModifier::AxisLock => self.axis_lock_key,
            DragModifier::Mirror => self.mirror_key,
        };
        let modifiers = self.ctx.input(|i| i.modifiers);
        key_held(modifiers, key)
    }
}

fn key_held(modifiers: egui::Modifiers, key: ModifierKey) -> bool {
    match key {
        ModifierKey::Shift => modifiers.shift,
        ModifierKey::Alt => modifiers.alt,
        ModifierKey::Ctrl => modifiers.command,
    }
}
