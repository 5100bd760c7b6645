//! Drag-Automat des Value-Graphen (Steuerpunkte cp1/cp2).

use super::{pick_nearest, DragModifier, ModifierSource};
use crate::core::CurveState;
use crate::shared::GraphLayout;
use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

/// Greifbares Handle des Value-Graphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueHandle {
    Cp1,
    Cp2,
}

impl ValueHandle {
    /// Logischer Ankerpunkt des Handles im Kurvenraum.
    pub fn anchor(self) -> Vec2 {
        match self {
            ValueHandle::Cp1 => Vec2::ZERO,
            ValueHandle::Cp2 => Vec2::ONE,
        }
    }
}

/// Achsen-Sperre während eines Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisConstraint {
    #[default]
    None,
    /// Nur horizontale Bewegung, y eingerastet
    X,
    /// Nur vertikale Bewegung, x eingerastet
    Y,
}

/// Transienter Zustand eines laufenden Value-Drags.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDragSession {
    pub handle: ValueHandle,
    pub constraint: AxisConstraint,
    /// Eingerasteter Wert der gesperrten Koordinate (0 oder 1)
    pub locked_value: f32,
}

/// Zustände: idle (`session == None`) und dragging.
#[derive(Debug, Default)]
pub struct ValueGraphInteraction {
    session: Option<ValueDragSession>,
}

impl ValueGraphInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ValueDragSession> {
        self.session.as_ref()
    }

    /// Startet einen Drag, wenn `pointer` innerhalb von `hit_radius` eines Handles liegt.
    ///
    /// Ein neuer Press ersetzt eine eventuell noch offene Session.
    pub fn press(
        &mut self,
        state: &CurveState,
        layout: &GraphLayout,
        hit_radius: f32,
        pointer: Vec2,
    ) -> bool {
        let positions = layout.value_handle_positions(&state.bezier());
        let handle = match pick_nearest(&positions, pointer, hit_radius) {
            Some(0) => ValueHandle::Cp1,
            Some(_) => ValueHandle::Cp2,
            None => {
                self.session = None;
                return false;
            }
        };

        log::debug!("Value-Drag gestartet: {:?}", handle);
        self.session = Some(ValueDragSession {
            handle,
            constraint: AxisConstraint::None,
            locked_value: 0.0,
        });
        true
    }

    /// Aktualisiert das gegriffene Handle aus der Pointer-Position.
    ///
    /// Gibt `false` zurück, wenn kein Drag aktiv ist.
    pub fn drag_move(
        &mut self,
        state: &mut CurveState,
        layout: &GraphLayout,
        pointer: Vec2,
        modifiers: &dyn ModifierSource,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let mut target = layout.to_curve(pointer);

        if modifiers.is_held(DragModifier::AxisLock) {
            if session.constraint == AxisConstraint::None {
                let (constraint, locked_value) = detect_constraint(session.handle, target);
                session.constraint = constraint;
                session.locked_value = locked_value;
                log::debug!("Achsen-Sperre {:?} bei {}", constraint, locked_value);
            }
            match session.constraint {
                AxisConstraint::X => target.y = session.locked_value,
                AxisConstraint::Y => target.x = session.locked_value,
                AxisConstraint::None => {}
            }
        } else {
            session.constraint = AxisConstraint::None;
        }

        let mut curve = state.bezier();
        match session.handle {
            ValueHandle::Cp1 => {
                curve.x1 = target.x;
                curve.y1 = target.y;
            }
            ValueHandle::Cp2 => {
                curve.x2 = target.x;
                curve.y2 = target.y;
            }
        }
        state.set_bezier(curve);
        true
    }

    /// Beendet den Drag und leert alle transienten Felder.
    ///
    /// Gibt die beendete Session zurück (`None`, wenn kein Drag lief).
    pub fn release(&mut self) -> Option<ValueDragSession> {
        let session = self.session.take();
        if let Some(s) = &session {
            log::debug!("Value-Drag beendet: {:?}", s.handle);
        }
        session
    }
}

/// Bestimmt die Sperr-Achse aus dem Winkel Anker → Handle.
///
/// Näher an der Horizontalen: horizontal bewegen, y rastet auf 0/1.
/// Sonst vertikal bewegen, x rastet auf 0/1.
fn detect_constraint(handle: ValueHandle, position: Vec2) -> (AxisConstraint, f32) {
    let delta = position - handle.anchor();
    let angle = delta.y.atan2(delta.x).abs();
    let horizontal = angle <= FRAC_PI_4 || angle >= 3.0 * FRAC_PI_4;
    if horizontal {
        (AxisConstraint::X, snap_unit(position.y))
    } else {
        (AxisConstraint::Y, snap_unit(position.x))
    }
}

/// Nächstgelegener Wert aus {0, 1}.
fn snap_unit(v: f32) -> f32 {
    if v < 0.5 {
        0.0
    } else {
        1.0
    }
}
