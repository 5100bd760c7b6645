//! Drag-Automat des Speed-Graphen (Influence/Intensität-Handles).

use super::{pick_nearest, DragModifier, ModifierSource};
use crate::core::CurveState;
use crate::shared::GraphLayout;
use glam::Vec2;

/// Greifbares Handle des Speed-Graphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedHandle {
    /// Ausgehend, linke Plot-Hälfte
    Out,
    /// Eingehend, rechte Plot-Hälfte
    In,
}

/// Transienter Zustand eines laufenden Speed-Drags.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedDragSession {
    pub handle: SpeedHandle,
}

#[derive(Debug, Default)]
pub struct SpeedGraphInteraction {
    session: Option<SpeedDragSession>,
}

impl SpeedGraphInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SpeedDragSession> {
        self.session.as_ref()
    }

    /// Startet einen Drag auf dem Handle nahe `pointer`.
    pub fn press(
        &mut self,
        state: &CurveState,
        layout: &GraphLayout,
        hit_radius: f32,
        pointer: Vec2,
    ) -> bool {
        let positions = layout.speed_handle_positions(&state.speed());
        let handle = match pick_nearest(&positions, pointer, hit_radius) {
            Some(0) => SpeedHandle::Out,
            Some(_) => SpeedHandle::In,
            None => {
                self.session = None;
                return false;
            }
        };

        log::debug!("Speed-Drag gestartet: {:?}", handle);
        self.session = Some(SpeedDragSession { handle });
        true
    }

    /// Aktualisiert Influence und Intensität des gegriffenen Handles.
    ///
    /// Die Speed-Werte werden danach in die kanonische Bézier zurückgerechnet.
    pub fn drag_move(
        &mut self,
        state: &mut CurveState,
        layout: &GraphLayout,
        pointer: Vec2,
        modifiers: &dyn ModifierSource,
    ) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };

        let lock_y = modifiers.is_held(DragModifier::AxisLock);
        let mirror = modifiers.is_held(DragModifier::Mirror);
        let pointer_speed_y = layout.pixel_to_speed_y(pointer.y);

        let mut speed = state.speed();
        match session.handle {
            SpeedHandle::Out => {
                speed.out_influence = layout.out_influence_at(pointer.x);
                if !lock_y {
                    speed.out_speed_y = pointer_speed_y;
                }
                if mirror {
                    speed.in_influence = speed.out_influence;
                    speed.in_speed_y = speed.out_speed_y;
                }
            }
            SpeedHandle::In => {
                speed.in_influence = layout.in_influence_at(pointer.x);
                if !lock_y {
                    speed.in_speed_y = pointer_speed_y;
                }
                if mirror {
                    speed.out_influence = speed.in_influence;
                    speed.out_speed_y = speed.in_speed_y;
                }
            }
        }
        state.set_speed(speed);
        true
    }

    pub fn release(&mut self) -> Option<SpeedDragSession> {
        let session = self.session.take();
        if let Some(s) = &session {
            log::debug!("Speed-Drag beendet: {:?}", s.handle);
        }
        session
    }
}
