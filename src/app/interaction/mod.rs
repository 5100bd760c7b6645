//! Drag-Zustandsautomaten der beiden Graph-Flächen.
//!
//! Beide Automaten teilen sich einen [`CurveState`](crate::core::CurveState),
//! der per Referenz übergeben wird. Modifier werden bei jedem Move-Event
//! über [`ModifierSource`] abgefragt, nicht aus dem Event gelesen.

mod speed_graph;
mod value_graph;

pub use speed_graph::{SpeedDragSession, SpeedGraphInteraction, SpeedHandle};
pub use value_graph::{AxisConstraint, ValueDragSession, ValueGraphInteraction, ValueHandle};

use glam::Vec2;

/// Logische Modifier während eines Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragModifier {
    /// Value-Graph: Achse sperren und einrasten. Speed-Graph: vertikal einfrieren.
    AxisLock,
    /// Speed-Graph: gegenüberliegendes Handle spiegeln
    Mirror,
}

/// Liefert den Modifier-Zustand zum Zeitpunkt der Abfrage.
pub trait ModifierSource {
    fn is_held(&self, modifier: DragModifier) -> bool;
}

/// Index des nächstgelegenen Handles innerhalb von `radius`.
fn pick_nearest(positions: &[Vec2], pointer: Vec2, radius: f32) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(pointer)))
        .filter(|(_, dist)| *dist <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
