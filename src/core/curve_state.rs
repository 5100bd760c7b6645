//! Kanonischer Kurvenzustand einer Editor-Sitzung.

use super::curve::{BezierCurve, SpeedCurve};
use super::curve_math::{bezier_to_speed, speed_to_bezier};

/// Einzige Wahrheitsquelle für beide Graphen.
///
/// Gespeichert wird nur die Value-Bézier; die Speed-Darstellung wird bei
/// jedem Zugriff frisch abgeleitet und kann daher nicht auseinanderlaufen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveState {
    bezier: BezierCurve,
}

impl CurveState {
    pub fn new(bezier: BezierCurve) -> Self {
        Self { bezier }
    }

    pub fn bezier(&self) -> BezierCurve {
        self.bezier
    }

    /// Abgeleitete Speed-Darstellung.
    pub fn speed(&self) -> SpeedCurve {
        bezier_to_speed(&self.bezier)
    }

    pub fn set_bezier(&mut self, bezier: BezierCurve) {
        self.bezier = bezier;
    }

    /// Übernimmt eine Speed-Bearbeitung und rechnet sie in den Value-Raum um.
    pub fn set_speed(&mut self, speed: SpeedCurve) {
        self.bezier = speed_to_bezier(&speed);
    }
}
