//! Zeichenflächen-Fähigkeit des Hosts.

use glam::Vec2;

/// Geometrie eines Pfads in lokalen Pixelkoordinaten (y nach unten).
#[derive(Debug, Clone, PartialEq)]
pub enum PathGeometry {
    Line { from: Vec2, to: Vec2 },
    Polyline { points: Vec<Vec2> },
    Circle { center: Vec2, radius: f32 },
}

/// Wie ein Pfad gezeichnet wird (RGBA 0..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill { color: [f32; 4] },
    Stroke { color: [f32; 4], width: f32 },
}

/// Farben, die der Host aus seinem Theme liefern kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Grid,
    Guide,
}

pub trait Canvas {
    /// Verwirft alle Pfade.
    fn clear(&mut self);
    fn add_path(&mut self, geometry: PathGeometry, paint: Paint);
    /// Fordert ein Neuzeichnen an.
    fn redraw(&mut self);
    /// Theme-Farbe des Hosts; `None` = Farbe aus den Optionen verwenden.
    fn theme_color(&self, color: ThemeColor) -> Option<[f32; 4]>;
}
