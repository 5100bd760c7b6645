//! egui-Implementierung der Zeichenfläche.

use crate::render::{Canvas, Paint, PathGeometry, ThemeColor};
use glam::Vec2;

/// Sammelt Pfade als egui-Shapes relativ zu `origin`.
///
/// `redraw` übernimmt die gesammelten Pfade in den gezeichneten Stand; einen
/// Repaint fordert die Zeichenfläche nie selbst an.
pub struct EguiCanvas {
    origin: egui::Pos2,
    pending: Vec<egui::Shape>,
    committed: Vec<egui::Shape>,
    grid_color: egui::Color32,
}

impl EguiCanvas {
    pub fn new(origin: egui::Pos2, visuals: &egui::Visuals) -> Self {
        Self {
            origin,
            pending: Vec::new(),
            committed: Vec::new(),
            grid_color: visuals.widgets.noninteractive.bg_stroke.color,
        }
    }

    /// Übergibt den zuletzt per `redraw` übernommenen Stand an den Painter.
    pub fn paint(self, painter: &egui::Painter) {
        painter.extend(self.committed);
    }

    fn pos(&self, p: Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

impl Canvas for EguiCanvas {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn add_path(&mut self, geometry: PathGeometry, paint: Paint) {
        let shape = match (geometry, paint) {
            (PathGeometry::Line { from, to }, Paint::Stroke { color, width }) => {
                egui::Shape::line_segment([self.pos(from), self.pos(to)], stroke(color, width))
            }
            (PathGeometry::Polyline { points }, Paint::Stroke { color, width }) => {
                let points = points.into_iter().map(|p| self.pos(p)).collect();
                egui::Shape::line(points, stroke(color, width))
            }
            (PathGeometry::Circle { center, radius }, Paint::Fill { color }) => {
                egui::Shape::circle_filled(self.pos(center), radius, to_color32(color))
            }
            (PathGeometry::Circle { center, radius }, Paint::Stroke { color, width }) => {
                egui::Shape::circle_stroke(self.pos(center), radius, stroke(color, width))
            }
            (geometry, Paint::Fill { color }) => {
                // Offene Pfade werden auch bei Fill nur als Linie gezeichnet
                let points = match geometry {
                    PathGeometry::Line { from, to } => vec![self.pos(from), self.pos(to)],
                    PathGeometry::Polyline { points } => {
                        points.into_iter().map(|p| self.pos(p)).collect()
                    }
                    PathGeometry::Circle { .. } => Vec::new(),
                };
                egui::Shape::line(points, stroke(color, 1.0))
            }
        };
        self.pending.push(shape);
    }

    fn redraw(&mut self) {
        self.committed = std::mem::take(&mut self.pending);
    }

    fn theme_color(&self, color: ThemeColor) -> Option<[f32; 4]> {
        match color {
            ThemeColor::Grid => Some(to_rgba(self.grid_color)),
            ThemeColor::Guide => None,
        }
    }
}

fn stroke(color: [f32; 4], width: f32) -> egui::Stroke {
    egui::Stroke::new(width, to_color32(color))
}

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

fn to_rgba(color: egui::Color32) -> [f32; 4] {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_keeps_channels() {
        let rgba = [1.0, 0.0, 0.0, 1.0];
        assert_eq!(to_rgba(to_color32(rgba)), rgba);
    }

    #[test]
    fn test_paths_are_offset_by_origin() {
        let mut canvas = EguiCanvas::new(egui::pos2(10.0, 20.0), &egui::Visuals::dark());
        canvas.add_path(
            PathGeometry::Line {
                from: Vec2::ZERO,
                to: Vec2::new(5.0, 5.0),
            },
            Paint::Stroke {
                color: [1.0; 4],
                width: 1.0,
            },
        );
        match &canvas.pending[0] {
            egui::Shape::LineSegment { points, .. } => {
                assert_eq!(points[0], egui::pos2(10.0, 20.0));
                assert_eq!(points[1], egui::pos2(15.0, 25.0));
            }
            other => panic!("unerwartete Shape: {:?}", other),
        }
    }

    #[test]
    fn test_clear_discards_pending_paths() {
        let mut canvas = EguiCanvas::new(egui::Pos2::ZERO, &egui::Visuals::dark());
        canvas.add_path(
            PathGeometry::Circle {
                center: Vec2::ZERO,
                radius: 3.0,
            },
            Paint::Fill { color: [1.0; 4] },
        );
        canvas.clear();
        assert!(canvas.pending.is_empty());
        assert!(canvas.theme_color(ThemeColor::Grid).is_some());
        assert!(canvas.theme_color(ThemeColor::Guide).is_none());
    }

    #[test]
    fn test_redraw_only_commits_collected_paths() {
        let mut canvas = EguiCanvas::new(egui::Pos2::ZERO, &egui::Visuals::dark());
        crate::render::render_value_graph(
            &mut canvas,
            &crate::core::BezierCurve::DEFAULT,
            &crate::shared::EditorOptions::default().graph_layout(),
            &crate::render::GraphStyle::default(),
        );
        assert!(canvas.pending.is_empty());
        let committed = canvas.committed.len();
        assert!(committed > 0);

        // Pfade ohne abschließendes redraw bleiben unsichtbar
        canvas.add_path(
            PathGeometry::Circle {
                center: Vec2::ZERO,
                radius: 3.0,
            },
            Paint::Fill { color: [1.0; 4] },
        );
        assert_eq!(canvas.committed.len(), committed);
        assert_eq!(canvas.pending.len(), 1);
    }
}
