//! Graph-Renderer: erzeugt Pfad-Geometrie und Paint-Beschreibungen für beide Graphen.
//!
//! Der Renderer ist zustandslos und berührt keine Pixel; er schreibt nur in
//! eine [`Canvas`]-Implementierung des Hosts.

mod canvas;
mod speed_graph;
mod style;
mod value_graph;

pub use canvas::{Canvas, Paint, PathGeometry, ThemeColor};
pub use speed_graph::{corrected_velocity_points, render_speed_graph};
pub use style::GraphStyle;
pub use value_graph::render_value_graph;

use crate::shared::GraphLayout;
use glam::Vec2;

/// Anzahl der Grid-Zellen pro Achse.
pub const GRID_DIVISIONS: usize = 10;

/// 10×10-Hintergrundgitter über die gesamte Zeichenfläche.
fn draw_grid(canvas: &mut dyn Canvas, layout: &GraphLayout, style: &GraphStyle) {
    let paint = Paint::Stroke {
        color: style.grid,
        width: style.grid_width,
    };
    for i in 0..=GRID_DIVISIONS {
        let f = i as f32 / GRID_DIVISIONS as f32;
        let x = f * layout.width;
        let y = f * layout.height;
        canvas.add_path(
            PathGeometry::Line {
                from: Vec2::new(x, 0.0),
                to: Vec2::new(x, layout.height),
            },
            paint,
        );
        canvas.add_path(
            PathGeometry::Line {
                from: Vec2::new(0.0, y),
                to: Vec2::new(layout.width, y),
            },
            paint,
        );
    }
}

/// Führungslinie und gefüllter Handle-Kreis.
fn draw_handle(
    canvas: &mut dyn Canvas,
    from: Vec2,
    handle: Vec2,
    color: [f32; 4],
    layout: &GraphLayout,
    style: &GraphStyle,
) {
    canvas.add_path(
        PathGeometry::Line { from, to: handle },
        Paint::Stroke {
            color: style.guide,
            width: style.guide_width,
        },
    );
    canvas.add_path(
        PathGeometry::Circle {
            center: handle,
            radius: layout.handle_radius,
        },
        Paint::Fill { color },
    );
}
