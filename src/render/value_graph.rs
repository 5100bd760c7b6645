//! Value-Graph: Bézier-Kurve mit den beiden Steuerpunkten.

use super::{draw_grid, draw_handle, Canvas, GraphStyle, Paint, PathGeometry};
use crate::core::{point_at, BezierCurve};
use crate::shared::GraphLayout;
use glam::Vec2;

/// Stützpunkte der gezeichneten Bézier.
const CURVE_SEGMENTS: usize = 64;

/// Zeichnet Grid, Führungslinien, Kurve und Handles des Value-Graphen.
pub fn render_value_graph(
    canvas: &mut dyn Canvas,
    curve: &BezierCurve,
    layout: &GraphLayout,
    style: &GraphStyle,
) {
    let style = style.themed(canvas);
    canvas.clear();
    draw_grid(canvas, layout, &style);

    let points: Vec<Vec2> = (0..=CURVE_SEGMENTS)
        .map(|i| layout.to_pixel(point_at(curve, i as f32 / CURVE_SEGMENTS as f32)))
        .collect();
    canvas.add_path(
        PathGeometry::Polyline { points },
        Paint::Stroke {
            color: style.curve,
            width: style.curve_width,
        },
    );

    let [cp1, cp2] = layout.value_handle_positions(curve);
    draw_handle(
        canvas,
        layout.to_pixel(Vec2::ZERO),
        cp1,
        style.handle_out,
        layout,
        &style,
    );
    draw_handle(
        canvas,
        layout.to_pixel(Vec2::ONE),
        cp2,
        style.handle_in,
        layout,
        &style,
    );

    canvas.redraw();
}
