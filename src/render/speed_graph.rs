//! Speed-Graph: normierte Geschwindigkeitskurve mit Influence-Handles.
//!
//! Die Speed-Darstellung wird bei jedem Aufruf frisch aus der Bézier abgeleitet.

use super::{draw_grid, draw_handle, Canvas, GraphStyle, Paint, PathGeometry};
use crate::core::{bezier_to_speed, sample_velocity_curve, BezierCurve, SpeedCurve};
use crate::shared::GraphLayout;
use glam::Vec2;

/// Pixel-Punkte der Geschwindigkeitskurve.
///
/// Die Samples werden an beiden Enden vertikal verschoben, damit die Kurve
/// genau durch `out_speed_y` (links) und `in_speed_y` (rechts) läuft. Die
/// Korrektur wird linear über den Sample-Bereich interpoliert.
pub fn corrected_velocity_points(
    curve: &BezierCurve,
    speed: &SpeedCurve,
    layout: &GraphLayout,
    sample_count: usize,
) -> Vec<Vec2> {
    let samples = sample_velocity_curve(curve, sample_count);
    let n = samples.len().saturating_sub(1).max(1) as f32;
    let first = samples.first().copied().unwrap_or(0.0);
    let last = samples.last().copied().unwrap_or(0.0);
    let start_delta = speed.out_speed_y - first;
    let end_delta = speed.in_speed_y - last;

    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let f = i as f32 / n;
            let corrected = sample + start_delta * (1.0 - f) + end_delta * f;
            Vec2::new(
                layout.plot_left() + f * layout.plot_width(),
                layout.speed_to_pixel_y(corrected),
            )
        })
        .collect()
}

/// Zeichnet Grid, Führungslinien, Geschwindigkeitskurve und Handles des Speed-Graphen.
pub fn render_speed_graph(
    canvas: &mut dyn Canvas,
    curve: &BezierCurve,
    layout: &GraphLayout,
    style: &GraphStyle,
    sample_count: usize,
) {
    let speed = bezier_to_speed(curve);
    let style = style.themed(canvas);
    canvas.clear();
    draw_grid(canvas, layout, &style);

    canvas.add_path(
        PathGeometry::Polyline {
            points: corrected_velocity_points(curve, &speed, layout, sample_count),
        },
        Paint::Stroke {
            color: style.curve,
            width: style.curve_width,
        },
    );

    let [out_handle, in_handle] = layout.speed_handle_positions(&speed);
    draw_handle(
        canvas,
        Vec2::new(layout.plot_left(), layout.speed_to_pixel_y(speed.out_speed_y)),
        out_handle,
        style.handle_out,
        layout,
        &style,
    );
    draw_handle(
        canvas,
        Vec2::new(layout.plot_right(), layout.speed_to_pixel_y(speed.in_speed_y)),
        in_handle,
        style.handle_in,
        layout,
        &style,
    );

    canvas.redraw();
}
