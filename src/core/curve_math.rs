//! Reine Umrechnungen zwischen Value-Bézier, Host-Tangenten und Speed-Darstellung,
//! sowie die numerische Geschwindigkeitskurve für den Speed-Graphen.

use super::curve::{BezierCurve, HostHandles, SpeedCurve};
use glam::Vec2;

/// Unterhalb dieser Werte-Differenz gilt ein Segment als flach.
pub const FLAT_VALUE_EPSILON: f32 = 0.001;
/// Unterhalb dieses |dx/dt| liefert `velocity_at` 0.
pub const VELOCITY_DX_EPSILON: f32 = 0.0001;
/// Unterhalb dieses Maximums wird nicht normalisiert (Divisor 1).
pub const VELOCITY_NORMALIZE_FLOOR: f32 = 0.0001;

/// Skaliert normierte Steuerpunkte in den absoluten Tangenten-Raum des Hosts.
///
/// `frame_diff` ist die Zeitspanne, `value_diff` die Wertespanne zwischen
/// den beiden Keyframes des Segments.
pub fn bezier_to_host_handles(
    curve: &BezierCurve,
    frame_diff: f32,
    value_diff: f32,
) -> HostHandles {
    HostHandles {
        out_handle: Vec2::new(curve.x1 * frame_diff, curve.y1 * value_diff),
        in_handle: Vec2::new((curve.x2 - 1.0) * frame_diff, (curve.y2 - 1.0) * value_diff),
    }
}

/// Exakte Umkehrung von [`bezier_to_host_handles`].
///
/// Flache Segmente (`|value_diff| <= 0.001`) liefern `y1 = 0`, `y2 = 1`.
/// Zeitlose Segmente (`frame_diff == 0` oder nicht endlich) liefern analog
/// `x1 = 0`, `x2 = 1`; jede andere Spanne wird exakt zurückgerechnet.
pub fn host_handles_to_bezier(
    handles: &HostHandles,
    frame_diff: f32,
    value_diff: f32,
) -> BezierCurve {
    let (x1, x2) = if frame_diff == 0.0 || !frame_diff.is_finite() {
        (0.0, 1.0)
    } else {
        (
            handles.out_handle.x / frame_diff,
            (frame_diff + handles.in_handle.x) / frame_diff,
        )
    };
    let (y1, y2) = if value_diff.abs() <= FLAT_VALUE_EPSILON {
        (0.0, 1.0)
    } else {
        (
            handles.out_handle.y / value_diff,
            (value_diff + handles.in_handle.y) / value_diff,
        )
    };
    BezierCurve::new(x1, y1, x2, y2)
}

/// Speed-Darstellung → Value-Bézier.
///
/// `y2` wird invertiert: "oben" am eingehenden Handle entspricht Werten nahe 1.
pub fn speed_to_bezier(speed: &SpeedCurve) -> BezierCurve {
    BezierCurve::new(
        speed.out_influence / 100.0,
        speed.out_speed_y,
        1.0 - speed.in_influence / 100.0,
        1.0 - speed.in_speed_y,
    )
}

/// Value-Bézier → Speed-Darstellung (Umkehrung von [`speed_to_bezier`]).
pub fn bezier_to_speed(curve: &BezierCurve) -> SpeedCurve {
    SpeedCurve::new(
        curve.x1 * 100.0,
        (1.0 - curve.x2) * 100.0,
        curve.y1,
        1.0 - curve.y2,
    )
}

/// Ableitung einer 1D-Bézier mit Ankern 0 und 1 nach t.
///
/// B'(t) = 3(1-t)²·c1 + 6(1-t)t·(c2-c1) + 3t²·(1-c2)
fn bezier_derivative(c1: f32, c2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * c1 + 6.0 * inv * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
}

/// Punkt der Kurve beim Parameter `t` (Anker (0,0) und (1,1)).
pub fn point_at(curve: &BezierCurve, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let b1 = 3.0 * inv * inv * t;
    let b2 = 3.0 * inv * t * t;
    let b3 = t * t * t;
    Vec2::new(
        b1 * curve.x1 + b2 * curve.x2 + b3,
        b1 * curve.y1 + b2 * curve.y2 + b3,
    )
}

/// Momentangeschwindigkeit |dy/dt| / |dx/dt| der Kurve beim Parameter `t`.
///
/// Bei `|dx/dt| <= 0.0001` wird 0 geliefert. Das ist eine Näherung, kein
/// echter Grenzwert.
pub fn velocity_at(t: f32, curve: &BezierCurve) -> f32 {
    let dx = bezier_derivative(curve.x1, curve.x2, t).abs();
    if dx <= VELOCITY_DX_EPSILON {
        return 0.0;
    }
    bezier_derivative(curve.y1, curve.y2, t).abs() / dx
}

/// Tastet `velocity_at` an `sample_count + 1` gleichverteilten t in [0,1] ab
/// und normalisiert auf den Maximalbetrag.
pub fn sample_velocity_curve(curve: &BezierCurve, sample_count: usize) -> Vec<f32> {
    let steps = sample_count.max(1) as f32;
    let mut samples: Vec<f32> = (0..=sample_count)
        .map(|i| velocity_at(i as f32 / steps, curve))
        .collect();

    let max = samples.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
    let divisor = if max < VELOCITY_NORMALIZE_FLOOR { 1.0 } else { max };
    for sample in &mut samples {
        *sample /= divisor;
    }
    samples
}
