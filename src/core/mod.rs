//! Core-Domänentypen: Kurven, Umrechnungen, Keyframes, Presets.

pub mod curve;
/// Reine Kurven-Mathematik
///
/// Umrechnungen Value-Bézier ↔ Host-Tangenten ↔ Speed-Darstellung sowie
/// die normierte Geschwindigkeitskurve. Kein Zustand, kein I/O.
pub mod curve_math;
pub mod curve_state;
pub mod keyframe;
pub mod preset;

pub use curve::{BezierCurve, CurveParseError, HostHandles, SpeedCurve};
pub use curve_math::{
    bezier_to_host_handles, bezier_to_speed, host_handles_to_bezier, point_at,
    sample_velocity_curve, speed_to_bezier, velocity_at,
};
pub use curve_state::CurveState;
pub use keyframe::{
    AttributePath, AttributePathError, Interpolation, KeyframeGroup, KeyframeId, TangentData,
    TangentSide,
};
pub use preset::{builtin_presets, PresetError, PresetLibrary, PRESET_NAME_MAX_CHARS};
