//! Kurven-Datentypen: Value-Bézier, Speed-Darstellung und Host-Tangenten.

use std::fmt;
use std::str::FromStr;

/// Kubische Easing-Kurve von (0,0) nach (1,1) mit zwei Steuerpunkten.
///
/// `x1`/`x2` liegen nominell in [0,1], dürfen beim Editieren aber kurzzeitig
/// darüber hinausgehen. `y1`/`y2` sind unbeschränkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCurve {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BezierCurve {
    /// Identitätskurve (lineares Easing).
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Startkurve einer neuen Editor-Sitzung.
    pub const DEFAULT: Self = Self::new(0.5, 0.0, 0.0, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Parameter als Array `[x1, y1, x2, y2]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    pub fn from_array([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Steuerpunkt 1 als Vektor.
    pub fn cp1(&self) -> glam::Vec2 {
        glam::Vec2::new(self.x1, self.y1)
    }

    /// Steuerpunkt 2 als Vektor.
    pub fn cp2(&self) -> glam::Vec2 {
        glam::Vec2::new(self.x2, self.y2)
    }

    /// Clipboard-Format `cubic-bezier(x1, y1, x2, y2)` mit zwei Nachkommastellen.
    pub fn to_css(&self) -> String {
        format!("cubic-bezier({})", self.to_value_list())
    }

    /// Werteliste `x1, y1, x2, y2` mit zwei Nachkommastellen.
    pub fn to_value_list(&self) -> String {
        format!(
            "{:.2}, {:.2}, {:.2}, {:.2}",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for BezierCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value_list())
    }
}

/// Fehler beim Parsen der Bézier-Texteingabe.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveParseError {
    #[error("expected 4 comma-separated values, got {0}")]
    WrongCount(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("value {0} is not finite")]
    NotFinite(f32),
}

impl FromStr for BezierCurve {
    type Err = CurveParseError;

    /// Akzeptiert `x1, y1, x2, y2` und optional den `cubic-bezier(...)`-Wrapper.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut body = input.trim();
        if let Some(rest) = body.strip_prefix("cubic-bezier") {
            body = rest.trim().trim_start_matches('(').trim_end_matches(')');
        }

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(CurveParseError::WrongCount(parts.len()));
        }

        let mut values = [0.0f32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            let value: f32 = part
                .parse()
                .map_err(|_| CurveParseError::NotANumber((*part).to_string()))?;
            if !value.is_finite() {
                return Err(CurveParseError::NotFinite(value));
            }
            *slot = value;
        }
        Ok(Self::from_array(values))
    }
}

/// Speed-Darstellung (Geschwindigkeit über Zeit) mit Influence-/Speed-Handles.
///
/// Influence in Prozent (nominell 0–100) als horizontale Reichweite vom
/// jeweiligen Rand, Speed-Y als vertikale Intensität (nominell 0–1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedCurve {
    pub out_influence: f32,
    pub in_influence: f32,
    pub out_speed_y: f32,
    pub in_speed_y: f32,
}

impl SpeedCurve {
    pub const fn new(
        out_influence: f32,
        in_influence: f32,
        out_speed_y: f32,
        in_speed_y: f32,
    ) -> Self {
        Self {
            out_influence,
            in_influence,
            out_speed_y,
            in_speed_y,
        }
    }
}

/// Absolute Tangenten-Offsets im Host-Format (Frames × Werteinheiten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostHandles {
    pub out_handle: glam::Vec2,
    pub in_handle: glam::Vec2,
}
