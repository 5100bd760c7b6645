//! Keyframe-Typen des Animations-Hosts: Attributpfade, IDs, Tangenten-Daten.

use glam::Vec2;
use std::fmt;
use std::str::FromStr;

/// Trennzeichen zwischen Layer-ID und Attributpfad im flachen Host-String.
pub const ATTRIBUTE_PATH_DELIMITER: char = '.';

/// Opake Keyframe-ID des Hosts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyframeId(pub String);

impl KeyframeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for KeyframeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Zusammengesetzter Schlüssel Layer + Attribut.
///
/// Der Host liefert `"layer#3.position.x"`; geparst wird einmal an der Grenze,
/// danach wird nur noch die typisierte Form weitergereicht.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributePath {
    pub layer_id: String,
    pub attribute: String,
}

impl AttributePath {
    pub fn new(layer_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            layer_id: layer_id.into(),
            attribute: attribute.into(),
        }
    }
}

/// Fehler beim Zerlegen eines flachen Attributpfads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid attribute path '{0}' (expected '<layer>.<attribute>')")]
pub struct AttributePathError(pub String);

impl FromStr for AttributePath {
    type Err = AttributePathError;

    fn from_str(flat: &str) -> Result<Self, Self::Err> {
        match flat.split_once(ATTRIBUTE_PATH_DELIMITER) {
            Some((layer, attribute)) if !layer.is_empty() && !attribute.is_empty() => {
                Ok(Self::new(layer, attribute))
            }
            _ => Err(AttributePathError(flat.to_string())),
        }
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.layer_id, ATTRIBUTE_PATH_DELIMITER, self.attribute)
    }
}

/// Interpolationsmodus eines Keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    #[default]
    Linear,
    Step,
    Bezier,
}

/// Seite einer Keyframe-Tangente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TangentSide {
    /// Eingehende (linke) Tangente
    In,
    /// Ausgehende (rechte) Tangente
    Out,
}

/// Tangenten-Metadaten eines Keyframes (absolute Offsets in Frames × Wert).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TangentData {
    /// Eingehendes Handle (links vom Keyframe)
    pub left_handle: Option<Vec2>,
    /// Ausgehendes Handle (rechts vom Keyframe)
    pub right_handle: Option<Vec2>,
    pub interpolation: Interpolation,
}

/// Frische Gruppierung der Selektion pro Attribut (nie gecacht).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeGroup {
    pub path: AttributePath,
    /// Nach Frame sortiert
    pub keys: Vec<(KeyframeId, f32)>,
}

impl KeyframeGroup {
    /// Aufeinanderfolgende Keyframe-Paare in Zeitreihenfolge.
    pub fn pairs(&self) -> impl Iterator<Item = (&(KeyframeId, f32), &(KeyframeId, f32))> {
        self.keys.windows(2).map(|w| (&w[0], &w[1]))
    }
}
