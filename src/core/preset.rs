//! Benannte Kurven-Presets (flache Name → Kurve Zuordnung).

use super::curve::BezierCurve;
use indexmap::IndexMap;

/// Maximale Länge eines Preset-Namens in Zeichen.
pub const PRESET_NAME_MAX_CHARS: usize = 30;

/// Fehler bei Preset-Verwaltung.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("preset name must not be empty")]
    EmptyName,
    #[error("preset name '{0}' exceeds {PRESET_NAME_MAX_CHARS} characters")]
    NameTooLong(String),
    #[error("a preset named '{0}' already exists")]
    DuplicateName(String),
    #[error("no preset named '{0}'")]
    NotFound(String),
    #[error("invalid preset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Eingebaute Presets (Fallback wenn nichts gespeichert ist).
pub fn builtin_presets() -> IndexMap<String, BezierCurve> {
    [
        ("Default", BezierCurve::DEFAULT),
        ("Linear", BezierCurve::LINEAR),
        ("Ease", BezierCurve::new(0.25, 0.1, 0.25, 1.0)),
        ("Ease In", BezierCurve::new(0.42, 0.0, 1.0, 1.0)),
        ("Ease Out", BezierCurve::new(0.0, 0.0, 0.58, 1.0)),
        ("Ease In Out", BezierCurve::new(0.42, 0.0, 0.58, 1.0)),
    ]
    .into_iter()
    .map(|(name, curve)| (name.to_string(), curve))
    .collect()
}

/// Preset-Sammlung. Reihenfolge = Einfügereihenfolge (für stabile Dropdown-Anzeige).
#[derive(Debug, Clone, PartialEq)]
pub struct PresetLibrary {
    presets: IndexMap<String, BezierCurve>,
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }
}

impl PresetLibrary {
    /// Leere Sammlung ohne eingebaute Presets.
    pub fn empty() -> Self {
        Self {
            presets: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<BezierCurve> {
        self.presets.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, BezierCurve)> {
        self.presets.iter().map(|(name, curve)| (name.as_str(), *curve))
    }

    /// Prüft und normalisiert einen Preset-Namen (getrimmt, 1–30 Zeichen).
    pub fn validate_name(name: &str) -> Result<String, PresetError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PresetError::EmptyName);
        }
        if trimmed.chars().count() > PRESET_NAME_MAX_CHARS {
            return Err(PresetError::NameTooLong(trimmed.to_string()));
        }
        Ok(trimmed.to_string())
    }

    /// Speichert eine Kurve unter einem neuen, eindeutigen Namen.
    pub fn save(&mut self, name: &str, curve: BezierCurve) -> Result<String, PresetError> {
        let name = Self::validate_name(name)?;
        if self.presets.contains_key(&name) {
            return Err(PresetError::DuplicateName(name));
        }
        self.presets.insert(name.clone(), curve);
        Ok(name)
    }

    /// Benennt ein Preset um; die Position in der Liste bleibt erhalten.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<String, PresetError> {
        let new = Self::validate_name(new)?;
        let Some(index) = self.presets.get_index_of(old) else {
            return Err(PresetError::NotFound(old.to_string()));
        };
        if new == old {
            return Ok(new);
        }
        if self.presets.contains_key(&new) {
            return Err(PresetError::DuplicateName(new));
        }
        let curve = self.presets[index];
        self.presets.shift_remove(old);
        self.presets.shift_insert(index, new.clone(), curve);
        Ok(new)
    }

    pub fn delete(&mut self, name: &str) -> Result<BezierCurve, PresetError> {
        self.presets
            .shift_remove(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    pub fn clear(&mut self) {
        self.presets.clear();
    }

    /// Flaches JSON-Objekt `{ "Name": [x1, y1, x2, y2], ... }`.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .presets
            .iter()
            .map(|(name, curve)| (name.clone(), serde_json::json!(curve.to_array())))
            .collect();
        serde_json::Value::Object(map)
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self, PresetError> {
        let presets: IndexMap<String, [f32; 4]> = serde_json::from_value(value)?;
        Ok(Self {
            presets: presets
                .into_iter()
                .map(|(name, values)| (name, BezierCurve::from_array(values)))
                .collect(),
        })
    }

    /// Import: übernimmt alle Einträge, gleiche Namen werden überschrieben.
    /// Ungültige Namen werden übersprungen. Gibt die Anzahl übernommener Presets zurück.
    pub fn merge_json(&mut self, value: serde_json::Value) -> Result<usize, PresetError> {
        let incoming = Self::from_json(value)?;
        let mut merged = 0;
        for (name, curve) in incoming.presets {
            match Self::validate_name(&name) {
                Ok(name) => {
                    self.presets.insert(name, curve);
                    merged += 1;
                }
                Err(e) => log::warn!("Preset beim Import übersprungen: {}", e),
            }
        }
        Ok(merged)
    }

    /// Export als formatiertes JSON.
    pub fn export_pretty(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

#[cfg(test)]
mod tests;
