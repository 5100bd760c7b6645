//! Persistenter Key-Value-Speicher für Presets, Apply-on-Drag und aktiven Tab.
//!
//! Kein Schema-Versioning: Laden überschreibt an Ort und Stelle, Fehler
//! werden geloggt und fallen auf Standardwerte zurück.

use crate::core::PresetLibrary;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Schlüssel der Preset-Sammlung.
pub const PREF_PRESETS: &str = "presets";
/// Schlüssel des Apply-on-Drag-Schalters.
pub const PREF_APPLY_ON_DRAG: &str = "applyOnDrag";
/// Schlüssel des zuletzt aktiven Tabs.
pub const PREF_ACTIVE_TAB: &str = "activeTab";

/// Flacher Namensraum benannter JSON-Werte.
pub trait PreferenceStore {
    fn has_key(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> anyhow::Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> anyhow::Result<()>;
}

/// Flüchtiger Speicher (Tests, Host ohne Persistenz).
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, Value>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Speichert alle Werte als ein JSON-Objekt in einer Datei.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: serde_json::Map<String, Value>,
}

impl JsonFilePreferenceStore {
    /// Lädt die Datei; fehlt sie oder ist sie fehlerhaft, startet der Speicher leer.
    pub fn open(path: &Path) -> Self {
        let values = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<serde_json::Map<String, Value>>(&content) {
                Ok(values) => {
                    log::info!("Präferenzen geladen aus: {}", path.display());
                    values
                }
                Err(e) => {
                    log::warn!("Präferenz-Datei fehlerhaft, starte leer: {}", e);
                    serde_json::Map::new()
                }
            },
            Err(_) => {
                log::info!("Keine Präferenz-Datei gefunden, starte leer");
                serde_json::Map::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    fn flush(&self) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        log::debug!("Präferenzen gespeichert nach: {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}

/// Lädt die Presets; fehlen sie oder sind sie fehlerhaft, gelten die eingebauten.
pub fn load_presets(store: &dyn PreferenceStore) -> PresetLibrary {
    if !store.has_key(PREF_PRESETS) {
        return PresetLibrary::default();
    }
    match store.get(PREF_PRESETS) {
        Ok(Some(value)) => match PresetLibrary::from_json(value) {
            Ok(library) if !library.is_empty() => library,
            Ok(_) => {
                log::info!("Gespeicherte Preset-Liste leer, verwende eingebaute Presets");
                PresetLibrary::default()
            }
            Err(e) => {
                log::warn!("Gespeicherte Presets fehlerhaft, verwende eingebaute: {}", e);
                PresetLibrary::default()
            }
        },
        Ok(None) => PresetLibrary::default(),
        Err(e) => {
            log::warn!("Presets nicht lesbar, verwende eingebaute: {:#}", e);
            PresetLibrary::default()
        }
    }
}

/// Speichert die Presets; Fehler werden nur geloggt.
pub fn save_presets(store: &mut dyn PreferenceStore, presets: &PresetLibrary) {
    store_value(store, PREF_PRESETS, presets.to_json());
}

/// Liest einen typisierten Wert; `None` bei fehlendem oder unpassendem Eintrag.
pub fn load_value<T: serde::de::DeserializeOwned>(
    store: &dyn PreferenceStore,
    key: &str,
) -> Option<T> {
    match store.get(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("Präferenz '{}' fehlerhaft, ignoriert: {}", key, e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("Präferenz '{}' nicht lesbar: {:#}", key, e);
            None
        }
    }
}

/// Schreibt einen Wert; Fehler werden nur geloggt.
pub fn store_value(store: &mut dyn PreferenceStore, key: &str, value: Value) {
    if let Err(e) = store.set(key, value) {
        log::warn!("Präferenz '{}' konnte nicht gespeichert werden: {:#}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BezierCurve;

    #[test]
    fn test_missing_presets_fall_back_to_builtins() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(load_presets(&store), PresetLibrary::default());
    }

    #[test]
    fn test_corrupt_presets_fall_back_to_builtins() {
        let mut store = MemoryPreferenceStore::new();
        store
            .set(PREF_PRESETS, serde_json::json!("kaputt"))
            .expect("Speicher schreibbar");
        assert_eq!(load_presets(&store), PresetLibrary::default());
    }

    #[test]
    fn test_presets_roundtrip_through_store() {
        let mut store = MemoryPreferenceStore::new();
        let mut library = PresetLibrary::empty();
        library
            .save("Mine", BezierCurve::new(0.2, 0.3, 0.4, 0.5))
            .expect("Name ist gültig");
        save_presets(&mut store, &library);
        assert_eq!(load_presets(&store), library);
    }

    #[test]
    fn test_load_value_ignores_wrong_type() {
        let mut store = MemoryPreferenceStore::new();
        store
            .set(PREF_APPLY_ON_DRAG, serde_json::json!("yes"))
            .expect("Speicher schreibbar");
        assert_eq!(load_value::<bool>(&store, PREF_APPLY_ON_DRAG), None);
        store_value(&mut store, PREF_APPLY_ON_DRAG, serde_json::json!(true));
        assert_eq!(load_value::<bool>(&store, PREF_APPLY_ON_DRAG), Some(true));
    }

    #[test]
    fn test_json_file_store_persists() {
        let path = std::env::temp_dir().join(format!(
            "easing_curve_editor_prefs_test_{}.json",
            std::process::id()
        ));
        {
            let mut store = JsonFilePreferenceStore::open(&path);
            store
                .set(PREF_ACTIVE_TAB, serde_json::json!(1))
                .expect("Datei schreibbar");
        }
        let store = JsonFilePreferenceStore::open(&path);
        assert_eq!(load_value::<u8>(&store, PREF_ACTIVE_TAB), Some(1));
        let _ = std::fs::remove_file(&path);
    }
}
