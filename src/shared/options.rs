//! Zentrale Konfiguration für den Easing-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::layout::GraphLayout;
use serde::{Deserialize, Serialize};

// ── Graph-Layout ────────────────────────────────────────────────────

/// Breite einer Graph-Zeichenfläche in Pixeln.
pub const GRAPH_WIDTH: f32 = 260.0;
/// Höhe einer Graph-Zeichenfläche in Pixeln.
pub const GRAPH_HEIGHT: f32 = 260.0;
/// Innenabstand zwischen Zeichenfläche und Plot-Bereich.
pub const GRAPH_PADDING: f32 = 30.0;
/// Radius der Handle-Marker.
pub const HANDLE_RADIUS: f32 = 6.0;
/// Treffer-Radius als Vielfaches des Handle-Radius.
pub const HIT_RADIUS_FACTOR: f32 = 2.0;

// ── Speed-Graph ─────────────────────────────────────────────────────

/// Anzahl Abtastintervalle der Geschwindigkeitskurve.
pub const VELOCITY_SAMPLE_COUNT: usize = 100;

// ── Keyframes ───────────────────────────────────────────────────────

/// Synthetische Zeitspanne für Einzel-Keyframes (kein Nachbar vorhanden).
pub const SINGLE_KEY_FRAME_SPAN: f32 = 30.0;
/// Synthetische Wertespanne für Einzel-Keyframes.
pub const SINGLE_KEY_VALUE_SPAN: f32 = 100.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Gitterlinien (RGBA).
pub const GRID_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.08];
/// Kurvenlinie (RGBA: Hellblau).
pub const CURVE_COLOR: [f32; 4] = [0.3, 0.75, 1.0, 1.0];
/// Handle 1 / ausgehendes Handle (RGBA: Orange).
pub const HANDLE_OUT_COLOR: [f32; 4] = [1.0, 0.55, 0.15, 1.0];
/// Handle 2 / eingehendes Handle (RGBA: Grün).
pub const HANDLE_IN_COLOR: [f32; 4] = [0.35, 0.9, 0.35, 1.0];
/// Führungslinien Rand → Handle (RGBA: Grau).
pub const GUIDE_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 0.6];

/// Modifier-Taste, die während eines Drags abgefragt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKey {
    Shift,
    Alt,
    Ctrl,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `easing_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Layout ──────────────────────────────────────────────────
    /// Breite der Graph-Zeichenfläche
    pub graph_width: f32,
    /// Höhe der Graph-Zeichenfläche
    pub graph_height: f32,
    /// Innenabstand des Plot-Bereichs
    pub graph_padding: f32,
    /// Radius der Handle-Marker
    pub handle_radius: f32,
    /// Treffer-Radius-Faktor (× Handle-Radius)
    #[serde(default = "default_hit_radius_factor")]
    pub hit_radius_factor: f32,

    // ── Speed-Graph ─────────────────────────────────────────────
    /// Abtastintervalle der Geschwindigkeitskurve
    pub velocity_sample_count: usize,

    // ── Keyframes ───────────────────────────────────────────────
    /// Zeitspanne für Einzel-Keyframe-Anwendung
    pub single_key_frame_span: f32,
    /// Wertespanne für Einzel-Keyframe-Anwendung
    pub single_key_value_span: f32,

    // ── Modifier ────────────────────────────────────────────────
    /// Achsen-Sperre (Value-Graph) bzw. Y-Sperre (Speed-Graph)
    #[serde(default = "default_axis_lock_key")]
    pub axis_lock_key: ModifierKey,
    /// Spiegeln der Handles im Speed-Graph
    #[serde(default = "default_mirror_key")]
    pub mirror_key: ModifierKey,

    // ── Farben ──────────────────────────────────────────────────
    pub grid_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub handle_out_color: [f32; 4],
    pub handle_in_color: [f32; 4],
    pub guide_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            graph_width: GRAPH_WIDTH,
            graph_height: GRAPH_HEIGHT,
            graph_padding: GRAPH_PADDING,
            handle_radius: HANDLE_RADIUS,
            hit_radius_factor: HIT_RADIUS_FACTOR,

            velocity_sample_count: VELOCITY_SAMPLE_COUNT,

            single_key_frame_span: SINGLE_KEY_FRAME_SPAN,
            single_key_value_span: SINGLE_KEY_VALUE_SPAN,

            axis_lock_key: ModifierKey::Shift,
            mirror_key: ModifierKey::Alt,

            grid_color: GRID_COLOR,
            curve_color: CURVE_COLOR,
            handle_out_color: HANDLE_OUT_COLOR,
            handle_in_color: HANDLE_IN_COLOR,
            guide_color: GUIDE_COLOR,
        }
    }
}

/// Serde-Default für `hit_radius_factor` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_hit_radius_factor() -> f32 {
    HIT_RADIUS_FACTOR
}

fn default_axis_lock_key() -> ModifierKey {
    ModifierKey::Shift
}

fn default_mirror_key() -> ModifierKey {
    ModifierKey::Alt
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::sibling_of_exe("easing_curve_editor.toml")
    }

    /// Pfad der Präferenz-Datei (Presets, Tab, Apply-on-Drag).
    pub fn preferences_path() -> std::path::PathBuf {
        Self::sibling_of_exe("easing_curve_editor_prefs.json")
    }

    fn sibling_of_exe(file_name: &str) -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("easing_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(file_name)
    }

    /// Layout beider Graph-Zeichenflächen.
    pub fn graph_layout(&self) -> GraphLayout {
        GraphLayout {
            width: self.graph_width,
            height: self.graph_height,
            padding: self.graph_padding,
            handle_radius: self.handle_radius,
        }
    }

    /// Treffer-Radius in Pixeln.
    pub fn hit_radius(&self) -> f32 {
        self.handle_radius * self.hit_radius_factor
    }
}
