//! Schnittstelle zum Animations-Dokument des Hosts.
//!
//! Alle Aufrufe sind fehlbar und können unabhängig voneinander scheitern.

use crate::core::{
    AttributePath, Interpolation, KeyframeGroup, KeyframeId, TangentData, TangentSide,
};
use glam::Vec2;
use indexmap::IndexMap;
use std::ops::{Deref, DerefMut};

/// Fähigkeiten des Animations-Dokuments, die das Keyframe-Fitting benötigt.
pub trait AnimationDocument {
    /// IDs aller selektierten Keyframes (Host-Reihenfolge).
    fn selected_keyframe_ids(&self) -> anyhow::Result<Vec<KeyframeId>>;

    /// Flacher Attributpfad `"<layer>.<attribut>"` eines Keyframes.
    fn attribute_of_keyframe(&self, id: &KeyframeId) -> anyhow::Result<String>;

    /// Frame-Position eines Keyframes.
    fn frame_of_keyframe(&self, id: &KeyframeId) -> anyhow::Result<f32>;

    /// Attributwert an einem Frame.
    fn value_at(&self, path: &AttributePath, frame: f32) -> anyhow::Result<f32>;

    fn current_frame(&self) -> f32;

    fn set_current_frame(&mut self, frame: f32) -> anyhow::Result<()>;

    fn tangent_data(&self, id: &KeyframeId) -> anyhow::Result<TangentData>;

    fn set_interpolation(&mut self, id: &KeyframeId, mode: Interpolation) -> anyhow::Result<()>;

    /// Setzt ein Tangenten-Handle als absoluten Offset (Frames × Wert).
    fn set_tangent(
        &mut self,
        path: &AttributePath,
        frame: f32,
        side: TangentSide,
        offset: Vec2,
    ) -> anyhow::Result<()>;

    fn unlock_tangent(&mut self, path: &AttributePath, frame: f32) -> anyhow::Result<()>;
}

/// Nach Attribut gruppierte Selektion.
#[derive(Debug)]
pub struct Selection {
    pub groups: Vec<KeyframeGroup>,
    /// Anzahl selektierter IDs laut Host, inklusive übersprungener Keyframes
    pub selected: usize,
}

impl Selection {
    /// Keyframes, die beim Gruppieren übersprungen wurden.
    pub fn skipped(&self) -> usize {
        self.selected - self.groups.iter().map(|g| g.keys.len()).sum::<usize>()
    }
}

/// Gruppiert die aktuelle Selektion pro Attribut (frisch bei jedem Aufruf).
///
/// Der flache Attributpfad wird hier einmalig in [`AttributePath`] zerlegt.
/// Keyframes, deren Pfad oder Frame nicht lesbar ist, werden geloggt und übersprungen.
pub fn collect_groups<D: AnimationDocument + ?Sized>(doc: &D) -> anyhow::Result<Selection> {
    let mut groups: IndexMap<AttributePath, Vec<(KeyframeId, f32)>> = IndexMap::new();
    let ids = doc.selected_keyframe_ids()?;
    let selected = ids.len();

    for id in ids {
        let path = match doc
            .attribute_of_keyframe(&id)
            .and_then(|flat| Ok(flat.parse::<AttributePath>()?))
        {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Keyframe {} ohne gültigen Attributpfad übersprungen: {:#}", id, e);
                continue;
            }
        };
        let frame = match doc.frame_of_keyframe(&id) {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("Keyframe {} ohne lesbaren Frame übersprungen: {:#}", id, e);
                continue;
            }
        };
        groups.entry(path).or_default().push((id, frame));
    }

    let groups = groups
        .into_iter()
        .map(|(path, mut keys)| {
            keys.sort_by(|a, b| a.1.total_cmp(&b.1));
            KeyframeGroup { path, keys }
        })
        .collect();
    Ok(Selection { groups, selected })
}

/// Stellt die Zeitposition des Dokuments beim Verlassen des Scopes wieder her,
/// egal auf welchem Pfad (Erfolg, `?`, früher Return).
pub struct TimeCursorGuard<'a, D: AnimationDocument + ?Sized> {
    doc: &'a mut D,
    original_frame: f32,
}

impl<'a, D: AnimationDocument + ?Sized> TimeCursorGuard<'a, D> {
    pub fn new(doc: &'a mut D) -> Self {
        let original_frame = doc.current_frame();
        Self {
            doc,
            original_frame,
        }
    }

    /// Springt zu `frame` und liest den Attributwert dort.
    pub fn sample_value(&mut self, path: &AttributePath, frame: f32) -> anyhow::Result<f32> {
        self.doc.set_current_frame(frame)?;
        self.doc.value_at(path, frame)
    }
}

impl<D: AnimationDocument + ?Sized> Deref for TimeCursorGuard<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.doc
    }
}

impl<D: AnimationDocument + ?Sized> DerefMut for TimeCursorGuard<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.doc
    }
}

impl<D: AnimationDocument + ?Sized> Drop for TimeCursorGuard<'_, D> {
    fn drop(&mut self) {
        if let Err(e) = self.doc.set_current_frame(self.original_frame) {
            log::error!(
                "Zeitposition {} konnte nicht wiederhergestellt werden: {:#}",
                self.original_frame,
                e
            );
        }
    }
}
