//! In-Memory-Animationsdokument.
//!
//! Dient als Host im Standalone-Betrieb und als Dokument in Tests.

use super::document::AnimationDocument;
use crate::core::{AttributePath, Interpolation, KeyframeId, TangentData, TangentSide};
use anyhow::{anyhow, bail};
use glam::Vec2;
use indexmap::IndexSet;

/// Frames gelten innerhalb dieser Toleranz als identisch.
const FRAME_EPSILON: f32 = 1e-3;

/// Ein Keyframe im Speicher-Dokument.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryKeyframe {
    pub id: KeyframeId,
    pub path: AttributePath,
    pub frame: f32,
    pub value: f32,
    pub tangents: TangentData,
    /// Gesperrte Tangenten lassen sich erst nach `unlock_tangent` setzen
    pub tangent_locked: bool,
}

impl MemoryKeyframe {
    pub fn new(id: &str, path: AttributePath, frame: f32, value: f32) -> Self {
        Self {
            id: KeyframeId::new(id),
            path,
            frame,
            value,
            tangents: TangentData::default(),
            tangent_locked: false,
        }
    }

    pub fn with_handles(mut self, left: Option<Vec2>, right: Option<Vec2>) -> Self {
        self.tangents.left_handle = left;
        self.tangents.right_handle = right;
        self.tangents.interpolation = Interpolation::Bezier;
        self
    }

    pub fn locked(mut self) -> Self {
        self.tangent_locked = true;
        self
    }
}

/// Einfaches Animationsdokument mit linearer Werte-Interpolation zwischen Keyframes.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    keyframes: Vec<MemoryKeyframe>,
    selection: IndexSet<KeyframeId>,
    current_frame: f32,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Beispieldokument für den Standalone-Betrieb.
    pub fn with_sample_animation() -> Self {
        let mut doc = Self::new();
        let position = AttributePath::new("layer#1", "position.x");
        let opacity = AttributePath::new("layer#1", "opacity");
        let scale = AttributePath::new("layer#2", "scale");
        doc.insert(
            MemoryKeyframe::new("k1", position.clone(), 0.0, 0.0)
                .with_handles(None, Some(Vec2::new(10.0, 0.0))),
        );
        doc.insert(
            MemoryKeyframe::new("k2", position.clone(), 30.0, 400.0)
                .with_handles(Some(Vec2::new(-10.0, 0.0)), Some(Vec2::new(10.0, 0.0))),
        );
        doc.insert(MemoryKeyframe::new("k3", position, 60.0, 250.0));
        doc.insert(MemoryKeyframe::new("k4", opacity.clone(), 0.0, 0.0));
        doc.insert(MemoryKeyframe::new("k5", opacity, 24.0, 100.0));
        doc.insert(MemoryKeyframe::new("k6", scale, 12.0, 100.0).locked());
        doc
    }

    pub fn insert(&mut self, keyframe: MemoryKeyframe) {
        self.keyframes.push(keyframe);
    }

    pub fn keyframes(&self) -> &[MemoryKeyframe] {
        &self.keyframes
    }

    pub fn keyframe(&self, id: &str) -> Option<&MemoryKeyframe> {
        self.keyframes.iter().find(|k| k.id.0 == id)
    }

    pub fn select(&mut self, id: &str) {
        self.selection.insert(KeyframeId::new(id));
    }

    pub fn deselect(&mut self, id: &str) {
        self.selection.shift_remove(&KeyframeId::new(id));
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(&KeyframeId::new(id))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn find(&self, id: &KeyframeId) -> anyhow::Result<&MemoryKeyframe> {
        self.keyframes
            .iter()
            .find(|k| &k.id == id)
            .ok_or_else(|| anyhow!("unknown keyframe {id}"))
    }

    fn find_mut(&mut self, id: &KeyframeId) -> anyhow::Result<&mut MemoryKeyframe> {
        self.keyframes
            .iter_mut()
            .find(|k| &k.id == id)
            .ok_or_else(|| anyhow!("unknown keyframe {id}"))
    }

    fn find_at_mut(
        &mut self,
        path: &AttributePath,
        frame: f32,
    ) -> anyhow::Result<&mut MemoryKeyframe> {
        self.keyframes
            .iter_mut()
            .find(|k| &k.path == path && (k.frame - frame).abs() < FRAME_EPSILON)
            .ok_or_else(|| anyhow!("no keyframe on {path} at frame {frame}"))
    }
}

impl AnimationDocument for MemoryDocument {
    fn selected_keyframe_ids(&self) -> anyhow::Result<Vec<KeyframeId>> {
        Ok(self.selection.iter().cloned().collect())
    }

    fn attribute_of_keyframe(&self, id: &KeyframeId) -> anyhow::Result<String> {
        Ok(self.find(id)?.path.to_string())
    }

    fn frame_of_keyframe(&self, id: &KeyframeId) -> anyhow::Result<f32> {
        Ok(self.find(id)?.frame)
    }

    fn value_at(&self, path: &AttributePath, frame: f32) -> anyhow::Result<f32> {
        let mut keys: Vec<&MemoryKeyframe> =
            self.keyframes.iter().filter(|k| &k.path == path).collect();
        if keys.is_empty() {
            bail!("attribute {path} has no keyframes");
        }
        keys.sort_by(|a, b| a.frame.total_cmp(&b.frame));

        let first = keys[0];
        let last = keys[keys.len() - 1];
        if frame <= first.frame {
            return Ok(first.value);
        }
        if frame >= last.frame {
            return Ok(last.value);
        }
        for pair in keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if frame >= a.frame && frame <= b.frame {
                let span = b.frame - a.frame;
                if span < FRAME_EPSILON {
                    return Ok(b.value);
                }
                let t = (frame - a.frame) / span;
                return Ok(a.value + (b.value - a.value) * t);
            }
        }
        Ok(last.value)
    }

    fn current_frame(&self) -> f32 {
        self.current_frame
    }

    fn set_current_frame(&mut self, frame: f32) -> anyhow::Result<()> {
        self.current_frame = frame;
        Ok(())
    }

    fn tangent_data(&self, id: &KeyframeId) -> anyhow::Result<TangentData> {
        Ok(self.find(id)?.tangents)
    }

    fn set_interpolation(&mut self, id: &KeyframeId, mode: Interpolation) -> anyhow::Result<()> {
        self.find_mut(id)?.tangents.interpolation = mode;
        Ok(())
    }

    fn set_tangent(
        &mut self,
        path: &AttributePath,
        frame: f32,
        side: TangentSide,
        offset: Vec2,
    ) -> anyhow::Result<()> {
        let key = self.find_at_mut(path, frame)?;
        if key.tangent_locked {
            bail!("tangent of {path} at frame {frame} is locked");
        }
        match side {
            TangentSide::In => key.tangents.left_handle = Some(offset),
            TangentSide::Out => key.tangents.right_handle = Some(offset),
        }
        Ok(())
    }

    fn unlock_tangent(&mut self, path: &AttributePath, frame: f32) -> anyhow::Result<()> {
        self.find_at_mut(path, frame)?.tangent_locked = false;
        Ok(())
    }
}
