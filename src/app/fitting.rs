//! Keyframe-Fitting: repräsentative Bézier aus selektierten Keyframes ableiten
//! und eine Bézier auf Keyframe-Paare anwenden.
//!
//! Beide Richtungen arbeiten gruppenweise pro Attribut. Scheitert eine Gruppe
//! am Host, wird geloggt und mit den übrigen Gruppen weitergemacht; die
//! Gesamtoperation gilt als erfolgreich, wenn mindestens eine Gruppe durchlief.

use super::document::{collect_groups, AnimationDocument, Selection, TimeCursorGuard};
use crate::core::{
    bezier_to_host_handles, host_handles_to_bezier, AttributePath, BezierCurve, HostHandles,
    Interpolation, KeyframeGroup, KeyframeId, TangentSide,
};

/// Fehler einer Fit-/Apply-Operation.
#[derive(Debug, thiserror::Error)]
pub enum EasingError {
    #[error("no keyframes selected")]
    NoSelection,
    #[error("select at least two keyframes on the same attribute")]
    NoPairs,
    #[error("all {0} attribute groups failed")]
    AllGroupsFailed(usize),
    #[error("host error: {0:#}")]
    Host(#[from] anyhow::Error),
}

/// Synthetische Spannen für Einzel-Keyframes ohne Nachbarn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleKeySpan {
    pub frames: f32,
    pub values: f32,
}

impl Default for SingleKeySpan {
    fn default() -> Self {
        Self {
            frames: crate::shared::options::SINGLE_KEY_FRAME_SPAN,
            values: crate::shared::options::SINGLE_KEY_VALUE_SPAN,
        }
    }
}

/// Ergebnis einer Attributgruppe.
#[derive(Debug)]
pub struct GroupReport {
    pub path: AttributePath,
    /// Anzahl verarbeiteter Keyframe-Paare oder der Host-Fehler
    pub outcome: anyhow::Result<usize>,
}

/// Ergebnisliste pro Gruppe.
#[derive(Debug, Default)]
pub struct FitReport {
    pub groups: Vec<GroupReport>,
}

impl FitReport {
    pub fn succeeded(&self) -> usize {
        self.groups.iter().filter(|g| g.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.groups.len() - self.succeeded()
    }

    /// Gesamtzahl verarbeiteter Paare über alle erfolgreichen Gruppen.
    pub fn pairs(&self) -> usize {
        self.groups
            .iter()
            .filter_map(|g| g.outcome.as_ref().ok())
            .sum()
    }

    fn into_result(self) -> Result<Self, EasingError> {
        if self.groups.is_empty() {
            Err(EasingError::NoPairs)
        } else if self.succeeded() == 0 {
            Err(EasingError::AllGroupsFailed(self.groups.len()))
        } else {
            Ok(self)
        }
    }
}

/// Ergebnis von [`extract_easing`].
#[derive(Debug)]
pub enum Extraction {
    /// Neue Kurve (Mittelwert aller beitragenden Paare)
    Fitted { curve: BezierCurve, report: FitReport },
    /// Einzel-Keyframe ohne ausgehendes Handle: Kurve bleibt unverändert
    Unchanged,
}

/// Leitet eine repräsentative Bézier aus der Keyframe-Selektion ab.
///
/// Paare ohne beide benötigten Handles tragen `(0, 0, 1, 1)` zum Mittelwert bei,
/// statt übersprungen zu werden.
pub fn extract_easing<D: AnimationDocument + ?Sized>(
    doc: &mut D,
    span: SingleKeySpan,
) -> Result<Extraction, EasingError> {
    let mut doc = TimeCursorGuard::new(doc);
    let selection = collect_groups(&*doc)?;

    match selection_mode(&selection, "Get")? {
        SelectionMode::Single(group) => extract_single(&*doc, group, span),
        SelectionMode::Multi => extract_multi(&mut doc, &selection.groups),
    }
}

enum SelectionMode<'a> {
    Single(&'a KeyframeGroup),
    Multi,
}

/// Entscheidet anhand der vom Host gemeldeten Selektion, nicht anhand der
/// lesbaren Keyframes, zwischen Einzel- und Paarmodus.
fn selection_mode<'a>(
    selection: &'a Selection,
    op: &str,
) -> Result<SelectionMode<'a>, EasingError> {
    let skipped = selection.skipped();
    match (selection.selected, selection.groups.first()) {
        (0, _) | (1, None) => {
            log::warn!("{}: keine Keyframes selektiert", op);
            Err(EasingError::NoSelection)
        }
        (1, Some(group)) => Ok(SelectionMode::Single(group)),
        _ => {
            if skipped > 0 {
                log::warn!(
                    "{}: {} von {} selektierten Keyframes nicht lesbar",
                    op,
                    skipped,
                    selection.selected
                );
            }
            Ok(SelectionMode::Multi)
        }
    }
}

fn extract_single<D: AnimationDocument + ?Sized>(
    doc: &D,
    group: &KeyframeGroup,
    span: SingleKeySpan,
) -> Result<Extraction, EasingError> {
    let (id, _) = &group.keys[0];
    let tangents = doc.tangent_data(id)?;
    let Some(out_handle) = tangents.right_handle else {
        log::info!("Get: Keyframe {} hat kein Tangenten-Handle, Kurve unverändert", id);
        return Ok(Extraction::Unchanged);
    };

    // Gespiegeltes eingehendes Handle ergibt eine symmetrische Kurve
    let handles = HostHandles {
        out_handle,
        in_handle: -out_handle,
    };
    let curve = host_handles_to_bezier(&handles, span.frames, span.values);
    Ok(Extraction::Fitted {
        curve,
        report: FitReport {
            groups: vec![GroupReport {
                path: group.path.clone(),
                outcome: Ok(0),
            }],
        },
    })
}

fn extract_multi<D: AnimationDocument + ?Sized>(
    doc: &mut TimeCursorGuard<'_, D>,
    groups: &[KeyframeGroup],
) -> Result<Extraction, EasingError> {
    let mut report = FitReport::default();
    let mut sum = [0.0f32; 4];
    let mut contributing = 0usize;

    for group in groups.iter().filter(|g| g.keys.len() >= 2) {
        let outcome = fit_group(doc, group);
        match &outcome {
            Ok(curves) => {
                for curve in curves {
                    for (acc, v) in sum.iter_mut().zip(curve.to_array()) {
                        *acc += v;
                    }
                }
                contributing += curves.len();
            }
            Err(e) => log::warn!("Get: Gruppe {} fehlgeschlagen: {:#}", group.path, e),
        }
        report.groups.push(GroupReport {
            path: group.path.clone(),
            outcome: outcome.map(|curves| curves.len()),
        });
    }

    if contributing == 0 {
        log::warn!("Get: keine Keyframe-Paare ({} Gruppen)", report.groups.len());
        return Err(report.into_result().err().unwrap_or(EasingError::NoPairs));
    }

    let n = contributing as f32;
    let curve = BezierCurve::from_array(sum.map(|v| v / n));
    log::info!(
        "Get: Kurve {} aus {} Paaren in {} Gruppen gemittelt",
        curve,
        contributing,
        report.succeeded()
    );
    Ok(Extraction::Fitted { curve, report })
}

/// Wandelt alle Paare einer Gruppe in Béziers um.
fn fit_group<D: AnimationDocument + ?Sized>(
    doc: &mut TimeCursorGuard<'_, D>,
    group: &KeyframeGroup,
) -> anyhow::Result<Vec<BezierCurve>> {
    let mut curves = Vec::with_capacity(group.keys.len() - 1);
    for ((id_a, frame_a), (id_b, frame_b)) in group.pairs() {
        let value_a = doc.sample_value(&group.path, *frame_a)?;
        let value_b = doc.sample_value(&group.path, *frame_b)?;
        let out_handle = doc.tangent_data(id_a)?.right_handle;
        let in_handle = doc.tangent_data(id_b)?.left_handle;

        let curve = match (out_handle, in_handle) {
            (Some(out_handle), Some(in_handle)) => host_handles_to_bezier(
                &HostHandles {
                    out_handle,
                    in_handle,
                },
                frame_b - frame_a,
                value_b - value_a,
            ),
            _ => BezierCurve::LINEAR,
        };
        curves.push(curve);
    }
    Ok(curves)
}

/// Schreibt eine Bézier in die selektierten Keyframes.
///
/// Einzel-Keyframes erhalten die Kurve auf beiden Seiten mit der synthetischen
/// Spanne `span`. Mehrere Keyframes: jedes aufeinanderfolgende Paar jeder
/// Gruppe mit mindestens zwei Keyframes.
pub fn apply_easing<D: AnimationDocument + ?Sized>(
    doc: &mut D,
    curve: &BezierCurve,
    span: SingleKeySpan,
) -> Result<FitReport, EasingError> {
    let mut doc = TimeCursorGuard::new(doc);
    let selection = collect_groups(&*doc)?;

    let report = match selection_mode(&selection, "Apply")? {
        SelectionMode::Single(group) => {
            let outcome = apply_single(&mut doc, group, curve, span);
            if let Err(e) = &outcome {
                log::warn!("Apply: Keyframe auf {} fehlgeschlagen: {:#}", group.path, e);
            }
            FitReport {
                groups: vec![GroupReport {
                    path: group.path.clone(),
                    outcome,
                }],
            }
        }
        SelectionMode::Multi => {
            let mut report = FitReport::default();
            for group in selection.groups.iter().filter(|g| g.keys.len() >= 2) {
                let outcome = apply_group(&mut doc, group, curve);
                if let Err(e) = &outcome {
                    log::warn!("Apply: Gruppe {} fehlgeschlagen: {:#}", group.path, e);
                }
                report.groups.push(GroupReport {
                    path: group.path.clone(),
                    outcome,
                });
            }
            report
        }
    };

    let report = report.into_result()?;
    log::info!(
        "Apply: Kurve {} auf {} Paare in {} Gruppen angewendet ({} fehlgeschlagen)",
        curve,
        report.pairs(),
        report.succeeded(),
        report.failed()
    );
    Ok(report)
}

fn prepare_keyframe<D: AnimationDocument + ?Sized>(
    doc: &mut D,
    path: &AttributePath,
    id: &KeyframeId,
    frame: f32,
) -> anyhow::Result<()> {
    doc.unlock_tangent(path, frame)?;
    doc.set_interpolation(id, Interpolation::Bezier)
}

fn apply_single<D: AnimationDocument + ?Sized>(
    doc: &mut TimeCursorGuard<'_, D>,
    group: &KeyframeGroup,
    curve: &BezierCurve,
    span: SingleKeySpan,
) -> anyhow::Result<usize> {
    let (id, frame) = &group.keys[0];
    prepare_keyframe(&mut **doc, &group.path, id, *frame)?;

    let handles = bezier_to_host_handles(curve, span.frames, span.values);
    doc.set_tangent(&group.path, *frame, TangentSide::Out, handles.out_handle)?;
    doc.set_tangent(&group.path, *frame, TangentSide::In, handles.in_handle)?;
    Ok(1)
}

fn apply_group<D: AnimationDocument + ?Sized>(
    doc: &mut TimeCursorGuard<'_, D>,
    group: &KeyframeGroup,
    curve: &BezierCurve,
) -> anyhow::Result<usize> {
    for (id, frame) in &group.keys {
        prepare_keyframe(&mut **doc, &group.path, id, *frame)?;
    }

    let mut pairs = 0;
    for ((_, frame_a), (_, frame_b)) in group.pairs() {
        let value_a = doc.sample_value(&group.path, *frame_a)?;
        let value_b = doc.sample_value(&group.path, *frame_b)?;
        let handles = bezier_to_host_handles(curve, frame_b - frame_a, value_b - value_a);
        doc.set_tangent(&group.path, *frame_a, TangentSide::Out, handles.out_handle)?;
        doc.set_tangent(&group.path, *frame_b, TangentSide::In, handles.in_handle)?;
        pairs += 1;
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests;
