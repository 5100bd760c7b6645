//! Mapping von UI-Intents auf mutierende Editor-Commands.

use super::events::{EditorCommand, EditorIntent, GraphKind};
use super::EditorState;
use crate::core::BezierCurve;

fn is_dragging(state: &EditorState, graph: GraphKind) -> bool {
    match graph {
        GraphKind::Value => state.value_graph.is_dragging(),
        GraphKind::Speed => state.speed_graph.is_dragging(),
    }
}

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::GraphPointerPressed { graph, pos } => {
            vec![EditorCommand::BeginDrag { graph, pos }]
        }
        EditorIntent::GraphPointerMoved { graph, pos } => {
            if is_dragging(state, graph) {
                vec![EditorCommand::UpdateDrag { graph, pos }]
            } else {
                vec![]
            }
        }
        EditorIntent::GraphPointerReleased { graph } => {
            if !is_dragging(state, graph) {
                return vec![];
            }
            let mut commands = vec![
                EditorCommand::EndDrag { graph },
                EditorCommand::ClearActivePreset,
            ];
            if state.apply_on_drag {
                commands.push(EditorCommand::ApplyEasing);
            }
            commands.push(EditorCommand::PersistActiveTab);
            commands
        }
        EditorIntent::TabSelected { tab } => vec![
            EditorCommand::SetActiveTab { tab },
            EditorCommand::PersistActiveTab,
        ],
        EditorIntent::BezierTextSubmitted { text } => match text.parse::<BezierCurve>() {
            Ok(curve) => vec![
                EditorCommand::SetCurve { curve },
                EditorCommand::ClearActivePreset,
            ],
            Err(e) => vec![EditorCommand::RejectBezierText {
                text,
                reason: e.to_string(),
            }],
        },
        EditorIntent::PresetSelected { name } => vec![EditorCommand::SelectPreset { name }],
        EditorIntent::SavePresetDialogRequested => vec![EditorCommand::OpenSavePresetDialog],
        EditorIntent::SavePresetConfirmed { name } => vec![EditorCommand::SavePreset { name }],
        EditorIntent::RenamePresetDialogRequested { name } => {
            vec![EditorCommand::OpenRenamePresetDialog { name }]
        }
        EditorIntent::RenamePresetConfirmed { old, new } => {
            vec![EditorCommand::RenamePreset { old, new }]
        }
        EditorIntent::DeletePresetRequested { name } => vec![EditorCommand::DeletePreset { name }],
        EditorIntent::DeleteAllPresetsRequested => vec![EditorCommand::OpenDeleteAllConfirm],
        EditorIntent::DeleteAllPresetsConfirmed => vec![EditorCommand::DeleteAllPresets],
        EditorIntent::PresetDialogCancelled => vec![EditorCommand::ClosePresetDialogs],
        EditorIntent::ImportPresetsRequested => vec![EditorCommand::RequestImportDialog],
        EditorIntent::ImportFileSelected { path } => vec![EditorCommand::ImportPresets { path }],
        EditorIntent::ExportPresetsRequested => vec![EditorCommand::RequestExportDialog],
        EditorIntent::ExportFileSelected { path } => vec![EditorCommand::ExportPresets { path }],
        EditorIntent::CopyCurveRequested { format } => {
            vec![EditorCommand::CopyToClipboard { format }]
        }
        EditorIntent::ApplyOnDragToggled => vec![EditorCommand::SetApplyOnDrag {
            enabled: !state.apply_on_drag,
        }],
        EditorIntent::GetEasingRequested => vec![EditorCommand::ExtractEasing],
        EditorIntent::ApplyEasingRequested => vec![EditorCommand::ApplyEasing],
        EditorIntent::OptionsDialogRequested => vec![EditorCommand::OpenOptionsDialog],
        EditorIntent::CloseOptionsDialogRequested => vec![EditorCommand::CloseOptionsDialog],
        EditorIntent::OptionsChanged { options } => vec![EditorCommand::ApplyOptions { options }],
        EditorIntent::ResetOptionsRequested => vec![EditorCommand::ResetOptions],
    }
}
