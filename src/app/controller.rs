//! Editor Controller für zentrale Event-Verarbeitung.

use super::document::AnimationDocument;
use super::events::{EditorCommand, EditorIntent};
use super::interaction::ModifierSource;
use super::preferences::PreferenceStore;
use super::EditorState;

/// Host-Fähigkeiten, die Commands während der Ausführung benötigen.
pub struct HostContext<'a> {
    pub document: &'a mut dyn AnimationDocument,
    pub preferences: &'a mut dyn PreferenceStore,
    /// Wird bei jedem Drag-Move abgefragt
    pub modifiers: &'a dyn ModifierSource,
}

/// Orchestriert UI-Events und Handler auf den EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        host: &mut HostContext<'_>,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        host: &mut HostContext<'_>,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Drags ===
            EditorCommand::BeginDrag { graph, pos } => {
                handlers::curve::begin_drag(state, graph, pos)
            }
            EditorCommand::UpdateDrag { graph, pos } => {
                handlers::curve::update_drag(state, graph, pos, host.modifiers)
            }
            EditorCommand::EndDrag { graph } => handlers::curve::end_drag(state, graph),
            EditorCommand::ClearActivePreset => handlers::presets::clear_active(state),

            // === Ansicht ===
            EditorCommand::SetActiveTab { tab } => handlers::view::set_active_tab(state, tab),
            EditorCommand::PersistActiveTab => {
                handlers::view::persist_active_tab(state, host.preferences)
            }
            EditorCommand::CopyToClipboard { format } => {
                handlers::view::copy_to_clipboard(state, format)
            }

            // === Kurve ===
            EditorCommand::SetCurve { curve } => handlers::curve::set_curve(state, curve),
            EditorCommand::RejectBezierText { text, reason } => {
                handlers::curve::reject_text(state, &text, &reason)
            }

            // === Presets ===
            EditorCommand::SelectPreset { name } => handlers::presets::select(state, &name),
            EditorCommand::OpenSavePresetDialog => handlers::presets::open_save_dialog(state),
            EditorCommand::SavePreset { name } => {
                handlers::presets::save(state, host.preferences, &name)
            }
            EditorCommand::OpenRenamePresetDialog { name } => {
                handlers::presets::open_rename_dialog(state, name)
            }
            EditorCommand::RenamePreset { old, new } => {
                handlers::presets::rename(state, host.preferences, &old, &new)
            }
            EditorCommand::DeletePreset { name } => {
                handlers::presets::delete(state, host.preferences, &name)
            }
            EditorCommand::OpenDeleteAllConfirm => {
                handlers::presets::open_delete_all_confirm(state)
            }
            EditorCommand::DeleteAllPresets => {
                handlers::presets::delete_all(state, host.preferences)
            }
            EditorCommand::ClosePresetDialogs => handlers::presets::close_dialogs(state),
            EditorCommand::RequestImportDialog => handlers::presets::request_import(state),
            EditorCommand::ImportPresets { path } => {
                handlers::presets::import(state, host.preferences, &path)?
            }
            EditorCommand::RequestExportDialog => handlers::presets::request_export(state),
            EditorCommand::ExportPresets { path } => handlers::presets::export(state, &path)?,
            EditorCommand::SetApplyOnDrag { enabled } => {
                handlers::view::set_apply_on_drag(state, host.preferences, enabled)
            }

            // === Keyframes ===
            EditorCommand::ExtractEasing => handlers::keyframes::extract(state, host.document),
            EditorCommand::ApplyEasing => handlers::keyframes::apply(state, host.document),

            // === Optionen ===
            EditorCommand::OpenOptionsDialog => handlers::options::open_dialog(state),
            EditorCommand::CloseOptionsDialog => handlers::options::close_dialog(state),
            EditorCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            EditorCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }
}
