//! Easing-Kurven-Editor.
//!
//! Standalone-Host mit egui: bearbeitet eine Cubic-Bézier im Value- und
//! Speed-Graphen und wendet sie auf Keyframes eines Speicher-Dokuments an.

use easing_curve_editor::{
    ui, EditorController, EditorIntent, EditorOptions, EditorState, HostContext,
    JsonFilePreferenceStore, MemoryDocument,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Easing-Kurven-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([640.0, 480.0])
                .with_title("Easing Curve Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Easing Curve Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: EditorState,
    controller: EditorController,
    document: MemoryDocument,
    preferences: JsonFilePreferenceStore,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let preferences = JsonFilePreferenceStore::open(&EditorOptions::preferences_path());

        let mut state = EditorState::new();
        state.options = editor_options;
        state.restore_preferences(&preferences);

        Self {
            state,
            controller: EditorController::new(),
            document: MemoryDocument::with_sample_animation(),
            preferences,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(ctx, events);

        if let Some(text) = self.state.ui.clipboard_out.take() {
            ctx.copy_text(text);
        }

        if has_events || self.state.is_dragging() {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<EditorIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        ui::render_keyframe_panel(ctx, &mut self.document);
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_save_preset_dialog(ctx, &mut self.state.ui));
        events.extend(ui::show_rename_preset_dialog(ctx, &mut self.state.ui));
        events.extend(ui::show_delete_all_confirm(ctx, &self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(ui::render_editor_panel(ui, &mut self.state));
        });

        events
    }

    fn process_events(&mut self, ctx: &egui::Context, events: Vec<EditorIntent>) {
        // Modifier werden pro Move-Event über den Context abgefragt
        let modifiers = ui::EguiModifiers::new(ctx, &self.state.options);
        let mut host = HostContext {
            document: &mut self.document,
            preferences: &mut self.preferences,
            modifiers: &modifiers,
        };

        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, &mut host, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.set_status(format!("{e:#}"));
            }
        }
    }
}
