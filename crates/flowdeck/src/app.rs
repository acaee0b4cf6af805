//! The FlowDeck application shell.
//!
//! Owns the workflow state (for now, a single question-classifier node and
//! the model registry) and the UI action queue. Panels borrow the state,
//! push [`UIAction`]s, and the shell applies them here each frame.

use flowdeck_core::{ClassifierNodeData, ModelRegistry};
use flowdeck_ui::{widgets, ClassifierNodePanel, ModelSelector, Theme, UIAction, UserConfig};
use tracing::error;

/// Top-level application state.
pub struct FlowDeckApp {
    /// The classifier node shown on the canvas
    node: ClassifierNodeData,
    /// Available models, injected into every selector
    registry: ModelRegistry,
    /// Node body renderer
    node_panel: ClassifierNodePanel,
    /// User preferences
    config: UserConfig,
    /// Pending UI actions, drained once per frame
    actions: Vec<UIAction>,
}

impl FlowDeckApp {
    /// Create the app from loaded preferences and apply the theme.
    pub fn new(cc: &eframe::CreationContext<'_>, config: UserConfig) -> Self {
        config.theme.apply(&cc.egui_ctx);
        Self {
            node: ClassifierNodeData::mock(),
            registry: ModelRegistry::mock(),
            node_panel: ClassifierNodePanel,
            config,
            actions: Vec::new(),
        }
    }

    /// Apply all queued UI actions to the owned node data.
    fn apply_actions(&mut self) {
        for action in self.actions.drain(..) {
            match action {
                UIAction::AddTestTopic => {
                    self.node.add_test_topic();
                }
                UIAction::SetModel(model) => self.node.set_model(model),
            }
        }
    }

    fn show_settings_panel(&mut self, ctx: &egui::Context) {
        if !self.config.show_settings {
            return;
        }
        egui::SidePanel::right("node_settings")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                widgets::render_header(ui, "Node Settings");
                ui.add_space(6.0);

                ui.label("Model");
                let model_list = self.registry.text_generation_models();
                if let Some(picked) = ModelSelector::new(&model_list)
                    .default_model_ref(&self.node.model)
                    .show(ui)
                {
                    self.actions.push(UIAction::SetModel(picked));
                }

                ui.add_space(6.0);
                ui.label("Theme");
                let mut theme = self.config.theme.theme;
                egui::ComboBox::from_id_salt("theme_select")
                    .selected_text(format!("{theme:?}"))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut theme, Theme::Dark, "Dark");
                        ui.selectable_value(&mut theme, Theme::Light, "Light");
                    });
                if theme != self.config.theme.theme {
                    self.config.theme.theme = theme;
                    self.config.theme.apply(ctx);
                }
            });
    }

    fn show_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::render_header(ui, "Question Classifier");
            ui.add_space(4.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let model_list = self.registry.text_generation_models();
                self.node_panel
                    .show(ui, &self.node, &model_list, &mut self.actions);
            });
        });
    }
}

impl eframe::App for FlowDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_settings_panel(ctx);
        self.show_canvas(ctx);
        self.apply_actions();

        let size = ctx.screen_rect().size();
        self.config.window_width = Some(size.x as u32);
        self.config.window_height = Some(size.y as u32);
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if let Err(e) = self.config.save() {
            error!("failed to save user config: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_core::ModelRef;

    fn test_app() -> FlowDeckApp {
        FlowDeckApp {
            node: ClassifierNodeData::mock(),
            registry: ModelRegistry::mock(),
            node_panel: ClassifierNodePanel,
            config: UserConfig::default(),
            actions: Vec::new(),
        }
    }

    #[test]
    fn test_add_test_topic_action_appends() {
        let mut app = test_app();
        app.actions.push(UIAction::AddTestTopic);
        app.apply_actions();
        assert_eq!(app.node.topics.len(), 3);
        assert_eq!(app.node.topics[2].name, "Topic2");
        assert!(app.actions.is_empty());
    }

    #[test]
    fn test_set_model_action_updates_node() {
        let mut app = test_app();
        let picked = ModelRef::new("anthropic", "claude-3-haiku");
        app.actions.push(UIAction::SetModel(picked.clone()));
        app.apply_actions();
        assert_eq!(app.node.model, picked);
    }

    #[test]
    fn test_actions_apply_in_order() {
        let mut app = test_app();
        app.actions.push(UIAction::AddTestTopic);
        app.actions.push(UIAction::AddTestTopic);
        app.apply_actions();
        let names: Vec<&str> = app.node.topics.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Customer Service",
                "Technical Support",
                "Topic2",
                "Topic3"
            ]
        );
    }
}
