//! Question-classifier node panel
//!
//! The node body as drawn on the workflow canvas: the configured model in a
//! readonly selector, one info panel per topic in list order, and a debug
//! "Add" row that appends a synthetic topic for manual testing.

use crate::widgets::{self, ModelSelector};
use crate::UIAction;
use egui::Ui;
use flowdeck_core::{ClassifierNodeData, ProviderModel};

/// Renders the question-classifier node body.
///
/// The panel holds no node state. Topics and the model reference are
/// borrowed from the node data each frame; the "Add" click is reported as
/// [`UIAction::AddTestTopic`] and applied by whoever owns the data.
#[derive(Debug, Default)]
pub struct ClassifierNodePanel;

impl ClassifierNodePanel {
    /// Show the node body inside the given `Ui`.
    ///
    /// `model_list` is the text-generation subset of the registry, passed in
    /// explicitly by the caller.
    pub fn show(
        &self,
        ui: &mut Ui,
        node: &ClassifierNodeData,
        model_list: &[&ProviderModel],
        actions: &mut Vec<UIAction>,
    ) {
        // The node view never edits the model inline; that goes through the
        // settings panel.
        ModelSelector::new(model_list)
            .default_model_ref(&node.model)
            .readonly(true)
            .show(ui);

        ui.add_space(4.0);

        for topic in &node.topics {
            // Keyed by topic id so re-renders keep panel identity stable
            ui.push_id(topic.id.as_str(), |ui| {
                widgets::info_panel(ui, &topic.name, &topic.topic);
            });
        }

        if widgets::affordance_row(ui, "Add").clicked() {
            actions.push(UIAction::AddTestTopic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_core::{ModelRef, ModelRegistry, Topic};

    fn run_panel(node: &ClassifierNodeData) -> Vec<UIAction> {
        let registry = ModelRegistry::mock();
        let list = registry.text_generation_models();
        let panel = ClassifierNodePanel;
        let mut actions = Vec::new();

        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                panel.show(ui, node, &list, &mut actions);
            });
        });
        actions
    }

    #[test]
    fn test_rendering_emits_no_actions_without_clicks() {
        let actions = run_panel(&ClassifierNodeData::mock());
        assert!(actions.is_empty());
    }

    #[test]
    fn test_renders_empty_topic_list() {
        let node = ClassifierNodeData::new(ModelRef::default(), Vec::new());
        let actions = run_panel(&node);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_renders_many_topics_without_id_collisions() {
        // Duplicate ids are tolerated (push_id only scopes widget ids)
        let node = ClassifierNodeData::new(
            ModelRef::new("openai", "gpt-4o"),
            vec![
                Topic::new("1", "A", "ta"),
                Topic::new("1", "B", "tb"),
                Topic::new("2", "C", "tc"),
            ],
        );
        let actions = run_panel(&node);
        assert!(actions.is_empty());
    }
}
