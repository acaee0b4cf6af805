//! Custom styled widgets for the workflow builder.

use crate::theme::colors;
use egui::{Align2, FontId, Pos2, Rect, Response, RichText, Sense, Ui, Vec2};
use flowdeck_core::{ModelRef, ProviderModel};

/// Paint a section header with the accent stripe on the left.
pub fn render_header(ui: &mut Ui, title: &str) {
    let desired_size = Vec2::new(ui.available_width(), 24.0);
    let (rect, _response) = ui.allocate_at_least(desired_size, Sense::hover());

    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(0), colors::AFFORDANCE_BG);

    let stripe_rect = Rect::from_min_size(rect.min, Vec2::new(2.0, rect.height()));
    painter.rect_filled(stripe_rect, egui::CornerRadius::same(0), colors::ACCENT);

    let text_pos = Pos2::new(rect.min.x + 8.0, rect.center().y);
    painter.text(
        text_pos,
        Align2::LEFT_CENTER,
        title,
        FontId::proportional(14.0),
        ui.visuals().text_color(),
    );
}

/// Render a static labeled block: a title line over its content text.
pub fn info_panel(ui: &mut Ui, title: &str, content: &str) {
    let fill = if ui.visuals().dark_mode {
        colors::PANEL_BG
    } else {
        colors::PANEL_BG_LIGHT
    };
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(4)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(12.0));
            ui.label(RichText::new(content).color(colors::TEXT_WEAK).size(12.0));
        });
}

/// Full-width low-emphasis row used as a clickable affordance.
pub fn affordance_row(ui: &mut Ui, label: &str) -> Response {
    let desired_size = Vec2::new(ui.available_width(), 22.0);
    let (rect, response) = ui.allocate_at_least(desired_size, Sense::click());

    let painter = ui.painter();
    let fill = if response.hovered() {
        colors::AFFORDANCE_BG.linear_multiply(1.4)
    } else {
        colors::AFFORDANCE_BG
    };
    painter.rect_filled(rect, egui::CornerRadius::same(4), fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(12.0),
        ui.visuals().text_color(),
    );

    response
}

/// Model selector widget.
///
/// Readonly mode renders a static display of the current selection (or the
/// unselected state); otherwise a dropdown over the supplied model list. The
/// widget stores nothing: a pick is returned to the caller, who owns the
/// selection.
pub struct ModelSelector<'a> {
    default_model: Option<ModelRef>,
    model_list: &'a [&'a ProviderModel],
    readonly: bool,
}

impl<'a> ModelSelector<'a> {
    /// Create a selector over the given model list, unselected, interactive.
    pub fn new(model_list: &'a [&'a ProviderModel]) -> Self {
        Self {
            default_model: None,
            model_list,
            readonly: false,
        }
    }

    /// Set the initially selected model.
    pub fn default_model(mut self, model: Option<ModelRef>) -> Self {
        self.default_model = model;
        self
    }

    /// Set the initial selection from a node's model reference. An empty
    /// reference (neither provider nor model id) maps to no selection.
    pub fn default_model_ref(self, model: &ModelRef) -> Self {
        let default = if model.is_empty() {
            None
        } else {
            Some(model.clone())
        };
        self.default_model(default)
    }

    /// Render as a static, non-interactive display.
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Show the selector. Returns the newly picked model, if any; always
    /// `None` in readonly mode.
    pub fn show(self, ui: &mut Ui) -> Option<ModelRef> {
        if self.readonly {
            self.show_readonly(ui);
            return None;
        }
        self.show_dropdown(ui)
    }

    fn selected_label(&self) -> String {
        match &self.default_model {
            Some(model) => {
                // Prefer the catalog label when the selection is known
                self.model_list
                    .iter()
                    .find(|m| m.provider == model.provider && m.model_id == model.model_id)
                    .map(|m| format!("{} / {}", m.provider, m.label))
                    .unwrap_or_else(|| model.to_string())
            }
            None => "No model selected".to_string(),
        }
    }

    fn show_readonly(&self, ui: &mut Ui) {
        egui::Frame::NONE
            .fill(colors::AFFORDANCE_BG)
            .corner_radius(4)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let text = if self.default_model.is_some() {
                    RichText::new(self.selected_label()).size(12.0)
                } else {
                    RichText::new(self.selected_label())
                        .color(colors::TEXT_WEAK)
                        .size(12.0)
                };
                ui.label(text);
            });
    }

    fn show_dropdown(&self, ui: &mut Ui) -> Option<ModelRef> {
        let mut picked = None;
        egui::ComboBox::from_id_salt("model_selector")
            .width(ui.available_width())
            .selected_text(self.selected_label())
            .show_ui(ui, |ui| {
                for entry in self.model_list {
                    let entry_ref = entry.model_ref();
                    let is_selected = self.default_model.as_ref() == Some(&entry_ref);
                    let label = format!("{} / {}", entry.provider, entry.label);
                    if ui.selectable_label(is_selected, label).clicked() && !is_selected {
                        picked = Some(entry_ref);
                    }
                }
            });
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_core::{ModelRegistry, ModelType};

    #[test]
    fn test_default_model_ref_maps_empty_to_none() {
        let registry = ModelRegistry::mock();
        let list = registry.text_generation_models();

        let selector = ModelSelector::new(&list).default_model_ref(&ModelRef::default());
        assert!(selector.default_model.is_none());

        let partial = ModelRef::new("openai", "");
        let selector = ModelSelector::new(&list).default_model_ref(&partial);
        assert_eq!(selector.default_model, Some(partial));
    }

    #[test]
    fn test_selected_label_prefers_catalog_entry() {
        let registry = ModelRegistry::mock();
        let list = registry.text_generation_models();

        let selector = ModelSelector::new(&list)
            .default_model(Some(ModelRef::new("anthropic", "claude-3-haiku")));
        assert_eq!(selector.selected_label(), "anthropic / claude-3-haiku");
    }

    #[test]
    fn test_selected_label_falls_back_to_raw_reference() {
        let registry = ModelRegistry::new(vec![ProviderModel::new(
            "openai",
            "gpt-4o",
            ModelType::TextGeneration,
        )]);
        let list = registry.text_generation_models();

        let selector = ModelSelector::new(&list)
            .default_model(Some(ModelRef::new("custom", "local-llm")));
        assert_eq!(selector.selected_label(), "custom/local-llm");
    }

    #[test]
    fn test_unselected_label() {
        let list: Vec<&ProviderModel> = Vec::new();
        let selector = ModelSelector::new(&list);
        assert_eq!(selector.selected_label(), "No model selected");
    }

    #[test]
    fn test_readonly_returns_no_pick() {
        let registry = ModelRegistry::mock();
        let list = registry.text_generation_models();

        let ctx = egui::Context::default();
        let mut result = Some(ModelRef::default());
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                result = ModelSelector::new(&list)
                    .default_model_ref(&ModelRef::new("openai", "gpt-4o"))
                    .readonly(true)
                    .show(ui);
            });
        });
        assert_eq!(result, None);
    }
}
