//! Theme system
//!
//! Dark and light modes for the workflow canvas, plus the shared color
//! constants the custom widgets paint with.

use egui::{Color32, Style, Visuals};
use serde::{Deserialize, Serialize};

/// Available UI themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Dark theme (default for the builder canvas)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Selected theme
    pub theme: Theme,
    /// Base font size in points
    pub font_size: f32,
    /// Base item spacing in points
    pub spacing: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: 13.0,
            spacing: 4.0,
        }
    }
}

/// Shared color constants for the builder palette.
pub mod colors {
    use egui::Color32;

    pub const ACCENT: Color32 = Color32::from_rgb(64, 128, 255); // Primary blue
    pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 40); // Info panel fill
    pub const PANEL_BG_LIGHT: Color32 = Color32::from_rgb(243, 244, 246); // Info panel fill (light)
    pub const NODE_BG: Color32 = Color32::from_rgb(24, 26, 31); // Node body
    pub const STROKE: Color32 = Color32::from_rgb(70, 74, 84); // Borders
    pub const TEXT_WEAK: Color32 = Color32::from_rgb(150, 154, 162); // Secondary text
    pub const AFFORDANCE_BG: Color32 = Color32::from_rgb(45, 48, 56); // "Add" row fill
}

impl ThemeConfig {
    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        style.visuals = match self.theme {
            Theme::Dark => Self::dark_visuals(),
            Theme::Light => Visuals::light(),
        };
        style.spacing.item_spacing = egui::vec2(self.spacing, self.spacing);
        ctx.set_style(style);
    }

    fn dark_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = colors::NODE_BG;
        visuals.window_fill = colors::NODE_BG;
        visuals.widgets.noninteractive.bg_stroke.color = colors::STROKE;
        visuals.selection.bg_fill = colors::ACCENT.linear_multiply(0.4);
        visuals.hyperlink_color = colors::ACCENT;
        visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_config_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.font_size, 13.0);
        assert_eq!(config.spacing, 4.0);
    }

    #[test]
    fn test_theme_serde_roundtrip() {
        let config = ThemeConfig {
            theme: Theme::Light,
            font_size: 15.0,
            spacing: 6.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_apply_sets_spacing() {
        let ctx = egui::Context::default();
        ThemeConfig::default().apply(&ctx);
        let spacing = ctx.style().spacing.item_spacing;
        assert_eq!(spacing, egui::vec2(4.0, 4.0));
    }
}
