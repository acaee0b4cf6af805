//! FlowDeck UI - egui panels and widgets
//!
//! This crate provides the user interface layer:
//! - Reusable widgets (info panel, model selector)
//! - The question-classifier node panel
//! - Theme and user configuration
//!
//! Panels never own workflow state. They render borrowed data and push
//! [`UIAction`]s into a queue; the application applies those actions to the
//! state it owns. That keeps every mutation on a single update channel
//! instead of trapping edits in leaf-local state.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod core;
#[allow(missing_docs)]
pub mod panels;
#[allow(missing_docs)]
pub mod widgets;

pub mod config;

pub use crate::core::theme::{self, Theme, ThemeConfig};
pub use crate::panels::classifier_panel::ClassifierNodePanel;
pub use crate::widgets::ModelSelector;
pub use config::UserConfig;

use flowdeck_core::ModelRef;

/// UI actions that can be triggered by the user interface.
///
/// Panels emit these; the owner of the node data applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIAction {
    /// Append one synthetic topic to the classifier node (manual testing)
    AddTestTopic,
    /// Point the classifier node at a different model
    SetModel(ModelRef),
}
