//! Workflow node panels.

pub mod classifier_panel;
