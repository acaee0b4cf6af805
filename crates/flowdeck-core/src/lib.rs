//! FlowDeck Core - Workflow node data model
//!
//! This crate defines the data structures behind the workflow builder UI:
//! - Model references and the provider/model catalog
//! - Classifier topics and the question-classifier node data
//!
//! No UI code lives here. Panels in `flowdeck-ui` read these types and report
//! mutations back to whoever owns them; nothing in this crate touches egui.

#![warn(missing_docs)]

pub mod model;
pub mod node;
pub mod registry;
pub mod topic;

pub use model::{ModelRef, ModelType, ProviderModel};
pub use node::ClassifierNodeData;
pub use registry::{ModelRegistry, RegistryError};
pub use topic::Topic;
