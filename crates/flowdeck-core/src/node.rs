//! Question-classifier node data
//!
//! The node's configuration as shown by the workflow canvas: which model it
//! routes through and the ordered list of topics it classifies into. The UI
//! never mutates this directly; it emits actions and the owner of this struct
//! applies them here.

use crate::model::ModelRef;
use crate::topic::Topic;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration of a single question-classifier node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierNodeData {
    /// The model this node is configured to classify with
    pub model: ModelRef,
    /// Ordered topic list; insertion order is display order
    pub topics: Vec<Topic>,
}

impl ClassifierNodeData {
    /// Create node data with an explicit model and topic list.
    pub fn new(model: ModelRef, topics: Vec<Topic>) -> Self {
        Self { model, topics }
    }

    /// Display/mock data used until real node configuration is wired in.
    ///
    /// Stand-in for the persisted node configuration, which is owned by the
    /// surrounding workflow system and has no contract here yet.
    pub fn mock() -> Self {
        Self {
            model: ModelRef::new("openai", "gpt-4o-mini"),
            topics: vec![
                Topic::new("1", "Customer Service", "After-sales and account questions"),
                Topic::new("2", "Technical Support", "Bug reports and integration issues"),
            ],
        }
    }

    /// Append one synthetic topic for manual testing.
    ///
    /// The new topic is named `Topic{n}` where `n` is the list length before
    /// insertion, so repeated calls from a 2-topic list yield Topic2,
    /// Topic3, Topic4, ...
    pub fn add_test_topic(&mut self) -> Topic {
        let topic = Topic::synthetic(self.topics.len());
        debug!(id = %topic.id, name = %topic.name, "appending test topic");
        self.topics.push(topic.clone());
        topic
    }

    /// Point the node at a different model.
    pub fn set_model(&mut self, model: ModelRef) {
        debug!(model = %model, "classifier model changed");
        self.model = model;
    }
}
