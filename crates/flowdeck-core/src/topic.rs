//! Classification topics
//!
//! A classifier node carries an ordered list of topics. Insertion order is
//! display order; nothing re-sorts the list.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A named classification category with descriptive text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Identity used for stable keying in the UI
    pub id: String,
    /// Display label (panel title)
    pub name: String,
    /// Descriptive body text (panel content)
    pub topic: String,
}

impl Topic {
    /// Create a topic with an explicit id.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            topic: topic.into(),
        }
    }

    /// Create the synthetic "Topic{index}" placeholder used by the manual
    /// test affordance.
    ///
    /// The id is the current wall-clock time in milliseconds. Two calls
    /// within the same millisecond produce the same id; callers that need
    /// hard uniqueness must supply their own ids via [`Topic::new`].
    pub fn synthetic(index: usize) -> Self {
        let label = format!("Topic{index}");
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            name: label.clone(),
            topic: label,
        }
    }
}
