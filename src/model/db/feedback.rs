use std::collections::HashMap;

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// A crowd-sourced feedback entry, as stored in the database. Never deleted
/// or edited after creation, except `user_needs` which only grows by append.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Canonical Thai province name.
    pub province: String,
    #[serde(default = "anonymous")]
    pub name: String,
    /// Free-text feedback. Empty on entries created by a user-needs append
    /// before any feedback was submitted.
    #[serde(default)]
    pub feedback: String,
    /// Free-text need items, one atomic phrase each. No dedup at storage
    /// time; frequency counting happens at read time.
    #[serde(default)]
    pub user_needs: Vec<String>,
    pub timestamp: DateTime,
}

fn anonymous() -> String {
    "Anonymous".to_string()
}

impl Feedback {
    /// A fresh entry with the current timestamp and no need items yet.
    pub fn new(province: String, name: Option<String>, feedback: String) -> Self {
        Self {
            province,
            name: name.unwrap_or_else(anonymous),
            feedback,
            user_needs: Vec::new(),
            timestamp: DateTime::now(),
        }
    }
}

/// Word-frequency counts over stored need items. Each item is one atomic
/// key; no tokenisation, case-folding or whitespace normalisation is applied,
/// so textually distinct items count separately. Callers depend on these
/// exact semantics.
pub fn need_counts<'a>(items: impl IntoIterator<Item = &'a str>) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.to_string()).or_insert(0) += 1;
    }
    counts
}
