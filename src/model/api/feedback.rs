use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::db::Feedback;

/// Body of `POST /api/feedback`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedback {
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub feedback: String,
}

impl SubmitFeedback {
    /// Validate presence of the required fields and build the entry to
    /// persist. Length limits are the caller's concern; only presence is
    /// checked here. The text is stored verbatim, untrimmed.
    pub fn into_feedback(self) -> Result<Feedback> {
        if self.province.trim().is_empty() || self.feedback.trim().is_empty() {
            return Err(Error::validation("Province and feedback are required"));
        }
        Ok(Feedback::new(self.province, self.name, self.feedback))
    }
}

/// Body of `POST /api/user-needs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitUserNeeds {
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub user_needs: Vec<String>,
}

impl SubmitUserNeeds {
    pub fn validate(&self) -> Result<()> {
        if self.province.trim().is_empty() || self.user_needs.is_empty() {
            return Err(Error::validation("Invalid input data"));
        }
        Ok(())
    }
}

/// A feedback entry as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackView {
    pub province: String,
    pub name: String,
    pub feedback: String,
    pub user_needs: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<Feedback> for FeedbackView {
    fn from(entry: Feedback) -> Self {
        Self {
            province: entry.province,
            name: entry.name,
            feedback: entry.feedback,
            user_needs: entry.user_needs,
            timestamp: entry.timestamp.to_chrono(),
        }
    }
}

/// Response of `GET /api/user-needs/<province>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedCounts {
    pub user_needs: HashMap<String, u64>,
}
