//! API-compatible types.
//!
//! Request bodies and response shapes, serialised the way the HTTP surface
//! speaks them (camelCase fields, RFC 3339 datetimes).

mod article;
pub use article::Article;

mod feedback;
pub use feedback::{FeedbackView, NeedCounts, SubmitFeedback, SubmitUserNeeds};
