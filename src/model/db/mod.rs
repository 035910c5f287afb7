//! DB-compatible (e.g. de/serialisable) types.
//!
//! The types in this module are serialised the way the documents are stored,
//! e.g. camelCase field names and MongoDB datetimes.

mod election;
pub use election::{Candidate, Election};

mod feedback;
pub use feedback::{need_counts, Feedback};
