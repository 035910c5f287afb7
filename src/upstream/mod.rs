//! Clients for the two external HTTP dependencies: the budget-data host and
//! the content database. One shared [`reqwest::Client`] backs both. Calls
//! are never retried or cached; a failure is reported as-is and mapped to
//! the error envelope at the gateway.

mod articles;
mod budget;

pub use articles::ArticleClient;
pub use budget::BudgetClient;

use thiserror::Error;

/// Failure talking to an upstream service. Network errors, non-2xx statuses
/// and undecodable bodies all come through [`reqwest::Error`]; structurally
/// unexpected bodies are reported separately.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    MalformedBody(&'static str),
}
