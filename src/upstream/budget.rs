use reqwest::Client;
use rocket::serde::json::Value;

use super::UpstreamError;

/// Stateless pass-through to the budget-data host. Per-province documents
/// live at `<base_url><province>.json`; the body is relayed verbatim once it
/// is known to be valid JSON.
pub struct BudgetClient {
    http: Client,
    base_url: String,
}

impl BudgetClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Fetch the budget document for a province. Every call re-fetches.
    pub async fn fetch(&self, province: &str) -> Result<Value, UpstreamError> {
        let url = budget_url(&self.base_url, province);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        // A body that is not valid JSON counts as an upstream failure.
        Ok(response.json().await?)
    }
}

/// The upstream URL for a province's budget document. Non-ASCII province
/// names are percent-encoded at the URL layer when the request is made.
fn budget_url(base_url: &str, province: &str) -> String {
    format!("{base_url}{province}.json")
}
