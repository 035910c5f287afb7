use reqwest::Client;
use rocket::serde::json::{json, Value};

use super::UpstreamError;
use crate::model::api::Article;

/// API version header required by the content database.
const CONTENT_API_VERSION: &str = "2022-06-28";

/// Client for the content database of curated articles. Pages are filtered
/// by an exact match on their `Province` property and reshaped into the
/// fixed [`Article`] schema.
pub struct ArticleClient {
    http: Client,
    api_url: String,
    database_id: String,
    token: String,
}

impl ArticleClient {
    pub fn new(http: Client, api_url: String, database_id: String, token: String) -> Self {
        Self {
            http,
            api_url,
            database_id,
            token,
        }
    }

    /// Fetch every article page for a province. All-or-nothing: a query
    /// failure fails the whole call, while per-page gaps become defaults
    /// during reshaping.
    pub async fn fetch(&self, province: &str) -> Result<Vec<Article>, UpstreamError> {
        let url = format!("{}/databases/{}/query", self.api_url, self.database_id);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", CONTENT_API_VERSION)
            .json(&query_body(province))
            .send()
            .await?
            .error_for_status()?;

        let document: Value = response.json().await?;
        let results = document
            .get("results")
            .and_then(Value::as_array)
            .ok_or(UpstreamError::MalformedBody("missing `results` array"))?;

        Ok(results.iter().map(Article::from_page).collect())
    }
}

/// Query filter: exact match on the `Province` select property.
fn query_body(province: &str) -> Value {
    json!({
        "filter": {
            "property": "Province",
            "select": { "equals": province }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_exact_match_on_province() {
        let body = query_body("เชียงใหม่");
        assert_eq!(body["filter"]["property"], "Province");
        assert_eq!(body["filter"]["select"]["equals"], "เชียงใหม่");
    }

    #[test]
    fn every_page_maps_to_an_article() {
        let results = json!([
            { "properties": { "URL": { "url": "https://example.com/a" } } },
            { "properties": {} },
        ]);
        let articles: Vec<Article> = results
            .as_array()
            .unwrap()
            .iter()
            .map(Article::from_page)
            .collect();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].url, "https://example.com/a");
        assert_eq!(articles[1].url, "#");
    }
}
