use rocket::serde::json::Value;
use serde::Serialize;

/// A curated article, reshaped from one page of the content database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub thumbnail: String,
}

impl Article {
    /// Map a page's named properties into the fixed article shape. Every
    /// missing or malformed field independently falls back to a safe
    /// default, so a call never partially fails.
    pub fn from_page(page: &Value) -> Self {
        let text = |pointer: &str| {
            page.pointer(pointer)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            title: text("/properties/article-title/title/0/plain_text")
                .unwrap_or_else(|| "Untitled".to_string()),
            summary: text("/properties/Summary/rich_text/0/plain_text")
                .unwrap_or_else(|| "No summary available".to_string()),
            url: text("/properties/URL/url").unwrap_or_else(|| "#".to_string()),
            thumbnail: text("/properties/Thumbnail/url").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::json;

    use super::*;

    fn page() -> Value {
        json!({
            "object": "page",
            "properties": {
                "article-title": {
                    "title": [{ "plain_text": "งบประมาณปี 2567" }]
                },
                "Summary": {
                    "rich_text": [{ "plain_text": "สรุปงบประมาณจังหวัด" }]
                },
                "URL": { "url": "https://example.com/budget-2567" },
                "Thumbnail": { "url": "https://example.com/thumb.png" },
                "Province": { "select": { "name": "เชียงใหม่" } }
            }
        })
    }

    #[test]
    fn maps_all_properties() {
        let article = Article::from_page(&page());
        assert_eq!(
            article,
            Article {
                title: "งบประมาณปี 2567".to_string(),
                summary: "สรุปงบประมาณจังหวัด".to_string(),
                url: "https://example.com/budget-2567".to_string(),
                thumbnail: "https://example.com/thumb.png".to_string(),
            }
        );
    }

    #[test]
    fn each_missing_field_gets_its_default() {
        let article = Article::from_page(&json!({ "properties": {} }));
        assert_eq!(article.title, "Untitled");
        assert_eq!(article.summary, "No summary available");
        assert_eq!(article.url, "#");
        assert_eq!(article.thumbnail, "");
    }

    #[test]
    fn malformed_fields_fall_back_independently() {
        // Title array empty, URL the wrong type; the rest intact.
        let mut page = page();
        page["properties"]["article-title"]["title"] = json!([]);
        page["properties"]["URL"]["url"] = json!(42);

        let article = Article::from_page(&page);
        assert_eq!(article.title, "Untitled");
        assert_eq!(article.url, "#");
        assert_eq!(article.summary, "สรุปงบประมาณจังหวัด");
        assert_eq!(article.thumbnail, "https://example.com/thumb.png");
    }

    #[test]
    fn pages_without_properties_still_map() {
        let article = Article::from_page(&json!({}));
        assert_eq!(article.title, "Untitled");
    }
}
