use rocket::{serde::json::Json, Route, State};

use crate::error::{Error, Result};
use crate::logging::RequestId;
use crate::model::api::Article;
use crate::upstream::ArticleClient;

pub fn routes() -> Vec<Route> {
    routes![get_articles]
}

#[get("/articles/<province>")]
async fn get_articles(
    province: &str,
    articles: &State<ArticleClient>,
    id: &RequestId,
) -> Result<Json<Vec<Article>>> {
    let articles = articles.fetch(province).await.map_err(|err| {
        error!("req{id} article query for '{province}' failed: {err}");
        Error::upstream("Failed to fetch articles")
    })?;
    Ok(Json(articles))
}
