use mongodb::bson::doc;
use rocket::{futures::TryStreamExt, serde::json::Json, Route};

use crate::error::{Error, Result};
use crate::model::{db::Election, mongodb::Coll};

pub fn routes() -> Vec<Route> {
    routes![get_elections, get_election]
}

#[get("/elections")]
async fn get_elections(elections: Coll<Election>) -> Result<Json<Vec<Election>>> {
    Ok(Json(elections.find(None, None).await?.try_collect().await?))
}

/// Exact-match lookup by canonical province name. Never falls back to a
/// default or empty result.
#[get("/elections/<province>")]
async fn get_election(province: &str, elections: Coll<Election>) -> Result<Json<Election>> {
    elections
        .find_one(doc! { "province": province }, None)
        .await?
        .map(Json)
        .ok_or_else(|| Error::not_found("Province not found"))
}
