use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use rocket::{futures::TryStreamExt, http::Status, serde::json::Json, Route};

use crate::error::{Error, Result};
use crate::model::{
    api::{FeedbackView, NeedCounts, SubmitFeedback, SubmitUserNeeds},
    db::{need_counts, Feedback},
    mongodb::Coll,
};

pub fn routes() -> Vec<Route> {
    routes![submit_feedback, get_feedback, submit_user_needs, get_user_needs]
}

#[post("/feedback", data = "<submission>", format = "json")]
async fn submit_feedback(
    submission: Json<SubmitFeedback>,
    feedbacks: Coll<Feedback>,
) -> Result<(Status, Json<FeedbackView>)> {
    let entry = submission.into_inner().into_feedback()?;
    feedbacks.insert_one(&entry, None).await?;
    Ok((Status::Created, Json(entry.into())))
}

/// Feedback texts for a province in creation order (the collection's natural
/// insertion order).
#[get("/feedback/<province>")]
async fn get_feedback(province: &str, feedbacks: Coll<Feedback>) -> Result<Json<Vec<String>>> {
    let texts = feedbacks
        .find(doc! { "province": province }, None)
        .await?
        .map_ok(|entry| entry.feedback)
        .try_collect()
        .await?;
    Ok(Json(texts))
}

/// Append need items to the province's feedback entry, creating it if the
/// province has none yet. The single find-and-modify with upsert keeps
/// concurrent first submissions from racing into two documents.
#[post("/user-needs", data = "<submission>", format = "json")]
async fn submit_user_needs(
    submission: Json<SubmitUserNeeds>,
    feedbacks: Coll<Feedback>,
) -> Result<(Status, Json<FeedbackView>)> {
    let submission = submission.into_inner();
    submission.validate()?;

    let update = doc! {
        "$push": { "userNeeds": { "$each": submission.user_needs } },
        "$setOnInsert": {
            "name": "Anonymous",
            "feedback": "",
            "timestamp": mongodb::bson::DateTime::now(),
        },
    };
    let options = FindOneAndUpdateOptions::builder()
        .upsert(true)
        .return_document(ReturnDocument::After)
        .build();
    let entry = feedbacks
        .find_one_and_update(doc! { "province": &submission.province }, update, options)
        .await?
        .ok_or_else(|| Error::internal("Upsert returned no document"))?;

    Ok((Status::Created, Json(entry.into())))
}

/// Word-frequency counts over every stored need item for the province.
/// A province with no feedback at all is a 404; entries that exist but hold
/// no items yield an empty mapping.
#[get("/user-needs/<province>")]
async fn get_user_needs(province: &str, feedbacks: Coll<Feedback>) -> Result<Json<NeedCounts>> {
    let entries: Vec<Feedback> = feedbacks
        .find(doc! { "province": province }, None)
        .await?
        .try_collect()
        .await?;
    if entries.is_empty() {
        return Err(Error::not_found("No user needs found"));
    }

    let user_needs = need_counts(
        entries
            .iter()
            .flat_map(|entry| entry.user_needs.iter())
            .map(String::as_str),
    );
    Ok(Json(NeedCounts { user_needs }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_is_push_with_insert_defaults() {
        let update = doc! {
            "$push": { "userNeeds": { "$each": vec!["roads".to_string()] } },
            "$setOnInsert": {
                "name": "Anonymous",
                "feedback": "",
                "timestamp": mongodb::bson::DateTime::now(),
            },
        };
        // $push appends without dedup; $setOnInsert fills the remaining
        // required fields only when the upsert creates the document.
        let push = update.get_document("$push").unwrap();
        assert!(push.get_document("userNeeds").unwrap().contains_key("$each"));
        let on_insert = update.get_document("$setOnInsert").unwrap();
        assert_eq!(on_insert.get_str("name").unwrap(), "Anonymous");
        assert_eq!(on_insert.get_str("feedback").unwrap(), "");
        assert!(on_insert.contains_key("timestamp"));
        assert!(!on_insert.contains_key("userNeeds"));
    }
}
