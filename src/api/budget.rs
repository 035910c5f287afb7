use rocket::{
    serde::json::{Json, Value},
    Route, State,
};

use crate::error::{Error, Result};
use crate::logging::RequestId;
use crate::upstream::BudgetClient;

pub fn routes() -> Vec<Route> {
    routes![get_budget]
}

/// Relay the upstream budget document for a province, unmodified. Any
/// upstream failure is a 500; it is never masked as an empty success.
#[get("/budget/<province>")]
async fn get_budget(
    province: &str,
    budgets: &State<BudgetClient>,
    id: &RequestId,
) -> Result<Json<Value>> {
    let document = budgets.fetch(province).await.map_err(|err| {
        error!("req{id} budget fetch for '{province}' failed: {err}");
        Error::upstream("Failed to fetch budget data")
    })?;
    Ok(Json(document))
}
