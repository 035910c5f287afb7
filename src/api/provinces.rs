use std::collections::BTreeMap;

use rocket::{serde::json::Json, Route, State};

use crate::model::provinces::ProvinceNameMap;

pub fn routes() -> Vec<Route> {
    routes![get_provinces]
}

/// The full geometry-label → canonical-name mapping, so clients do not need
/// to bundle their own copy of the table.
#[get("/provinces")]
fn get_provinces(provinces: &State<ProvinceNameMap>) -> Json<BTreeMap<&str, &str>> {
    Json(provinces.as_sorted_map())
}
