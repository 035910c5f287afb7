#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod upstream;

use crate::config::{ConfigFairing, DatabaseFairing, UpstreamFairing};
use crate::logging::LoggerFairing;
use crate::model::provinces::ProvinceNameMap;

/// Assemble the server: API routes under `/api`, the loaded-once province
/// name map, and the fairings that bring up config, database and upstream
/// clients at ignition.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .mount("/api", api::routes())
        .manage(ProvinceNameMap::load())
        .attach(ConfigFairing)
        .attach(DatabaseFairing)
        .attach(UpstreamFairing)
        .attach(LoggerFairing)
}
