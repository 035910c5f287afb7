use mongodb::Client as MongoClient;
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::mongodb::ensure_indexes_exist;
use crate::upstream::{ArticleClient, BudgetClient};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Deserialize)]
pub struct Config {
    // non-secrets
    budget_api_url: String,
    content_api_url: String,
    content_db_id: String,
    // secrets
    content_api_token: String,
}

impl Config {
    /// Base URL for per-province budget documents; the province name and a
    /// `.json` suffix are appended per request.
    pub fn budget_api_url(&self) -> &str {
        &self.budget_api_url
    }

    /// Base URL of the content database API.
    pub fn content_api_url(&self) -> &str {
        &self.content_api_url
    }

    /// ID of the article database within the content API.
    pub fn content_db_id(&self) -> &str {
        &self.content_db_id
    }

    /// Bearer token for the content database.
    pub fn content_api_token(&self) -> &str {
        &self.content_api_token
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// Configuration for the database.
#[derive(Deserialize)]
struct DbConfig {
    // secrets
    db_uri: String,
}

/// A fairing that loads the MongoDB config, connects to the database,
/// performs any setup necessary, and places both a `Client` and a `Database`
/// into managed state.
pub struct DatabaseFairing;

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "MongoDB",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<DbConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load database config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        info!("Loaded database config, connecting...");
        // Construct the connection.
        let client = match MongoClient::with_uri_str(config.db_uri).await {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to connect to database: {e}");
                return Err(rocket);
            }
        };
        let db = client.database(DATABASE_NAME);

        // Ensure the required indexes exist.
        if let Err(e) = ensure_indexes_exist(&db).await {
            error!("Failed to connect to database: {e}");
            return Err(rocket);
        }
        info!("...database connection online!");

        // Manage the state.
        rocket = rocket.manage(client).manage(db);
        Ok(rocket)
    }
}

const DATABASE_NAME: &str = "local_election_monitor";

/// A fairing that builds the shared outbound HTTP client and wraps it into
/// the budget and article upstream clients. Must be attached after
/// [`ConfigFairing`], whose state it reads.
pub struct UpstreamFairing;

#[rocket::async_trait]
impl Fairing for UpstreamFairing {
    fn info(&self) -> Info {
        Info {
            name: "Upstream clients",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let config = match rocket.state::<Config>() {
            Some(config) => config,
            None => {
                error!("Application config must be loaded before the upstream clients");
                return Err(rocket);
            }
        };

        let http = reqwest::Client::new();
        let budgets = BudgetClient::new(http.clone(), config.budget_api_url().to_string());
        let articles = ArticleClient::new(
            http,
            config.content_api_url().to_string(),
            config.content_db_id().to_string(),
            config.content_api_token().to_string(),
        );
        info!("Upstream clients ready");

        rocket = rocket.manage(budgets).manage(articles);
        Ok(rocket)
    }
}
