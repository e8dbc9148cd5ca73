use rocket::{State, get, http::Status, serde::json::Json};
use serde::Serialize;
use tracing::debug;
use shared::AppConfig;

pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// The one configuration object the browser app boots from.
#[get("/config")]
pub async fn get_config(state: &State<AppState>) -> Json<AppConfig> {
    debug!("Serving client configuration");
    Json(state.config.clone())
}

#[get("/health")]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
