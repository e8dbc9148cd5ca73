pub mod catchers;
pub mod cors;
pub mod error;
pub mod routes;
pub mod spa;

use std::path::PathBuf;
use rocket::{catchers, routes, Build, Rocket};
use shared::AppConfig;

use crate::{
    catchers::{bad_request, internal_error, not_found},
    cors::CORS,
    routes::{all_options, get_config, health, AppState},
    spa::{spa_handler, StaticDir},
};

/// Assembles the host: `/api` for configuration and probes, everything else
/// falls through to the single-page app.
pub fn build_rocket(config: AppConfig, static_dir: PathBuf) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .manage(AppState::new(config))
        .manage(StaticDir(static_dir))
        .mount("/api", routes![get_config, health, all_options])
        .mount("/", routes![spa_handler])
        .register("/", catchers![bad_request, not_found, internal_error])
}

#[cfg(test)]
mod tests;
