use backend::{build_rocket, error::StartupError, spa::extract_static};
use include_dir::{include_dir, Dir};
use shared::{config::BaseUrlSource, AppConfig};
use shuttle_runtime::{CustomError, SecretStore};
use tracing::{info, warn};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

fn load_config(secret_store: &SecretStore) -> Result<AppConfig, StartupError> {
    let (config, source) = AppConfig::from_lookup(|key| secret_store.get(key))?;

    if let BaseUrlSource::Legacy(key) = source {
        warn!("{} is deprecated, set SCORING_API_BASE_URL instead", key);
    }
    if config.auth_publishable_key.is_none() {
        warn!("AUTH_PUBLISHABLE_KEY not set - every visitor will be treated as signed out");
    }
    info!("🔗 Scoring API at {}", config.scoring_api_base_url);
    Ok(config)
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting Uplix web host");

    let config = load_config(&secret_store).map_err(CustomError::new)?;
    let static_dir = extract_static(&STATIC_DIR).map_err(CustomError::new)?;

    Ok(build_rocket(config, static_dir).into())
}
