use gloo_net::http::Request;
use shared::{AppConfig, ErrorResponse, FetchError};

/// Where the host serves its own endpoints. Everything else comes from
/// [`AppConfig`], fetched once at startup.
pub struct Config {
    pub api_base_url: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api"
        }
    }
}

pub const CONFIG: Config = Config::new();

pub async fn fetch_app_config() -> Result<AppConfig, FetchError> {
    let response = Request::get(&format!("{}/config", CONFIG.api_base_url))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ErrorResponse>().await {
            Ok(body) => FetchError::Rejected { status, message: body.error },
            Err(_) => FetchError::Status(status),
        });
    }

    response.json::<AppConfig>().await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
