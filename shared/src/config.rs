use serde::{Serialize, Deserialize};
use url::Url;
use crate::error::ConfigError;

pub const SCORING_API_BASE_URL: &str = "SCORING_API_BASE_URL";
pub const AUTH_PUBLISHABLE_KEY: &str = "AUTH_PUBLISHABLE_KEY";

/// Older deployments used one of these for the same service.
pub const LEGACY_BASE_URL_KEYS: [&str; 2] = ["WAITLIST_URL", "BACKEND_URL"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub scoring_api_base_url: Url,
    #[serde(default)]
    pub auth_publishable_key: Option<String>,
}

/// Where the base URL came from, so the host can warn about legacy names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Primary,
    Legacy(&'static str),
}

impl AppConfig {
    pub fn new(scoring_api_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            scoring_api_base_url: parse_base_url(scoring_api_base_url)?,
            auth_publishable_key: None,
        })
    }

    pub fn with_auth_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.auth_publishable_key = (!key.trim().is_empty()).then_some(key);
        self
    }

    pub fn from_lookup<F>(lookup: F) -> Result<(Self, BaseUrlSource), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (raw, source) = match present(SCORING_API_BASE_URL) {
            Some(v) => (v, BaseUrlSource::Primary),
            None => LEGACY_BASE_URL_KEYS.iter()
                .find_map(|key| present(*key).map(|v| (v, BaseUrlSource::Legacy(*key))))
                .ok_or(ConfigError::Missing(SCORING_API_BASE_URL))?,
        };

        let config = Self {
            scoring_api_base_url: parse_base_url(&raw)?,
            auth_publishable_key: present(AUTH_PUBLISHABLE_KEY),
        };
        Ok((config, source))
    }

    pub fn endpoint(&self, endpoint: &Endpoint<'_>) -> Url {
        let mut url = self.scoring_api_base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(endpoint.segments());
        }
        url
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        key: SCORING_API_BASE_URL,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        other => Err(ConfigError::Invalid {
            key: SCORING_API_BASE_URL,
            reason: format!("unsupported scheme {}", other),
        }),
    }
}

/// Routes of the scoring service, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Waitlist,
    SubmitScore,
    Job(&'a str),
    JobsByEmail(&'a str),
}

impl<'a> Endpoint<'a> {
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Endpoint::Waitlist => vec!["hackathon", "waitlist"],
            Endpoint::SubmitScore => vec!["hackathon", "score"],
            Endpoint::Job(id) => vec!["hackathon", "score", id],
            Endpoint::JobsByEmail(email) => vec!["hackathon", "getall", email],
        }
    }
}
