use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use shared::{
    error::ServiceMessage, AppConfig, Endpoint, FetchError, JobSummary, JoinWaitlistRequest,
    ScoreJob, SubmitScoreRequest, SubmitScoreResponse, WaitlistResponse,
};

fn log_failure(what: &str, error: &FetchError) {
    web_sys::console::warn_1(&format!("{} failed: {}", what, error).into());
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response.json::<T>().await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Sends a JSON body. A 2xx answer counts as success whatever its body looks
/// like, so the raw text is returned for the caller to pick fields from.
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<String, FetchError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response.text().await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

async fn rejection(response: Response) -> FetchError {
    let status = response.status();
    match response.json::<ServiceMessage>().await {
        Ok(body) if !body.message.trim().is_empty() => FetchError::Rejected { status, message: body.message },
        _ => FetchError::Status(status),
    }
}

pub async fn fetch_jobs(config: &AppConfig, email: &str) -> Result<Vec<JobSummary>, FetchError> {
    let url = config.endpoint(&Endpoint::JobsByEmail(email));
    let result = get_json(url.as_str()).await;
    if let Err(e) = &result {
        log_failure("Loading scored repositories", e);
    }
    result
}

pub async fn fetch_job(config: &AppConfig, job_id: &str) -> Result<ScoreJob, FetchError> {
    let url = config.endpoint(&Endpoint::Job(job_id));
    let result = get_json(url.as_str()).await;
    if let Err(e) = &result {
        log_failure(&format!("Loading job {}", job_id), e);
    }
    result
}

pub async fn fetch_waitlist(config: &AppConfig) -> Result<WaitlistResponse, FetchError> {
    let url = config.endpoint(&Endpoint::Waitlist);
    let result = get_json(url.as_str()).await;
    if let Err(e) = &result {
        log_failure("Loading the waitlist", e);
    }
    result
}

/// Reads the job id out of a successful submission. Any JSON object is
/// accepted, with or without `jobId`; anything else is a decode failure.
pub fn job_id_from_body(body: &str) -> Result<Option<String>, FetchError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value::<SubmitScoreResponse>(value)
            .map(|r| r.job_id)
            .map_err(|e| FetchError::Decode(e.to_string())),
        Ok(other) => Err(FetchError::Decode(format!("expected a JSON object, got {}", other))),
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}

/// Returns the job id when the service sent one back.
pub async fn submit_score(config: &AppConfig, request: &SubmitScoreRequest) -> Result<Option<String>, FetchError> {
    let url = config.endpoint(&Endpoint::SubmitScore);
    let result = match post_json(url.as_str(), request).await {
        Ok(body) => job_id_from_body(&body),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        log_failure("Submitting repository", e);
    }
    result
}

pub async fn join_waitlist(config: &AppConfig, request: &JoinWaitlistRequest) -> Result<(), FetchError> {
    let url = config.endpoint(&Endpoint::Waitlist);
    post_json(url.as_str(), request).await
        .map(|_| ())
        .map_err(|e| {
            log_failure("Joining the waitlist", &e);
            e
        })
}
