use crate::models::{SubmitScoreRequest, JoinWaitlistRequest};
use crate::tech_stack::TechStack;

pub const MISSING_EMAIL: &str = "Your account has no e-mail address to send the report to.";

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Submitted { job_id: Option<String> },
}

/// State of the repository submission form.
///
/// `Idle -> Submitting -> Submitted`, and `Submitting -> Idle` when the request
/// fails. There is no way back out of `Submitted`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionForm {
    pub repo_url: String,
    pub live_url: String,
    pub description: String,
    pub source_directory: String,
    pub tech_stack: TechStack,
    phase: SubmitPhase,
    error: Option<String>,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self {
            repo_url: String::new(),
            live_url: String::new(),
            description: String::new(),
            source_directory: String::new(),
            tech_stack: TechStack::default(),
            phase: SubmitPhase::Idle,
            error: None,
        }
    }
}

impl SubmissionForm {
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_complete(&self) -> bool {
        !self.repo_url.trim().is_empty() && !self.live_url.trim().is_empty()
    }

    /// Moves to `Submitting` and hands back the request body. Nothing is sent
    /// unless the form is idle, both URLs are filled in and there is an
    /// address to file the job under.
    pub fn begin(&mut self, email: &str) -> Option<SubmitScoreRequest> {
        if self.phase != SubmitPhase::Idle || !self.is_complete() {
            return None;
        }
        let email = email.trim();
        if email.is_empty() {
            self.error = Some(MISSING_EMAIL.into());
            return None;
        }

        self.phase = SubmitPhase::Submitting;
        self.error = None;

        Some(SubmitScoreRequest {
            repo_url: self.repo_url.trim().to_string(),
            live_url: self.live_url.trim().to_string(),
            email: email.to_string(),
            description: non_blank(&self.description),
            source_directory: non_blank(&self.source_directory),
            tech_stack: self.tech_stack.selected().to_vec(),
        })
    }

    pub fn succeed(&mut self, job_id: Option<String>) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Submitted { job_id: job_id.filter(|id| !id.is_empty()) };
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Idle;
            self.error = Some(reason.into());
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinPhase {
    Idle,
    Submitting,
    Joined,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistSignup {
    pub email: String,
    phase: JoinPhase,
}

impl Default for WaitlistSignup {
    fn default() -> Self {
        Self { email: String::new(), phase: JoinPhase::Idle }
    }
}

impl WaitlistSignup {
    pub fn phase(&self) -> &JoinPhase {
        &self.phase
    }

    pub fn begin(&mut self) -> Option<JoinWaitlistRequest> {
        let email = self.email.trim();
        if matches!(self.phase, JoinPhase::Submitting | JoinPhase::Joined) || email.is_empty() {
            return None;
        }
        let request = JoinWaitlistRequest { email: email.to_string() };
        self.phase = JoinPhase::Submitting;
        Some(request)
    }

    pub fn finish(&mut self, result: Result<(), String>) {
        if self.phase != JoinPhase::Submitting {
            return;
        }
        self.phase = match result {
            Ok(()) => JoinPhase::Joined,
            Err(reason) => JoinPhase::Failed(reason),
        };
    }
}
