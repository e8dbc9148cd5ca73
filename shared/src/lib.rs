pub mod config;
pub mod error;
pub mod load;
pub mod models;
pub mod scoring;
pub mod session;
pub mod submission;
pub mod tech_stack;

pub use config::{AppConfig, Endpoint};
pub use error::{ConfigError, ErrorResponse, FetchError, Result};
pub use load::LoadState;
pub use models::*;
pub use scoring::{classify, Category, CategoryScore, Scale, ScoreBreakdown, Severity};
pub use session::{gate, Access, Gate, SessionState, SessionUser};
pub use submission::{JoinPhase, SubmissionForm, SubmitPhase, WaitlistSignup};
pub use tech_stack::{TechStack, TECH_STACK_OPTIONS};

#[cfg(test)]
mod tests;
