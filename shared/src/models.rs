use serde::{Serialize, Deserialize};
use url::Url;
use time::{OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};
use crate::scoring::{Category, CategoryScore, ScoreBreakdown, Scale};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::InProgress => "In progress",
            JobStatus::Completed => "Completed",
            JobStatus::Unknown => "Pending",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreJob {
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub git_url: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub email: String,
    pub status: JobStatus,
    #[serde(default)]
    pub repo_score: Option<f64>,
    #[serde(default)]
    pub repo_reasoning: Option<String>,
    #[serde(default)]
    pub code_score: Option<f64>,
    #[serde(default)]
    pub code_reasoning: Option<String>,
    #[serde(default)]
    pub readme_score: Option<f64>,
    #[serde(default)]
    pub readme_reasoning: Option<String>,
    #[serde(default)]
    pub accessibility_score: Option<f64>,
    #[serde(default)]
    pub seo_score: Option<f64>,
    #[serde(default)]
    pub best_practice_score: Option<f64>,
    #[serde(default)]
    pub performance_score: Option<f64>,
}

impl ScoreJob {
    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }

    pub fn repo_name(&self) -> String {
        repo_name(&self.git_url)
    }

    /// Score cards for a finished job. Jobs that are still running have no
    /// final values, so nothing is returned for them.
    pub fn breakdown(&self) -> Option<ScoreBreakdown> {
        if !self.is_completed() {
            return None;
        }

        let card = |category: Category, value: Option<f64>, reasoning: &Option<String>| CategoryScore {
            category,
            value,
            reasoning: reasoning.clone().filter(|r| !r.trim().is_empty()),
        };

        Some(ScoreBreakdown {
            overall: CategoryScore {
                category: Category::Overall,
                value: self.repo_score,
                reasoning: self.repo_reasoning.clone().filter(|r| !r.trim().is_empty()),
            },
            categories: [
                card(Category::CodeQuality, self.code_score, &self.code_reasoning),
                card(Category::Readme, self.readme_score, &self.readme_reasoning),
                card(Category::Accessibility, self.accessibility_score, &None),
                card(Category::Seo, self.seo_score, &None),
                card(Category::BestPractices, self.best_practice_score, &None),
                card(Category::Performance, self.performance_score, &None),
            ],
        })
    }
}

/// One row of `GET /hackathon/getall/:email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub git_url: String,
    pub job_id: String,
    #[serde(default)]
    pub score: Option<ScoreJob>,
}

impl JobSummary {
    pub fn repo_name(&self) -> String {
        repo_name(&self.git_url)
    }

    pub fn status(&self) -> JobStatus {
        self.score.as_ref().map_or(JobStatus::InProgress, |s| s.status)
    }

    /// Overall repository score, only once the job has completed.
    pub fn repo_score(&self) -> Option<(f64, Scale)> {
        self.score.as_ref()
            .filter(|s| s.is_completed())
            .and_then(|s| s.repo_score)
            .map(|v| (v, Category::Overall.scale()))
    }
}

/// Last path segment of a repository URL, e.g. `https://github.com/acme/tool` -> `tool`.
/// Query and fragment are ignored. Strings that are not URLs are split on `/`.
pub fn repo_name(git_url: &str) -> String {
    let trimmed = git_url.trim();
    let last = match Url::parse(trimmed) {
        Ok(url) => url.path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last().map(str::to_string))
            .unwrap_or_else(|| trimmed.to_string()),
        Err(_) => trimmed.trim_end_matches('/')
            .rsplit(['/', ':'])
            .next()
            .unwrap_or(trimmed)
            .to_string(),
    };
    match last.strip_suffix(".git") {
        Some(name) => name.to_string(),
        None => last,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    pub repo_url: String,
    pub live_url: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_directory: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreResponse {
    #[serde(default)]
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinWaitlistRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaitlistEntry {
    pub email_address: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub position: u32,
}

impl WaitlistEntry {
    pub fn band(&self) -> PositionBand {
        PositionBand::for_position(self.position)
    }

    /// `created_at` as a calendar date, or the raw value when it is not RFC 3339.
    pub fn joined_label(&self) -> String {
        let Some(created_at) = &self.created_at else { return String::new() };
        let format = format_description!("[month repr:short] [day], [year]");
        OffsetDateTime::parse(created_at, &Rfc3339)
            .ok()
            .and_then(|at| at.format(&format).ok())
            .unwrap_or_else(|| created_at.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaitlistResponse {
    pub total_count: u64,
    #[serde(default)]
    pub data: Vec<WaitlistEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionBand {
    Top,
    Early,
    Mid,
    Later,
}

impl PositionBand {
    pub fn for_position(position: u32) -> Self {
        match position {
            0..=3 => PositionBand::Top,
            4..=10 => PositionBand::Early,
            11..=50 => PositionBand::Mid,
            _ => PositionBand::Later,
        }
    }
}
