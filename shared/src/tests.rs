#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use serde_json::json;
    use crate::config::{AppConfig, BaseUrlSource, Endpoint};
    use crate::error::{ConfigError, FetchError};
    use crate::load::LoadState;
    use crate::models::*;
    use crate::scoring::{classify, Category, Scale, Severity};
    use crate::session::{gate, Access, Gate, SessionState, SessionUser};
    use crate::submission::{JoinPhase, SubmissionForm, SubmitPhase, WaitlistSignup, MISSING_EMAIL};
    use crate::tech_stack::TechStack;

    fn completed_job() -> ScoreJob {
        serde_json::from_value(json!({
            "jobId": "abc123",
            "gitUrl": "https://github.com/acme/rocket-launcher",
            "liveUrl": "https://rocket.acme.dev",
            "email": "dev@acme.dev",
            "status": "completed",
            "repoScore": 8,
            "repoReasoning": "Well structured",
            "codeScore": 9,
            "codeReasoning": "Idiomatic and tested",
            "readmeScore": 6,
            "readmeReasoning": "",
            "accessibilityScore": 91,
            "seoScore": 60,
            "bestPracticeScore": 85,
            "performanceScore": 72
        })).unwrap()
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn signed_in() -> SessionState {
        SessionState::Ready(Some(SessionUser { email: "dev@acme.dev".into(), is_signed_in: true }))
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify(9.0, Scale::OutOfTen), Severity::Good);
        assert_eq!(classify(8.5, Scale::OutOfTen), Severity::Good);
        assert_eq!(classify(7.0, Scale::OutOfTen), Severity::Caution);
        assert_eq!(classify(6.0, Scale::OutOfTen), Severity::Risk);
        assert_eq!(classify(85.0, Scale::OutOfHundred), Severity::Good);
        assert_eq!(classify(72.0, Scale::OutOfHundred), Severity::Caution);
        assert_eq!(classify(60.0, Scale::OutOfHundred), Severity::Risk);
    }

    #[test]
    fn test_ten_point_scores_are_scaled_before_classifying() {
        // 9 out of 10 is 90%, not 9%.
        assert_ne!(classify(9.0, Scale::OutOfTen), classify(9.0, Scale::OutOfHundred));
        assert_eq!(Scale::OutOfTen.normalize(9.0), 90.0);
        assert_eq!(Scale::OutOfHundred.normalize(140.0), 100.0);
        assert_eq!(Scale::OutOfTen.normalize(-1.0), 0.0);
    }

    #[test]
    fn test_in_progress_job_has_no_breakdown() {
        let job: ScoreJob = serde_json::from_value(json!({
            "jobId": "abc123",
            "gitUrl": "https://github.com/acme/rocket-launcher",
            "liveUrl": "https://rocket.acme.dev",
            "email": "dev@acme.dev",
            "status": "in_progress",
            "codeScore": 3
        })).unwrap();

        assert_eq!(job.status, JobStatus::InProgress);
        assert!(job.breakdown().is_none());
    }

    #[test]
    fn test_completed_job_breakdown() {
        let breakdown = completed_job().breakdown().unwrap();

        assert_eq!(breakdown.overall.category, Category::Overall);
        assert_eq!(breakdown.overall.severity(), Some(Severity::Caution));
        assert_eq!(breakdown.categories.len(), 6);

        let severity = |category: Category| breakdown.categories.iter()
            .find(|c| c.category == category)
            .and_then(|c| c.severity());

        assert_eq!(severity(Category::CodeQuality), Some(Severity::Good));
        assert_eq!(severity(Category::Readme), Some(Severity::Risk));
        assert_eq!(severity(Category::Accessibility), Some(Severity::Good));
        assert_eq!(severity(Category::Seo), Some(Severity::Risk));
        assert_eq!(severity(Category::BestPractices), Some(Severity::Good));
        assert_eq!(severity(Category::Performance), Some(Severity::Caution));

        let code = &breakdown.categories[0];
        assert_eq!(code.percent(), 90.0);
        assert_eq!(code.reasoning.as_deref(), Some("Idiomatic and tested"));
        assert_eq!(breakdown.categories[1].reasoning, None);
    }

    #[test]
    fn test_missing_score_in_completed_job() {
        let mut job = completed_job();
        job.seo_score = None;
        let breakdown = job.breakdown().unwrap();
        let seo = breakdown.categories.iter().find(|c| c.category == Category::Seo).unwrap();

        assert_eq!(seo.severity(), None);
        assert_eq!(seo.percent(), 0.0);
        assert_eq!(seo.display_value(), "n/a");
    }

    #[test]
    fn test_unknown_status_is_not_completed() {
        let job: ScoreJob = serde_json::from_value(json!({ "jobId": "x", "status": "queued" })).unwrap();
        assert_eq!(job.status, JobStatus::Unknown);
        assert!(job.breakdown().is_none());
    }

    #[test]
    fn test_repo_name() {
        assert_eq!(repo_name("https://github.com/acme/rocket-launcher"), "rocket-launcher");
        assert_eq!(repo_name("https://github.com/acme/rocket-launcher/"), "rocket-launcher");
        assert_eq!(repo_name("https://github.com/acme/rocket-launcher.git"), "rocket-launcher");
        assert_eq!(repo_name("rocket-launcher"), "rocket-launcher");
    }

    #[test]
    fn test_repo_name_ignores_query_and_fragment() {
        assert_eq!(repo_name("https://github.com/acme/tool?tab=readme-ov-file"), "tool");
        assert_eq!(repo_name("https://github.com/acme/tool#readme"), "tool");
        assert_eq!(repo_name("https://github.com/acme/tool.git?ref=main"), "tool");
        assert_eq!(repo_name("git@github.com:acme/tool.git"), "tool");
    }

    #[test]
    fn test_job_summaries() {
        let jobs: Vec<JobSummary> = serde_json::from_value(json!([
            {
                "email": "dev@acme.dev",
                "liveUrl": "https://rocket.acme.dev",
                "gitUrl": "https://github.com/acme/rocket-launcher",
                "jobId": "abc123",
                "score": { "status": "completed", "repoScore": 9 }
            },
            {
                "email": "dev@acme.dev",
                "liveUrl": "https://moon.acme.dev",
                "gitUrl": "https://github.com/acme/moon",
                "jobId": "def456",
                "score": { "status": "in_progress", "repoScore": 4 }
            },
            {
                "email": "dev@acme.dev",
                "liveUrl": "https://mars.acme.dev",
                "gitUrl": "https://github.com/acme/mars",
                "jobId": "ghi789"
            }
        ])).unwrap();

        assert_eq!(jobs[0].repo_name(), "rocket-launcher");
        assert_eq!(jobs[0].status(), JobStatus::Completed);
        assert_eq!(jobs[0].repo_score(), Some((9.0, Scale::OutOfTen)));
        assert_eq!(jobs[1].repo_score(), None);
        assert_eq!(jobs[2].status(), JobStatus::InProgress);
    }

    #[test]
    fn test_waitlist_total_count_is_kept_as_sent() {
        let response: WaitlistResponse = serde_json::from_value(json!({
            "total_count": 42,
            "data": [
                { "email_address": "a@acme.dev", "created_at": "2024-01-15T10:30:00Z", "position": 1 },
                { "email_address": "b@acme.dev", "created_at": "2024-01-16T08:00:00Z", "position": 12 }
            ]
        })).unwrap();

        assert_eq!(response.total_count, 42);
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].joined_label(), "Jan 15, 2024");
        assert_eq!(response.data[1].band(), PositionBand::Mid);
    }

    #[test]
    fn test_waitlist_created_at_fallback() {
        let entry = WaitlistEntry {
            email_address: "a@acme.dev".into(),
            created_at: Some("last tuesday".into()),
            position: 2,
        };
        assert_eq!(entry.joined_label(), "last tuesday");
    }

    #[test]
    fn test_waitlist_null_created_at() {
        let response: WaitlistResponse = serde_json::from_value(json!({
            "total_count": 1,
            "data": [{ "email_address": "a@b.c", "created_at": null, "position": 1 }]
        })).unwrap();

        assert_eq!(response.data[0].created_at, None);
        assert_eq!(response.data[0].joined_label(), "");
    }

    #[test]
    fn test_position_bands() {
        assert_eq!(PositionBand::for_position(1), PositionBand::Top);
        assert_eq!(PositionBand::for_position(3), PositionBand::Top);
        assert_eq!(PositionBand::for_position(4), PositionBand::Early);
        assert_eq!(PositionBand::for_position(10), PositionBand::Early);
        assert_eq!(PositionBand::for_position(50), PositionBand::Mid);
        assert_eq!(PositionBand::for_position(51), PositionBand::Later);
    }

    #[test]
    fn test_submission_requires_both_urls() {
        let mut form = SubmissionForm::default();
        form.repo_url = "https://github.com/acme/rocket-launcher".into();

        assert!(form.begin("dev@acme.dev").is_none());
        assert_eq!(form.phase(), &SubmitPhase::Idle);

        form.repo_url.clear();
        form.live_url = "https://rocket.acme.dev".into();
        assert!(form.begin("dev@acme.dev").is_none());
    }

    #[test]
    fn test_submission_success_captures_job_id() {
        let mut form = SubmissionForm::default();
        form.repo_url = " https://github.com/acme/rocket-launcher ".into();
        form.live_url = "https://rocket.acme.dev".into();

        let request = form.begin("dev@acme.dev").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "repoUrl": "https://github.com/acme/rocket-launcher",
                "liveUrl": "https://rocket.acme.dev",
                "email": "dev@acme.dev"
            })
        );
        assert!(form.is_submitting());

        // A second click while the first request is in flight sends nothing.
        assert!(form.begin("dev@acme.dev").is_none());

        form.succeed(Some("abc123".into()));
        assert_eq!(form.phase(), &SubmitPhase::Submitted { job_id: Some("abc123".into()) });
        assert!(form.begin("dev@acme.dev").is_none());
    }

    #[test]
    fn test_submission_needs_an_email() {
        let mut form = SubmissionForm::default();
        form.repo_url = "https://github.com/acme/rocket-launcher".into();
        form.live_url = "https://rocket.acme.dev".into();

        assert!(form.begin("  ").is_none());
        assert_eq!(form.phase(), &SubmitPhase::Idle);
        assert_eq!(form.error(), Some(MISSING_EMAIL));

        let user = SessionUser { email: " ".into(), is_signed_in: true };
        assert_eq!(user.lookup_email(), None);
        let user = SessionUser { email: "dev@acme.dev".into(), is_signed_in: true };
        assert_eq!(user.lookup_email(), Some("dev@acme.dev"));
    }

    #[test]
    fn test_submission_failure_returns_to_idle() {
        let mut form = SubmissionForm::default();
        form.repo_url = "https://github.com/acme/rocket-launcher".into();
        form.live_url = "https://rocket.acme.dev".into();

        form.begin("dev@acme.dev").unwrap();
        form.fail("Network error: offline");

        assert_eq!(form.phase(), &SubmitPhase::Idle);
        assert_eq!(form.error(), Some("Network error: offline"));
        assert!(form.begin("dev@acme.dev").is_some());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_submission_optional_fields() {
        let mut form = SubmissionForm::default();
        form.repo_url = "https://github.com/acme/rocket-launcher".into();
        form.live_url = "https://rocket.acme.dev".into();
        form.description = "Launch tracker".into();
        form.source_directory = " /src ".into();
        form.tech_stack.add("Rust");

        let request = form.begin("dev@acme.dev").unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["description"], "Launch tracker");
        assert_eq!(body["sourceDirectory"], "/src");
        assert_eq!(body["techStack"], json!(["Rust"]));

        form.succeed(Some(String::new()));
        assert_eq!(form.phase(), &SubmitPhase::Submitted { job_id: None });
    }

    #[test]
    fn test_submit_response_without_job_id() {
        let response: SubmitScoreResponse = serde_json::from_value(json!({ "message": "queued" })).unwrap();
        assert_eq!(response.job_id, None);

        let response: SubmitScoreResponse = serde_json::from_value(json!({ "jobId": "abc123", "status": "queued" })).unwrap();
        assert_eq!(response.job_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_waitlist_signup() {
        let mut signup = WaitlistSignup::default();
        assert!(signup.begin().is_none());

        signup.email = "dev@acme.dev".into();
        let request = signup.begin().unwrap();
        assert_eq!(request.email, "dev@acme.dev");
        assert!(signup.begin().is_none());

        signup.finish(Err("Email already registered".into()));
        assert_eq!(signup.phase(), &JoinPhase::Failed("Email already registered".into()));

        assert!(signup.begin().is_some());
        signup.finish(Ok(()));
        assert_eq!(signup.phase(), &JoinPhase::Joined);
        assert!(signup.begin().is_none());
    }

    #[test]
    fn test_tech_stack_suggestions() {
        let mut stack = TechStack::default();
        assert_eq!(stack.suggestions("script"), vec!["TypeScript", "JavaScript"]);

        assert!(stack.add("TypeScript"));
        assert!(!stack.add("TypeScript"));
        assert!(!stack.add("   "));
        assert_eq!(stack.suggestions("SCRIPT"), vec!["JavaScript"]);

        assert!(stack.add(" Elixir "));
        assert_eq!(stack.selected(), ["TypeScript".to_string(), "Elixir".to_string()]);

        stack.remove("TypeScript");
        assert_eq!(stack.suggestions("type"), vec!["TypeScript"]);
        assert_eq!(stack.suggestions("").len(), 25);
    }

    #[test]
    fn test_config_from_lookup() {
        let (config, source) = AppConfig::from_lookup(lookup(&[
            ("SCORING_API_BASE_URL", "https://api.acme.dev"),
            ("AUTH_PUBLISHABLE_KEY", "pk_test_123"),
        ])).unwrap();

        assert_eq!(source, BaseUrlSource::Primary);
        assert_eq!(config.scoring_api_base_url.as_str(), "https://api.acme.dev/");
        assert_eq!(config.auth_publishable_key.as_deref(), Some("pk_test_123"));
    }

    #[test]
    fn test_config_legacy_and_missing_keys() {
        let (config, source) = AppConfig::from_lookup(lookup(&[
            ("BACKEND_URL", "https://legacy.acme.dev"),
            ("AUTH_PUBLISHABLE_KEY", "  "),
        ])).unwrap();
        assert_eq!(source, BaseUrlSource::Legacy("BACKEND_URL"));
        assert_eq!(config.auth_publishable_key, None);

        assert_eq!(
            AppConfig::from_lookup(lookup(&[("SCORING_API_BASE_URL", "")])).unwrap_err(),
            ConfigError::Missing("SCORING_API_BASE_URL")
        );
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("SCORING_API_BASE_URL", "not a url")])),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            AppConfig::new("ftp://files.acme.dev"),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_endpoints() {
        let config = AppConfig::new("https://api.acme.dev").unwrap();
        assert_eq!(config.endpoint(&Endpoint::SubmitScore).as_str(), "https://api.acme.dev/hackathon/score");
        assert_eq!(config.endpoint(&Endpoint::Job("abc123")).as_str(), "https://api.acme.dev/hackathon/score/abc123");
        assert_eq!(config.endpoint(&Endpoint::Job("a/b c")).as_str(), "https://api.acme.dev/hackathon/score/a%2Fb%20c");

        let nested = AppConfig::new("https://acme.dev/api/").unwrap();
        assert_eq!(nested.endpoint(&Endpoint::Waitlist).as_str(), "https://acme.dev/api/hackathon/waitlist");
        assert_eq!(
            nested.endpoint(&Endpoint::JobsByEmail("dev@acme.dev")).as_str(),
            "https://acme.dev/api/hackathon/getall/dev@acme.dev"
        );
    }

    #[test]
    fn test_config_wire_format() {
        let config = AppConfig::new("https://api.acme.dev").unwrap().with_auth_key("pk_test_123");
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "scoringApiBaseUrl": "https://api.acme.dev/", "authPublishableKey": "pk_test_123" })
        );
    }

    #[test]
    fn test_route_gates() {
        let signed_out = SessionState::Ready(None);

        assert_eq!(gate(Access::Public, &SessionState::Loading), Gate::Render);
        assert_eq!(gate(Access::SignedInOnly, &SessionState::Loading), Gate::Pending);
        assert_eq!(gate(Access::SignedOutOnly, &signed_in()), Gate::RedirectToApp);
        assert_eq!(gate(Access::SignedOutOnly, &signed_out), Gate::Render);
        assert_eq!(gate(Access::SignedInOnly, &signed_in()), Gate::Render);
        assert_eq!(gate(Access::SignedInOnly, &signed_out), Gate::RedirectToSignIn);

        let lapsed = SessionState::Ready(Some(SessionUser { email: "dev@acme.dev".into(), is_signed_in: false }));
        assert_eq!(gate(Access::SignedInOnly, &lapsed), Gate::RedirectToSignIn);
    }

    #[test]
    fn test_fetch_error_messages() {
        let rejected = FetchError::Rejected { status: 409, message: "Email already registered".into() };
        assert_eq!(rejected.to_string(), "Email already registered");
        assert!(!rejected.is_not_found());
        assert!(FetchError::Status(404).is_not_found());
        assert_eq!(FetchError::Status(502).to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_load_state_keeps_failure_distinct() {
        assert_eq!(LoadState::<Vec<JobSummary>>::default(), LoadState::Loading);

        let empty: LoadState<Vec<JobSummary>> = LoadState::from_result(Ok::<_, FetchError>(vec![]));
        assert_eq!(empty, LoadState::Loaded(vec![]));

        let failed: LoadState<Vec<JobSummary>> = LoadState::from_result(Err(FetchError::Status(503)));
        assert_eq!(failed, LoadState::Failed("Request failed with status 503".into()));
    }
}
