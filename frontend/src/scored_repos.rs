use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::{classify, AppConfig, JobStatus, JobSummary, LoadState};
use crate::{api, scoped::spawn_scoped, session::use_session, styles::*, Route};

const NO_EMAIL: &str = "Your account has no e-mail address, so no jobs can be looked up.";

#[derive(Clone, Default, PartialEq)]
pub struct ReposState {
    jobs: LoadState<Vec<JobSummary>>,
}

pub enum Msg {
    Fetch,
    JobsReceived(Result<Vec<JobSummary>, String>),
}

impl Reducible for ReposState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::Fetch => next.jobs = LoadState::Loading,
            Msg::JobsReceived(result) => next.jobs = LoadState::from_result(result),
        }
        Rc::new(next)
    }
}

#[function_component]
pub fn ScoredRepos() -> Html {
    let state = use_reducer(ReposState::default);
    let config = use_context::<Rc<AppConfig>>();
    let session = use_session();
    // Outer `None` while nobody is signed in, inner `None` for an account without an address.
    let email = session.user().map(|u| u.lookup_email().map(str::to_string));

    use_effect_with_deps({
        let state = state.clone();
        move |(config, email): &(Option<Rc<AppConfig>>, Option<Option<String>>)| {
            let guard = match (config.clone(), email.clone()) {
                (Some(config), Some(Some(email))) => {
                    state.dispatch(Msg::Fetch);
                    Some(spawn_scoped(async move {
                        let result = api::fetch_jobs(&config, &email).await.map_err(|e| e.to_string());
                        state.dispatch(Msg::JobsReceived(result));
                    }))
                }
                (_, Some(None)) => {
                    state.dispatch(Msg::JobsReceived(Err(NO_EMAIL.into())));
                    None
                }
                _ => None,
            };
            move || drop(guard)
        }
    }, (config, email));

    html! {
        <div class={CONTAINER}>
            <div class={combine_classes(FLEX_BETWEEN, "mb-6")}>
                <h1 class={combine_classes(HEADING_MD, "mb-0")}>{"Scored Repositories"}</h1>
                <Link<Route> to={Route::GetScore} classes={classes!(button_primary(false))}>
                    {"Score another repository"}
                </Link<Route>>
            </div>

            {render_jobs(&state.jobs)}
        </div>
    }
}

/// Body of the list page for each load state.
pub(crate) fn render_jobs(jobs: &LoadState<Vec<JobSummary>>) -> Html {
    match jobs {
        LoadState::Loading => html! {
            <div class="flex justify-center p-8">
                <div class={combine_classes("animate-pulse", TEXT_MUTED)}>{"Loading scored repositories..."}</div>
            </div>
        },
        LoadState::Failed(reason) => html! {
            <div class={alert_style("error")}>
                {format!("Could not load your repositories: {}", reason)}
            </div>
        },
        LoadState::Loaded(jobs) if jobs.is_empty() => html! {
            <div class={combine_classes(CARD_SECTION, "text-center")}>
                <p class="text-gray-300">{"You have no scored repositories yet."}</p>
            </div>
        },
        LoadState::Loaded(jobs) => html! {
            <div class={GRID_CARDS}>
                {jobs.iter().map(render_job_card).collect::<Html>()}
            </div>
        },
    }
}

fn render_job_card(job: &JobSummary) -> Html {
    let status = job.status();
    let status_class = match status {
        JobStatus::Completed => "text-green-400",
        _ => "text-yellow-400",
    };

    html! {
        <Link<Route> to={Route::RepoDetail { id: job.job_id.clone() }}
            classes={classes!(CARD_HOVER_SCALE, "hover:shadow-lg", "transition-shadow")}>
            <div class="h-full flex flex-col">
                <h2 class={combine_classes(HEADING_SM, "break-words")} title={job.git_url.clone()}>
                    {job.repo_name()}
                </h2>
                <p class={combine_classes(TEXT_MUTED, "mb-4 break-all")}>{&job.live_url}</p>
                <div class={combine_classes(FLEX_BETWEEN, "mt-auto")}>
                    <span class={combine_classes("font-medium", status_class)}>{status.label()}</span>
                    {match job.repo_score() {
                        Some((score, scale)) => html! {
                            <span class={combine_classes("text-2xl font-bold", severity_text(Some(classify(score, scale))))}>
                                {format!("{}/{}", score, scale.max())}
                            </span>
                        },
                        None => html! { <span class={TEXT_MUTED}>{"n/a"}</span> },
                    }}
                </div>
            </div>
        </Link<Route>>
    }
}
