use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::{AppConfig, LoadState, ScoreJob};
use crate::{
    api,
    scoped::{spawn_scoped, FetchGuard},
    score_cards::render_breakdown,
    styles::*,
    Route,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

pub enum Msg {
    Loaded(Result<ScoreJob, String>),
}

pub struct RepoDetail {
    state: LoadState<ScoreJob>,
    config: Option<Rc<AppConfig>>,
    pending: Option<FetchGuard>,
}

impl Component for RepoDetail {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.link()
            .context::<Rc<AppConfig>>(Callback::noop())
            .map(|(config, _)| config);

        let mut component = Self { state: LoadState::Loading, config, pending: None };
        component.load(ctx);
        component
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            self.load(ctx);
            true
        } else {
            false
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.pending = None;
                self.state = LoadState::from_result(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CONTAINER}>
                <Link<Route> to={Route::ScoredRepos} classes="text-blue-400 hover:underline">
                    {"← Back to repos"}
                </Link<Route>>
                <div class="mt-6">
                    {match &self.state {
                        LoadState::Loading => render_loading(),
                        LoadState::Failed(reason) => render_not_found(&ctx.props().id, reason),
                        LoadState::Loaded(job) => render_job(job),
                    }}
                </div>
            </div>
        }
    }
}

impl RepoDetail {
    fn load(&mut self, ctx: &Context<Self>) {
        self.state = LoadState::Loading;
        let Some(config) = self.config.clone() else {
            self.state = LoadState::Failed("configuration unavailable".into());
            return;
        };

        let id = ctx.props().id.clone();
        let link = ctx.link().clone();
        self.pending = Some(spawn_scoped(async move {
            let result = api::fetch_job(&config, &id).await.map_err(|e| {
                if e.is_not_found() { "no such job".to_string() } else { e.to_string() }
            });
            link.send_message(Msg::Loaded(result));
        }));
    }
}

fn render_loading() -> Html {
    html! {
        <div class="flex justify-center p-8">
            <div class="animate-pulse text-lg text-gray-400">{"Loading score report..."}</div>
        </div>
    }
}

fn render_not_found(id: &str, reason: &str) -> Html {
    html! {
        <div class={combine_classes(CARD_SECTION, "text-center space-y-2")}>
            <h2 class={HEADING_MD}>{"No data found"}</h2>
            <p class={TEXT_MUTED}>{format!("Job {} could not be loaded: {}", id, reason)}</p>
        </div>
    }
}

fn render_in_progress(job: &ScoreJob) -> Html {
    html! {
        <div class={combine_classes(CARD_SECTION, "text-center space-y-4")}>
            <div class="flex justify-center"><div class={SPINNER} /></div>
            <h2 class={HEADING_MD}>{"Analysis in progress"}</h2>
            <p class={TEXT_MUTED}>
                {format!("{} is still being scored. Reload this page in a few minutes to see the results.", job.repo_name())}
            </p>
        </div>
    }
}

pub(crate) fn render_job(job: &ScoreJob) -> Html {
    let Some(breakdown) = job.breakdown() else {
        return render_in_progress(job);
    };

    html! {
        <div class={SPACE_Y_LG}>
            <div class={FLEX_BETWEEN}>
                <div>
                    <h1 class={HEADING_MD}>{job.repo_name()}</h1>
                    <div class="flex flex-col text-sm space-y-1">
                        <a href={job.git_url.clone()} target="_blank" rel="noopener noreferrer"
                            class="text-blue-400 hover:underline break-all">{&job.git_url}</a>
                        if !job.live_url.is_empty() {
                            <a href={job.live_url.clone()} target="_blank" rel="noopener noreferrer"
                                class="text-blue-400 hover:underline break-all">{&job.live_url}</a>
                        }
                    </div>
                </div>
                <span class={combine_classes(BADGE, "bg-green-900 border-green-700 text-green-200")}>
                    {job.status.label()}
                </span>
            </div>
            {render_breakdown(&breakdown)}
        </div>
    }
}
