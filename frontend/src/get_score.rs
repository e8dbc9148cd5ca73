use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{context::ContextHandle, prelude::*};
use yew_router::prelude::*;
use shared::{AppConfig, SubmissionForm, SubmitPhase, TechStack};
use crate::{
    api,
    scoped::{spawn_scoped, FetchGuard},
    session::Session,
    styles::*,
    tech_stack_picker::TechStackPicker,
    Route,
};

#[derive(Clone, Copy)]
pub enum Field {
    RepoUrl,
    LiveUrl,
    Description,
    SourceDirectory,
}

pub enum Msg {
    UpdateField(Field, String),
    UpdateStack(TechStack),
    SessionChanged(Session),
    Submit,
    SubmitResult(Result<Option<String>, String>),
}

pub struct GetScore {
    form: SubmissionForm,
    config: Option<Rc<AppConfig>>,
    session: Option<Session>,
    _session_handle: Option<ContextHandle<Session>>,
    pending: Option<FetchGuard>,
}

impl Component for GetScore {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.link()
            .context::<Rc<AppConfig>>(Callback::noop())
            .map(|(config, _)| config);
        let (session, session_handle) = match ctx.link().context::<Session>(ctx.link().callback(Msg::SessionChanged)) {
            Some((session, handle)) => (Some(session), Some(handle)),
            None => (None, None),
        };

        Self {
            form: SubmissionForm::default(),
            config,
            session,
            _session_handle: session_handle,
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateField(field, value) => {
                match field {
                    Field::RepoUrl => self.form.repo_url = value,
                    Field::LiveUrl => self.form.live_url = value,
                    Field::Description => self.form.description = value,
                    Field::SourceDirectory => self.form.source_directory = value,
                }
                true
            }
            Msg::UpdateStack(stack) => {
                self.form.tech_stack = stack;
                true
            }
            Msg::SessionChanged(session) => {
                self.session = Some(session);
                false
            }
            Msg::Submit => {
                let Some(config) = self.config.clone() else { return false };
                let email = self.session.as_ref()
                    .and_then(|s| s.user())
                    .and_then(|u| u.lookup_email())
                    .unwrap_or_default()
                    .to_string();
                let Some(request) = self.form.begin(&email) else { return true };

                let link = ctx.link().clone();
                self.pending = Some(spawn_scoped(async move {
                    let result = api::submit_score(&config, &request).await
                        .map_err(|e| e.to_string());
                    link.send_message(Msg::SubmitResult(result));
                }));
                true
            }
            Msg::SubmitResult(result) => {
                self.pending = None;
                match result {
                    Ok(job_id) => self.form.succeed(job_id),
                    Err(reason) => self.form.fail(reason),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CARD}>
                <h1 class={HEADING_LG}>{"Get Your Repository Score"}</h1>
                <p class={combine_classes(TEXT_MUTED, "text-center mb-6")}>
                    {"Submit a GitHub repository and its live deployment. We'll analyze both and e-mail you the report."}
                </p>
                {render_outcome(&self.form)}
                {if matches!(self.form.phase(), SubmitPhase::Submitted { .. }) {
                    html! {}
                } else {
                    self.render_form(ctx)
                }}
            </div>
        }
    }
}

impl GetScore {
    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let submitting = self.form.is_submitting();

        html! {
            <form {onsubmit} class={SPACE_Y_LG}>
                {self.render_url_input(ctx, Field::RepoUrl, "GitHub repository URL", "https://github.com/you/project", &self.form.repo_url)}
                {self.render_url_input(ctx, Field::LiveUrl, "Live URL", "https://project.example.com", &self.form.live_url)}

                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>{"Source directory (optional)"}</label>
                    <input type="text" class={INPUT_BASE}
                        value={self.form.source_directory.clone()}
                        disabled={submitting}
                        placeholder="e.g. /src"
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateField(Field::SourceDirectory, input.value())
                        })}
                    />
                </div>

                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>{"Description (optional)"}</label>
                    <textarea class={INPUT_BASE} rows="4"
                        value={self.form.description.clone()}
                        disabled={submitting}
                        placeholder="What does the project do?"
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::UpdateField(Field::Description, input.value())
                        })}
                    />
                </div>

                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>{"Tech stack (optional)"}</label>
                    <TechStackPicker
                        stack={self.form.tech_stack.clone()}
                        on_change={ctx.link().callback(Msg::UpdateStack)}
                        disabled={submitting}
                    />
                </div>

                <button type="submit" class={button_primary(true)} disabled={submitting}>
                    {if submitting { "Submitting..." } else { "Get Score" }}
                </button>
            </form>
        }
    }

    fn render_url_input(&self, ctx: &Context<Self>, field: Field, label: &str, placeholder: &'static str, value: &str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateField(field, input.value())
        });

        html! {
            <div class={SPACE_Y_BASE}>
                <label class={TEXT_LABEL}>{label}</label>
                <input type="url" required=true class={INPUT_BASE}
                    value={value.to_string()}
                    disabled={self.form.is_submitting()}
                    {placeholder} {oninput} />
            </div>
        }
    }
}

/// The error banner while the form is open, or the job link once it is sent.
pub(crate) fn render_outcome(form: &SubmissionForm) -> Html {
    match (form.phase(), form.error()) {
        (SubmitPhase::Submitted { job_id }, _) => render_submitted(job_id.as_deref()),
        (_, Some(error)) => html! { <div class={alert_style("error")}>{error}</div> },
        _ => html! {},
    }
}

fn render_submitted(job_id: Option<&str>) -> Html {
    html! {
        <div class={combine_classes(SPACE_Y_BASE, "text-center")}>
            <div class={alert_style("success")}>
                <p class="font-semibold">{"Repository submitted!"}</p>
                <p class="text-sm">{"Analysis is underway. Results usually land within a few minutes."}</p>
            </div>
            {match job_id {
                Some(id) => html! {
                    <Link<Route> to={Route::RepoDetail { id: id.to_string() }} classes="text-blue-400 hover:underline">
                        {format!("View job {}", id)}
                    </Link<Route>>
                },
                None => html! {
                    <Link<Route> to={Route::ScoredRepos} classes="text-blue-400 hover:underline">
                        {"View your scored repositories"}
                    </Link<Route>>
                },
            }}
        </div>
    }
}
