use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::{Access, AppConfig, LoadState};

mod api;
mod clerk;
mod config;
mod get_score;
mod home;
mod join_waitlist;
mod navbar;
mod not_found;
mod repo_detail;
mod scoped;
mod score_cards;
mod scored_repos;
mod session;
mod styles;
mod tech_stack_picker;
mod waitlist;


use crate::{
    get_score::GetScore,
    home::Home,
    navbar::AppLayout,
    not_found::NotFound,
    repo_detail::RepoDetail,
    scoped::spawn_scoped,
    scored_repos::ScoredRepos,
    session::{Guard, SessionProviderRoot},
    styles::*,
    waitlist::Waitlist,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/waitlist")] Waitlist,
    #[at("/get-score")] GetScore,
    #[at("/scored-repos")] ScoredRepos,
    #[at("/scored-repos/:id")] RepoDetail { id: String },
    #[not_found]
    #[at("/404")] NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <Guard access={Access::SignedOutOnly}><Home /></Guard>
        },
        Route::Waitlist => html! {
            <Guard access={Access::Public}><AppLayout><Waitlist /></AppLayout></Guard>
        },
        Route::GetScore => html! {
            <Guard access={Access::SignedInOnly}><AppLayout><GetScore /></AppLayout></Guard>
        },
        Route::ScoredRepos => html! {
            <Guard access={Access::SignedInOnly}><AppLayout><ScoredRepos /></AppLayout></Guard>
        },
        Route::RepoDetail { id } => html! {
            <Guard access={Access::SignedInOnly}><AppLayout><RepoDetail {id} /></AppLayout></Guard>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let boot = use_state(LoadState::<Rc<AppConfig>>::default);

    {
        let boot = boot.clone();
        use_effect_with_deps(move |_| {
            let guard = spawn_scoped(async move {
                let result = config::fetch_app_config().await.map(Rc::new);
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("Loading app configuration failed: {}", e).into());
                }
                boot.set(LoadState::from_result(result));
            });
            move || drop(guard)
        }, ());
    }

    match &*boot {
        LoadState::Loading => html! {
            <div class={combine_classes(BG_PAGE, "flex items-center justify-center")}>
                <div class={SPINNER} />
            </div>
        },
        LoadState::Failed(reason) => html! {
            <div class={combine_classes(BG_PAGE, "flex items-center justify-center")}>
                <div class={CARD}>
                    <h1 class={HEADING_MD}>{"Configuration unavailable"}</h1>
                    <p class={TEXT_MUTED}>{reason}</p>
                </div>
            </div>
        },
        LoadState::Loaded(app_config) => html! {
            <ContextProvider<Rc<AppConfig>> context={app_config.clone()}>
                <SessionProviderRoot publishable_key={app_config.auth_publishable_key.clone()}>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </SessionProviderRoot>
            </ContextProvider<Rc<AppConfig>>>
        },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
