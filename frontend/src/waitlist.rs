use std::rc::Rc;
use yew::prelude::*;
use shared::{AppConfig, LoadState, WaitlistEntry, WaitlistResponse};
use crate::{api, scoped::spawn_scoped, styles::*};

#[function_component]
pub fn Waitlist() -> Html {
    let state = use_state(LoadState::<WaitlistResponse>::default);
    let config = use_context::<Rc<AppConfig>>();

    use_effect_with_deps({
        let state = state.clone();
        move |config: &Option<Rc<AppConfig>>| {
            let guard = config.clone().map(|config| {
                state.set(LoadState::Loading);
                spawn_scoped(async move {
                    let result = api::fetch_waitlist(&config).await;
                    state.set(LoadState::from_result(result));
                })
            });
            move || drop(guard)
        }
    }, config);

    let body = match &*state {
        LoadState::Loading => html! {
            <div class="flex justify-center p-8">
                <div class={combine_classes("animate-pulse", TEXT_MUTED)}>{"Loading waitlist..."}</div>
            </div>
        },
        LoadState::Failed(reason) => html! {
            <div class={alert_style("error")}>{format!("Could not load the waitlist: {}", reason)}</div>
        },
        LoadState::Loaded(waitlist) => render_waitlist(waitlist),
    };

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"Waitlist"}</h1>
            {body}
        </div>
    }
}

pub(crate) fn render_waitlist(waitlist: &WaitlistResponse) -> Html {
    html! {
        <div class={SPACE_Y_LG}>
            <div class={combine_classes(CARD_SECTION, "text-center")}>
                <div class={combine_classes("text-4xl font-extrabold", GRADIENT_TEXT)}>{waitlist.total_count.to_string()}</div>
                <div class={TEXT_MUTED}>{"developers waiting"}</div>
            </div>
            if waitlist.data.is_empty() {
                <p class={combine_classes(TEXT_MUTED, "text-center")}>{"Nobody has signed up yet."}</p>
            } else {
                <div class={GRID_CARDS}>
                    {for waitlist.data.iter().map(render_entry)}
                </div>
            }
        </div>
    }
}

fn render_entry(entry: &WaitlistEntry) -> Html {
    html! {
        <div class={combine_classes(CARD_SECTION, SPACE_Y_BASE)}>
            <div class={FLEX_BETWEEN}>
                <span class={band_badge(entry.band())}>{format!("#{}", entry.position)}</span>
                <span class={TEXT_MUTED}>{entry.joined_label()}</span>
            </div>
            <p class="text-gray-100 break-all">{&entry.email_address}</p>
        </div>
    }
}
