use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::{AppConfig, JoinPhase, WaitlistSignup};
use crate::{api, scoped::{spawn_scoped, FetchGuard}, styles::*};

#[function_component(JoinWaitlist)]
pub fn join_waitlist() -> Html {
    let config = use_context::<Rc<AppConfig>>();
    let signup = use_state(WaitlistSignup::default);
    let pending = use_mut_ref(|| None::<FetchGuard>);

    let oninput = {
        let signup = signup.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*signup).clone();
            next.email = input.value();
            signup.set(next);
        })
    };

    let onsubmit = {
        let signup = signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(config) = config.clone() else { return };

            let mut next = (*signup).clone();
            let Some(request) = next.begin() else { return };
            signup.set(next.clone());

            let signup = signup.clone();
            *pending.borrow_mut() = Some(spawn_scoped(async move {
                let result = api::join_waitlist(&config, &request).await
                    .map_err(|e| e.to_string());
                next.finish(result);
                signup.set(next);
            }));
        })
    };

    if *signup.phase() == JoinPhase::Joined {
        return html! {
            <div class={alert_style("success")}>
                <p class="font-semibold">{"You're on the list!"}</p>
                <p class="text-sm">{"We'll e-mail you as soon as your spot opens up."}</p>
            </div>
        };
    }

    let submitting = *signup.phase() == JoinPhase::Submitting;

    html! {
        <form {onsubmit} class={SPACE_Y_BASE}>
            {if let JoinPhase::Failed(reason) = signup.phase() {
                html! { <div class={alert_style("error")}>{reason}</div> }
            } else {
                html! {}
            }}
            <div class="flex flex-col sm:flex-row gap-3">
                <input
                    type="email"
                    required=true
                    placeholder="you@example.com"
                    class={INPUT_BASE}
                    value={signup.email.clone()}
                    disabled={submitting}
                    {oninput}
                />
                <button type="submit" class={combine_classes(&button_primary(false), "rounded-full whitespace-nowrap")} disabled={submitting}>
                    { if submitting { "Joining..." } else { "Join Waitlist" } }
                </button>
            </div>
        </form>
    }
}
