use std::{cell::RefCell, rc::Rc};
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::{gate, Access, Gate, SessionState, SessionUser};
use crate::{clerk, scoped::spawn_scoped, styles::*, Route};

/// The seam between the app and whichever identity service is configured.
pub trait SessionProvider {
    fn current_user(&self) -> Option<SessionUser>;
    fn redirect_to_sign_in(&self);
    fn mount_user_button(&self, node: &Element);
    fn unmount_user_button(&self, node: &Element);
}

/// Used when no publishable key is configured: nobody is ever signed in.
pub struct NoSession;

impl SessionProvider for NoSession {
    fn current_user(&self) -> Option<SessionUser> {
        None
    }

    fn redirect_to_sign_in(&self) {
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            if location.pathname().map(|p| p != "/").unwrap_or(true) {
                let _ = location.set_href("/");
            }
        }
    }

    fn mount_user_button(&self, _node: &Element) {}

    fn unmount_user_button(&self, _node: &Element) {}
}

#[derive(Clone)]
pub struct Session {
    pub state: SessionState,
    provider: Rc<dyn SessionProvider>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Session {
    fn loading() -> Self {
        Self { state: SessionState::Loading, provider: Rc::new(NoSession) }
    }

    fn ready(provider: Rc<dyn SessionProvider>) -> Self {
        Self { state: SessionState::Ready(provider.current_user()), provider }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.state.user()
    }

    pub fn redirect_to_sign_in(&self) {
        self.provider.redirect_to_sign_in();
    }
}

#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::loading)
}

#[derive(Properties, PartialEq)]
pub struct SessionRootProps {
    pub publishable_key: Option<String>,
    pub children: Children,
}

#[function_component(SessionProviderRoot)]
pub fn session_provider_root(props: &SessionRootProps) -> Html {
    let session = use_state(Session::loading);

    {
        let session = session.clone();
        use_effect_with_deps(move |publishable_key: &Option<String>| {
            let subscription = Rc::new(RefCell::new(None::<clerk::Subscription>));
            let guard = match publishable_key.clone() {
                None => {
                    session.set(Session::ready(Rc::new(NoSession)));
                    None
                }
                Some(key) => {
                    let subscription = subscription.clone();
                    Some(spawn_scoped(async move {
                        match clerk::load(&key).await {
                            Ok(clerk) => {
                                let provider: Rc<dyn SessionProvider> = Rc::new(clerk.clone());
                                let on_change = {
                                    let session = session.clone();
                                    let provider = provider.clone();
                                    move || session.set(Session::ready(provider.clone()))
                                };
                                *subscription.borrow_mut() = Some(clerk.subscribe(on_change));
                                session.set(Session::ready(provider));
                            }
                            Err(e) => {
                                web_sys::console::error_2(&"Identity service unavailable:".into(), &e);
                                session.set(Session::ready(Rc::new(NoSession)));
                            }
                        }
                    }))
                }
            };

            move || {
                drop(guard);
                subscription.borrow_mut().take();
            }
        }, props.publishable_key.clone());
    }

    html! {
        <ContextProvider<Session> context={(*session).clone()}>
            { for props.children.iter() }
        </ContextProvider<Session>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChildrenProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SignedIn)]
pub fn signed_in(props: &ChildrenProps) -> Html {
    let session = use_session();
    if session.state.is_signed_in() {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {}
    }
}

#[function_component(SignedOut)]
pub fn signed_out(props: &ChildrenProps) -> Html {
    let session = use_session();
    match session.state {
        SessionState::Ready(_) if !session.state.is_signed_in() => html! { <>{ for props.children.iter() }</> },
        _ => html! {},
    }
}

#[function_component(RedirectToSignIn)]
pub fn redirect_to_sign_in() -> Html {
    let session = use_session();

    {
        let session = session.clone();
        use_effect_with_deps(move |_| {
            session.redirect_to_sign_in();
            || ()
        }, ());
    }

    html! {
        <div class={combine_classes(CONTAINER_SM, "py-16 text-center")}>
            <p class={TEXT_MUTED}>{"Redirecting to sign in..."}</p>
        </div>
    }
}

#[function_component(UserButton)]
pub fn user_button() -> Html {
    let session = use_session();
    let node = use_node_ref();

    {
        let node = node.clone();
        let provider = session.provider.clone();
        use_effect_with_deps(move |_| {
            let mounted = node.cast::<Element>();
            if let Some(el) = &mounted {
                provider.mount_user_button(el);
            }
            move || {
                if let Some(el) = mounted {
                    provider.unmount_user_button(&el);
                }
            }
        }, session.state.clone());
    }

    html! { <div ref={node} class="flex items-center" /> }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub access: Access,
    #[prop_or_default]
    pub children: Children,
}

/// Renders children only when the session matches the route's access rule.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let session = use_session();

    match gate(props.access, &session.state) {
        Gate::Pending => html! {
            <div class={combine_classes(CONTAINER_SM, "py-16 flex justify-center")}>
                <div class={SPINNER} />
            </div>
        },
        Gate::Render => html! { <>{ for props.children.iter() }</> },
        Gate::RedirectToApp => html! { <Redirect<Route> to={Route::GetScore} /> },
        Gate::RedirectToSignIn => html! { <RedirectToSignIn /> },
    }
}
