use yew::prelude::*;
use yew_router::prelude::*;
use crate::{
    session::{use_session, SignedIn, SignedOut, UserButton},
    styles::*,
    Route,
};

const NAV_SHELL: &str = "bg-gray-900/90 backdrop-blur border-b border-gray-800 shadow-lg fixed top-0 w-full z-50";
const LOGO: &str = "text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent";

#[function_component(SignInButton)]
fn sign_in_button() -> Html {
    let session = use_session();
    let onclick = Callback::from(move |_: MouseEvent| session.redirect_to_sign_in());

    html! {
        <button {onclick} class={combine_classes(&button_primary(false), "rounded-full")}>
            {"Sign in"}
        </button>
    }
}

/// Top bar of the public landing page.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class={NAV_SHELL}>
            <div class={combine_classes("container mx-auto px-6 py-4", FLEX_BETWEEN)}>
                <Link<Route> to={Route::Home} classes={LOGO}>{"Uplix"}</Link<Route>>
                <div class="hidden md:flex items-center space-x-6">
                    <a href="#home" class={NAV_LINK}>{"Home"}</a>
                    <a href="#how-it-works" class={NAV_LINK}>{"How It Works"}</a>
                    <a href="#features" class={NAV_LINK}>{"Features"}</a>
                </div>
                <SignedOut>
                    <SignInButton />
                </SignedOut>
                <SignedIn>
                    <Link<Route> to={Route::GetScore} classes={classes!(button_primary(false))}>
                        {"Open app"}
                    </Link<Route>>
                </SignedIn>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    to: Route,
    label: &'static str,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let current_route = use_route::<Route>();

    html! {
        <Link<Route> to={props.to.clone()} classes={classes!(
            NAV_LINK,
            if current_route.as_ref() == Some(&props.to) { NAV_LINK_ACTIVE } else { "" }
        )}>
            {props.label}
        </Link<Route>>
    }
}

#[function_component(AppNavbar)]
pub fn app_navbar() -> Html {
    html! {
        <nav class={NAV_SHELL}>
            <div class={combine_classes("container mx-auto px-6 py-4", FLEX_BETWEEN)}>
                <div class="flex items-center gap-4">
                    <Link<Route> to={Route::Home} classes={classes!(combine_classes(TEXT_MUTED, "hover:text-gray-200"))}>
                        {"← Back to Home"}
                    </Link<Route>>
                    <div class="h-6 w-px bg-gray-700" />
                    <span class={LOGO}>{"Uplix"}</span>
                </div>
                <div class="hidden md:flex items-center space-x-2">
                    <NavItem to={Route::GetScore} label="Get Score" />
                    <NavItem to={Route::ScoredRepos} label="Scored Repos" />
                    <NavItem to={Route::Waitlist} label="Waitlist" />
                </div>
                <SignedIn>
                    <UserButton />
                </SignedIn>
                <SignedOut>
                    <SignInButton />
                </SignedOut>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Authenticated shell: app navbar over the routed page.
#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    html! {
        <div class={BG_PAGE}>
            <AppNavbar />
            <div class="pt-16 pb-16">
                { for props.children.iter() }
            </div>
        </div>
    }
}
