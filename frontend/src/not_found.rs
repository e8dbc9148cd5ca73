use yew::prelude::*;
use yew_router::prelude::*;
use crate::{styles::*, Route};

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class={combine_classes(BG_PAGE, "flex items-center justify-center")}>
            <div class="text-center space-y-4">
                <h1 class={combine_classes("text-7xl font-extrabold", GRADIENT_TEXT)}>{"404"}</h1>
                <p class="text-xl text-gray-300">{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home} classes="text-blue-400 hover:underline">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
