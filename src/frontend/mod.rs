mod console;
mod guide;
mod home;
mod hooks;
mod navbar;
mod widgets;

use guide::Guide;
use home::Home;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/guide")]
    Guide,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Home /> },
        Route::Guide => html! { <Guide /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="site-shell">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console::init_debug_from_url();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
