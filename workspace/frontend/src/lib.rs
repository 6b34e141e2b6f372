use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use common::toast::ToastProvider;
use components::dashboard::Dashboard;
use components::layout::layout::Layout;
use components::reports::Reports;
use components::settings::Settings;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/reports")]
    Reports,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            html! { <Layout title="Dashboard"><Dashboard /></Layout> }
        }
        Route::Reports => {
            html! { <Layout title="Reports"><Reports /></Layout> }
        }
        Route::Settings => {
            html! { <Layout title="Settings"><Settings /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== GameLounge Frontend Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!(
        "Dashboard refresh interval: {}ms",
        settings.refresh_interval_ms
    );

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
