use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod components;
mod config;
mod glass;
mod pages;
mod utils;

use pages::download::DownloadPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Download,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Download => html! { <DownloadPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Download} /> },
    }
}

const SHELL_CSS: &str = r#"
    .app-shell {
        position: relative;
        display: flex;
        justify-content: center;
        width: 100%;
        height: 100vh;
        height: 100dvh;
        overflow: hidden;
        background: #09090b;
    }
    .phone-frame {
        position: relative;
        width: 100%;
        max-width: 420px;
        height: 100%;
        overflow: hidden;
        background: #000;
        border-left: 1px solid rgba(255, 255, 255, 0.05);
        border-right: 1px solid rgba(255, 255, 255, 0.05);
        box-shadow: 0 0 100px rgba(0, 0, 0, 0.8);
    }
"#;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <style>{SHELL_CSS}</style>
            <div class="app-shell">
                <main class="phone-frame">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("starting, {} videos in feed", config::get().videos.len());
    yew::Renderer::<App>::new().render();
}
