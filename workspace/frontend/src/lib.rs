use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

mod components;
mod pages;
pub mod router;
pub mod settings;

pub use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq, Debug)]
pub struct ServerAppProps {
    /// Path to render, e.g. `/dashboard`
    pub url: AttrValue,
}

/// The same route switch as [`App`], mounted on an in-memory history so a
/// given path can be rendered without a browser.
#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.url.to_string());

    html! {
        <Router history={history}>
            <Switch<Route> render={switch} />
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== REIV IP Signals Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::{ServerApp, ServerAppProps};
    use yew::{BaseComponent, ServerRenderer};

    /// Render the whole app at `path` to an HTML string.
    pub async fn render_path(path: &'static str) -> String {
        ServerRenderer::<ServerApp>::with_props(move || ServerAppProps { url: path.into() })
            .hydratable(false)
            .render()
            .await
    }

    /// Render a single component with the given props.
    pub async fn render_with<C>(props: impl FnOnce() -> C::Properties + Send + 'static) -> String
    where
        C: BaseComponent,
    {
        ServerRenderer::<C>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }

    /// Number of non-overlapping occurrences of `needle`.
    pub fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }
}
