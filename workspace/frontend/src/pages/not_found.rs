use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen bg-gradient-hero grid-pattern flex flex-col items-center justify-center px-4 text-center text-white" data-view="not-found">
            <div class="max-w-md animate-fade-up">
                <h1 class="text-6xl font-bold mb-6 glow-text gradient-heading">{"404"}</h1>
                <h2 class="text-2xl font-semibold mb-2">{"Page Not Found"}</h2>
                <p class="text-white/70 mb-8">
                    {"The page you're looking for doesn't exist or has been moved."}
                </p>
                <Link<Route> to={Route::Home} classes="btn-primary btn-lg">
                    {"Return Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
