use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Section brought into view by "See How It Works"
    pub scroll_target: NodeRef,
}

fn scroll_to(target: &NodeRef) {
    match target.cast::<Element>() {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("Scroll target is not mounted"),
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_see_how = {
        let target = props.scroll_target.clone();
        Callback::from(move |_: MouseEvent| scroll_to(&target))
    };

    html! {
        <section class="relative pt-20 pb-32 md:pt-32 md:pb-40 bg-gradient-hero grid-pattern">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-0 left-0 w-full h-full opacity-30">
                    <div class="absolute top-1/4 right-1/4 w-96 h-96 rounded-full bg-reiv-purple/20 blur-3xl animate-pulse-glow"></div>
                    <div class="absolute bottom-1/4 left-1/3 w-64 h-64 rounded-full bg-reiv-purple/30 blur-3xl animate-pulse-glow" style="animation-delay: 1s"></div>
                </div>
            </div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="flex flex-col items-center text-center max-w-4xl mx-auto">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6 glow-text gradient-heading animate-fade-up">
                        {"Unlock the True Value of IP Assets"}
                    </h1>
                    <p class="text-xl md:text-2xl text-white/80 mb-10 animate-fade-up delay-200">
                        {"AI-powered insights for smarter decisions in creative finance."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 animate-fade-up delay-400">
                        <button class="btn-primary btn-lg" onclick={on_see_how}>
                            {"See How It Works"}
                            <i class="fas fa-arrow-right ml-2"></i>
                        </button>
                        <button class="btn-outline btn-lg">{"Request Early Access"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
