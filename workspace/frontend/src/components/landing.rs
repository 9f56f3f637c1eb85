//! Marketing landing page: hero, pipeline steps, audiences, features, use
//! cases, call to action and footer.

pub mod footer;
pub mod hero;
pub mod sections;

use yew::prelude::*;

use footer::Footer;
use hero::Hero;
use sections::{AudienceSection, CallToAction, FeatureSection, HowItWorksSection, UseCaseSection};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Shared between the hero button and the section it scrolls to
    let how_it_works_ref = use_node_ref();

    html! {
        <div class="min-h-screen bg-background text-white overflow-hidden" data-view="landing">
            <Hero scroll_target={how_it_works_ref.clone()} />
            <HowItWorksSection node_ref={how_it_works_ref} />
            <AudienceSection />
            <FeatureSection />
            <UseCaseSection />
            <CallToAction />
            <Footer />
        </div>
    }
}
