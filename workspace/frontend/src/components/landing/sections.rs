use common::mock_data::{AUDIENCES, FEATURES, HOW_IT_WORKS, USE_CASES};
use common::site::Anchor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    title: AttrValue,
    subtitle: AttrValue,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold mb-4 gradient-heading">{ &props.title }</h2>
            <p class="text-lg text-white/70 max-w-2xl mx-auto">{ &props.subtitle }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub node_ref: NodeRef,
}

#[function_component(HowItWorksSection)]
pub fn how_it_works_section(props: &HowItWorksProps) -> Html {
    let last = HOW_IT_WORKS.len().saturating_sub(1);

    html! {
        <section ref={props.node_ref.clone()} id={Anchor::HowItWorks.id()} class="py-20 md:py-32 bg-background">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="How It Works"
                    subtitle="Our AI Agent analyzes, predicts, and delivers actionable insights about your IP assets."
                />
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 max-w-5xl mx-auto">
                    { for HOW_IT_WORKS.iter().enumerate().map(|(index, step)| html! {
                        <div class="relative animate-fade-up" key={step.title}>
                            <div class="card-surface h-full p-6">
                                <div class="mb-4 p-2 rounded-full bg-reiv-purple/10 w-fit">
                                    <i class={format!("{} text-3xl text-reiv-purple-light", step.icon)}></i>
                                </div>
                                <h3 class="text-xl font-semibold text-white mb-2">{ step.title }</h3>
                                <p class="text-white/70">{ step.description }</p>
                            </div>
                            // Arrow between consecutive steps
                            if index < last {
                                <div class="hidden md:block absolute top-1/2 -right-4 transform -translate-y-1/2 z-10">
                                    <i class="fas fa-arrow-right text-reiv-purple-light"></i>
                                </div>
                            }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AudienceSection)]
pub fn audience_section() -> Html {
    html! {
        <section class="py-20 md:py-32 bg-reiv-black">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Who It's For"
                    subtitle="REIV IP Signals serves multiple stakeholders in the creative economy."
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    { for AUDIENCES.iter().map(|audience| html! {
                        <div class="card-surface card-hover h-full p-6 animate-fade-up" key={audience.title}>
                            <div class="mb-4 p-3 rounded-full bg-reiv-purple/10 w-fit">
                                <i class={format!("{} text-4xl text-reiv-purple-light", audience.icon)}></i>
                            </div>
                            <h3 class="text-2xl font-semibold text-white mb-2">{ audience.title }</h3>
                            <p class="text-white/70">{ audience.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FeatureSection)]
pub fn feature_section() -> Html {
    html! {
        <section id={Anchor::Features.id()} class="py-20 md:py-32 bg-background grid-pattern">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Key Features"
                    subtitle="Powerful tools to transform how you understand and leverage IP assets."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="card-surface card-hover h-full p-6 animate-fade-up" key={feature.title}>
                            <div class="flex flex-row items-center gap-4 pb-2">
                                <div class="p-2 rounded-full bg-reiv-purple/10">
                                    <i class={format!("{} text-2xl text-reiv-purple-light", feature.icon)}></i>
                                </div>
                                <h3 class="text-xl font-semibold text-white">{ feature.title }</h3>
                            </div>
                            <p class="text-white/70">{ feature.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(UseCaseSection)]
pub fn use_case_section() -> Html {
    html! {
        <section id={Anchor::UseCases.id()} class="py-20 md:py-32 bg-reiv-black">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Use Cases"
                    subtitle="Discover how REIV IP Signals transforms intellectual property into financial opportunities."
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    { for USE_CASES.iter().map(|use_case| html! {
                        <div class="flex animate-fade-up" key={use_case.title}>
                            <div class="card-surface card-hover h-full w-full p-6">
                                <h3 class="text-xl font-semibold text-white mb-4">{ use_case.title }</h3>
                                <p class="text-white/70">{ use_case.description }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="py-16 md:py-24 bg-gradient-hero">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="max-w-4xl mx-auto text-center animate-fade-up">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 text-white">
                        {"Bring clarity to creative assets."}
                        <br />
                        {"Unlock financing with confidence."}
                    </h2>
                    <button class="btn-primary btn-lg mt-4">{"Join the Waitlist"}</button>
                </div>
            </div>
        </section>
    }
}
