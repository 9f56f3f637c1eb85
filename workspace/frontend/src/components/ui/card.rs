use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Rendered to the right of the title
    #[prop_or_default]
    pub badge: Option<Html>,
    #[prop_or_default]
    pub footer: Option<Html>,
    /// Extra classes for the outer element, e.g. grid spans
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!(props.class.clone(), "card-surface", "animate-fade-up")}>
            <div class="flex flex-col space-y-1.5 p-6 pb-2">
                <div class="flex justify-between items-center">
                    <h3 class="text-xl font-semibold text-white">{ &props.title }</h3>
                    { props.badge.clone().unwrap_or_default() }
                </div>
                if let Some(description) = &props.description {
                    <p class="text-sm text-white/70">{ description }</p>
                }
            </div>
            <div class="p-6 pt-2">
                { for props.children.iter() }
            </div>
            if let Some(footer) = &props.footer {
                <div class="flex items-center p-6 pt-0">{ footer.clone() }</div>
            }
        </div>
    }
}
