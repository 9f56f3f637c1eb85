use common::Tone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub tone: Tone,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let class = format!(
        "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {}",
        props.tone.badge_class()
    );

    html! {
        <span class={class} data-tone={format!("{:?}", props.tone).to_lowercase()}>
            { for props.children.iter() }
        </span>
    }
}
