use common::Tone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    /// Fill level, 0-100
    pub value: u32,
    pub tone: Tone,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressProps) -> Html {
    let percentage = clamp_percent(props.value);

    html! {
        <div
            class={classes!("relative", "h-2", "w-full", "overflow-hidden", "rounded-full", "bg-white/10", props.class.clone())}
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={percentage.to_string()}
        >
            <div
                class={format!("h-full transition-all {}", props.tone.bar_class())}
                style={format!("width: {}%", percentage)}
            ></div>
        </div>
    }
}

pub fn clamp_percent(value: u32) -> u32 {
    value.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_with;

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(0), 0);
        assert_eq!(clamp_percent(65), 65);
        assert_eq!(clamp_percent(140), 100);
    }

    #[tokio::test]
    async fn test_progress_renders_width_and_tone() {
        let html = render_with::<ProgressBar>(|| ProgressProps {
            value: 85,
            tone: Tone::Danger,
            class: Classes::new(),
        })
        .await;
        assert!(html.contains("width: 85%"));
        assert!(html.contains("aria-valuenow=\"85\""));
        assert!(html.contains("bg-red-500"));
    }
}
