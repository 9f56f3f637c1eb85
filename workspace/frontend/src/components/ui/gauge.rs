use yew::prelude::*;

const RADIUS: f64 = 45.0;

/// Length of the gauge ring's stroke.
pub fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * RADIUS
}

/// Dash offset that leaves `score` percent of the ring drawn.
pub fn dash_offset(score: u32) -> f64 {
    circumference() * (1.0 - f64::from(score.min(100)) / 100.0)
}

#[derive(Properties, PartialEq)]
pub struct ScoreGaugeProps {
    /// Score out of 100
    pub score: u32,
}

#[function_component(ScoreGauge)]
pub fn score_gauge(props: &ScoreGaugeProps) -> Html {
    html! {
        <div class="relative w-40 h-40 flex items-center justify-center mb-4">
            <svg class="w-full h-full" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r={RADIUS.to_string()} fill="transparent" stroke="#1a1a1a" stroke-width="10" />
                <circle
                    cx="50"
                    cy="50"
                    r={RADIUS.to_string()}
                    fill="transparent"
                    stroke="#7B2CBF"
                    stroke-width="10"
                    stroke-dasharray={format!("{:.1}", circumference())}
                    stroke-dashoffset={format!("{:.1}", dash_offset(props.score))}
                    stroke-linecap="round"
                    transform="rotate(-90 50 50)"
                />
            </svg>
            <div class="absolute inset-0 flex items-center justify-center flex-col">
                <span class="text-4xl font-bold text-white">{ props.score }</span>
                <span class="text-white/70 text-sm">{"out of 100"}</span>
            </div>
        </div>
    }
}
