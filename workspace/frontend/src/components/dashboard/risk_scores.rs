use common::mock_data::{
    DEEPFAKE_DISTRIBUTION, DEEPFAKE_WARNING, PROTECTION_RECOMMENDATIONS, RISK_BREAKDOWN, RISK_HEADLINES,
};
use common::Recommendation;
use yew::prelude::*;

use super::{figures, headline_tile, outline_button};
use crate::components::ui::{Badge, Card, PlotlyChart, ProgressBar};

fn recommendation_row(recommendation: &Recommendation) -> Html {
    html! {
        <div key={recommendation.title} class="p-3 rounded-lg bg-background/30">
            <div class="flex justify-between items-start gap-4">
                <div>
                    <h4 class="text-sm font-medium text-white">{ recommendation.title }</h4>
                    <p class="text-xs text-white/70 mt-1">{ recommendation.description }</p>
                    <div class="flex gap-2 mt-2">
                        <Badge tone={recommendation.impact.tone()}>{ recommendation.impact.label() }</Badge>
                        <Badge tone={recommendation.effort.tone()}>{ recommendation.effort.label() }</Badge>
                    </div>
                </div>
                { outline_button("Apply") }
            </div>
        </div>
    }
}

#[function_component(RiskTrendCard)]
fn risk_trend_card() -> Html {
    let figure = use_memo((), |_| figures::risk_score_trend());

    html! {
        <Card
            class="md:col-span-2"
            title="Risk Score Trend"
            description="Historical risk assessment for your IP assets"
        >
            <PlotlyChart id="chart-risk-score-trend" {figure} />
            <div class="mt-4 grid grid-cols-1 sm:grid-cols-3 gap-4">
                { for RISK_HEADLINES.iter().map(|(headline, severity)| headline_tile(headline, *severity)) }
            </div>
        </Card>
    }
}

#[function_component(DeepfakeCard)]
fn deepfake_card() -> Html {
    let figure = use_memo((), |_| figures::deepfake_distribution());

    html! {
        <Card
            title="Deepfake Risk Analysis"
            description="AI-generated content risk assessment"
            footer={html! { <button class="btn-outline w-full">{"View Detailed Analysis"}</button> }}
        >
            <PlotlyChart id="chart-deepfake-distribution" {figure} height={200} />
            <div class="mt-2 grid grid-cols-3 gap-2">
                { for DEEPFAKE_DISTRIBUTION.iter().map(|(share, severity)| html! {
                    <div key={share.name} class="flex flex-col items-center">
                        <div class="w-3 h-3 rounded-full mb-1" style={format!("background-color: {}", severity.tone().hex())}></div>
                        <span class="text-white/70 text-xs">{ share.name }</span>
                        <span class="text-white text-sm font-medium">{ format!("{}%", share.percent) }</span>
                    </div>
                }) }
            </div>
            <div class="mt-4 p-3 bg-background/30 rounded-lg">
                <p class="text-white/70 text-sm">
                    <i class="fas fa-triangle-exclamation mr-1 text-amber-500"></i>
                    { DEEPFAKE_WARNING }
                </p>
            </div>
        </Card>
    }
}

#[function_component(RiskScoresTab)]
pub fn risk_scores_tab() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <RiskTrendCard />
            <Card title="Risk Breakdown" description="Risk factors affecting your IP">
                <div class="space-y-4">
                    { for RISK_BREAKDOWN.iter().map(|risk| html! {
                        <div key={risk.name} class="space-y-1">
                            <div class="flex justify-between items-center">
                                <span class="text-white text-sm">{ risk.name }</span>
                                <Badge tone={risk.severity.tone()}>{ risk.score }</Badge>
                            </div>
                            <ProgressBar value={risk.score} tone={risk.severity.tone()} />
                        </div>
                    }) }
                </div>
            </Card>
            <DeepfakeCard />
            <Card
                class="md:col-span-2"
                title="Protection Recommendations"
                description="AI-generated suggestions to improve your IP protection"
            >
                <div class="space-y-4">
                    { for PROTECTION_RECOMMENDATIONS.iter().map(recommendation_row) }
                </div>
            </Card>
        </div>
    }
}
