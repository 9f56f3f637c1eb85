use common::mock_data::{MONETIZATION_OPPORTUNITIES, VALUATION_FACTORS, VALUATION_HEADLINES};
use common::{Opportunity, Tone, ValuationFactor};
use yew::prelude::*;

use super::figures;
use crate::components::ui::{Badge, Card, PlotlyChart, ProgressBar};

fn factor_row(factor: &ValuationFactor) -> Html {
    let tone = factor.impact.tone();
    html! {
        <div key={factor.name} class="space-y-1">
            <div class="flex justify-between items-center">
                <div>
                    <span class="text-white text-sm">{ factor.name }</span>
                    <p class="text-white/70 text-xs">{ factor.description }</p>
                </div>
                <Badge {tone}>{ factor.score }</Badge>
            </div>
            <ProgressBar value={factor.score} {tone} />
        </div>
    }
}

fn opportunity_row(opportunity: &Opportunity) -> Html {
    html! {
        <div key={opportunity.title} class="p-3 rounded-lg bg-background/30 hover:bg-background/40 transition-colors cursor-pointer">
            <h4 class="text-sm font-medium text-white">{ opportunity.title }</h4>
            <p class="text-xs text-white/70 mb-2">{ opportunity.description }</p>
            <div class="flex justify-between items-center">
                <p class="text-xs text-reiv-purple-light">{ opportunity.potential }</p>
                <Badge tone={opportunity.fit.tone()}>{ opportunity.fit.label() }</Badge>
            </div>
        </div>
    }
}

#[function_component(PortfolioValuationCard)]
fn portfolio_valuation_card() -> Html {
    let figure = use_memo((), |_| figures::category_valuations());

    html! {
        <Card
            class="md:col-span-3"
            title="IP Portfolio Valuation"
            description="Comprehensive valuation of your intellectual property assets"
            badge={html! { <Badge tone={Tone::Accent}>{"Updated Today"}</Badge> }}
        >
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6">
                { for VALUATION_HEADLINES.iter().map(|headline| html! {
                    <div key={headline.label} class="bg-background/30 p-4 rounded-lg">
                        <p class="text-white/70 text-xs mb-1">{ headline.label }</p>
                        <p class="text-white text-2xl font-bold">{ headline.value }</p>
                        if let Some(tone) = headline.note_tone {
                            <span class="mt-1 inline-block"><Badge {tone}>{ headline.note }</Badge></span>
                        } else {
                            <p class="text-white/50 text-xs mt-1">{ headline.note }</p>
                        }
                    </div>
                }) }
            </div>
            <PlotlyChart id="chart-category-valuations" {figure} />
        </Card>
    }
}

#[function_component(ValuationTab)]
pub fn valuation_tab() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <PortfolioValuationCard />
            <Card
                class="md:col-span-2"
                title="Valuation Factors"
                description="Key metrics influencing your IP valuation"
            >
                <div class="space-y-4">
                    { for VALUATION_FACTORS.iter().map(factor_row) }
                </div>
            </Card>
            <Card
                title="Monetization Opportunities"
                description="Potential revenue streams for your IP"
                footer={html! { <button class="btn-outline w-full">{"Explore All Opportunities"}</button> }}
            >
                <div class="space-y-4">
                    { for MONETIZATION_OPPORTUNITIES.iter().map(opportunity_row) }
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, render_with};

    #[tokio::test]
    async fn test_valuation_headlines() {
        let html = render_with::<ValuationTab>(|| ()).await;
        for headline in VALUATION_HEADLINES {
            assert!(html.contains(headline.label));
            assert!(html.contains(headline.value));
        }
        assert!(html.contains("data-chart=\"chart-category-valuations\""));
    }

    #[tokio::test]
    async fn test_opportunity_match_badges() {
        let html = render_with::<ValuationTab>(|| ()).await;
        assert_eq!(count(&html, "High Match"), 2);
        assert_eq!(count(&html, "Medium Match"), 2);
        assert_eq!(count(&html, "role=\"progressbar\""), VALUATION_FACTORS.len());
    }
}
