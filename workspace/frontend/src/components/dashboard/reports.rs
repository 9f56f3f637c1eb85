use common::mock_data::{AVAILABLE_REPORTS, REPORT_FORMATS, REPORT_INSIGHTS, REPORT_PERIODS, REPORT_TYPES};
use common::{Report, ReportInsight};
use yew::prelude::*;

use super::outline_button;
use crate::components::ui::Card;

fn report_row(report: &Report) -> Html {
    html! {
        <div
            key={report.title}
            class="flex items-start space-x-3 p-4 rounded-lg bg-background/30 hover:bg-background/40 transition-colors cursor-pointer"
            data-format={report.format}
        >
            <div class="mt-0.5 p-2 rounded-full bg-reiv-purple/20">
                <i class="fas fa-file-lines text-reiv-purple-light"></i>
            </div>
            <div class="flex-1">
                <h4 class="text-sm font-medium text-white">{ report.title }</h4>
                <p class="text-xs text-white/70">{ report.description }</p>
                <p class="text-xs text-white/50 mt-1">{ format!("Generated: {}", report.date) }</p>
            </div>
            { outline_button("Download") }
        </div>
    }
}

/// Visual-only option list; `round` draws radio-style markers instead of checkboxes.
fn option_group(title: &'static str, options: &'static [&'static str], round: bool) -> Html {
    let marker = if round {
        "w-4 h-4 rounded-full border border-reiv-purple-light mr-2"
    } else {
        "w-4 h-4 rounded border border-reiv-purple-light mr-2"
    };

    html! {
        <div class="bg-background/30 p-4 rounded-lg">
            <h4 class="text-sm font-medium text-white mb-2">{ title }</h4>
            <div class="space-y-2">
                { for options.iter().map(|option| html! {
                    <div key={*option} class="flex items-center">
                        <div class={marker}></div>
                        <span class="text-white/70 text-sm">{ *option }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn insight_tile(insight: &ReportInsight) -> Html {
    html! {
        <div key={insight.title} class="bg-background/30 p-4 rounded-lg">
            <h4 class="text-sm font-medium text-white mb-2">{ insight.title }</h4>
            <p class="text-xs text-white/70 mb-3">{ insight.insight }</p>
            <div class="bg-reiv-purple/10 p-3 rounded border-l-2 border-reiv-purple-light">
                <p class="text-xs text-white/90">
                    <span class="font-medium text-reiv-purple-light">{"Recommendation: "}</span>
                    { insight.recommendation }
                </p>
            </div>
        </div>
    }
}

#[function_component(ReportsTab)]
pub fn reports_tab() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <Card
                class="md:col-span-2"
                title="Available Reports"
                description="Comprehensive analysis reports for your IP portfolio"
            >
                <div class="space-y-4">
                    { for AVAILABLE_REPORTS.iter().map(report_row) }
                </div>
            </Card>
            <Card
                title="Generate Custom Report"
                description="Create a tailored analysis for your specific needs"
                footer={html! { <button class="btn-primary w-full">{"Generate Custom Report"}</button> }}
            >
                <div class="space-y-4">
                    { option_group("Report Types", REPORT_TYPES, false) }
                    { option_group("Time Period", REPORT_PERIODS, true) }
                    { option_group("Format", REPORT_FORMATS, true) }
                </div>
            </Card>
            <Card
                class="md:col-span-3"
                title="Report Insights"
                description="Key findings from your recent reports"
            >
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    { for REPORT_INSIGHTS.iter().map(insight_tile) }
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
    async fn test_reports_listed_with_download() {
        let html = render_with::<ReportsTab>(|| ()).await;
        assert_eq!(count(&html, ">Download<"), AVAILABLE_REPORTS.len());
        assert!(html.contains("Generated: September 30, 2023"));
    }

    #[tokio::test]
    async fn test_custom_report_options() {
        let html = render_with::<ReportsTab>(|| ()).await;
        for option in REPORT_TYPES.iter().chain(REPORT_PERIODS).chain(REPORT_FORMATS) {
            assert!(html.contains(option), "missing option {}", option);
        }
        assert_eq!(count(&html, "Recommendation: "), REPORT_INSIGHTS.len());
    }
}
