pub mod ai_index;
pub mod figures;
pub mod overview;
pub mod reports;
pub mod risk_scores;
pub mod tab_bar;
pub mod valuation;
pub mod view;

pub use view::Dashboard;

use common::{Headline, Severity};
use yew::prelude::*;

use crate::components::ui::Badge;

/// Small tile with a label, a large value and an optional note or badge.
fn headline_tile(headline: &Headline, badge: Option<Severity>) -> Html {
    html! {
        <div class="bg-background/30 p-3 rounded-lg" key={headline.label}>
            <p class="text-white/70 text-xs mb-1">{ headline.label }</p>
            <div class="flex items-baseline">
                <p class="text-white text-2xl font-bold">{ headline.value }</p>
                if let Some(severity) = badge {
                    <span class="ml-2"><Badge tone={severity.tone()}>{ severity.label() }</Badge></span>
                } else if !headline.note.is_empty() {
                    <p class={note_class(headline, "text-white/70")}>{ headline.note }</p>
                }
            </div>
        </div>
    }
}

fn note_class(headline: &Headline, muted: &'static str) -> String {
    let color = headline.note_tone.map_or(muted, |tone| tone.text_class());
    format!("{} text-sm ml-2", color)
}

/// Legend entry with a coloured dot.
fn legend_dot(label: String, color: &'static str) -> Html {
    html! {
        <div class="flex items-center" key={label.clone()}>
            <div class="w-3 h-3 rounded-full mr-2" style={format!("background-color: {}", color)}></div>
            <span class="text-white/70 text-xs">{ label }</span>
        </div>
    }
}

fn outline_button(label: &'static str) -> Html {
    html! {
        <button class="btn-outline btn-sm">{ label }</button>
    }
}
