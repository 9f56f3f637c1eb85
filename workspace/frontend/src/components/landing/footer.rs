use chrono::Datelike;
use common::mock_data::{COMPANY_LINKS, LEGAL_LINKS};
use common::FooterLink;
use yew::prelude::*;

pub fn copyright_notice(year: i32) -> String {
    format!("© {} REIV IP Signals. All rights reserved.", year)
}

fn link_column(title: &'static str, links: &'static [FooterLink]) -> Html {
    html! {
        <div>
            <h3 class="text-lg font-semibold text-white mb-4">{ title }</h3>
            <ul class="space-y-2">
                { for links.iter().map(|link| html! {
                    <li key={link.href}>
                        <a href={link.href} class="text-white/70 hover:text-reiv-purple-light transition-colors">
                            { link.label }
                        </a>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="py-12 md:py-16 bg-background border-t border-reiv-purple/20">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="md:col-span-2">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl font-bold text-reiv-purple-light">{"REIV"}</span>
                            <span class="ml-1 text-2xl font-light text-white">{"Signals"}</span>
                        </a>
                        <p class="mt-4 text-white/70 max-w-md">
                            {"REIV IP Signals eliminates uncertainty around intellectual property valuation with AI-powered insights."}
                        </p>
                        <div class="flex space-x-4 mt-6 text-white/70">
                            <i class="fab fa-twitter hover:text-reiv-purple-light transition-colors"></i>
                            <i class="fab fa-linkedin hover:text-reiv-purple-light transition-colors"></i>
                            <i class="fab fa-github hover:text-reiv-purple-light transition-colors"></i>
                        </div>
                    </div>
                    { link_column("Company", COMPANY_LINKS) }
                    { link_column("Legal", LEGAL_LINKS) }
                </div>
                <hr class="my-8 border-reiv-purple/20" />
                <div class="text-center text-white/50 text-sm">{ copyright_notice(year) }</div>
            </div>
        </footer>
    }
}
