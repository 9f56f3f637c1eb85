use common::DashboardTab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: DashboardTab,
    pub on_select: Callback<DashboardTab>,
}

/// Callback for a tab trigger: any event on it selects `tab`.
fn select_callback<E: 'static>(on_select: &Callback<DashboardTab>, tab: DashboardTab) -> Callback<E> {
    on_select.reform(move |_: E| tab)
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div role="tablist" class="grid grid-cols-2 md:grid-cols-5 mb-8 rounded-md bg-white/5 p-1 gap-1">
            { for DashboardTab::ALL.iter().map(|&tab| {
                let selected = tab == props.active;
                let onclick = select_callback::<MouseEvent>(&props.on_select, tab);
                let class = if selected {
                    "tab-trigger bg-reiv-purple text-white"
                } else {
                    "tab-trigger text-white/70 hover:text-white"
                };

                html! {
                    <button
                        key={tab.id()}
                        id={format!("tab-{}", tab.id())}
                        role="tab"
                        class={class}
                        aria-selected={selected.to_string()}
                        aria-controls={format!("panel-{}", tab.id())}
                        data-state={if selected { "active" } else { "inactive" }}
                        {onclick}
                    >
                        <i class={format!("{} mr-2", tab.icon())}></i>
                        { tab.label() }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, render_with};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_trigger_emits_its_own_tab() {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let on_select = {
            let selected = selected.clone();
            Callback::from(move |tab: DashboardTab| selected.borrow_mut().push(tab))
        };

        for tab in DashboardTab::ALL.iter().rev() {
            select_callback::<()>(&on_select, *tab).emit(());
        }

        let expected: Vec<_> = DashboardTab::ALL.iter().rev().copied().collect();
        assert_eq!(*selected.borrow(), expected);
    }

    #[tokio::test]
    async fn test_one_trigger_per_tab() {
        let html = render_with::<TabBar>(|| TabBarProps {
            active: DashboardTab::Reports,
            on_select: Callback::noop(),
        })
        .await;
        assert_eq!(count(&html, "role=\"tab\""), DashboardTab::ALL.len());
        assert_eq!(count(&html, "aria-selected=\"true\""), 1);
        assert!(html.contains("id=\"tab-reports\""));
    }
}
