use std::rc::Rc;

use common::site::Anchor;
use gloo_events::EventListener;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::settings::{get_settings, DEFAULT_SCROLL_THRESHOLD_PX};
use crate::Route;

/// Local state of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    /// Page is scrolled past the threshold; the bar turns opaque and blurred
    pub scrolled: bool,
    pub menu_open: bool,
    threshold_px: f64,
}

impl NavState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            threshold_px,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    /// Window scrolled to this vertical offset
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(offset) => NavState {
                scrolled: offset > self.threshold_px,
                ..*self
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..*self
            },
            NavAction::CloseMenu => NavState {
                menu_open: false,
                ..*self
            },
        };

        if next == *self {
            // Unchanged state keeps the same Rc so the bar does not re-render on every scroll tick
            self
        } else {
            log::trace!("Navbar state {:?} -> {:?}", *self, next);
            Rc::new(next)
        }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let state = use_reducer(|| NavState::new(get_settings().scroll_threshold_px));

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let target = window.clone();
                EventListener::new(&target, "scroll", move |_| {
                    let offset = window.scroll_y().unwrap_or_default();
                    state.dispatch(NavAction::Scrolled(offset));
                })
            });
            log::debug!("Navbar scroll listener attached: {}", listener.is_some());

            move || {
                log::debug!("Navbar scroll listener detached");
                drop(listener);
            }
        });
    }

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMenu))
    };
    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::CloseMenu))
    };

    html! {
        <NavbarView state={*state} {on_toggle} {on_close} />
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarViewProps {
    pub state: NavState,
    pub on_toggle: Callback<MouseEvent>,
    /// Fired by every link so picking a destination closes the mobile menu
    pub on_close: Callback<MouseEvent>,
}

#[function_component(NavbarView)]
pub fn navbar_view(props: &NavbarViewProps) -> Html {
    let NavState {
        scrolled, menu_open, ..
    } = props.state;

    let header_class = if scrolled {
        "fixed top-0 w-full z-50 transition-all duration-300 bg-black/80 backdrop-blur-md py-2"
    } else {
        "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent py-4"
    };

    let anchor_links = |class: &'static str| -> Html {
        Anchor::ALL
            .iter()
            .map(|anchor| {
                html! {
                    <a href={anchor.href()} class={class} onclick={props.on_close.clone()}>
                        { anchor.label() }
                    </a>
                }
            })
            .collect()
    };

    html! {
        <header
            class={header_class}
            data-component="navbar"
            data-scrolled={scrolled.to_string()}
        >
            <div class="container mx-auto px-4 flex justify-between items-center">
                <Link<Route> to={Route::Home} classes="flex items-center">
                    <span class="text-2xl font-bold text-white">{"REIV"}</span>
                    <span class="text-2xl font-bold text-reiv-purple-light">{" IP Signals"}</span>
                </Link<Route>>

                <nav class="hidden md:flex items-center space-x-8">
                    <Link<Route> to={Route::Home} classes="text-white/80 hover:text-white transition-colors">
                        {"Home"}
                    </Link<Route>>
                    { anchor_links("text-white/80 hover:text-white transition-colors") }
                    <Link<Route> to={Route::Dashboard} classes="text-white/80 hover:text-white transition-colors">
                        {"REIVIP-COP"}
                    </Link<Route>>
                </nav>

                <div class="hidden md:flex items-center space-x-4">
                    <button class="btn-outline">{"Login"}</button>
                    <button class="btn-primary">{"Request Access"}</button>
                </div>

                <button
                    class="md:hidden text-white"
                    aria-label="Toggle menu"
                    aria-controls="mobile-menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={props.on_toggle.clone()}
                >
                    <i class={if menu_open { "fas fa-xmark text-xl" } else { "fas fa-bars text-xl" }}></i>
                </button>
            </div>

            if menu_open {
                <div id="mobile-menu" class="md:hidden bg-black/95 backdrop-blur-md">
                    <div class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                        <div onclick={props.on_close.clone()}>
                            <Link<Route> to={Route::Home} classes="text-white/80 hover:text-white py-2 block">
                                {"Home"}
                            </Link<Route>>
                        </div>
                        { anchor_links("text-white/80 hover:text-white py-2") }
                        <div onclick={props.on_close.clone()}>
                            <Link<Route> to={Route::Dashboard} classes="text-white/80 hover:text-white py-2 block">
                                {"REIVIP-COP"}
                            </Link<Route>>
                        </div>
                        <div class="flex flex-col space-y-2 pt-2">
                            <button class="btn-outline w-full">{"Login"}</button>
                            <button class="btn-primary w-full">{"Request Access"}</button>
                        </div>
                    </div>
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, render_with};
    use yew_router::history::{AnyHistory, MemoryHistory};

    fn reduce(state: NavState, action: NavAction) -> NavState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        let state = NavState::default();
        assert!(!reduce(state, NavAction::Scrolled(0.0)).scrolled);
        assert!(!reduce(state, NavAction::Scrolled(10.0)).scrolled);
        assert!(reduce(state, NavAction::Scrolled(10.5)).scrolled);
    }

    #[test]
    fn test_scrolling_back_reverts() {
        let down = reduce(NavState::default(), NavAction::Scrolled(300.0));
        assert!(down.scrolled);
        let up = reduce(down, NavAction::Scrolled(4.0));
        assert!(!up.scrolled);
    }

    #[test]
    fn test_custom_threshold() {
        let state = NavState::new(100.0);
        assert!(!reduce(state, NavAction::Scrolled(50.0)).scrolled);
        assert!(reduce(state, NavAction::Scrolled(101.0)).scrolled);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let open = reduce(NavState::default(), NavAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!reduce(open, NavAction::ToggleMenu).menu_open);
        assert!(!reduce(open, NavAction::CloseMenu).menu_open);
        // Closing an already closed menu is a no-op
        assert!(!reduce(NavState::default(), NavAction::CloseMenu).menu_open);
    }

    #[test]
    fn test_menu_does_not_touch_scroll_state() {
        let scrolled = reduce(NavState::default(), NavAction::Scrolled(50.0));
        let toggled = reduce(scrolled, NavAction::ToggleMenu);
        assert!(toggled.scrolled);
        assert!(toggled.menu_open);
    }

    #[test]
    fn test_unchanged_state_keeps_rc() {
        let state = Rc::new(NavState::default());
        let next = state.clone().reduce(NavAction::Scrolled(2.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        state: NavState,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <NavbarView state={props.state} on_toggle={Callback::noop()} on_close={Callback::noop()} />
            </Router>
        }
    }

    async fn render(state: NavState) -> String {
        render_with::<Harness>(move || HarnessProps { state }).await
    }

    #[tokio::test]
    async fn test_closed_menu_hidden() {
        let html = render(NavState::default()).await;
        assert!(!html.contains("id=\"mobile-menu\""));
        assert!(html.contains("aria-expanded=\"false\""));
        for anchor in Anchor::ALL {
            assert_eq!(count(&html, &format!("href=\"{}\"", anchor.href())), 1);
        }
    }

    #[tokio::test]
    async fn test_open_menu_shows_links() {
        let state = reduce(NavState::default(), NavAction::ToggleMenu);
        let html = render(state).await;
        assert!(html.contains("id=\"mobile-menu\""));
        assert!(html.contains("aria-expanded=\"true\""));
        for anchor in Anchor::ALL {
            assert_eq!(count(&html, &format!("href=\"{}\"", anchor.href())), 2);
        }
    }

    #[tokio::test]
    async fn test_scrolled_style() {
        let top = render(NavState::default()).await;
        assert!(top.contains("data-scrolled=\"false\""));
        assert!(top.contains("bg-transparent"));

        let scrolled = render(reduce(NavState::default(), NavAction::Scrolled(120.0))).await;
        assert!(scrolled.contains("data-scrolled=\"true\""));
        assert!(scrolled.contains("backdrop-blur-md py-2"));
    }
}
