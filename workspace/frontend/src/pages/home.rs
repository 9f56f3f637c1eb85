use yew::prelude::*;

use crate::components::landing::Landing;
use crate::components::navbar::Navbar;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Navbar />
            <Landing />
        </>
    }
}
