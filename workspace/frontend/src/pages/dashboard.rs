use yew::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::navbar::Navbar;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <>
            <Navbar />
            <Dashboard />
        </>
    }
}
