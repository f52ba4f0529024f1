use yew::prelude::*;

use earthscape_dashboard::components::{DashboardView, LoginView};
use earthscape_dashboard::hooks::use_session::{View, use_session_gate};

#[function_component(App)]
fn app() -> Html {
    let session = use_session_gate();

    let body = match session.state.view() {
        View::Login => html! {
            <LoginView on_authenticated={session.show_dashboard.clone()} />
        },
        View::Dashboard(identity) => html! {
            <DashboardView
                identity={identity.clone()}
                visit={session.state.dashboard_visit().unwrap_or_default()}
                on_logout={session.logout.clone()}
            />
        },
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"EarthScape Climate Dashboard"}</h1>
            </header>

            <main class="app-main">
                {body}
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
