use yew::prelude::*;

use crate::components::{
    alert_feed::AlertFeed, chart::TemperatureChart, feedback_form::FeedbackForm,
    humidity::HumidityTrends, status::FeedIndicator,
};
use crate::hooks::{use_alerts::use_alerts, use_climate::use_climate_data};
use crate::models::session::Identity;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub identity: Identity,
    /// New value on every show; panels refetch when it changes
    pub visit: u64,
    pub on_logout: Callback<()>,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let climate = use_climate_data(props.visit);
    let alerts = use_alerts(props.visit);

    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <section id="dashboard-view" class="dashboard-view">
            <div class="identity-bar">
                <span>
                    {"Signed in as "}
                    <strong id="username-display">{&props.identity.username}</strong>
                    {" ("}<span id="user-role">{&props.identity.role}</span>{")"}
                </span>
                <button id="logout-btn" class="btn btn-outline" {onclick}>{"Log out"}</button>
            </div>

            <section class="chart-section">
                <h2>{"Regional Temperatures"}</h2>
                <FeedIndicator status={climate.status().clone()} has_data={climate.data().is_some()} />
                if let Some(snapshot) = climate.data() {
                    <TemperatureChart snapshot={snapshot.clone()} revision={climate.revision()} />
                    <HumidityTrends snapshot={snapshot.clone()} />
                }
            </section>

            <section class="alerts-panel">
                <h2>{"Alerts"}</h2>
                <FeedIndicator status={alerts.status().clone()} has_data={alerts.data().is_some()} />
                if let Some(list) = alerts.data() {
                    <AlertFeed alerts={list.clone()} />
                }
            </section>

            <section class="feedback-section">
                <h2>{"Feedback"}</h2>
                <FeedbackForm />
            </section>
        </section>
    }
}
