use crate::models::alert::Alert;
use std::rc::Rc;
use yew::prelude::*;

/// What one alert looks like on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRow {
    pub class: String,
    pub heading: String,
    pub message: String,
}

impl From<&Alert> for AlertRow {
    fn from(alert: &Alert) -> Self {
        Self {
            class: format!(
                "list-group-item flex-column align-items-start {}",
                alert.emphasis().css_class()
            ),
            heading: alert.heading(),
            message: alert.message.clone(),
        }
    }
}

/// Rows in server order; the feed never re-sorts.
pub fn alert_rows(alerts: &[Alert]) -> Vec<AlertRow> {
    alerts.iter().map(AlertRow::from).collect()
}

#[derive(Properties, PartialEq)]
pub struct AlertFeedProps {
    pub alerts: Rc<Vec<Alert>>,
}

#[function_component(AlertFeed)]
pub fn alert_feed(props: &AlertFeedProps) -> Html {
    let rows = use_memo(props.alerts.clone(), |alerts| alert_rows(alerts));

    if rows.is_empty() {
        return html! {
            <p class="alerts-empty">{"No active alerts"}</p>
        };
    }

    html! {
        <div class="list-group alerts-section">
            {
                rows.iter().map(|row| html! {
                    <div class={row.class.clone()}>
                        <div class="d-flex w-100 justify-content-between">
                            <h6 class="mb-1">{&row.heading}</h6>
                        </div>
                        <p class="mb-1">{&row.message}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
