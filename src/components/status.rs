use crate::hooks::feed::FeedStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeedIndicatorProps {
    pub status: FeedStatus,
    /// Whether earlier data is still on screen
    pub has_data: bool,
}

/// Loading spinner on first fetch, and a warning whenever the latest fetch failed
#[function_component(FeedIndicator)]
pub fn feed_indicator(props: &FeedIndicatorProps) -> Html {
    match &props.status {
        FeedStatus::Loading if !props.has_data => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        },
        FeedStatus::Unavailable(reason) => html! {
            <div class="status error" title={reason.clone()}>
                <p>
                    {"⚠ Data unavailable"}
                    if props.has_data {
                        {" (showing last update)"}
                    }
                </p>
            </div>
        },
        _ => html! {},
    }
}
