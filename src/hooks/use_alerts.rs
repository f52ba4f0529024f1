use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::feed::{CancelToken, FeedAction, FeedState, LoadOutcome, load_feed};
use crate::models::alert::Alert;
use crate::services::api::DashboardClient;

#[hook]
pub fn use_alerts(visit: u64) -> UseReducerHandle<FeedState<Vec<Alert>>> {
    let state = use_reducer(FeedState::default);

    {
        let dispatcher = state.dispatcher();

        use_effect_with(visit, move |_| {
            let token = CancelToken::new();
            let guard = token.clone();

            dispatcher.dispatch(FeedAction::Refresh);

            spawn_local(async move {
                let Ok(client) = DashboardClient::new() else {
                    dispatcher.dispatch(FeedAction::Failed("API client unavailable".to_string()));
                    return;
                };

                if let LoadOutcome::Failed(e) =
                    load_feed(&client, &guard, |action| dispatcher.dispatch(action)).await
                {
                    gloo::console::error!(&format!("Error fetching alerts: {e}"));
                }
            });

            move || token.cancel()
        });
    }

    state
}
