use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::feed::{CancelToken, FeedAction, FeedState, LoadOutcome, load_feed};
use crate::models::climate::ClimateSnapshot;
use crate::services::api::DashboardClient;

/// Fetches the climate snapshot once per dashboard visit.
#[hook]
pub fn use_climate_data(visit: u64) -> UseReducerHandle<FeedState<ClimateSnapshot>> {
    let state = use_reducer(FeedState::default);

    {
        let dispatcher = state.dispatcher();

        use_effect_with(visit, move |_| {
            let token = CancelToken::new();
            let guard = token.clone();

            dispatcher.dispatch(FeedAction::Refresh);

            spawn_local(async move {
                let client = match DashboardClient::new() {
                    Ok(client) => client,
                    Err(e) => {
                        gloo::console::error!(&format!("Error creating API client: {e}"));
                        dispatcher.dispatch(FeedAction::Failed(e.to_string()));
                        return;
                    }
                };

                match load_feed(&client, &guard, |action| dispatcher.dispatch(action)).await {
                    LoadOutcome::Loaded => {}
                    LoadOutcome::Failed(e) => {
                        gloo::console::error!(&format!("Error fetching climate data: {e}"));
                    }
                    LoadOutcome::Discarded => {
                        gloo::console::log!("Discarding climate data from a superseded visit");
                    }
                }
            });

            move || token.cancel()
        });
    }

    state
}
