use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::{alert::Alert, climate::ClimateSnapshot, error::AppError};
use crate::services::api::DashboardApi;

/// Where a dashboard panel's latest fetch stands.
#[derive(Clone, PartialEq, Debug)]
pub enum FeedStatus {
    Loading,
    Ready,
    /// The last fetch failed; any earlier data is still displayed.
    Unavailable(String),
}

/// Data behind one dashboard panel (telemetry or alerts).
///
/// A failed fetch never discards what was last shown; it only flips the
/// status so the panel can say the data is unavailable.
#[derive(PartialEq, Debug)]
pub struct FeedState<T> {
    data: Option<Rc<T>>,
    status: FeedStatus,
    revision: u64,
}

pub enum FeedAction<T> {
    Refresh,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FeedState<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: FeedStatus::Loading,
            revision: 0,
        }
    }
}

impl<T> Clone for FeedState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            status: self.status.clone(),
            revision: self.revision,
        }
    }
}

impl<T> FeedState<T> {
    /// Returns the last good data, if any fetch ever succeeded
    pub fn data(&self) -> Option<&Rc<T>> {
        self.data.as_ref()
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    /// Bumped on every successful load; consumers key redraws on it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FeedStatus::Loading)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.status, FeedStatus::Unavailable(_))
    }
}

impl<T> Reducible for FeedState<T> {
    type Action = FeedAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FeedAction::Refresh => Self {
                status: FeedStatus::Loading,
                ..(*self).clone()
            },
            FeedAction::Loaded(data) => Self {
                data: Some(Rc::new(data)),
                status: FeedStatus::Ready,
                revision: self.revision + 1,
            },
            FeedAction::Failed(reason) => Self {
                status: FeedStatus::Unavailable(reason),
                ..(*self).clone()
            },
        };

        Rc::new(next)
    }
}

/// Marks the fetches of a dashboard visit as superseded.
///
/// A fetch checks its token before applying its result; a cancelled one
/// drops the result instead of writing into a view that moved on.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Data a dashboard panel fetches from the backend.
#[allow(async_fn_in_trait)]
pub trait Feed: Sized {
    async fn fetch<A: DashboardApi>(api: &A) -> Result<Self, AppError>;
}

impl Feed for ClimateSnapshot {
    async fn fetch<A: DashboardApi>(api: &A) -> Result<Self, AppError> {
        api.climate_data().await
    }
}

impl Feed for Vec<Alert> {
    async fn fetch<A: DashboardApi>(api: &A) -> Result<Self, AppError> {
        api.alerts().await
    }
}

/// What became of one panel fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Loaded,
    Failed(String),
    /// The visit was cancelled while the fetch was in flight.
    Discarded,
}

/// Fetches one panel's data and applies it unless `token` was cancelled
/// meanwhile. A discarded result dispatches nothing.
pub async fn load_feed<A, T, D>(api: &A, token: &CancelToken, dispatch: D) -> LoadOutcome
where
    A: DashboardApi,
    T: Feed,
    D: Fn(FeedAction<T>),
{
    let result = T::fetch(api).await;
    if token.is_cancelled() {
        return LoadOutcome::Discarded;
    }

    match result {
        Ok(data) => {
            dispatch(FeedAction::Loaded(data));
            LoadOutcome::Loaded
        }
        Err(e) => {
            let reason = e.to_string();
            dispatch(FeedAction::Failed(reason.clone()));
            LoadOutcome::Failed(reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_session::{ViewAction, ViewState};
    use crate::models::session::Identity;
    use crate::services::mock::MockApi;
    use std::cell::RefCell;

    fn applied<T>() -> RefCell<Vec<FeedAction<T>>> {
        RefCell::new(Vec::new())
    }

    #[tokio::test]
    async fn test_logged_in_check_fetches_each_panel_once() {
        let api = MockApi::default();
        let analyst = || Identity::new("Analyst", "analyst");

        let initial = Rc::new(ViewState::default());
        let checked = initial
            .clone()
            .reduce(ViewAction::SessionChecked(Ok(Some(analyst()))));
        // A duplicate answer arriving late is ignored
        let late = checked
            .clone()
            .reduce(ViewAction::SessionChecked(Ok(Some(analyst()))));

        // Panels load whenever the visit id they are keyed on changes
        let mut loaded_for = None;
        for state in [initial, checked, late] {
            let visit = state.dashboard_visit();
            if visit.is_none() || visit == loaded_for {
                continue;
            }
            loaded_for = visit;

            let token = CancelToken::new();
            let climate = applied::<ClimateSnapshot>();
            let alerts = applied::<Vec<Alert>>();
            load_feed(&api, &token, |a| climate.borrow_mut().push(a)).await;
            load_feed(&api, &token, |a| alerts.borrow_mut().push(a)).await;
            assert_eq!(climate.borrow().len(), 1);
            assert_eq!(alerts.borrow().len(), 1);
        }

        assert_eq!(api.climate_calls.get(), 1);
        assert_eq!(api.alerts_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_result_is_not_applied() {
        let api = MockApi {
            alerts: || {
                Ok(vec![Alert {
                    id: None,
                    severity: "High".to_string(),
                    message: "Flood warning".to_string(),
                }])
            },
            ..MockApi::default()
        };
        let token = CancelToken::new();
        let actions = applied::<Vec<Alert>>();

        token.cancel();
        let outcome = load_feed(&api, &token, |a| actions.borrow_mut().push(a)).await;

        assert_eq!(outcome, LoadOutcome::Discarded);
        assert_eq!(api.alerts_calls.get(), 1);
        assert!(actions.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_loaded_result_is_applied() {
        let api = MockApi::default();
        let token = CancelToken::new();
        let state = RefCell::new(Rc::new(FeedState::<ClimateSnapshot>::default()));

        let outcome = load_feed(&api, &token, |a| {
            let next = state.borrow().clone().reduce(a);
            *state.borrow_mut() = next;
        })
        .await;

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(state.borrow().status(), &FeedStatus::Ready);
        assert_eq!(state.borrow().revision(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_reports_unavailable() {
        let api = MockApi {
            climate: || Err(AppError::ApiError("Network error: offline".to_string())),
            ..MockApi::default()
        };
        let token = CancelToken::new();
        let state = RefCell::new(Rc::new(FeedState::<ClimateSnapshot>::default()));

        let outcome = load_feed(&api, &token, |a| {
            let next = state.borrow().clone().reduce(a);
            *state.borrow_mut() = next;
        })
        .await;

        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert!(state.borrow().is_unavailable());
        assert!(state.borrow().data().is_none());
    }
}
