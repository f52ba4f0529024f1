use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{error::AppError, session::Identity};
use crate::services::{api::DashboardClient, session};

/// Which of the two top-level views is on screen.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    /// Also the state before the session check answers: nothing is shown
    /// that depends on a session until one is confirmed.
    #[default]
    Login,
    Dashboard(Identity),
}

/// Single source of truth for view switching.
///
/// Exactly one view is visible because there is exactly one `View` value.
/// `visits` counts dashboard shows; panels key their fetches on it so each
/// show fetches once, and a show that replaces another cancels its fetches.
/// `settled` is set by the first view change; the load-time session check
/// only applies before that.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ViewState {
    view: View,
    visits: u64,
    settled: bool,
}

pub enum ViewAction {
    ShowDashboard(Identity),
    ShowLogin,
    /// Answer to the session check made on load. Dropped if the user already
    /// logged in through the form while it was in flight.
    SessionChecked(Result<Option<Identity>, AppError>),
}

impl ViewAction {
    /// Maps a session check onto a view. Anything short of a confirmed
    /// session, errors included, lands on the login view.
    pub fn from_session(result: Result<Option<Identity>, AppError>) -> Self {
        match result {
            Ok(Some(identity)) => ViewAction::ShowDashboard(identity),
            Ok(None) | Err(_) => ViewAction::ShowLogin,
        }
    }
}

impl ViewState {
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn login_visible(&self) -> bool {
        matches!(self.view, View::Login)
    }

    pub fn dashboard_visible(&self) -> bool {
        matches!(self.view, View::Dashboard(_))
    }

    /// Id of the dashboard visit on screen, if the dashboard is shown.
    pub fn dashboard_visit(&self) -> Option<u64> {
        self.dashboard_visible().then_some(self.visits)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.view {
            View::Dashboard(identity) => Some(identity),
            View::Login => None,
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ViewAction::ShowDashboard(identity) => Rc::new(Self {
                view: View::Dashboard(identity),
                visits: self.visits + 1,
                settled: true,
            }),
            // Already there: keep the same state so nothing re-renders
            ViewAction::ShowLogin if self.login_visible() => self,
            ViewAction::ShowLogin => Rc::new(Self {
                view: View::Login,
                visits: self.visits,
                settled: true,
            }),
            ViewAction::SessionChecked(_) if self.settled => self,
            ViewAction::SessionChecked(result) => Rc::new(Self {
                settled: true,
                ..(*self).clone()
            })
            .reduce(ViewAction::from_session(result)),
        }
    }
}

/// Handle returned by `use_session_gate` hook
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub state: ViewState,
    pub show_dashboard: Callback<Identity>,
    pub logout: Callback<()>,
}

/// Custom hook owning the session gate and the view switcher
#[hook]
pub fn use_session_gate() -> SessionHandle {
    let state = use_reducer(ViewState::default);

    // Effect: check the session once on load
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = resolve_session().await;
                if let Err(e) = &result {
                    gloo::console::warn!(&format!("Session check failed, showing login: {e}"));
                }
                dispatcher.dispatch(ViewAction::SessionChecked(result));
            });

            || ()
        });
    }

    let show_dashboard = {
        let dispatcher = state.dispatcher();
        Callback::from(move |identity| dispatcher.dispatch(ViewAction::ShowDashboard(identity)))
    };

    // Logout always ends on the login view, even if the request failed
    let logout = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                if let Err(e) = end_session().await {
                    gloo::console::error!(&format!("Error logging out: {e}"));
                }
                dispatcher.dispatch(ViewAction::ShowLogin);
            });
        })
    };

    SessionHandle {
        state: (*state).clone(),
        show_dashboard,
        logout,
    }
}

async fn resolve_session() -> Result<Option<Identity>, AppError> {
    session::check_session(&DashboardClient::new()?).await
}

async fn end_session() -> Result<(), AppError> {
    session::logout(&DashboardClient::new()?).await
}
