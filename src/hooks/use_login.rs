use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{
    error::AppError,
    session::{Credentials, Identity},
};
use crate::services::{api::DashboardClient, session::login};

/// State of the login form.
///
/// An error stays up until the next attempt starts; it is never cleared on a timer.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginState {
    error: Option<String>,
    submitting: bool,
}

pub enum LoginAction {
    Submit,
    Accepted,
    Rejected(String),
}

impl LoginState {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

impl Reducible for LoginState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LoginAction::Submit => Self {
                error: None,
                submitting: true,
            },
            LoginAction::Accepted => Self {
                error: None,
                submitting: false,
            },
            LoginAction::Rejected(message) => Self {
                error: Some(message),
                submitting: false,
            },
        };

        Rc::new(next)
    }
}

/// Handle returned by `use_login` hook
#[derive(Clone, PartialEq)]
pub struct LoginHandle {
    pub state: LoginState,
    pub submit: Callback<Credentials>,
}

/// Custom hook submitting credentials; `on_authenticated` fires with the
/// identity to show once the server accepts them
#[hook]
pub fn use_login(on_authenticated: Callback<Identity>) -> LoginHandle {
    let state = use_reducer(LoginState::default);

    let submit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |credentials: Credentials| {
            let dispatcher = dispatcher.clone();
            let on_authenticated = on_authenticated.clone();

            dispatcher.dispatch(LoginAction::Submit);

            spawn_local(async move {
                match authenticate(&credentials).await {
                    Ok(identity) => {
                        dispatcher.dispatch(LoginAction::Accepted);
                        on_authenticated.emit(identity);
                    }
                    Err(e) => {
                        if !matches!(e, AppError::Rejected(_)) {
                            gloo::console::error!(&format!("Error logging in: {e}"));
                        }
                        dispatcher.dispatch(LoginAction::Rejected(
                            e.user_message(Config::LOGIN_FALLBACK_MESSAGE),
                        ));
                    }
                }
            });
        })
    };

    LoginHandle {
        state: (*state).clone(),
        submit,
    }
}

async fn authenticate(credentials: &Credentials) -> Result<Identity, AppError> {
    login(&DashboardClient::new()?, credentials).await
}
