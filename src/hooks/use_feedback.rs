use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::AppError;
use crate::services::{api::DashboardClient, feedback::send_feedback};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Confirmation,
    Failure,
}

impl NoticeKind {
    /// Returns CSS class name for the notice banner
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Confirmation => "alert alert-success",
            NoticeKind::Failure => "alert alert-danger",
        }
    }
}

/// A transient message under the feedback form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Sequence number of the submission that posted it.
    pub id: u64,
}

/// State of the feedback form.
///
/// Each notice is tagged with its submission's sequence number and only the
/// timer started for that number can hide it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FeedbackState {
    draft: String,
    notice: Option<Notice>,
    submitting: bool,
}

pub enum FeedbackAction {
    Edit(String),
    Submit,
    Confirmed { message: String, id: u64 },
    Failed { message: String, id: u64 },
    Expire { id: u64 },
}

impl FeedbackState {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn post(kind: NoticeKind, text: String, id: u64) -> Option<Notice> {
        Some(Notice { kind, text, id })
    }
}

impl Reducible for FeedbackState {
    type Action = FeedbackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FeedbackAction::Edit(draft) => Self {
                draft,
                ..(*self).clone()
            },
            FeedbackAction::Submit => Self {
                submitting: true,
                ..(*self).clone()
            },
            FeedbackAction::Confirmed { message, id } => Self {
                draft: String::new(),
                notice: Self::post(NoticeKind::Confirmation, message, id),
                submitting: false,
            },
            // The draft is kept so the user can try again
            FeedbackAction::Failed { message, id } => Self {
                notice: Self::post(NoticeKind::Failure, message, id),
                submitting: false,
                ..(*self).clone()
            },
            FeedbackAction::Expire { id } => {
                let due = self.notice.as_ref().is_some_and(|n| n.id == id);
                if !due {
                    return self;
                }
                Self {
                    notice: None,
                    ..(*self).clone()
                }
            }
        };

        Rc::new(next)
    }
}

/// Handle returned by `use_feedback` hook
#[derive(Clone, PartialEq)]
pub struct FeedbackHandle {
    pub state: FeedbackState,
    pub edit: Callback<String>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_feedback() -> FeedbackHandle {
    let state = use_reducer(FeedbackState::default);
    let sequence = use_mut_ref(|| 0_u64);

    let edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |draft| dispatcher.dispatch(FeedbackAction::Edit(draft)))
    };

    let submit = {
        let dispatcher = state.dispatcher();
        let draft = state.draft.clone();
        Callback::from(move |()| {
            let dispatcher = dispatcher.clone();
            let text = draft.clone();
            let id = {
                let mut n = sequence.borrow_mut();
                *n += 1;
                *n
            };

            dispatcher.dispatch(FeedbackAction::Submit);

            spawn_local(async move {
                match deliver(&text).await {
                    Ok(message) => dispatcher.dispatch(FeedbackAction::Confirmed { message, id }),
                    Err(e) => {
                        gloo::console::error!(&format!("Error submitting feedback: {e}"));
                        dispatcher.dispatch(FeedbackAction::Failed {
                            message: e.user_message(Config::FEEDBACK_FAILURE_MESSAGE),
                            id,
                        });
                    }
                }

                // Hide the notice once its time is up
                TimeoutFuture::new(Config::NOTICE_DURATION_MS).await;
                dispatcher.dispatch(FeedbackAction::Expire { id });
            });
        })
    };

    FeedbackHandle {
        state: (*state).clone(),
        edit,
        submit,
    }
}

async fn deliver(text: &str) -> Result<String, AppError> {
    send_feedback(&DashboardClient::new()?, text).await
}
