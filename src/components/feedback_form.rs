use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::hooks::use_feedback::use_feedback;

#[function_component(FeedbackForm)]
pub fn feedback_form() -> Html {
    let feedback = use_feedback();

    let oninput = {
        let edit = feedback.edit.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            edit.emit(target.value());
        })
    };

    let onsubmit = {
        let submit = feedback.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="feedback">
            <form id="feedback-form" {onsubmit}>
                <label for="feedback-text">{"Share your feedback"}</label>
                <textarea
                    id="feedback-text"
                    rows="3"
                    value={feedback.state.draft().to_string()}
                    {oninput}
                />
                <button type="submit" class="btn btn-secondary" disabled={feedback.state.is_submitting()}>
                    {"Submit"}
                </button>
            </form>

            if let Some(notice) = feedback.state.notice() {
                <div id="feedback-notice" class={notice.kind.css_class()} role="status">
                    {&notice.text}
                </div>
            }
        </div>
    }
}
