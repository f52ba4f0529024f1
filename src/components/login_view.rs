use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_login::use_login;
use crate::models::session::{Credentials, Identity};

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub on_authenticated: Callback<Identity>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let login = use_login(props.on_authenticated.clone());
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let submit = login.submit.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            submit.emit(Credentials {
                username: value_of(&username_ref),
                password: value_of(&password_ref),
            });
        })
    };

    html! {
        <section id="login-view" class="login-view">
            <h2>{"Sign in"}</h2>
            <form class="login-form" {onsubmit}>
                <label for="username">{"Username"}</label>
                <input id="username" type="text" autocomplete="username" required=true ref={username_ref} />

                <label for="password">{"Password"}</label>
                <input id="password" type="password" autocomplete="current-password" required=true ref={password_ref} />

                <button type="submit" class="btn btn-primary" disabled={login.state.is_submitting()}>
                    {"Log in"}
                </button>
            </form>

            if let Some(message) = login.state.error() {
                <div id="login-error" class="alert alert-danger" role="alert">{message}</div>
            }
        </section>
    }
}
