use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_login, LoginStatus};

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let login = use_login();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let validation = use_state(|| None::<&'static str>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let validation = validation.clone();
        let on_login = login.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value();
                let password = password_input.value();

                if username.trim().is_empty() || password.is_empty() {
                    validation.set(Some("Please fill in both fields"));
                    return;
                }

                validation.set(None);
                on_login.emit((username.trim().to_string(), password));
            }
        })
    };

    let pending = *login.status == LoginStatus::Pending;
    let error = match (&*login.status, *validation) {
        (_, Some(message)) => Some(message.to_string()),
        (LoginStatus::Failed(e), None) => Some(e.clone()),
        _ => None,
    };

    html! {
        <div class="login-screen">
            <form class="login-form" onsubmit={on_submit}>
                <h1>{"Sign in"}</h1>
                <div class="form-group">
                    <label for="username">{"User name"}</label>
                    <input type="text" id="username" name="username" ref={username_ref} disabled={pending} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" name="password" ref={password_ref} disabled={pending} />
                </div>
                if let Some(error) = error {
                    <p class="login-error">{error}</p>
                }
                <button type="submit" class="btn-login" disabled={pending}>
                    { if pending { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
