use api::SignupForm;
use dioxus::prelude::*;

use crate::navigation;
use crate::use_api;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Signup form. All fields are required and the passwords must match.
#[component]
pub fn SignupView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let client = use_api();
    let mut form = use_signal(SignupForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match client.signup(&form()).await {
                Ok(()) => {
                    navigation::notify("Sign up complete. Please log in.");
                    on_registered.call(());
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message("Sign up failed. Please try again.")));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_signup,

                h1 { "Sign up" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                label { r#for: "loginId", "ID" }
                input {
                    id: "loginId",
                    r#type: "text",
                    value: form().login_id,
                    oninput: move |evt: FormEvent| form.write().login_id = evt.value(),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                label { r#for: "confirmPassword", "Confirm password" }
                input {
                    id: "confirmPassword",
                    r#type: "password",
                    value: form().confirm_password,
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }

                label { r#for: "username", "Name" }
                input {
                    id: "username",
                    r#type: "text",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing up..." } else { "Sign up" }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_login.call(()),
                        "Login"
                    }
                }
            }
        }
    }
}
