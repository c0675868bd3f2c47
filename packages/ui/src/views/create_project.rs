use dioxus::prelude::*;
use store::NewProject;

use crate::use_api;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn CreateProjectView(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let client = use_api();
    let mut project = use_signal(NewProject::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);
            match client.create_project(&project()).await {
                Ok(()) => on_created.call(()),
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.user_message("Failed to create the project.")));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            form {
                class: "card form-card",
                onsubmit: handle_submit,

                h1 { "New project" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                label { r#for: "projectName", "Project name" }
                input {
                    id: "projectName",
                    r#type: "text",
                    placeholder: "Enter a project name",
                    value: project().project_name,
                    oninput: move |evt: FormEvent| project.write().project_name = evt.value(),
                }

                label { r#for: "description", "Description" }
                textarea {
                    id: "description",
                    placeholder: "Describe the project",
                    value: project().description,
                    oninput: move |evt: FormEvent| project.write().description = evt.value(),
                }

                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: project().is_private,
                        onchange: move |evt: FormEvent| project.write().is_private = evt.checked(),
                    }
                    "Private project"
                }

                div {
                    class: "button-row",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Creating..." } else { "Create" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
