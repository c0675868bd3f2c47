//! Create-document form: a variable number of endpoints, each with a variable
//! number of parameters.
//!
//! The draft is prefilled from the user's previous document for the same project
//! when the backend has one. Until that lookup settles the form is
//! `Initializing` and cannot be submitted; a failed lookup just leaves the blank
//! draft in place.

use dioxus::prelude::*;
use store::draft::parse_project_id;
use store::{DocumentDraft, EndpointField, FormPhase, ParameterField};

use crate::use_api;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn DocumentFormView(
    /// Raw route segment naming the owning project.
    project_id: String,
    on_created: EventHandler<u64>,
    on_cancel: EventHandler<Option<u64>>,
    on_sign_in_required: EventHandler<()>,
) -> Element {
    let client = use_api();
    let mut draft = use_signal(|| DocumentDraft::new(Some(&project_id)));
    let mut error = use_signal(|| route_error(&project_id));

    let mut id_signal = use_signal(|| project_id.clone());
    if *id_signal.peek() != project_id {
        id_signal.set(project_id.clone());
        draft.set(DocumentDraft::new(Some(&project_id)));
        error.set(route_error(&project_id));
    }

    let prefill_client = client.clone();
    let _prefill = use_resource(move || {
        let client = prefill_client.clone();
        let route_id = id_signal();
        async move {
            if let Ok(project_id) = parse_project_id(Some(&route_id)) {
                if let Some(previous) = client.previous_document_for(project_id).await {
                    tracing::debug!("Prefilling from the document of {}", previous.date);
                    draft.write().load_previous(&previous.endpoints);
                }
            }
            draft.write().mark_ready();
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !draft.write().begin_submit() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let snapshot = draft.peek().clone();
            match client.submit_draft(&snapshot).await {
                Ok(project_id) => {
                    draft.write().finish_submit(true);
                    on_created.call(project_id);
                }
                Err(e) => {
                    draft.write().finish_submit(false);
                    error.set(Some(e.user_message("Failed to create the API document.")));
                    if e.requires_sign_in() {
                        on_sign_in_required.call(());
                    }
                }
            }
        });
    };

    let phase = draft.read().phase();
    let endpoint_ids = draft.read().endpoint_ids();
    let cancel_target = draft.read().project_id().ok();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            form {
                class: "card form-card",
                onsubmit: handle_submit,

                h1 { "Write API document" }

                if phase == FormPhase::Initializing {
                    p { class: "muted", "Loading previous document..." }
                }

                for (position, id) in endpoint_ids.into_iter().enumerate() {
                    EndpointEditor { key: "{id}", draft, position }
                }

                div {
                    class: "button-row",
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| {
                            draft.write().add_endpoint();
                        },
                        "Add endpoint"
                    }
                }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div {
                    class: "button-row",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: phase != FormPhase::Ready,
                        if phase == FormPhase::Submitting { "Creating..." } else { "Create" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(cancel_target),
                        "Cancel"
                    }
                }
            }
        }
    }
}

fn route_error(project_id: &str) -> Option<String> {
    parse_project_id(Some(project_id)).err().map(|e| e.to_string())
}

#[component]
fn EndpointEditor(draft: Signal<DocumentDraft>, position: usize) -> Element {
    let (view, method_hint, path_hint, can_remove) = {
        let current = draft.read();
        let Some(view) = current.endpoint_view(position) else {
            return rsx! {};
        };
        (
            view,
            current.endpoint_hint(position, EndpointField::Method).to_string(),
            current.endpoint_hint(position, EndpointField::Path).to_string(),
            current.can_remove_endpoint(),
        )
    };
    let number = position + 1;

    rsx! {
        fieldset {
            class: "endpoint-editor",
            legend { "Endpoint {number}" }

            label { "HTTP method" }
            input {
                r#type: "text",
                placeholder: "{method_hint}",
                value: view.method,
                oninput: move |evt: FormEvent| {
                    draft
                        .write()
                        .set_endpoint_field(position, EndpointField::Method, evt.value());
                },
            }

            label { "Path" }
            input {
                r#type: "text",
                placeholder: "{path_hint}",
                value: view.path,
                oninput: move |evt: FormEvent| {
                    draft.write().set_endpoint_field(position, EndpointField::Path, evt.value());
                },
            }

            for (index, parameter) in view.parameters.iter().enumerate() {
                ParameterEditor {
                    key: "{parameter.id}",
                    draft,
                    endpoint: position,
                    position: index,
                }
            }

            div {
                class: "button-row",
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| {
                        draft.write().add_parameter(position);
                    },
                    "Add parameter"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    disabled: !can_remove,
                    onclick: move |_| {
                        draft.write().remove_endpoint(position);
                    },
                    "Remove endpoint"
                }
            }
        }
    }
}

#[component]
fn ParameterEditor(draft: Signal<DocumentDraft>, endpoint: usize, position: usize) -> Element {
    let (parameter, hints, can_remove) = {
        let current = draft.read();
        let Some(parameter) = current.parameter_view(endpoint, position) else {
            return rsx! {};
        };
        let hints = [
            ParameterField::Annotation,
            ParameterField::Type,
            ParameterField::Data,
        ]
        .map(|field| current.parameter_hint(endpoint, position, field).to_string());
        (parameter, hints, current.can_remove_parameter(endpoint))
    };
    let [annotation_hint, type_hint, data_hint] = hints;

    rsx! {
        div {
            class: "parameter-editor",

            label { "Annotation" }
            input {
                r#type: "text",
                placeholder: "{annotation_hint}",
                value: parameter.annotation,
                oninput: move |evt: FormEvent| {
                    let value = evt.value();
                    draft
                        .write()
                        .set_parameter_field(endpoint, position, ParameterField::Annotation, value);
                },
            }

            label { "Parameter type" }
            input {
                r#type: "text",
                placeholder: "{type_hint}",
                value: parameter.r#type,
                oninput: move |evt: FormEvent| {
                    draft
                        .write()
                        .set_parameter_field(endpoint, position, ParameterField::Type, evt.value());
                },
            }

            label { "Parameter data" }
            input {
                r#type: "text",
                placeholder: "{data_hint}",
                value: parameter.data,
                oninput: move |evt: FormEvent| {
                    draft
                        .write()
                        .set_parameter_field(endpoint, position, ParameterField::Data, evt.value());
                },
            }

            button {
                class: "btn btn-danger btn-small",
                r#type: "button",
                disabled: !can_remove,
                onclick: move |_| {
                    draft.write().remove_parameter(endpoint, position);
                },
                "Remove parameter"
            }
        }
    }
}
