use api::{ApiError, InviteOutcome};
use dioxus::prelude::*;
use store::draft::parse_project_id;
use store::{Document, Project};

use crate::{use_api, MethodBadge};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// One project with its documents and the invitation panel.
///
/// The project and its document list are fetched concurrently; the view shows
/// an error if either request fails.
#[component]
pub fn ProjectDetailView(
    /// Raw route segment.
    id: String,
    on_open_document: EventHandler<u64>,
    on_write_document: EventHandler<u64>,
    on_back: EventHandler<()>,
) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let client = use_api();
    let mut project = use_signal(|| Option::<Project>::None);
    let mut documents = use_signal(Vec::<Document>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_invite = use_signal(|| false);

    let _loader = use_resource(move || {
        let raw = id_signal();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            let project_id = match parse_project_id(Some(&raw)) {
                Ok(id) => id,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    loading.set(false);
                    return;
                }
            };

            let (project_result, documents_result) = futures::join!(
                client.get_project(project_id),
                client.list_project_documents(project_id),
            );
            match project_result {
                Ok(p) => project.set(Some(p)),
                Err(e) => {
                    tracing::error!("Failed to load project {project_id}: {e}");
                    error.set(Some(e.user_message("Failed to load the project.")));
                }
            }
            match documents_result {
                Ok(docs) => documents.set(docs),
                Err(e) => {
                    tracing::error!("Failed to load documents of project {project_id}: {e}");
                    error.set(Some(e.user_message("Failed to load the document list.")));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            p { class: "muted page", "Loading..." }
        };
    }
    if let Some(err) = error() {
        return rsx! {
            div {
                class: "page",
                div { class: "error-message", "{err}" }
                button { class: "btn btn-secondary", onclick: move |_| on_back.call(()), "Back" }
            }
        };
    }
    let Some(project) = project() else {
        return rsx! {
            p { class: "page empty", "Project not found." }
        };
    };

    let project_id = project.id;
    let (visibility, badge_class) = if project.is_private {
        ("Private", "badge badge-private")
    } else {
        ("Public", "badge badge-public")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            div {
                class: "card",
                h1 { "{project.project_name}" }
                span { class: "{badge_class}", "{visibility}" }
                p { class: "description", "{project.description}" }

                div {
                    class: "button-row",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_invite.toggle(),
                        if show_invite() { "Close invite" } else { "Invite user" }
                    }
                }

                if show_invite() {
                    InvitePanel { project_id }
                }

                section {
                    class: "documents",
                    h3 { class: "section-title", "API documents" }
                    if documents().is_empty() {
                        div {
                            class: "empty",
                            p { "No API documents yet." }
                            p {
                                class: "muted",
                                "Use \"Write API document\" below to add the first one."
                            }
                        }
                    }
                    for doc in documents() {
                        DocumentSummary {
                            key: "{doc.id}",
                            document: doc.clone(),
                            on_open: on_open_document,
                        }
                    }
                }

                div {
                    class: "button-row",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_write_document.call(project_id),
                        "Write API document"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_back.call(()),
                        "Back"
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentSummary(document: Document, on_open: EventHandler<u64>) -> Element {
    let id = document.id;
    let date = document.display_date();

    rsx! {
        div {
            class: "card document-card",
            onclick: move |_| on_open.call(id),
            span { class: "date-badge", "Written {date}" }
            for (index, endpoint) in document.endpoints.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "endpoint-summary",
                    div {
                        MethodBadge { method: endpoint.method.clone() }
                        code { class: "path", "{endpoint.path}" }
                    }
                    ul {
                        class: "parameter-list",
                        for (p, param) in endpoint.parameters.iter().enumerate() {
                            li {
                                key: "{p}",
                                strong { "{param.annotation}" }
                                " type: "
                                span { class: "muted", "{param.r#type}" }
                                " data: "
                                span { "{param.data}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Inline text for a failed invitation.
pub fn invite_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Validation(message) => message.clone(),
        ApiError::Forbidden(_) => {
            "You do not have permission to invite users to this project.".to_string()
        }
        ApiError::NotFound(_) => "That user does not exist.".to_string(),
        _ => "An error occurred while sending the invitation.".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
enum InviteMessage {
    Success(String),
    Error(String),
}

#[component]
fn InvitePanel(project_id: u64) -> Element {
    let client = use_api();
    let mut username = use_signal(String::new);
    let mut inviting = use_signal(|| false);
    let mut message = use_signal(|| Option::<InviteMessage>::None);

    let handle_invite = move |_| {
        let client = client.clone();
        spawn(async move {
            inviting.set(true);
            message.set(None);
            match client.invite(project_id, &username()).await {
                Ok(InviteOutcome::Sent) => {
                    username.set(String::new());
                    message.set(Some(InviteMessage::Success(
                        "The user has been invited.".to_string(),
                    )));
                }
                Ok(InviteOutcome::NotInvitable) => {
                    message.set(Some(InviteMessage::Error(
                        "This project cannot take an invitation right now.".to_string(),
                    )));
                }
                Err(e) => message.set(Some(InviteMessage::Error(invite_error_message(&e)))),
            }
            inviting.set(false);
        });
    };

    rsx! {
        div {
            class: "invite-panel",
            h3 { class: "section-title", "Invite user" }
            div {
                class: "invite-row",
                input {
                    r#type: "text",
                    placeholder: "Username to invite",
                    value: username(),
                    disabled: inviting(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    disabled: inviting(),
                    onclick: handle_invite,
                    if inviting() { "Inviting..." } else { "Invite" }
                }
            }
            if let Some(InviteMessage::Success(text)) = message() {
                div { class: "message message-success", "{text}" }
            }
            if let Some(InviteMessage::Error(text)) = message() {
                div { class: "message message-error", "{text}" }
            }
        }
    }
}
