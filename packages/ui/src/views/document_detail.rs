use dioxus::prelude::*;
use store::Document;

use crate::{use_api, MethodBadge};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Read-only rendering of one stored document.
#[component]
pub fn DocumentDetailView(id: String, on_back: EventHandler<Option<u64>>) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let client = use_api();
    let mut loaded = use_signal(|| Option::<Document>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let raw = id_signal();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            let result = match raw.trim().parse::<u64>().ok().filter(|id| *id > 0) {
                Some(document_id) => client
                    .get_document(document_id)
                    .await
                    .map_err(|e| e.user_message("Failed to load the document.")),
                None => Err(format!("\"{raw}\" is not a valid document ID.")),
            };
            match result {
                Ok(doc) => loaded.set(Some(doc)),
                Err(message) => {
                    tracing::error!("Failed to load document {raw}: {message}");
                    error.set(Some(message));
                }
            }
            loading.set(false);
        }
    });

    let back_target = loaded().and_then(|d| d.project_id);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            if loading() {
                p { class: "muted", "Loading..." }
            } else if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            } else if let Some(doc) = loaded() {
                div {
                    class: "card",
                    div {
                        class: "page-title",
                        h1 { "API document" }
                        span { class: "date-badge", "Written " {doc.display_date()} }
                    }
                    if let Some(writer) = doc.writer.as_deref() {
                        p { class: "muted", "Writer: {writer}" }
                    }
                    for (index, endpoint) in doc.endpoints.iter().enumerate() {
                        section {
                            key: "{index}",
                            class: "endpoint-detail",
                            h3 {
                                MethodBadge { method: endpoint.method.clone() }
                                code { class: "path", "{endpoint.path}" }
                            }
                            table {
                                class: "parameter-table",
                                thead {
                                    tr {
                                        th { "Annotation" }
                                        th { "Type" }
                                        th { "Data" }
                                    }
                                }
                                tbody {
                                    for (p, param) in endpoint.parameters.iter().enumerate() {
                                        tr {
                                            key: "{p}",
                                            td { "{param.annotation}" }
                                            td { "{param.r#type}" }
                                            td { code { "{param.data}" } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                p { class: "empty", "Document not found." }
            }

            div {
                class: "button-row",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_back.call(back_target),
                    "Back"
                }
            }
        }
    }
}
