use dioxus::prelude::*;
use store::Project;

use crate::navigation;
use crate::use_api;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The caller's projects, with create and delete.
#[component]
pub fn ProjectListView(on_open: EventHandler<u64>, on_create: EventHandler<()>) -> Element {
    let client = use_api();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.list_projects().await {
                Ok(list) => projects.set(list),
                Err(e) => {
                    tracing::error!("Failed to load projects: {e}");
                    error.set(Some(e.user_message("Failed to load the project list.")));
                }
            }
            loading.set(false);
        }
    });

    let handle_delete = use_callback(move |id: u64| {
        if !navigation::confirm(
            "Delete this project? All documents in the project will be deleted too.",
        ) {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match client.delete_project(id).await {
                Ok(()) => projects.write().retain(|p| p.id != id),
                Err(e) => error.set(Some(e.user_message("Failed to delete the project."))),
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            div {
                class: "page-title",
                h1 { "Projects" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_create.call(()),
                    "New project"
                }
            }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            if loading() {
                p { class: "muted", "Loading..." }
            } else if projects().is_empty() {
                p { class: "empty", "No projects yet." }
            } else {
                div {
                    class: "project-grid",
                    for project in projects() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                            on_open: on_open,
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(
    project: Project,
    on_open: EventHandler<u64>,
    on_delete: EventHandler<u64>,
) -> Element {
    let id = project.id;
    let (visibility, badge_class) = if project.is_private {
        ("Private", "badge badge-private")
    } else {
        ("Public", "badge badge-public")
    };

    rsx! {
        div {
            class: "card project-card",
            onclick: move |_| on_open.call(id),
            h2 { "{project.project_name}" }
            span { class: "{badge_class}", "{visibility}" }
            p { class: "description", "{project.description}" }
            button {
                class: "btn btn-danger",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    on_delete.call(id);
                },
                "Delete"
            }
        }
    }
}
