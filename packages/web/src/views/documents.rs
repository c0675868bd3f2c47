use dioxus::prelude::*;
use ui::views::{DocumentDetailView, DocumentFormView};

use crate::Route;

#[component]
pub fn CreateDocument(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        DocumentFormView {
            project_id: id,
            on_created: move |project_id: u64| {
                nav.replace(Route::ProjectDetail { id: project_id.to_string() });
            },
            on_cancel: move |project_id: Option<u64>| {
                let target = match project_id {
                    Some(project_id) => Route::ProjectDetail {
                        id: project_id.to_string(),
                    },
                    None => Route::Projects {},
                };
                nav.push(target);
            },
            on_sign_in_required: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn DocumentDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        DocumentDetailView {
            id,
            on_back: move |project_id: Option<u64>| {
                match project_id {
                    Some(project_id) => {
                        nav.push(Route::ProjectDetail { id: project_id.to_string() });
                    }
                    None => nav.go_back(),
                }
            },
        }
    }
}
