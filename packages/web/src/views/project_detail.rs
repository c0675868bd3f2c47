use dioxus::prelude::*;
use ui::views::ProjectDetailView;

use crate::Route;

#[component]
pub fn ProjectDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectDetailView {
            id,
            on_open_document: move |document_id: u64| {
                nav.push(Route::DocumentDetail { id: document_id.to_string() });
            },
            on_write_document: move |project_id: u64| {
                nav.push(Route::CreateDocument { id: project_id.to_string() });
            },
            on_back: move |_| {
                nav.push(Route::Projects {});
            },
        }
    }
}
