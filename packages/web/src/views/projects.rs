use dioxus::prelude::*;
use ui::views::{CreateProjectView, ProjectListView};

use crate::Route;

#[component]
pub fn Projects() -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectListView {
            on_open: move |id: u64| {
                nav.push(Route::ProjectDetail { id: id.to_string() });
            },
            on_create: move |_| {
                nav.push(Route::CreateProject {});
            },
        }
    }
}

#[component]
pub fn CreateProject() -> Element {
    let nav = use_navigator();

    rsx! {
        CreateProjectView {
            on_created: move |_| {
                nav.replace(Route::Projects {});
            },
            on_cancel: move |_| {
                nav.push(Route::Projects {});
            },
        }
    }
}
