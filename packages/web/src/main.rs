use dioxus::prelude::*;

use store::ProjectManagerConfig;
use ui::SessionProvider;
use views::{
    CreateDocument, CreateProject, DocumentDetail, Login, NotFound, ProjectDetail, Projects,
    SignedInLayout, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(SignedInLayout)]
        #[route("/project")]
        Projects {},
        #[route("/createproject")]
        CreateProject {},
        #[route("/projectdetail/:id")]
        ProjectDetail { id: String },
        #[route("/document/create/:id")]
        CreateDocument { id: String },
        #[route("/document/:id")]
        DocumentDetail { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../projectmanager.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Embedded configuration, or the defaults if the file does not parse.
fn load_config() -> ProjectManagerConfig {
    ProjectManagerConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}", ProjectManagerConfig::filename());
        ProjectManagerConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}
