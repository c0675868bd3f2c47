use dioxus::prelude::*;

/// CSS class for an HTTP method label.
pub fn method_class(method: &str) -> &'static str {
    match method.trim().to_ascii_uppercase().as_str() {
        "GET" => "method-get",
        "POST" => "method-post",
        "PUT" => "method-put",
        "PATCH" => "method-patch",
        "DELETE" => "method-delete",
        _ => "method-other",
    }
}

#[component]
pub fn MethodBadge(method: String) -> Element {
    let class = method_class(&method);
    let label = method.to_uppercase();

    rsx! {
        span { class: "method-badge {class}", "{label}" }
    }
}
