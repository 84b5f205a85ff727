use dioxus::prelude::*;
use store::paths;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 { "Página no encontrada" }
            p { "No existe la página /{path}" }
            Link { to: paths::ROOT, "Volver al inicio" }
        }
    }
}
