use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::ListenView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ListenView)] Listen {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Listen & Speak" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
