use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::Explorer;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.start_session();
    if let Err(err) = &session {
        tracing::error!(error = %err, "failed to start session");
    }

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "MSE Explorer" }

        div { class: "app-root",
            match session {
                Ok(session) => rsx! {
                    Explorer { session }
                },
                Err(err) => rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{err}" }
                    }
                },
            }
        }
    }
}
