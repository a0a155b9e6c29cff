use dioxus::logger::tracing::{error, Level};
use dioxus::prelude::*;

use ui::LandingPage;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| {
        if let Err(err) = ui::i18n::init() {
            error!(%err, "translation records failed validation");
        }
    });

    rsx! {
        LandingPage {}
    }
}
