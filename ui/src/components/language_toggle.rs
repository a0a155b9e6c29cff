use dioxus::prelude::*;

use crate::locale::Locale;
use crate::t;

/// Fixed corner button naming the language it switches *to*.
#[component]
pub fn LanguageToggle(locale: Locale, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div { class: "language-toggle",
            button {
                r#type: "button",
                class: "language-toggle__button",
                aria_label: t!(locale, "language-toggle-label"),
                lang: locale.toggle().code(),
                onclick: move |_| on_toggle.call(()),
                span { class: "icon", aria_hidden: "true", "🌐" }
                span { class: "language-toggle__label", {t!(locale, "language-switch")} }
            }
        }
    }
}
