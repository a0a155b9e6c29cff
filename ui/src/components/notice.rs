use dioxus::prelude::*;

use crate::core::Notice;
use crate::i18n;
use crate::locale::Locale;
use crate::t;

/// Inline toast for the outcome of the last submit attempt.
#[component]
pub fn NoticeBanner(locale: Locale, notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let (modifier, role) = if notice.is_error() {
        ("notice--error", "alert")
    } else {
        ("notice--success", "status")
    };

    rsx! {
        div { class: "notice {modifier}", role: role,
            p { class: "notice__message", {i18n::text(locale, notice.message_key())} }
            button {
                r#type: "button",
                class: "notice__dismiss",
                onclick: move |_| on_dismiss.call(()),
                {t!(locale, "notice-dismiss")}
            }
        }
    }
}
