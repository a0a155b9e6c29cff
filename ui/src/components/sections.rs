//! Static marketing sections. Pure renderers of the selected locale.

use dioxus::prelude::*;

use crate::config::{CONTACT_EMAIL, CONTACT_MAILTO_URI, PHONE_DISPLAY, PHONE_TEL_URI};
use crate::locale::Locale;
use crate::t;

#[component]
pub fn Hero(locale: Locale) -> Element {
    rsx! {
        header { class: "hero",
            div { class: "container hero__inner",
                h1 { class: "hero__title", {t!(locale, "hero-title")} }
                p { class: "hero__subtitle", {t!(locale, "hero-subtitle")} }
                div { class: "hero__actions",
                    a { class: "button button--light", href: PHONE_TEL_URI,
                        span { class: "icon", aria_hidden: "true", "☎" }
                        {t!(locale, "call-now")}
                    }
                }
            }
        }
    }
}

#[component]
pub fn Services(locale: Locale) -> Element {
    rsx! {
        section { class: "section container services",
            h2 { class: "section__title", {t!(locale, "services-title")} }
            div { class: "grid grid--two",
                article { class: "card service-card",
                    span { class: "service-card__icon", aria_hidden: "true", "🔑" }
                    h3 { {t!(locale, "lockout-service")} }
                    p { class: "muted", {t!(locale, "lockout-desc")} }
                }
                article { class: "card service-card",
                    span { class: "service-card__icon", aria_hidden: "true", "🔋" }
                    h3 { {t!(locale, "jump-service")} }
                    p { class: "muted", {t!(locale, "jump-desc")} }
                }
            }
        }
    }
}

#[component]
pub fn HoursAndContact(locale: Locale) -> Element {
    let weekend_days = format!("{} & {}", t!(locale, "day-sat"), t!(locale, "day-sun"));
    let overnight = t!(locale, "shift-overnight");
    let evening = t!(locale, "shift-evening");

    rsx! {
        section { class: "section section--tinted",
            div { class: "container grid grid--two",
                article { class: "card hours",
                    h3 { class: "card__title", {t!(locale, "hours-title")} }
                    div { class: "hours__group hours__group--divided",
                        h4 { {t!(locale, "day-mon-fri")} }
                        p { class: "hours__row",
                            span { class: "hours__shift", "{overnight}:" }
                            span { {t!(locale, "hours-weekday-overnight")} }
                        }
                        p { class: "hours__row",
                            span { class: "hours__shift", "{evening}:" }
                            span { {t!(locale, "hours-weekday-evening")} }
                        }
                    }
                    div { class: "hours__group",
                        h4 { "{weekend_days}" }
                        p { class: "hours__row", span { {t!(locale, "hours-weekend")} } }
                    }
                }
                article { class: "card contact",
                    h3 { class: "card__title", {t!(locale, "contact-title")} }
                    p { class: "contact__row",
                        span { class: "icon", aria_hidden: "true", "☎" }
                        a { href: PHONE_TEL_URI, "{PHONE_DISPLAY}" }
                    }
                    p { class: "contact__row",
                        span { class: "icon", aria_hidden: "true", "✉" }
                        a { href: CONTACT_MAILTO_URI, "{CONTACT_EMAIL}" }
                    }
                    p { class: "contact__row",
                        span { class: "icon", aria_hidden: "true", "📍" }
                        {t!(locale, "serving-area")}
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter(locale: Locale) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container", p { {t!(locale, "footer")} } }
        }
    }
}
