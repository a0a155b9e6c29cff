use dioxus::prelude::*;

use crate::config::meta;
use crate::locale::Locale;

/// Head tags for the page. Everything is static except `og:locale` and the
/// document language.
///
/// `document::Meta` only writes its tag on the first render, so `og:locale`
/// starts from the initial locale and every later change goes through the
/// same eval that sets `<html lang>`.
#[component]
pub fn PageMeta(locale: ReadOnlySignal<Locale>) -> Element {
    let initial_og_locale = use_hook(|| locale.peek().og_locale());

    use_effect(move || {
        let _ = document::eval(&sync_locale_script(locale()));
    });

    rsx! {
        document::Title { "{meta::TITLE}" }
        document::Meta { name: "description", content: meta::DESCRIPTION }
        document::Meta { name: "keywords", content: meta::KEYWORDS }
        document::Meta { property: "og:title", content: meta::OG_TITLE }
        document::Meta { property: "og:description", content: meta::OG_DESCRIPTION }
        document::Meta { property: "og:type", content: meta::OG_TYPE }
        document::Meta { property: "og:locale", content: initial_og_locale }
    }
}

/// Point `<html lang>` and the `og:locale` tag at `locale`. The tag is
/// created if the head does not have one yet.
fn sync_locale_script(locale: Locale) -> String {
    format!(
        r#"(() => {{
    document.documentElement.lang = "{lang}";
    let tag = document.head.querySelector('meta[property="og:locale"]');
    if (!tag) {{
        tag = document.createElement("meta");
        tag.setAttribute("property", "og:locale");
        document.head.appendChild(tag);
    }}
    tag.setAttribute("content", "{og_locale}");
}})();"#,
        lang = locale.code(),
        og_locale = locale.og_locale(),
    )
}
