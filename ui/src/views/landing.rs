use dioxus::prelude::*;
use tracing::debug;

use crate::components::{
    Hero, HoursAndContact, LanguageToggle, NoticeBanner, PageMeta, RequestForm, Services,
    SiteFooter,
};
use crate::core::{EmailJsRelay, EmailRelay, LeadForm};
use crate::locale::Locale;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// The whole site: owns the selected locale and the form draft.
#[component]
pub fn LandingPage() -> Element {
    let locale = use_signal(Locale::preferred);
    let form = use_signal(LeadForm::default);

    rsx! {
        LandingView { locale, form }
    }
}

/// Flip the displayed language.
fn toggle_language(mut locale: Signal<Locale>) {
    let next = locale.peek().toggle();
    debug!(locale = next.tag(), "language toggled");
    locale.set(next);
}

/// Renders every section from the page state and runs the submit handshake.
#[component]
fn LandingView(locale: Signal<Locale>, form: Signal<LeadForm>) -> Element {
    let mut form = form;
    let relay = use_hook(EmailJsRelay::default);

    // Same steps as `core::submit`, split around `spawn` so the signal is
    // never held across the relay call.
    let submit = move |_: ()| {
        let Ok(request) = form.with_mut(LeadForm::begin_submit) else {
            return;
        };
        spawn(async move {
            let outcome = relay.send(&request).await;
            form.with_mut(|f| f.finish_submit(outcome));
        });
    };

    let current = locale();
    let notice = form.read().notice();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }
        PageMeta { locale }

        div { class: "page",
            LanguageToggle { locale: current, on_toggle: move |_: ()| toggle_language(locale) }
            Hero { locale: current }
            Services { locale: current }
            HoursAndContact { locale: current }
            RequestForm { locale: current, form, on_submit: submit }
            if let Some(notice) = notice {
                div { class: "container",
                    NoticeBanner {
                        locale: current,
                        notice,
                        on_dismiss: move |_: ()| form.with_mut(LeadForm::dismiss_notice),
                    }
                }
            }
            SiteFooter { locale: current }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use dioxus::dioxus_core::VirtualDom;

    use super::*;
    use crate::core::Notice;
    use crate::i18n;
    use crate::test_support::{settle, written_text, RecordingDocument};

    #[derive(Clone, Default)]
    struct PageState {
        locale: Rc<Cell<Option<Signal<Locale>>>>,
        form: Rc<Cell<Option<Signal<LeadForm>>>>,
    }

    #[allow(non_snake_case)]
    fn Host() -> Element {
        let locale = use_signal(|| Locale::En);
        let form = use_signal(LeadForm::default);
        let state = use_context::<PageState>();
        use_hook(|| {
            state.locale.set(Some(locale));
            state.form.set(Some(form));
        });
        rsx! { LandingView { locale, form } }
    }

    fn mount() -> (VirtualDom, Rc<RecordingDocument>, PageState) {
        let head = Rc::new(RecordingDocument::default());
        let state = PageState::default();
        let mut dom = VirtualDom::new(Host)
            .with_root_context(state.clone())
            .with_root_context(head.clone() as Rc<dyn document::Document>);
        dom.rebuild_in_place();
        settle(&mut dom);
        (dom, head, state)
    }

    fn contains(text: &[String], expected: &str) -> bool {
        text.iter().any(|t| t == expected)
    }

    #[test]
    fn first_render_is_english() {
        let head = Rc::new(RecordingDocument::default());
        let mut dom = VirtualDom::new(Host)
            .with_root_context(PageState::default())
            .with_root_context(head.clone() as Rc<dyn document::Document>);

        let text = written_text(&dom.rebuild_to_vec());
        settle(&mut dom);

        assert!(contains(&text, &i18n::text(Locale::En, "hero-title")));
        assert!(contains(&text, &i18n::text(Locale::En, "language-switch")));
        assert!(!contains(&text, &i18n::text(Locale::Es, "hero-title")));
        assert_eq!(head.og_locale().as_deref(), Some("en_US"));
    }

    #[test]
    fn toggle_swaps_copy_and_head_then_restores_both() {
        let (mut dom, head, state) = mount();
        let locale = state.locale.get().expect("host stores the locale signal");

        dom.in_runtime(|| toggle_language(locale));
        let text = written_text(&settle(&mut dom));

        assert_eq!(*locale.peek(), Locale::Es);
        for key in ["hero-title", "services-title", "submit", "language-switch", "footer"] {
            assert!(
                contains(&text, &i18n::text(Locale::Es, key)),
                "{key} not rendered in Spanish"
            );
        }
        assert_eq!(head.og_locale().as_deref(), Some("es_ES"));
        assert_eq!(head.html_lang().as_deref(), Some("es"));

        dom.in_runtime(|| toggle_language(locale));
        let text = written_text(&settle(&mut dom));

        assert_eq!(*locale.peek(), Locale::En);
        for key in ["hero-title", "services-title", "submit", "language-switch", "footer"] {
            assert!(
                contains(&text, &i18n::text(Locale::En, key)),
                "{key} not restored to English"
            );
        }
        assert_eq!(head.og_locale().as_deref(), Some("en_US"));
        assert_eq!(head.html_lang().as_deref(), Some("en"));
    }

    #[test]
    fn toggle_keeps_the_draft() {
        let (mut dom, _head, state) = mount();
        let locale = state.locale.get().expect("host stores the locale signal");
        let mut form = state.form.get().expect("host stores the form signal");

        dom.in_runtime(|| form.with_mut(|f| f.update_field(crate::core::Field::Name, "Jane Doe")));
        settle(&mut dom);
        dom.in_runtime(|| toggle_language(locale));
        settle(&mut dom);

        assert_eq!(form.peek().draft().name, "Jane Doe");
    }

    #[test]
    fn notice_banner_renders_in_the_current_locale() {
        let (mut dom, _head, state) = mount();
        let locale = state.locale.get().expect("host stores the locale signal");
        let mut form = state.form.get().expect("host stores the form signal");

        dom.in_runtime(|| {
            let _ = form.with_mut(LeadForm::begin_submit);
        });
        let text = written_text(&settle(&mut dom));
        assert_eq!(form.peek().notice(), Some(Notice::Incomplete));
        assert!(contains(&text, &i18n::text(Locale::En, "notice-incomplete")));

        dom.in_runtime(|| toggle_language(locale));
        let text = written_text(&settle(&mut dom));
        assert!(contains(&text, &i18n::text(Locale::Es, "notice-incomplete")));
    }
}
