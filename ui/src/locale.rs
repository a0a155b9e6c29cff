//! Supported display languages.

use unic_langid::{langid, LanguageIdentifier};

/// A selected language variant governing every rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Every supported locale, fallback first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// The other locale. Applying it twice yields the original value.
    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }

    /// Short code used for the document `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Folder name of the embedded Fluent resource for this locale.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Es => "es-ES",
        }
    }

    /// Value of the `og:locale` social-preview tag.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Es => "es_ES",
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        match self {
            Locale::En => langid!("en-US"),
            Locale::Es => langid!("es-ES"),
        }
    }

    /// Pick the first supported locale from an ordered preference list.
    ///
    /// Only the primary language subtag is compared, so `es-MX` selects
    /// Spanish and `en-GB` selects English. Falls back to [`Locale::En`].
    pub fn from_preferences<'a, I>(preferred: I) -> Self
    where
        I: IntoIterator<Item = &'a LanguageIdentifier>,
    {
        preferred
            .into_iter()
            .find_map(|id| match id.language.as_str() {
                "es" => Some(Locale::Es),
                "en" => Some(Locale::En),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Initial locale for a fresh page view, taken from the platform's
    /// language list (`navigator.languages` on the web, OS locales natively).
    pub fn preferred() -> Self {
        let requested = requested_languages();
        Self::from_preferences(&requested)
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
