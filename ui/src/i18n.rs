//! Internationalization (i18n) support for `roadside-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading into one loader per locale)
//! - `fluent` / `fluent-syntax` (message formatting, record parsing)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/roadside-ui.ftl   (fallback/reference)
//!   es-ES/roadside-ui.ftl
//! ```
//!
//! Each [`Locale`] owns its own immutable `FluentLanguageLoader`. Nothing here
//! tracks which language is *currently* shown; the landing view owns that as
//! a signal and passes the locale into every lookup:
//! ```ignore
//! use crate::t;
//! let title = t!(locale, "hero-title");
//! ```
//!
//! Public API surface:
//! - `init()` – load both records and verify key parity (call once at startup).
//! - `loader(locale)` – the loader backing `t!` for that locale.
//! - `text(locale, key)` – runtime-keyed lookup for ids chosen from data.
//! - `message_ids(locale)` – the key set of one embedded record.
//! - `check_parity()` – the key-set equality check on its own.
//! - `available_languages()` – embedded language folders.
use std::collections::BTreeSet;

use fluent::FluentResource;
use fluent_syntax::ast::Entry;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use tracing::{debug, warn};

use crate::locale::Locale;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Locale-aware translation macro.
/// Examples:
///     t!(locale, "hero-title")
///     t!(Locale::Es, "submit")
///
/// Expands to `fl!(loader(locale), ...)`, so every key is checked at compile
/// time against the fallback `en-US` resource.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "roadside-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("no embedded translation resource for {0}")]
    MissingResource(&'static str),

    #[error("translation record {locale} does not parse: {errors:?}")]
    Syntax {
        locale: &'static str,
        errors: Vec<String>,
    },

    #[error("translation keys for {locale} differ from en-US (missing: {missing:?}, extra: {extra:?})")]
    KeyMismatch {
        locale: &'static str,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    #[error("failed to load translations: {0}")]
    Embed(#[from] I18nEmbedError),
}

struct Loaders {
    en: FluentLanguageLoader,
    es: FluentLanguageLoader,
}

static LOADERS: Lazy<Loaders> = Lazy::new(|| Loaders {
    en: build_loader(Locale::En),
    es: build_loader(Locale::Es),
});

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Locale::En.language_id());
    if let Err(err) = load_into(&loader, locale) {
        warn!(locale = locale.tag(), %err, "failed loading translations; continuing with fallback");
    }
    loader
}

fn load_into(loader: &FluentLanguageLoader, locale: Locale) -> Result<(), I18nError> {
    let selected = i18n_embed::select(loader, &Localizations, &[locale.language_id()])?;
    debug!(locale = locale.tag(), ?selected, "translation record loaded");
    Ok(())
}

/// Load both translation records and verify they expose the same keys.
pub fn init() -> Result<(), I18nError> {
    Lazy::force(&LOADERS);
    check_parity()
}

/// The immutable loader for `locale`.
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    match locale {
        Locale::En => &LOADERS.en,
        Locale::Es => &LOADERS.es,
    }
}

/// Runtime-keyed lookup. Prefer `t!` when the key is a literal.
pub fn text(locale: Locale, key: &str) -> String {
    loader(locale).get(key)
}

/// Message ids defined by the embedded record of `locale`.
pub fn message_ids(locale: Locale) -> Result<BTreeSet<String>, I18nError> {
    let path = format!("{}/{DOMAIN}.ftl", locale.tag());
    let file = Localizations::get(&path).ok_or(I18nError::MissingResource(locale.tag()))?;
    parse_message_ids(locale.tag(), String::from_utf8_lossy(&file.data).into_owned())
}

/// Key-set equality between every locale and the `en-US` fallback.
pub fn check_parity() -> Result<(), I18nError> {
    let reference = message_ids(Locale::En)?;
    for locale in Locale::ALL.into_iter().filter(|l| *l != Locale::En) {
        let keys = message_ids(locale)?;
        let missing: Vec<String> = reference.difference(&keys).cloned().collect();
        let extra: Vec<String> = keys.difference(&reference).cloned().collect();
        if !missing.is_empty() || !extra.is_empty() {
            return Err(I18nError::KeyMismatch {
                locale: locale.tag(),
                missing,
                extra,
            });
        }
    }
    Ok(())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Parse a Fluent record and collect its message ids. Terms, comments and
/// attributes are not messages; any junk fails the whole record.
fn parse_message_ids(tag: &'static str, source: String) -> Result<BTreeSet<String>, I18nError> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| I18nError::Syntax {
        locale: tag,
        errors: errors.iter().map(ToString::to_string).collect(),
    })?;
    Ok(resource
        .entries()
        .filter_map(|entry| match entry {
            Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect())
}
