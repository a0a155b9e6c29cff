//! Helpers for driving components in a headless `VirtualDom`.

use std::cell::RefCell;

use dioxus::document::{Document, Eval, NoOpDocument};
use dioxus::dioxus_core::{AttributeValue, Mutation, Mutations, VirtualDom};

use crate::locale::Locale;

enum HeadWrite {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Eval(String),
}

/// A `Document` that remembers every head write and script instead of
/// touching a real page.
#[derive(Default)]
pub struct RecordingDocument {
    writes: RefCell<Vec<HeadWrite>>,
}

impl RecordingDocument {
    /// The `og:locale` a browser would show after replaying every write.
    pub fn og_locale(&self) -> Option<String> {
        self.writes.borrow().iter().rev().find_map(|write| match write {
            HeadWrite::Element { name, attributes } if name == "meta" => {
                let is_og_locale = attributes
                    .iter()
                    .any(|(k, v)| k == "property" && v == "og:locale");
                is_og_locale
                    .then(|| attributes.iter().find(|(k, _)| k == "content"))
                    .flatten()
                    .map(|(_, v)| v.clone())
            }
            HeadWrite::Eval(js) if js.contains("og:locale") => Locale::ALL
                .into_iter()
                .map(Locale::og_locale)
                .find(|og| js.contains(&format!("\"{og}\"")))
                .map(str::to_string),
            _ => None,
        })
    }

    /// The last value assigned to `<html lang>`.
    pub fn html_lang(&self) -> Option<String> {
        const ASSIGN: &str = "document.documentElement.lang = \"";
        self.writes.borrow().iter().rev().find_map(|write| match write {
            HeadWrite::Eval(js) => {
                let rest = &js[js.find(ASSIGN)? + ASSIGN.len()..];
                rest.split('"').next().map(str::to_string)
            }
            _ => None,
        })
    }
}

impl Document for RecordingDocument {
    fn eval(&self, js: String) -> Eval {
        self.writes.borrow_mut().push(HeadWrite::Eval(js.clone()));
        NoOpDocument.eval(js)
    }

    fn create_head_element(&self, name: &str, attributes: &[(&str, String)], _: Option<String>) {
        self.writes.borrow_mut().push(HeadWrite::Element {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
    }
}

/// Run enough render passes for dirty scopes, the tasks they wake and the
/// effects those tasks queue. Returns every edit produced along the way.
pub fn settle(dom: &mut VirtualDom) -> Mutations {
    let mut all = Mutations::default();
    for _ in 0..4 {
        let round = dom.render_immediate_to_vec();
        all.edits.extend(round.edits);
    }
    all
}

/// Text content written by `mutations`: new and updated text nodes plus
/// text attributes.
pub fn written_text(mutations: &Mutations) -> Vec<String> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::CreateTextNode { value, .. } | Mutation::SetText { value, .. } => {
                Some(value.clone())
            }
            Mutation::SetAttribute {
                value: AttributeValue::Text(value),
                ..
            } => Some(value.clone()),
            _ => None,
        })
        .collect()
}
