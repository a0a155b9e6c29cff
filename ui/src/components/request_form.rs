use dioxus::prelude::*;
use tracing::debug;

use crate::core::{Field, LeadForm, ServiceKind};
use crate::i18n;
use crate::locale::Locale;
use crate::t;

/// The lead-capture form. Field edits go straight into the shared draft;
/// submission is delegated to the owner through `on_submit`.
#[component]
pub fn RequestForm(locale: Locale, form: Signal<LeadForm>, on_submit: EventHandler<()>) -> Element {
    let mut form = form;
    let snapshot = form();
    let draft = snapshot.draft();
    let submitting = snapshot.is_submitting();

    let submit_label = if submitting {
        t!(locale, "submit-sending")
    } else {
        t!(locale, "submit")
    };

    rsx! {
        section { class: "section container request",
            h2 { class: "section__title", {t!(locale, "request-title")} }
            form {
                class: "card request-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div { class: "request-form__grid",
                    TextInput {
                        field: Field::Name,
                        label: t!(locale, "field-name"),
                        input_type: "text",
                        value: draft.name.clone(),
                        form,
                    }
                    TextInput {
                        field: Field::Phone,
                        label: t!(locale, "field-phone"),
                        input_type: "tel",
                        value: draft.phone.clone(),
                        form,
                    }
                    div { class: "request-form__field",
                        label { r#for: "request-service", {t!(locale, "field-service")} }
                        select {
                            id: "request-service",
                            name: "service",
                            value: draft.service.value(),
                            onchange: move |evt: FormEvent| match ServiceKind::from_value(&evt.value()) {
                                Some(kind) => form.with_mut(|f| f.select_service(kind)),
                                None => debug!(value = %evt.value(), "ignoring unknown service option"),
                            },
                            for kind in ServiceKind::ALL {
                                option {
                                    key: "{kind.value()}",
                                    value: kind.value(),
                                    selected: kind == draft.service,
                                    {i18n::text(locale, kind.label_key())}
                                }
                            }
                        }
                    }
                    TextInput {
                        field: Field::CarDetails,
                        label: t!(locale, "field-vehicle"),
                        input_type: "text",
                        placeholder: t!(locale, "vehicle-placeholder"),
                        value: draft.car_details.clone(),
                        form,
                    }
                    TextInput {
                        field: Field::Location,
                        label: t!(locale, "field-location"),
                        input_type: "text",
                        wide: true,
                        value: draft.location.clone(),
                        form,
                    }
                    div { class: "request-form__field request-form__field--wide",
                        label { r#for: "request-description", {t!(locale, "field-description")} }
                        textarea {
                            id: "request-description",
                            name: "description",
                            rows: "4",
                            value: draft.description.clone(),
                            oninput: move |evt: FormEvent| {
                                form.with_mut(|f| f.update_field(Field::Description, evt.value()))
                            },
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "button button--primary request-form__submit",
                    disabled: submitting,
                    aria_busy: submitting,
                    span { class: "icon", aria_hidden: "true", "➤" }
                    "{submit_label}"
                }
            }
        }
    }
}

#[component]
fn TextInput(
    field: Field,
    label: String,
    input_type: &'static str,
    value: String,
    form: Signal<LeadForm>,
    placeholder: Option<String>,
    #[props(default)] wide: bool,
) -> Element {
    let mut form = form;
    let id = format!("request-{}", field.as_str());
    let class = if wide {
        "request-form__field request-form__field--wide"
    } else {
        "request-form__field"
    };

    rsx! {
        div { class,
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                name: field.as_str(),
                r#type: input_type,
                required: field.is_required(),
                placeholder,
                value,
                oninput: move |evt: FormEvent| form.with_mut(|f| f.update_field(field, evt.value())),
            }
        }
    }
}
