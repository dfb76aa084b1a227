use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

const ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormData {
    pub fn with_field(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Message => next.message = value,
        }
        next
    }
}

/// Logs a failed acknowledgement dialog; returns true when the host refused it.
fn acknowledgement_failed(result: Result<(), JsValue>) -> bool {
    match result {
        Ok(()) => false,
        Err(err) => {
            warn!("Failed to show acknowledgement: {:?}", err);
            true
        }
    }
}

pub fn mailto_link(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(ContactFormData::default);

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };
            if let Some(field) = ContactField::from_name(&name) {
                form.set(form.with_field(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match serde_json::to_string(&*form) {
                Ok(json) => info!("Form submitted: {}", json),
                Err(err) => warn!("Failed to serialize form submission: {}", err),
            }
            if let Some(window) = window() {
                acknowledgement_failed(window.alert_with_message(ACKNOWLEDGEMENT));
            }
            form.set(ContactFormData::default());
        })
    };

    html! {
        <div class="contact-card">
            <h3 class="card-title">{"Send a Message"}</h3>
            <form class="contact-form" onsubmit={onsubmit}>
                <input
                    type="text"
                    name={ContactField::Name.name()}
                    placeholder="Your Name"
                    value={form.name.clone()}
                    oninput={on_input.clone()}
                    required=true
                />
                <input
                    type="email"
                    name={ContactField::Email.name()}
                    placeholder="Your Email"
                    value={form.email.clone()}
                    oninput={on_input.clone()}
                    required=true
                />
                <textarea
                    name={ContactField::Message.name()}
                    placeholder="Your Message"
                    rows="4"
                    value={form.message.clone()}
                    oninput={on_input}
                    required=true
                />
                <button type="submit" class="primary-button full-width">{"Send Message"}</button>
            </form>
            <p class="mail-alt">
                {"Prefer email? "}
                <a href={mailto_link(config::EMAIL, config::MAIL_SUBJECT)}>{"Write directly"}</a>
            </p>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn refused_alert_is_reported() {
        assert!(acknowledgement_failed(Err(JsValue::from_str("dialogs blocked"))));
        assert!(!acknowledgement_failed(Ok(())));
    }
}
