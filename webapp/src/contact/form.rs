use std::{rc::Rc, time::Duration};

use async_trait::async_trait;
use dioxus::prelude::*;
use tracing::{debug, info};

use api::{
    config::ContactConfig,
    contact::{
        Banner, ContactField, ContactFormState, ContactSubmitter, FormStore, HttpSubmitter,
        PendingSubmission, SimulatedSubmitter, Sleep, finish_submission,
    },
};

// browser timers for the submission flow
pub struct GlooSleep;

#[async_trait(?Send)]
impl Sleep for GlooSleep {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

pub fn make_submitter(config: &ContactConfig) -> Rc<dyn ContactSubmitter> {
    match &config.endpoint {
        Some(endpoint) => {
            info!("contact messages go to {endpoint}");
            Rc::new(HttpSubmitter::new(endpoint.clone()))
        }
        None => {
            info!("no contact endpoint configured, submissions are simulated");
            Rc::new(SimulatedSubmitter::new(GlooSleep, config.submit_delay()))
        }
    }
}

#[derive(Clone, Copy)]
struct SignalStore(Signal<ContactFormState>);

impl FormStore for SignalStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactFormState) -> R) -> R {
        self.0.with_mut(f)
    }
}

#[derive(Clone, PartialEq, Props)]
struct ContactInputProps {
    state: Signal<ContactFormState>,
    field: ContactField,
    placeholder: &'static str,
}

#[component]
fn ContactInput(props: ContactInputProps) -> Element {
    let mut state = props.state;
    let field = props.field;

    let locked = state.read().is_locked();
    let value = state.read().form().get(field).to_owned();
    let name = field.label().to_lowercase();

    let oninput = move |evt: FormEvent| {
        if let Err(err) = state.write().set_field(field, evt.value()) {
            debug!("ignored edit to {field}: {err}");
        }
    };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{name}", "{field.label()}" }
            if let Some(kind) = field.input_type() {
                input {
                    class: "form-input",
                    id: "{name}",
                    name: "{name}",
                    r#type: kind,
                    placeholder: props.placeholder,
                    required: true,
                    disabled: locked,
                    value: value,
                    oninput: oninput,
                }
            } else {
                textarea {
                    class: "form-textarea",
                    id: "{name}",
                    name: "{name}",
                    placeholder: props.placeholder,
                    required: true,
                    disabled: locked,
                    value: value,
                    oninput: oninput,
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MessageFormProps {
    config: ContactConfig,
}

#[component]
pub fn MessageForm(props: MessageFormProps) -> Element {
    let state = use_signal(ContactFormState::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let submitter = use_hook(|| make_submitter(&props.config));
    let pending = use_hook(|| Rc::new(PendingSubmission::default()));
    let banner_window = props.config.banner();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut store = SignalStore(state);
        let form = match store.update(|s| s.begin_submit()) {
            Ok(form) => form,
            Err(err) => {
                notice.set(Some(err.to_string()));
                return;
            }
        };
        notice.set(None);

        let submitter = submitter.clone();
        let task = spawn(async move {
            finish_submission(store, form, submitter.as_ref(), &GlooSleep, banner_window).await;
        });
        // the guard lives as long as the form, so unmounting cancels the task
        pending.replace(move || task.cancel());
    };

    let locked = state.read().is_locked();
    let banner = state.read().banner();

    rsx! {
        form { class: "card contact-form", onsubmit: onsubmit,
            div { class: "form-row",
                ContactInput {
                    state,
                    field: ContactField::Name,
                    placeholder: "Your name",
                }
                ContactInput {
                    state,
                    field: ContactField::Email,
                    placeholder: "you@example.com",
                }
            }
            ContactInput {
                state,
                field: ContactField::Subject,
                placeholder: "What is this about?",
            }
            ContactInput {
                state,
                field: ContactField::Message,
                placeholder: "Tell me about your project...",
            }

            if let Some(message) = notice() {
                p { class: "form-notice", "{message}" }
            }

            button { class: "btn btn-primary", r#type: "submit", disabled: locked,
                if locked { "Sending..." } else { "Send Message" }
            }

            match banner {
                Some(Banner::Sent) => rsx! {
                    div { class: "form-banner success",
                        "Message sent successfully! I'll get back to you soon."
                    }
                },
                Some(Banner::Failed(reason)) => rsx! {
                    div { class: "form-banner failure", "Message could not be sent: {reason}" }
                },
                None => rsx! {},
            }
        }
    }
}
