use leptos::prelude::*;

use super::data::CONTACT_CHANNELS;
use super::reveal_class;
use crate::delivery::DeliveryError;
use crate::form::{ContactForm, ContactPipeline, Field, NoticeLevel, SubmissionState};
use crate::reveal::use_reveal;

/// Relay one contact message to the delivery provider. The payload is
/// re-validated server-side; the browser never holds provider transport
/// details beyond the fixed identifiers.
#[server]
pub async fn send_contact_message(form: ContactForm) -> Result<(), ServerFnError> {
    let errors = crate::form::validate(&form);
    if !errors.is_empty() {
        return Err(ServerFnError::new("contact form failed validation"));
    }
    crate::delivery::deliver(&form.name, &form.email, &form.message)
        .await
        .map_err(|err| ServerFnError::new(err.to_string()))
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let (section_ref, visible) = use_reveal(0.3);

    let pipeline = RwSignal::new(ContactPipeline::new());
    let (notice, set_notice) = signal(None::<crate::form::Notice>);

    let submit = Action::new(|form: &ContactForm| {
        let form = form.clone();
        async move { send_contact_message(form).await }
    });

    // Settle the pipeline when the delivery call resolves. `resolve` is a
    // no-op unless an attempt is actually in flight.
    Effect::new(move |_| {
        let Some(result) = submit.value().get() else {
            return;
        };
        let outcome = result.map_err(DeliveryError::from_server_fn);
        pipeline.update(|p| {
            if let Some(n) = p.resolve(outcome) {
                set_notice.set(Some(n));
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_notice.set(None);
        let attempt = pipeline.try_update(|p| p.try_submit());
        if let Some(Ok(form)) = attempt {
            submit.dispatch(form);
        }
    };

    let error_for = move |field: Field| {
        pipeline.with(|p| {
            p.field_error(field)
                .map(|err| view! { <p class="text-xs text-red mt-1">{err.to_string()}</p> })
        })
    };

    let is_submitting = move || pipeline.with(|p| p.state() == SubmissionState::Submitting);

    view! {
        <section
            node_ref=section_ref
            id="contact"
            class="min-h-[90vh] flex items-center justify-center px-4 py-1 bg-card/30"
        >
            <div class="max-w-5xl w-full">
                <div class=move || reveal_class("text-center mb-6", "translate-y-8", visible.get())>
                    <h2 class="text-2xl md:text-3xl font-bold mb-1">"Get in Touch"</h2>
                    <p class="text-sm md:text-base text-muted">
                        "Let's collaborate, build, or just chat tech!"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-6">
                    <div class=move || reveal_class("delay-200", "-translate-x-8", visible.get())>
                        <div class="h-full p-4 rounded-lg border border-muted/30 bg-brightBlack/20">
                            <h3 class="text-base font-semibold mb-4">"Contact Information"</h3>
                            <div class="space-y-3">
                                {CONTACT_CHANNELS
                                    .iter()
                                    .map(|channel| {
                                        view! {
                                            <div class="flex items-center gap-2">
                                                <div class="p-1.5 bg-primary/10 rounded-md">
                                                    <i class=channel.icon></i>
                                                </div>
                                                <div>
                                                    <p class="font-medium text-xs">{channel.label}</p>
                                                    <a
                                                        href=channel.href
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="text-xs text-muted hover:text-primary"
                                                    >
                                                        {channel.value}
                                                    </a>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=move || reveal_class("delay-400", "translate-x-8", visible.get())>
                        <div class="h-full p-4 rounded-lg border border-muted/30 bg-brightBlack/20">
                            <h3 class="text-base font-semibold mb-4">"Send Message"</h3>
                            <form class="space-y-3 max-w-xs mx-auto" on:submit=on_submit>
                                <div>
                                    <label for="contact_name" class="text-xs font-medium">
                                        "Name"
                                    </label>
                                    <input
                                        id="contact_name"
                                        type="text"
                                        placeholder="Your name"
                                        class="w-full px-3 py-2 mt-1 text-sm rounded-md border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-primary"
                                        prop:value=move || pipeline.with(|p| p.form().name.clone())
                                        on:input=move |ev| {
                                            pipeline
                                                .update(|p| p.edit(Field::Name, event_target_value(&ev)))
                                        }
                                    />
                                    {move || error_for(Field::Name)}
                                </div>

                                <div>
                                    <label for="contact_email" class="text-xs font-medium">
                                        "Email"
                                    </label>
                                    <input
                                        id="contact_email"
                                        type="email"
                                        placeholder="your.email@example.com"
                                        class="w-full px-3 py-2 mt-1 text-sm rounded-md border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-primary"
                                        prop:value=move || pipeline.with(|p| p.form().email.clone())
                                        on:input=move |ev| {
                                            pipeline
                                                .update(|p| p.edit(Field::Email, event_target_value(&ev)))
                                        }
                                    />
                                    {move || error_for(Field::Email)}
                                </div>

                                <div>
                                    <label for="contact_message" class="text-xs font-medium">
                                        "Message"
                                    </label>
                                    <textarea
                                        id="contact_message"
                                        rows="3"
                                        placeholder="Your message..."
                                        class="w-full px-3 py-2 mt-1 text-sm rounded-md border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-primary"
                                        prop:value=move || pipeline.with(|p| p.form().message.clone())
                                        on:input=move |ev| {
                                            pipeline
                                                .update(|p| p.edit(Field::Message, event_target_value(&ev)))
                                        }
                                    ></textarea>
                                    {move || error_for(Field::Message)}
                                </div>

                                <button
                                    type="submit"
                                    class="w-full py-2 text-sm rounded-md bg-blue-800 hover:bg-blue-700 text-white disabled:opacity-60 transition-colors duration-200"
                                    disabled=is_submitting
                                >
                                    {move || if is_submitting() { "Sending..." } else { "Send" }}
                                </button>

                                {move || {
                                    notice.get()
                                        .map(|n| {
                                            let class = match n.level {
                                                NoticeLevel::Success => {
                                                    "mt-2 p-3 rounded-md bg-green/20 border border-green/30"
                                                }
                                                NoticeLevel::Error => {
                                                    "mt-2 p-3 rounded-md bg-red/20 border border-red/30"
                                                }
                                            };
                                            view! {
                                                <div class=class role="status">
                                                    <p class="font-medium text-sm">{n.title}</p>
                                                    <p class="text-xs text-muted">{n.detail}</p>
                                                </div>
                                            }
                                        })
                                }}
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
