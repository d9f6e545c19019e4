//! Contact section: the message form and direct contact details.

use std::cell::RefCell;
use std::rc::Rc;

use folio::content::{CONTACT_INFO, CONTACT_INTRO, SOCIAL_LINKS};
use folio::presets::{contact_reveal, submit_acknowledgement, targets};
use folio::{ContactForm, EmailRelay, Field, Notification, SectionId, SubmitError};
use leptos::*;

use crate::components::toast::{use_toaster, Toaster};
use crate::config::relay_config;
use crate::services::animator::TimelinePlayer;
use crate::services::{dom, use_section_reveal, EmailJsRelay};

fn announce(toaster: Option<Toaster>, notification: Option<Notification>) {
    match (toaster, notification) {
        (Some(toaster), Some(notification)) => toaster.notify(notification),
        (None, Some(notification)) => log::info!("📣 {}: {}", notification.title, notification.description),
        _ => {}
    }
}

/// Scale the submit button up and back once.
fn pulse_submit(slot: &Rc<RefCell<Option<TimelinePlayer>>>) {
    let Some(section) = dom::element_by_id(SectionId::Contact.anchor()) else {
        return;
    };
    if let Some(previous) = slot.borrow_mut().take() {
        previous.kill();
    }
    let player = TimelinePlayer::new(submit_acknowledgement());
    player.bind_within(&section);
    player.play();
    *slot.borrow_mut() = Some(player);
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.draft().get(field).to_string());
    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.edit(field, text));
    };

    let kind = if field == Field::Email { "email" } else { "text" };
    let input = if multiline {
        view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                class="input textarea"
                rows="5"
                placeholder=placeholder
                required=true
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                id=field.as_str()
                name=field.as_str()
                class="input"
                type=kind
                placeholder=placeholder
                required=true
                prop:value=value
                on:input=on_input
            />
        }
        .into_view()
    };

    view! {
        <div class="form-field">
            <label for=field.as_str()>{label}</label>
            {input}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let section = create_node_ref::<html::Section>();
    use_section_reveal(section, contact_reveal);

    let form = create_rw_signal(ContactForm::new());
    let toaster = use_toaster();
    let pulse: Rc<RefCell<Option<TimelinePlayer>>> = Rc::default();

    {
        let pulse = pulse.clone();
        on_cleanup(move || {
            if let Some(player) = pulse.borrow_mut().take() {
                player.kill();
            }
        });
    }

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(begun) = form.try_update(|f| f.begin(&relay_config())) else {
            return;
        };

        match begun {
            Ok(request) => {
                let pulse = pulse.clone();
                spawn_local(async move {
                    let outcome = EmailJsRelay::default().send(&request).await;
                    let notification = form.try_update(|f| f.finish(outcome));
                    if notification.as_ref().is_some_and(|n| !n.is_error()) {
                        pulse_submit(&pulse);
                    }
                    announce(toaster, notification);
                });
            }
            Err(SubmitError::InFlight) => log::debug!("Contact submission already in flight"),
            Err(e) => announce(toaster, form.try_update(|f| f.rejected(&e))),
        }
    };

    let sending = move || form.with(ContactForm::in_flight);

    view! {
        <section id=SectionId::Contact.anchor() class="section contact" node_ref=section>
            <div class="container">
                <h2 class="section-title">"Get In " <span class="text-glow">"Touch"</span></h2>
                <p class="section-intro">{CONTACT_INTRO}</p>

                <div class="contact-grid">
                    <form data-anim=targets::FORM class="contact-form glass-card" on:submit=on_submit>
                        <FormField form field=Field::Name label="Name" placeholder="Your name"/>
                        <FormField form field=Field::Email label="Email" placeholder="your.email@example.com"/>
                        <FormField
                            form
                            field=Field::Message
                            label="Message"
                            placeholder="Tell me about your project..."
                            multiline=true
                        />
                        <button
                            data-anim=targets::SUBMIT
                            type="submit"
                            class="btn btn-glow btn-lg btn-block"
                            disabled=sending
                        >
                            {move || if sending() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>

                    <div class="contact-details">
                        <div class="contact-info glass-card">
                            <h3>"Let's Connect"</h3>
                            {CONTACT_INFO
                                .iter()
                                .map(|(heading, value)| view! {
                                    <div class="contact-info-row">
                                        <h4>{*heading}</h4>
                                        <p>{*value}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>

                        <div data-anim=targets::SOCIALS class="contact-socials">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| view! {
                                    <a
                                        class="btn btn-icon glass-card"
                                        href=link.href
                                        target=link.is_external().then_some("_blank")
                                        rel=link.is_external().then_some("noopener noreferrer")
                                        aria-label=link.label
                                    >
                                        {link.glyph}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
