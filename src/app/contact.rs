use leptos::{ev, prelude::*};

use crate::portfolio::{ContactField, PageState, Section};

use super::scroll::open_mailto;

const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-gray-700 bg-gray-800 focus:outline-none focus:ring-2 focus:ring-cyan-500";

#[component]
pub fn Contact(state: RwSignal<PageState>) -> impl IntoView {
    let submitted = Memo::new(move |_| state.with(|s| s.submitted));
    let value = move |field: ContactField| move || state.with(|s| s.draft.get(field).to_string());

    let on_input = move |ev: ev::Event| {
        let el = event_target::<web_sys::Element>(&ev);
        let name = el.get_attribute("name").unwrap_or_default();
        match name.parse::<ContactField>() {
            Ok(field) => state.update(|s| s.update_field(field, event_target_value(&ev))),
            Err(err) => log::warn!("{err}"),
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match state.try_update(PageState::submit) {
            Some(Ok(link)) => {
                log::debug!("opening {link}");
                open_mailto(&link);
            }
            Some(Err(err)) => log::warn!("contact form not sent: {err}"),
            None => {}
        }
    };

    view! {
        <section id=Section::Contact.id() class="section contact fade-in py-12">
            <h2 class="mb-6 border-b border-gray-700 pb-1 text-2xl font-bold">
                {Section::Contact.label()}
            </h2>
            <Show when=move || submitted.get()>
                <p class="success-msg mb-4 text-green-400">{SUCCESS_MESSAGE}</p>
            </Show>
            <form class="contact-form flex flex-col gap-4 max-w-xl" on:submit=on_submit>
                <input
                    type="text"
                    name=ContactField::Name.name()
                    placeholder="Your Name"
                    class=INPUT_CLASS
                    prop:value=value(ContactField::Name)
                    on:input=on_input
                    required
                />
                <input
                    type="email"
                    name=ContactField::Email.name()
                    placeholder="Your Email"
                    class=INPUT_CLASS
                    prop:value=value(ContactField::Email)
                    on:input=on_input
                    required
                />
                <textarea
                    name=ContactField::Message.name()
                    placeholder="Your Message"
                    rows="5"
                    class=INPUT_CLASS
                    prop:value=value(ContactField::Message)
                    on:input=on_input
                    required
                ></textarea>
                <button
                    type="submit"
                    class="self-start px-6 py-3 rounded-md font-medium bg-cyan-500/20 hover:bg-cyan-500/30 text-cyan-400 border border-cyan-500/30 transition-all duration-200"
                >
                    "Send Message"
                </button>
            </form>
        </section>
    }
}
