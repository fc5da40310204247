use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::contact::{ContactState, Field};
use crate::timer::{BrowserScheduler, Timeout};

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notice_for = config.success_notice();
    let state = RwSignal::new(ContactState::default());

    // at most one notice timer; replacing or dropping it cancels the old one
    let notice_timer = StoredValue::new_local(None::<Timeout<BrowserScheduler>>);
    on_cleanup(move || {
        notice_timer.update_value(|t| {
            t.take();
        })
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let sent = state.try_update(|s| s.submit().is_ok()).unwrap_or(false);
        if sent {
            let timer = Timeout::start(BrowserScheduler, notice_for, move || {
                state.update(|s| s.hide_notice())
            });
            notice_timer.set_value(Some(timer));
        }
    };

    view! {
        <div class="card contact">
            <h2 class="section-title">"Contact Me"</h2>
            <Show when=move || state.with(|s| s.notice_visible)>
                <div class="notice" role="alert">
                    "Your message has been sent successfully!"
                </div>
            </Show>
            <form class="contact-form" on:submit=on_submit novalidate=true>
                {Field::ALL.into_iter().map(|field| view! { <FormField field=field state=state /> }).collect_view()}
                <button type="submit" class="btn btn-primary btn-wide">
                    "Send Message"
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormField(field: Field, state: RwSignal<ContactState>) -> impl IntoView {
    let value = move || state.with(|s| s.form.get(field).to_string());
    let has_error = move || state.with(|s| s.error(field).is_some());
    let class = move || if has_error() { "input input-error" } else { "input" };
    let error = move || {
        state.with(|s| {
            s.error(field)
                .map(|e| view! { <p class="field-error">{e.to_string()}</p> })
        })
    };

    let input = match field {
        Field::Message => view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                class=class
                placeholder="Your message here..."
                prop:value=value
                on:input=move |ev| state.update(|s| s.set_field(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        Field::Name | Field::Email => {
            let (kind, placeholder) = if field == Field::Email {
                ("email", "your.email@example.com")
            } else {
                ("text", "Your Name")
            };
            view! {
                <input
                    type=kind
                    id=field.id()
                    name=field.id()
                    class=class
                    placeholder=placeholder
                    prop:value=value
                    on:input=move |ev| state.update(|s| s.set_field(field, event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            <label for=field.id()>{field.label()}</label>
            {input}
            {error}
        </div>
    }
}
