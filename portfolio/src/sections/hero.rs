use leptos::prelude::*;

use super::PageNav;
use crate::config::SiteConfig;
use crate::dom;
use crate::navigation::Section;
use crate::timer::{BrowserScheduler, TypewriterLoop};
use crate::typewriter::Typewriter;

#[component]
pub fn Hero(nav: PageNav) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let resume_url = config.resume_url.clone();

    view! {
        <div class="hero">
            <h1 class="hero-title">
                "Hi, I'm " <span class="hero-title-accent">{config.owner.clone()}</span>
            </h1>
            <RoleLine config=config.clone() />
            <p class="hero-description">{config.tagline.clone()}</p>
            <div class="hero-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| nav.update(|n| n.go_to_section(Section::Projects.id()))
                >
                    "View My Work"
                </button>
                <button class="btn btn-secondary" on:click=move |_| dom::open_in_new_tab(&resume_url)>
                    "Download Resume"
                </button>
            </div>
        </div>
    }
}

/// Animated role text with a blinking caret.
#[component]
fn RoleLine(config: SiteConfig) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    match Typewriter::new(config.typewriter.roles.clone(), config.typewriter.timing()) {
        Ok(typewriter) => {
            let animation = TypewriterLoop::start(BrowserScheduler, typewriter, move |frame| {
                set_text.set(frame.to_string())
            });
            // dropping the loop cancels its pending tick
            let animation = StoredValue::new_local(Some(animation));
            on_cleanup(move || {
                animation.update_value(|a| {
                    a.take();
                })
            });
        }
        Err(e) => tracing::warn!("role animation disabled: {e}"),
    }

    view! {
        <p class="hero-role">
            {move || text.get()}
            <span class="hero-caret">"|"</span>
        </p>
    }
}
