use leptos::prelude::*;

use super::PageNav;
use crate::config::SiteConfig;
use crate::navigation::Section;
use crate::theme::Theme;

#[component]
pub fn Nav(nav: PageNav, theme: RwSignal<Theme>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_| set_menu_open.set(false));

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-brand">{config.owner}</div>

                <button
                    class="nav-burger"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <div class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section nav=nav /> })
                        .collect_view()}
                    <button
                        class="theme-toggle"
                        aria-label="Toggle dark mode"
                        on:click=move |_| theme.update(|t| *t = t.toggle())
                    >
                        {move || if theme.get().is_dark() { "☾" } else { "☀" }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section nav=nav on_pick=close_menu /> })
                        .collect_view()}
                    <button
                        class="nav-mobile-theme"
                        on:click=move |_| {
                            theme.update(|t| *t = t.toggle());
                            set_menu_open.set(false);
                        }
                    >
                        {move || theme.get().switch_label()}
                    </button>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(
    section: Section,
    nav: PageNav,
    #[prop(optional)] on_pick: Option<Callback<()>>,
) -> impl IntoView {
    let class = move || {
        if nav.with(|n| n.is_active(section)) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <button
            class=class
            on:click=move |_| {
                nav.update(|n| n.go_to_section(section.id()));
                if let Some(cb) = on_pick {
                    cb.run(());
                }
            }
        >
            {section.label()}
        </button>
    }
}
