use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <footer class="footer">
            <p class="footer-copyright">
                {format!("© {} {}. All rights reserved.", dom::current_year(), config.owner)}
            </p>
        </footer>
    }
}
