// Root component: section anchors, navigation and theme state
// Rust + Leptos 0.8 CSR edition

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{self, SectionRef};
use crate::navigation::{Navigator, Section};
use crate::sections::*;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    let home_ref = SectionRef::new();
    let about_ref = SectionRef::new();
    let skills_ref = SectionRef::new();
    let projects_ref = SectionRef::new();
    let contact_ref = SectionRef::new();

    let nav = RwSignal::new(Navigator::new([
        (Section::Home, home_ref),
        (Section::About, about_ref),
        (Section::Skills, skills_ref),
        (Section::Projects, projects_ref),
        (Section::Contact, contact_ref),
    ]));

    let theme = RwSignal::new(dom::load_theme());
    Effect::new(move || {
        let current = theme.get();
        dom::apply_theme(current);
        dom::save_theme(current);
    });

    view! {
        <div class="page">
            <Nav nav=nav theme=theme />
            <main class="container">
                <section id=Section::Home.id() node_ref=home_ref class="section section-home">
                    <Hero nav=nav />
                </section>
                <section id=Section::About.id() node_ref=about_ref class="section">
                    <About />
                </section>
                <section id=Section::Skills.id() node_ref=skills_ref class="section">
                    <Skills />
                </section>
                <section id=Section::Projects.id() node_ref=projects_ref class="section">
                    <Projects />
                </section>
                <section id=Section::Contact.id() node_ref=contact_ref class="section">
                    <Contact />
                </section>
            </main>
            <Footer />
        </div>
    }
}
