use leptos::prelude::*;

use crate::content::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-grid">
                {SKILLS
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="skill-category">
                                <h3>{category.name}</h3>
                                <div class="skill-pills">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|s| view! { <span class="pill">{*s}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
