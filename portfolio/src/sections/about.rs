use leptos::prelude::*;

use crate::content::{BIO, EDUCATION, INTERESTS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-grid">
                <div class="about-bio">
                    {BIO.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                </div>
                <div class="about-side">
                    <h3>"Education"</h3>
                    <ul>
                        {EDUCATION
                            .iter()
                            .map(|e| {
                                view! {
                                    <li>
                                        <span class="about-degree">{e.degree}</span>
                                        <br />
                                        {e.school}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <h3>"Interests"</h3>
                    <ul>{INTERESTS.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}</ul>
                </div>
            </div>
        </div>
    }
}
