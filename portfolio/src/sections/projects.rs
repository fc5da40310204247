use leptos::prelude::*;

use crate::content::{PROJECTS, Project};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <h3>{project.title}</h3>
            <p class="project-description">{project.description}</p>
            <div class="skill-pills">
                {project.tech.iter().map(|t| view! { <span class="pill small">{*t}</span> }).collect_view()}
            </div>
            <div class="project-links">
                {project.github.map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                            "GitHub"
                        </a>
                    }
                })}
                {project.demo.map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "Demo"
                        </a>
                    }
                })}
            </div>
        </div>
    }
}
