//! Featured projects grid.

use folio::content::{Project, PROFILE_URL, PROJECTS, PROJECTS_INTRO};
use folio::presets::{projects_reveal, targets};
use folio::SectionId;
use leptos::*;

use crate::services::use_section_reveal;

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card glass-card">
            <div class="project-image">
                <img src=project.image alt=project.title loading="lazy"/>
                <Show when=move || project.featured>
                    <span class="badge badge-featured">"Featured"</span>
                </Show>
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tech">
                    {project
                        .tech_preview()
                        .iter()
                        .map(|tech| view! { <span class="badge">{*tech}</span> })
                        .collect_view()}
                    {project.more_label().map(|more| view! { <span class="badge badge-muted">{more}</span> })}
                </div>
                <a
                    class="btn btn-outline btn-sm"
                    href=project.github_url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View Code"
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let section = create_node_ref::<html::Section>();
    use_section_reveal(section, projects_reveal);

    view! {
        <section id=SectionId::Projects.anchor() class="section projects" node_ref=section>
            <div class="container">
                <h2 class="section-title">"Featured " <span class="text-glow">"Projects"</span></h2>
                <p class="section-intro">{PROJECTS_INTRO}</p>

                <div data-anim=targets::CARDS class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project/> })
                        .collect_view()}
                </div>

                <div class="projects-more">
                    <a class="btn btn-glow btn-lg" href=PROFILE_URL target="_blank" rel="noopener noreferrer">
                        "View All Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}
