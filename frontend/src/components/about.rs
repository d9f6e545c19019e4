//! About section with profile image, bio and skills grid.

use folio::content::{ABOUT_PARAGRAPHS, PROFILE_IMAGE, SKILLS};
use folio::config::OWNER_NAME;
use folio::presets::{about_reveal, targets};
use folio::SectionId;
use leptos::*;

use crate::services::use_section_reveal;

#[component]
pub fn About() -> impl IntoView {
    let section = create_node_ref::<html::Section>();
    use_section_reveal(section, about_reveal);

    view! {
        <section id=SectionId::About.anchor() class="section about" node_ref=section>
            <div class="container">
                <div class="about-grid">
                    <div data-anim=targets::IMAGE class="about-image">
                        <div class="about-image-frame glass-card">
                            <img src=PROFILE_IMAGE alt=OWNER_NAME/>
                        </div>
                    </div>

                    <div data-anim=targets::CONTENT class="about-content">
                        <h2 class="section-title">"About " <span class="text-glow">"Me"</span></h2>
                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|paragraph| view! { <p class="about-text">{*paragraph}</p> })
                            .collect_view()}
                    </div>
                </div>

                <div data-anim=targets::SKILLS class="skills-grid">
                    {SKILLS
                        .iter()
                        .map(|skill| view! {
                            <div class="skill-card glass-card">
                                <span class="skill-glyph">{skill.glyph}</span>
                                <h3>{skill.name}</h3>
                                <p>{skill.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
