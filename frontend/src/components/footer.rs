//! Footer component

use std::cell::RefCell;
use std::rc::Rc;

use folio::config::OWNER_NAME;
use folio::content::{COPYRIGHT, FOOTER_PARTICLES, FOOTER_TAGLINE, SOCIAL_LINKS};
use folio::presets::{footer_particles, footer_reveal, targets};
use folio::SectionId;
use leptos::*;

use crate::services::animator::{on_first_frame, TimelinePlayer};
use crate::services::{dom, use_section_reveal};

const FOOTER_ID: &str = "footer";

#[component]
pub fn Footer() -> impl IntoView {
    let footer = create_node_ref::<html::Footer>();
    use_section_reveal(footer, footer_reveal);

    let particles: Rc<RefCell<Option<TimelinePlayer>>> = Rc::default();
    {
        let particles = particles.clone();
        on_first_frame(footer, move || {
            let Some(root) = dom::element_by_id(FOOTER_ID) else {
                return;
            };
            let dots = dom::anim_targets(&root, targets::PARTICLES);
            let player = TimelinePlayer::new(footer_particles(dots.len()));
            player.bind(targets::PARTICLES, dots);
            player.play();
            *particles.borrow_mut() = Some(player);
        });
    }
    on_cleanup(move || {
        if let Some(player) = particles.borrow_mut().take() {
            player.kill();
        }
    });

    view! {
        <footer id=FOOTER_ID class="site-footer" node_ref=footer>
            <div class="footer-particles" aria-hidden="true">
                {FOOTER_PARTICLES
                    .iter()
                    .map(|(position, class)| view! {
                        <span data-anim=targets::PARTICLES class=*class style=*position></span>
                    })
                    .collect_view()}
            </div>

            <div data-anim=targets::FOOTER class="container footer-inner">
                <div class="footer-brand">
                    <h3 class="text-glow">{OWNER_NAME}</h3>
                    <p>{FOOTER_TAGLINE}</p>
                </div>

                <nav class="footer-links">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! {
                            <a
                                class="footer-link"
                                href=section.href()
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    dom::scroll_to_section(section);
                                }
                            >
                                {section.label()}
                            </a>
                        })
                        .collect_view()}
                </nav>

                <div class="footer-socials">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! {
                            <a
                                class="btn btn-icon"
                                href=link.href
                                target=link.is_external().then_some("_blank")
                                rel=link.is_external().then_some("noopener noreferrer")
                                aria-label=link.label
                            >
                                {link.glyph}
                            </a>
                        })
                        .collect_view()}
                </div>

                <div class="footer-bottom">
                    <p>{COPYRIGHT}</p>
                    <button class="btn btn-outline btn-sm" on:click=move |_| dom::scroll_to_top()>
                        "Back to top ↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}
