//! Hero section: headline, tagline, calls to action and the 3D backdrop.

use std::cell::RefCell;
use std::rc::Rc;

use folio::config::{OWNER_NAME, OWNER_ROLE};
use folio::content::{HERO_SCENE_URL, HERO_TAGLINE};
use folio::presets::{hero_entrance, targets};
use folio::SectionId;
use leptos::*;

use crate::services::animator::{FrameSlot, TimelinePlayer};
use crate::services::dom;

#[component]
pub fn Hero(
    /// Becomes `true` when the preloader hands over; the entrance plays then.
    #[prop(into)]
    loaded: Signal<bool>,
) -> impl IntoView {
    let player: Rc<RefCell<Option<TimelinePlayer>>> = Rc::default();
    let entrance_frame: FrameSlot = FrameSlot::default();

    {
        let player = player.clone();
        let entrance_frame = entrance_frame.clone();
        create_effect(move |_| {
            if !loaded.get() || player.borrow().is_some() {
                return;
            }
            let player = player.clone();
            entrance_frame.schedule(move || {
                let Some(section) = dom::element_by_id(SectionId::Hero.anchor()) else {
                    log::warn!("⚠️ Hero section not found, skipping entrance");
                    return;
                };
                let entrance = TimelinePlayer::new(hero_entrance());
                entrance.bind_within(&section);
                entrance.on_event(|event| log::debug!("🎬 Hero entrance {:?}", event));
                entrance.play();
                *player.borrow_mut() = Some(entrance);
            });
        });
    }

    on_cleanup(move || {
        entrance_frame.cancel();
        if let Some(player) = player.borrow_mut().take() {
            player.kill();
        }
    });

    view! {
        <section id=SectionId::Hero.anchor() class="hero">
            <div data-anim=targets::BACKDROP class="hero-backdrop" style="opacity: 0;">
                <iframe
                    src=HERO_SCENE_URL
                    title="3D background scene"
                    frameborder="0"
                    loading="lazy"
                ></iframe>
            </div>
            <div class="hero-overlay"></div>

            <div class="container hero-content">
                <h1 data-anim=targets::HEADLINE class="hero-title" style="opacity: 0;">
                    <span class="text-glow">{OWNER_NAME}</span>
                    <br/>
                    <span class="hero-role">{OWNER_ROLE}</span>
                </h1>
                <p data-anim=targets::SUBTITLE class="hero-subtitle" style="opacity: 0;">
                    {HERO_TAGLINE}
                </p>
                <div data-anim=targets::CTA class="hero-actions" style="opacity: 0;">
                    <button class="btn btn-glow btn-lg" on:click=move |_| dom::scroll_to_section(SectionId::Contact)>
                        "Hire Me"
                    </button>
                    <button class="btn btn-outline btn-lg" on:click=move |_| dom::scroll_to_section(SectionId::Projects)>
                        "View Projects"
                    </button>
                </div>
            </div>

            <button
                class="scroll-indicator"
                aria-label="Scroll to about"
                on:click=move |_| dom::scroll_to_section(SectionId::About)
            >
                <span class="scroll-indicator-dot"></span>
            </button>
        </section>
    }
}
