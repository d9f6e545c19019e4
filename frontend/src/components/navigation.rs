//! Fixed navigation bar and the full-screen mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use folio::content::SOCIAL_LINKS;
use folio::presets::{menu_entrance, targets::MENU_ITEMS};
use folio::{NavState, SectionId};
use leptos::*;

use crate::services::animator::{FrameSlot, TimelinePlayer};
use crate::services::dom;

const MENU_ID: &str = "mobile-menu";

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = create_rw_signal(NavState::new());
    let menu_player: Rc<RefCell<Option<TimelinePlayer>>> = Rc::default();
    let menu_frame: FrameSlot = FrameSlot::default();

    // Scrolled flag
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let mut next = nav.get_untracked();
        if next.on_scroll(dom::scroll_y()) {
            nav.set(next);
        }
    });

    // Staggered entrance each time the menu opens; closing is immediate
    {
        let menu_player = menu_player.clone();
        let menu_frame = menu_frame.clone();
        create_effect(move |_| {
            let open = nav.with(NavState::is_menu_open);
            menu_frame.cancel();
            if let Some(player) = menu_player.borrow_mut().take() {
                player.kill();
            }
            if !open {
                return;
            }
            let menu_player = menu_player.clone();
            menu_frame.schedule(move || {
                let Some(menu) = dom::element_by_id(MENU_ID) else {
                    return;
                };
                let items = dom::anim_targets(&menu, MENU_ITEMS);
                let player = TimelinePlayer::new(menu_entrance(items.len()));
                player.bind(MENU_ITEMS, items);
                player.play();
                *menu_player.borrow_mut() = Some(player);
            });
        });
    }

    on_cleanup(move || {
        scroll_handle.remove();
        menu_frame.cancel();
        if let Some(player) = menu_player.borrow_mut().take() {
            player.kill();
        }
    });

    let select = move |section: SectionId| {
        if let Some(target) = nav.try_update(|n| n.select(section)) {
            dom::scroll_to_section(target);
        }
    };

    view! {
        <nav class="site-nav" class:glass-card=move || nav.with(NavState::is_scrolled)>
            <div class="container nav-bar">
                <div class="nav-logo text-glow" on:click=move |_| select(SectionId::Hero)>"SD"</div>

                <div class="nav-links desktop-only">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! {
                            <button class="nav-link" on:click=move |_| select(section)>
                                {section.label()}
                            </button>
                        })
                        .collect_view()}
                    <button class="btn btn-sm" on:click=move |_| select(SectionId::Contact)>
                        "Hire Me"
                    </button>
                </div>

                <button
                    class="btn btn-icon mobile-only"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(|n| {
                        n.toggle_menu();
                    })
                >
                    {move || if nav.with(NavState::is_menu_open) { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>

        <Show when=move || nav.with(NavState::is_menu_open)>
            <div id=MENU_ID class="mobile-menu mobile-only">
                <div class="mobile-menu-inner">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! {
                            <button
                                data-anim=MENU_ITEMS
                                class="mobile-menu-item"
                                style="opacity: 0;"
                                on:click=move |_| select(section)
                            >
                                {section.label()}
                            </button>
                        })
                        .collect_view()}
                    <button
                        data-anim=MENU_ITEMS
                        class="mobile-menu-item btn btn-glow btn-lg"
                        style="opacity: 0;"
                        on:click=move |_| select(SectionId::Contact)
                    >
                        "Hire Me"
                    </button>
                    <div data-anim=MENU_ITEMS class="mobile-menu-item mobile-socials" style="opacity: 0;">
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
                </div>
            </div>
        </Show>
    }
}
