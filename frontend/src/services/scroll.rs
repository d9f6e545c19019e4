//! Scroll-triggered reveals wired to the browser.
//!
//! The page shell installs one [`ScrollObservers`] and provides it as
//! context. Each section calls [`use_section_reveal`], which registers
//! its groups once the section is in the document and releases them in
//! `on_cleanup`.

use std::cell::RefCell;
use std::rc::Rc;

use folio::scroll::{MountReport, ObserverRegistry, RevealGroup, SectionReveal, TriggerSource};
use folio::tween::{StyleFrame, Timeline};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use leptos::html::ElementDescriptor;
use leptos::*;
use web_sys::{Element, HtmlElement};

use crate::services::animator::{on_first_frame, TimelinePlayer};
use crate::services::dom;

/// What the registry keeps per observer: where to measure, what to play.
#[derive(Clone)]
pub struct RevealHandle {
    trigger: Element,
    player: TimelinePlayer,
}

pub type SharedRegistry = Rc<RefCell<ObserverRegistry<RevealHandle>>>;

// =============================================================================
// Observer set
// =============================================================================

/// The process-wide observer registry and the window listeners feeding it.
#[derive(Clone)]
pub struct ScrollObservers {
    registry: SharedRegistry,
    listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl ScrollObservers {
    /// Create the registry and listen to window scroll and resize.
    pub fn install() -> Self {
        let registry: SharedRegistry = Rc::default();
        let window = gloo_utils::window();

        let listeners = ["scroll", "resize"]
            .into_iter()
            .map(|event| {
                let registry = Rc::downgrade(&registry);
                EventListener::new(&window, event, move |_| {
                    if let Some(registry) = registry.upgrade() {
                        refresh(&registry);
                    }
                })
            })
            .collect();

        log::debug!("🔭 Scroll observers installed");
        Self {
            registry,
            listeners: Rc::new(RefCell::new(listeners)),
        }
    }

    /// Re-evaluate every observer at the current scroll position.
    pub fn refresh(&self) {
        refresh(&self.registry);
    }

    /// Release every observer and stop listening.
    pub fn teardown(&self) {
        let released = self.registry.borrow_mut().release_all();
        self.listeners.borrow_mut().clear();
        log::debug!("🧹 Scroll observers torn down ({} released)", released);
    }

    /// Register a section's groups and arm its fallback timers.
    pub fn mount_section(&self, reveal: SectionReveal) -> MountedReveal {
        let section = dom::element_by_id(reveal.owner);
        let mut players = Vec::new();

        let report = {
            let mut registry = self.registry.borrow_mut();
            reveal.mount(&mut registry, |group| {
                let handle = resolve_group(section.as_ref()?, group)?;
                let bounds = dom::measure(&handle.trigger)?;
                players.push((group.target, handle.player.clone()));
                Some((bounds, handle))
            })
        };

        let fallbacks = reveal
            .fallback_frames()
            .into_iter()
            .map(|(fallback, frame)| {
                let player = players
                    .iter()
                    .find(|(target, _)| *target == fallback.target)
                    .map(|(_, player)| player.clone());
                let owner = reveal.owner;
                let children = reveal.find(fallback.target).is_some_and(|g| g.children);
                Timeout::new(fallback.delay_ms, move || match player {
                    Some(player) => player.finish(),
                    None => force_resting(owner, fallback.target, children, &frame),
                })
            })
            .collect();

        log_report(reveal.owner, &report);
        let mounted = MountedReveal {
            reveal,
            players: players.into_iter().map(|(_, player)| player).collect(),
            fallbacks,
        };

        // Sections already in view play right away
        self.refresh();
        mounted
    }

    /// Undo [`mount_section`](Self::mount_section).
    pub fn unmount_section(&self, mounted: MountedReveal) {
        let MountedReveal { reveal, players, fallbacks } = mounted;
        drop(fallbacks);
        for player in &players {
            player.kill();
        }
        reveal.unmount(&mut self.registry.borrow_mut());
    }
}

/// What a mounted section owns until it unmounts.
pub struct MountedReveal {
    reveal: SectionReveal,
    players: Vec<TimelinePlayer>,
    fallbacks: Vec<Timeout>,
}

fn refresh(registry: &SharedRegistry) {
    let fired = registry
        .borrow_mut()
        .update_measured(dom::scroll_y(), dom::viewport_height(), |handle| {
            dom::measure(&handle.trigger)
        });
    for (handle, action) in fired {
        handle.player.apply_action(action);
    }
}

/// Elements a group animates: the container itself or its children.
fn group_elements(container: &HtmlElement, children: bool) -> Vec<HtmlElement> {
    if children {
        dom::child_elements(container)
    } else {
        vec![container.clone()]
    }
}

fn resolve_group(section: &Element, group: &RevealGroup) -> Option<RevealHandle> {
    let container = dom::anim_targets(section, group.target).into_iter().next()?;
    let trigger: Element = match group.source {
        TriggerSource::Section => section.clone(),
        TriggerSource::Container => container.clone().into(),
    };

    let player = TimelinePlayer::new(Timeline::new().then(group.tween.clone()));
    player.bind(group.target, group_elements(&container, group.children));
    // Hold the from-state until the trigger fires
    player.render();

    Some(RevealHandle { trigger, player })
}

/// Fallback for a group that never registered: write the resting state directly.
fn force_resting(owner: &str, target: &str, children: bool, frame: &StyleFrame) {
    let Some(section) = dom::element_by_id(owner) else {
        return;
    };
    for container in dom::anim_targets(&section, target) {
        for element in group_elements(&container, children) {
            dom::apply_frame(&element, frame);
        }
    }
}

fn log_report(owner: &str, report: &MountReport) {
    let skipped = report.skipped();
    if skipped.is_empty() {
        log::debug!("🎬 '{}' reveals armed ({})", owner, report.registered().len());
    } else {
        log::debug!("🎬 '{}' reveals armed, skipped: {:?}", owner, skipped);
    }
}

// =============================================================================
// Component hook
// =============================================================================

/// Register `reveal` once `node` is rendered, and release it on cleanup.
pub fn use_section_reveal<T>(node: NodeRef<T>, reveal: fn() -> SectionReveal)
where
    T: ElementDescriptor + Clone + 'static,
{
    let Some(observers) = use_context::<ScrollObservers>() else {
        log::warn!("⚠️ No scroll observers in context, reveals disabled");
        return;
    };
    let mounted: Rc<RefCell<Option<MountedReveal>>> = Rc::default();

    {
        let mounted = mounted.clone();
        let observers = observers.clone();
        on_first_frame(node, move || {
            *mounted.borrow_mut() = Some(observers.mount_section(reveal()));
        });
    }

    on_cleanup(move || {
        let taken = mounted.borrow_mut().take();
        if let Some(taken) = taken {
            observers.unmount_section(taken);
        }
    });
}
