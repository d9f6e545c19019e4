//! Animation presets for every part of the page.
//!
//! Durations, offsets and easing names are kept exactly as designed;
//! the frontend binds element counts for staggered groups before playing.

use crate::scroll::{Anchor, Edge, RevealGroup, SectionReveal, ToggleActions, TriggerConfig, TriggerSource};
use crate::tween::{Easing, Position, Property, Repeat, Timeline, Tween};

// =============================================================================
// Target names
// =============================================================================

pub mod targets {
    pub const HEADLINE: &str = "headline";
    pub const SUBTITLE: &str = "subtitle";
    pub const CTA: &str = "cta";
    pub const BACKDROP: &str = "backdrop";

    pub const IMAGE: &str = "image";
    pub const CONTENT: &str = "content";
    pub const SKILLS: &str = "skills";
    pub const CARDS: &str = "cards";
    pub const FORM: &str = "form";
    pub const SOCIALS: &str = "socials";
    pub const FOOTER: &str = "footer";
    pub const PARTICLES: &str = "particles";

    pub const MENU_ITEMS: &str = "menu-items";
    pub const SUBMIT: &str = "submit";
}

use targets::*;

// =============================================================================
// Entrance timelines
// =============================================================================

/// Hero entrance: headline, then subtitle, CTA and 3D backdrop
/// overlapping the tail of what came before.
pub fn hero_entrance() -> Timeline {
    Timeline::new()
        .delay(0.5)
        .then(
            Tween::new(HEADLINE, 1.2)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::Y, 50.0)
                .reveal(Property::Blur, 10.0)
                .ease(Easing::POWER3_OUT),
        )
        .then(
            Tween::new(SUBTITLE, 1.0)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::Y, 30.0)
                .reveal(Property::Blur, 5.0)
                .ease(Easing::POWER3_OUT)
                .at(Position::Relative(-0.8)),
        )
        .then(
            Tween::new(CTA, 0.8)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::Scale, 0.8)
                .ease(Easing::BACK_OUT)
                .at(Position::Relative(-0.5)),
        )
        .then(
            Tween::new(BACKDROP, 1.2)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::X, 100.0)
                .reveal(Property::Scale, 0.8)
                .ease(Easing::POWER3_OUT)
                .at(Position::Relative(-1.0)),
        )
}

/// Mobile menu items slide in one after another.
pub fn menu_entrance(items: usize) -> Timeline {
    Timeline::new().then(
        Tween::new(MENU_ITEMS, 0.3)
            .reveal(Property::X, 100.0)
            .reveal(Property::Opacity, 0.0)
            .stagger(0.1)
            .elements(items),
    )
}

/// Brief pulse on the submit button after a successful send.
pub fn submit_acknowledgement() -> Timeline {
    Timeline::new().then(
        Tween::new(SUBMIT, 0.2)
            .from_to(Property::Scale, 1.0, 1.1)
            .ease(Easing::POWER2_OUT)
            .repeat(Repeat::Times(1))
            .yoyo(),
    )
}

/// Footer particles float up and down forever.
pub fn footer_particles(count: usize) -> Timeline {
    Timeline::new().then(
        Tween::new(PARTICLES, 4.0)
            .from_to(Property::Y, 0.0, -10.0)
            .ease(Easing::SINE_IN_OUT)
            .repeat(Repeat::Forever)
            .yoyo()
            .stagger(0.8)
            .elements(count),
    )
}

// =============================================================================
// Section reveals
// =============================================================================

fn band(start: f64, end: f64, actions: ToggleActions) -> TriggerConfig {
    TriggerConfig::new(Anchor::new(Edge::Top, start), Anchor::new(Edge::Bottom, end), actions)
}

/// Staggered pop-in used by skill cards and social icons.
fn pop_in(target: &'static str) -> Tween {
    Tween::new(target, 0.6)
        .reveal(Property::Opacity, 0.0)
        .reveal(Property::Y, 30.0)
        .reveal(Property::Scale, 0.8)
        .ease(Easing::BACK_OUT)
        .stagger(0.1)
}

pub fn about_reveal() -> SectionReveal {
    SectionReveal::new("about")
        .group(RevealGroup {
            target: IMAGE,
            source: TriggerSource::Section,
            children: false,
            tween: Tween::new(IMAGE, 1.2)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::X, -100.0)
                .reveal(Property::Rotation, -5.0)
                .ease(Easing::POWER3_OUT),
            trigger: band(80.0, 20.0, ToggleActions::PLAY_REVERSE),
        })
        .group(RevealGroup {
            target: CONTENT,
            source: TriggerSource::Section,
            children: false,
            tween: Tween::new(CONTENT, 1.0)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::Y, 50.0)
                .reveal(Property::Blur, 10.0)
                .ease(Easing::POWER3_OUT),
            trigger: band(70.0, 20.0, ToggleActions::PLAY_REVERSE),
        })
        .group(RevealGroup {
            target: SKILLS,
            source: TriggerSource::Container,
            children: true,
            tween: pop_in(SKILLS),
            trigger: band(80.0, 20.0, ToggleActions::PLAY_REVERSE),
        })
}

pub fn projects_reveal() -> SectionReveal {
    SectionReveal::new("projects").group(RevealGroup {
        target: CARDS,
        source: TriggerSource::Section,
        children: true,
        tween: Tween::new(CARDS, 0.8)
            .reveal(Property::Opacity, 0.0)
            .reveal(Property::Y, 60.0)
            .reveal(Property::Scale, 0.9)
            .ease(Easing::POWER3_OUT)
            .stagger(0.2),
        trigger: band(70.0, 20.0, ToggleActions::PLAY_REVERSE),
    })
}

pub fn contact_reveal() -> SectionReveal {
    SectionReveal::new("contact")
        .group(RevealGroup {
            target: FORM,
            source: TriggerSource::Section,
            children: false,
            tween: Tween::new(FORM, 1.0)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::X, -50.0)
                .reveal(Property::Blur, 10.0)
                .ease(Easing::POWER3_OUT),
            trigger: band(70.0, 20.0, ToggleActions::PLAY_REVERSE),
        })
        .group(RevealGroup {
            target: SOCIALS,
            source: TriggerSource::Container,
            children: true,
            tween: pop_in(SOCIALS),
            trigger: band(90.0, 10.0, ToggleActions::PLAY_ONCE),
        })
        .fallback(SOCIALS, 1_000)
}

pub fn footer_reveal() -> SectionReveal {
    SectionReveal::new("footer")
        .group(RevealGroup {
            target: FOOTER,
            source: TriggerSource::Container,
            children: false,
            tween: Tween::new(FOOTER, 1.0)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::Y, 60.0)
                .reveal(Property::Blur, 10.0)
                .ease(Easing::POWER3_OUT),
            trigger: band(95.0, 5.0, ToggleActions::PLAY_ONCE),
        })
        .fallback(FOOTER, 500)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::{PlayEvent, PlayState, Playhead};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hero_ordering() {
        let tl = hero_entrance();
        let starts: Vec<(&str, f64)> = tl.tweens().map(|(t, s)| (t.target, s)).collect();
        assert_eq!(starts[0].0, HEADLINE);
        assert!(close(starts[0].1, 0.5));
        assert!(close(starts[1].1, 0.9));
        assert!(close(starts[2].1, 1.4));
        assert!(close(starts[3].1, 1.2));
        assert!(close(tl.duration(), 2.4));
    }

    #[test]
    fn test_hero_rest_state() {
        let tl = hero_entrance();
        for frame in tl.sample(tl.duration()) {
            assert_eq!(frame.frame.opacity, Some(1.0), "{}", frame.target);
        }
    }

    #[test]
    fn test_menu_stagger() {
        let tl = menu_entrance(6);
        assert!(close(tl.duration(), 0.3 + 0.5));
        assert_eq!(tl.sample(0.0).len(), 6);
    }

    #[test]
    fn test_submit_pulse_returns_to_rest() {
        let tl = submit_acknowledgement();
        assert!(close(tl.duration(), 0.4));
        assert_eq!(tl.sample(tl.duration())[0].frame.scale, Some(1.0));
    }

    #[test]
    fn test_reveal_policies() {
        let contact = contact_reveal();
        assert_eq!(contact.find(FORM).unwrap().trigger.actions, ToggleActions::PLAY_REVERSE);
        assert_eq!(contact.find(SOCIALS).unwrap().trigger.actions, ToggleActions::PLAY_ONCE);
        assert_eq!(contact.fallbacks[0].delay_ms, 1_000);

        let footer = footer_reveal();
        assert_eq!(footer.groups[0].trigger.start, Anchor::new(Edge::Top, 95.0));
        assert_eq!(footer.groups[0].trigger.actions, ToggleActions::PLAY_ONCE);

        for reveal in [about_reveal(), projects_reveal()] {
            for group in &reveal.groups {
                assert_eq!(group.trigger.actions, ToggleActions::PLAY_REVERSE);
            }
        }
    }

    #[test]
    fn test_about_image_reverses_to_from_state() {
        let image = about_reveal().find(IMAGE).unwrap().tween.clone();
        let tl = Timeline::new().then(image);
        let mut head = Playhead::for_timeline(&tl);
        let mut events = Vec::new();

        head.play();
        while head.state() == PlayState::Playing {
            events.extend(head.advance(1.0 / 60.0));
        }
        let revealed = tl.sample(head.time());
        assert_eq!(revealed[0].frame.get(Property::Opacity), Some(1.0));
        assert_eq!(revealed[0].frame.get(Property::X), Some(0.0));

        // Scrolled back above the band
        head.reverse();
        while head.state() == PlayState::Reversing {
            events.extend(head.advance(1.0 / 60.0));
        }
        assert_eq!(events, vec![PlayEvent::Completed, PlayEvent::Rewound]);

        let frames = tl.sample(head.time());
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].frame.get(Property::Opacity), Some(0.0));
        assert_eq!(frames[0].frame.get(Property::X), Some(-100.0));
        assert_eq!(frames[0].frame.get(Property::Rotation), Some(-5.0));
    }

    #[test]
    fn test_particles_never_finish() {
        assert!(footer_particles(5).duration().is_infinite());
    }
}
