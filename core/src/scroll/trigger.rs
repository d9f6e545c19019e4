//! Scroll trigger geometry and toggle actions.

use std::fmt;

use crate::tween::{PlayState, Playhead};

/// Vertical extent of an element in document coordinates (px).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height: height.max(0.0) }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Which edge of the trigger element an anchor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// `"<element edge> <viewport position>"`, e.g. `"top 80%"`: the point
/// reached when the element's top edge sits 80% of the viewport height
/// below the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    /// Fraction of the viewport height from the top (0.0..=1.0).
    pub viewport: f64,
}

impl Anchor {
    pub fn new(edge: Edge, viewport_percent: f64) -> Self {
        Self { edge, viewport: viewport_percent / 100.0 }
    }

    /// Scroll offset at which this anchor is crossed.
    pub fn scroll_offset(&self, bounds: Bounds, viewport_height: f64) -> f64 {
        let edge_y = match self.edge {
            Edge::Top => bounds.top,
            Edge::Center => bounds.top + bounds.height / 2.0,
            Edge::Bottom => bounds.bottom(),
        };
        edge_y - self.viewport * viewport_height
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        };
        write!(f, "{} {}%", edge, self.viewport * 100.0)
    }
}

/// What to do with the animation when a boundary is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl ToggleAction {
    /// Run this action on an animation's playhead.
    ///
    /// `Play` on a completed animation leaves it where it is.
    pub fn apply_to(self, head: &mut Playhead) {
        match self {
            ToggleAction::Play => {
                if head.state() != PlayState::Completed {
                    head.play();
                }
            }
            ToggleAction::Pause => head.pause(),
            ToggleAction::Resume => {
                if head.state() == PlayState::Paused {
                    head.play();
                }
            }
            ToggleAction::Reverse => head.reverse(),
            ToggleAction::Restart => head.restart(),
            ToggleAction::Reset => head.reset(),
            ToggleAction::Complete => head.finish(),
            ToggleAction::None => {}
        }
    }
}

/// Actions for the four boundary crossings, in the order
/// onEnter, onLeave, onEnterBack, onLeaveBack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `"play none none reverse"`: replays every time the band is
    /// entered downward, rewinds when scrolled back above the start.
    pub const PLAY_REVERSE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    /// `"play none none none"`: plays the first time and stays revealed.
    pub const PLAY_ONCE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };
}

/// Start anchor, end anchor and what to do at each crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerConfig {
    pub start: Anchor,
    pub end: Anchor,
    pub actions: ToggleActions,
}

impl TriggerConfig {
    pub const fn new(start: Anchor, end: Anchor, actions: ToggleActions) -> Self {
        Self { start, end, actions }
    }
}

/// Where the scroll position sits relative to the trigger band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Before,
    Active,
    After,
}

/// One element's scroll observer.
///
/// The first [`update`](ScrollTrigger::update) treats the previous zone
/// as `Before`, so an element that is already in view when registered
/// fires its enter action right away.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    config: TriggerConfig,
    bounds: Bounds,
    zone: Option<Zone>,
}

impl ScrollTrigger {
    pub fn new(config: TriggerConfig, bounds: Bounds) -> Self {
        Self { config, bounds, zone: None }
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    /// Re-measure after layout changes.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn start_offset(&self, viewport_height: f64) -> f64 {
        self.config.start.scroll_offset(self.bounds, viewport_height)
    }

    pub fn end_offset(&self, viewport_height: f64) -> f64 {
        self.config
            .end
            .scroll_offset(self.bounds, viewport_height)
            .max(self.start_offset(viewport_height))
    }

    fn zone_at(&self, scroll_y: f64, viewport_height: f64) -> Zone {
        if scroll_y < self.start_offset(viewport_height) {
            Zone::Before
        } else if scroll_y > self.end_offset(viewport_height) {
            Zone::After
        } else {
            Zone::Active
        }
    }

    /// Evaluate at a new scroll position; returns the actions to run, in order.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<ToggleAction> {
        let next = self.zone_at(scroll_y, viewport_height);
        let prev = self.zone.replace(next).unwrap_or(Zone::Before);
        let a = self.config.actions;

        let fired = match (prev, next) {
            (Zone::Before, Zone::Active) => vec![a.on_enter],
            (Zone::Before, Zone::After) => vec![a.on_enter, a.on_leave],
            (Zone::Active, Zone::After) => vec![a.on_leave],
            (Zone::After, Zone::Active) => vec![a.on_enter_back],
            (Zone::After, Zone::Before) => vec![a.on_enter_back, a.on_leave_back],
            (Zone::Active, Zone::Before) => vec![a.on_leave_back],
            _ => Vec::new(),
        };

        fired
            .into_iter()
            .filter(|action| *action != ToggleAction::None)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn about_trigger() -> ScrollTrigger {
        let config = TriggerConfig::new(
            Anchor::new(Edge::Top, 80.0),
            Anchor::new(Edge::Bottom, 20.0),
            ToggleActions::PLAY_REVERSE,
        );
        // Section from 1000px to 2000px
        ScrollTrigger::new(config, Bounds::new(1000.0, 1000.0))
    }

    #[test]
    fn test_anchor_offsets_and_names() {
        let bounds = Bounds::new(1000.0, 400.0);
        assert_eq!(Anchor::new(Edge::Top, 80.0).scroll_offset(bounds, VH), 200.0);
        assert_eq!(Anchor::new(Edge::Center, 50.0).scroll_offset(bounds, VH), 700.0);
        assert_eq!(Anchor::new(Edge::Bottom, 0.0).scroll_offset(bounds, VH), 1400.0);
        assert_eq!(Anchor::new(Edge::Top, 80.0).to_string(), "top 80%");
    }

    #[test]
    fn test_band_offsets() {
        let trigger = about_trigger();
        assert_eq!(trigger.start_offset(VH), 200.0);
        assert_eq!(trigger.end_offset(VH), 1800.0);
    }

    #[test]
    fn test_play_then_reverse_on_scroll_back() {
        let mut trigger = about_trigger();
        assert!(trigger.update(0.0, VH).is_empty());
        assert_eq!(trigger.update(300.0, VH), vec![ToggleAction::Play]);
        assert!(trigger.update(600.0, VH).is_empty());
        assert_eq!(trigger.update(100.0, VH), vec![ToggleAction::Reverse]);
        // Toggles again on the next pass
        assert_eq!(trigger.update(250.0, VH), vec![ToggleAction::Play]);
    }

    #[test]
    fn test_leaving_downward_keeps_state() {
        let mut trigger = about_trigger();
        trigger.update(500.0, VH);
        assert!(trigger.update(5000.0, VH).is_empty());
        assert_eq!(trigger.zone(), Some(Zone::After));
        assert!(trigger.update(1000.0, VH).is_empty());
    }

    #[test]
    fn test_already_in_view_fires_on_first_update() {
        let mut trigger = about_trigger();
        assert_eq!(trigger.update(400.0, VH), vec![ToggleAction::Play]);
    }

    #[test]
    fn test_jump_past_band_still_plays() {
        let mut trigger = about_trigger();
        assert_eq!(trigger.update(9000.0, VH), vec![ToggleAction::Play]);
    }

    #[test]
    fn test_play_once_never_reverses() {
        let config = TriggerConfig::new(
            Anchor::new(Edge::Top, 95.0),
            Anchor::new(Edge::Bottom, 5.0),
            ToggleActions::PLAY_ONCE,
        );
        let mut trigger = ScrollTrigger::new(config, Bounds::new(3000.0, 400.0));
        assert_eq!(trigger.update(2100.0, VH), vec![ToggleAction::Play]);
        assert!(trigger.update(0.0, VH).is_empty());
        assert_eq!(trigger.update(2100.0, VH), vec![ToggleAction::Play]);
    }

    #[test]
    fn test_actions_drive_playhead() {
        let mut head = Playhead::new(1.0);
        ToggleAction::Play.apply_to(&mut head);
        head.advance(1.0);
        assert_eq!(head.state(), PlayState::Completed);

        // Re-entering a play-once band changes nothing
        ToggleAction::Play.apply_to(&mut head);
        assert_eq!(head.advance(0.1), None);

        ToggleAction::Reverse.apply_to(&mut head);
        head.advance(0.4);
        ToggleAction::Pause.apply_to(&mut head);
        assert_eq!(head.state(), PlayState::Paused);
        ToggleAction::Resume.apply_to(&mut head);
        assert_eq!(head.state(), PlayState::Playing);

        ToggleAction::Reset.apply_to(&mut head);
        assert_eq!(head.time(), 0.0);
        ToggleAction::Complete.apply_to(&mut head);
        assert_eq!(head.progress(), 1.0);
        ToggleAction::None.apply_to(&mut head);
        assert_eq!(head.state(), PlayState::Completed);
    }
}
