//! Animation frame loop and timeline playback against real elements.
//!
//! ```text
//! FrameLoop (requestAnimationFrame, dt) ──▶ TimelinePlayer::step
//!                                             ├── Playhead::advance
//!                                             ├── Timeline::sample ──▶ inline styles
//!                                             └── on_event(Completed | Rewound)
//! ```
//!
//! Dropping a [`FrameLoop`] cancels the pending frame. Components call
//! [`TimelinePlayer::kill`] from `on_cleanup`.

use std::cell::RefCell;
use std::rc::Rc;

use folio::scroll::ToggleAction;
use folio::tween::{PlayEvent, Playhead, Timeline};
use gloo_render::{request_animation_frame, AnimationFrame};
use leptos::html::ElementDescriptor;
use leptos::{create_effect, on_cleanup, NodeRef};
use web_sys::{Element, HtmlElement};

use crate::config::MAX_FRAME_STEP;
use crate::services::dom;

// =============================================================================
// Frame loop
// =============================================================================

type Step = Box<dyn FnMut(f64) -> bool>;

struct LoopState {
    frame: Option<AnimationFrame>,
    last: Option<f64>,
    step: Option<Step>,
    running: bool,
}

/// Calls `step(dt)` once per animation frame until it returns `false`.
///
/// The first call gets `dt = 0`; later steps are clamped to
/// [`MAX_FRAME_STEP`].
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    pub fn start(step: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(RefCell::new(LoopState {
            frame: None,
            last: None,
            step: Some(Box::new(step)),
            running: true,
        }));
        request_next(&state);
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.running = false;
        state.frame = None;
        state.step = None;
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_next(state: &Rc<RefCell<LoopState>>) {
    let weak = Rc::downgrade(state);
    let frame = request_animation_frame(move |timestamp| {
        if let Some(state) = weak.upgrade() {
            tick(&state, timestamp);
        }
    });
    state.borrow_mut().frame = Some(frame);
}

fn tick(state: &Rc<RefCell<LoopState>>, timestamp_ms: f64) {
    let (step, dt) = {
        let mut s = state.borrow_mut();
        s.frame.take();
        if !s.running {
            return;
        }
        let now = timestamp_ms / 1000.0;
        let dt = s
            .last
            .map_or(0.0, |last| (now - last).clamp(0.0, MAX_FRAME_STEP));
        s.last = Some(now);
        (s.step.take(), dt)
    };

    let Some(mut step) = step else {
        return;
    };
    // The step may stop this loop; its state outlives the call
    let more = step(dt);

    let keep_going = {
        let mut s = state.borrow_mut();
        if more && s.running {
            s.step = Some(step);
            true
        } else {
            s.running = false;
            false
        }
    };
    if keep_going {
        request_next(state);
    }
}

/// Holds at most one queued animation frame.
///
/// Holding a new frame, cancelling, or dropping the last clone drops the
/// previous handle, which cancels it if it has not fired yet. A job must
/// not reschedule or cancel its own slot.
pub struct FrameSlot<H = AnimationFrame> {
    pending: Rc<RefCell<Option<H>>>,
}

impl<H> Clone for FrameSlot<H> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

impl<H> Default for FrameSlot<H> {
    fn default() -> Self {
        Self {
            pending: Rc::default(),
        }
    }
}

impl<H> FrameSlot<H> {
    /// Keep `handle`, cancelling whatever was queued before.
    pub fn hold(&self, handle: H) {
        let previous = self.pending.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

impl FrameSlot {
    /// Run `job` on the next animation frame, replacing any queued job.
    pub fn schedule(&self, job: impl FnOnce() + 'static) {
        self.hold(request_animation_frame(move |_| job()));
    }
}

/// Run `job` on the first animation frame after `node` is rendered.
///
/// By then the element is attached and measurable. Cancelled if the
/// owning component is cleaned up first.
pub fn on_first_frame<T>(node: NodeRef<T>, job: impl FnOnce() + 'static)
where
    T: ElementDescriptor + Clone + 'static,
{
    let frame: FrameSlot = FrameSlot::default();
    let job = RefCell::new(Some(job));

    {
        let frame = frame.clone();
        create_effect(move |_| {
            if node.get().is_none() {
                return;
            }
            if let Some(job) = job.borrow_mut().take() {
                frame.schedule(job);
            }
        });
    }

    on_cleanup(move || frame.cancel());
}

// =============================================================================
// Timeline player
// =============================================================================

type EventHandler = Box<dyn FnMut(PlayEvent)>;

struct PlayerState {
    timeline: Timeline,
    head: Playhead,
    bound: Vec<(&'static str, Vec<HtmlElement>)>,
    ticker: Option<FrameLoop>,
    on_event: Option<EventHandler>,
}

/// A timeline bound to DOM elements, played with a [`FrameLoop`].
///
/// Cheap to clone; clones share the same playback.
#[derive(Clone)]
pub struct TimelinePlayer {
    state: Rc<RefCell<PlayerState>>,
}

impl TimelinePlayer {
    pub fn new(timeline: Timeline) -> Self {
        let head = Playhead::for_timeline(&timeline);
        Self {
            state: Rc::new(RefCell::new(PlayerState {
                timeline,
                head,
                bound: Vec::new(),
                ticker: None,
                on_event: None,
            })),
        }
    }

    /// Attach the elements of one target group, before playing.
    ///
    /// Staggered tweens on `target` are resized to the element count.
    pub fn bind(&self, target: &'static str, elements: Vec<HtmlElement>) {
        let mut state = self.state.borrow_mut();
        state.timeline.bind_elements(target, elements.len());
        state.head = Playhead::for_timeline(&state.timeline);
        state.bound.retain(|(bound, _)| *bound != target);
        state.bound.push((target, elements));
    }

    /// Bind every target of the timeline to the `data-anim` elements under `root`.
    pub fn bind_within(&self, root: &Element) {
        let mut targets: Vec<&'static str> = Vec::new();
        for (tween, _) in self.state.borrow().timeline.tweens() {
            if !targets.contains(&tween.target) {
                targets.push(tween.target);
            }
        }
        for target in targets {
            self.bind(target, dom::anim_targets(root, target));
        }
    }

    /// Called with `Completed` / `Rewound` as playback reaches an end.
    pub fn on_event(&self, handler: impl FnMut(PlayEvent) + 'static) {
        self.state.borrow_mut().on_event = Some(Box::new(handler));
    }

    pub fn play(&self) {
        self.command(Playhead::play);
    }

    /// Jump to the end state.
    pub fn finish(&self) {
        self.command(Playhead::finish);
    }

    /// Run a scroll trigger's toggle action.
    pub fn apply_action(&self, action: ToggleAction) {
        self.command(|head| action.apply_to(head));
    }

    /// Stop for good. Styles stay as they are.
    pub fn kill(&self) {
        let mut state = self.state.borrow_mut();
        state.head.kill();
        state.ticker = None;
        state.on_event = None;
    }

    /// Write the current frame to the bound elements.
    pub fn render(&self) {
        let state = self.state.borrow();
        for frame in state.timeline.sample(state.head.time()) {
            let element = state
                .bound
                .iter()
                .find(|(target, _)| *target == frame.target)
                .and_then(|(_, elements)| elements.get(frame.index));
            if let Some(element) = element {
                dom::apply_frame(element, &frame.frame);
            }
        }
    }

    fn command(&self, apply: impl FnOnce(&mut Playhead)) {
        let start_loop = {
            let mut state = self.state.borrow_mut();
            apply(&mut state.head);
            let running = state.ticker.as_ref().is_some_and(FrameLoop::is_running);
            if !state.head.is_active() {
                state.ticker = None;
            }
            state.head.is_active() && !running
        };

        if start_loop {
            let weak = Rc::downgrade(&self.state);
            let ticker = FrameLoop::start(move |dt| {
                weak.upgrade()
                    .map_or(false, |state| TimelinePlayer { state }.step(dt))
            });
            self.state.borrow_mut().ticker = Some(ticker);
        } else {
            self.render();
        }
    }

    fn step(&self, dt: f64) -> bool {
        let event = self.state.borrow_mut().head.advance(dt);
        self.render();
        if let Some(event) = event {
            self.emit(event);
        }
        self.state.borrow().head.is_active()
    }

    fn emit(&self, event: PlayEvent) {
        let handler = self.state.borrow_mut().on_event.take();
        if let Some(mut handler) = handler {
            handler(event);
            let mut state = self.state.borrow_mut();
            // Keep the handler unless it was replaced or the player killed
            if state.on_event.is_none() && !state.head.is_killed() {
                state.on_event = Some(handler);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct QueuedFrame {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for QueuedFrame {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_rescheduling_cancels_the_queued_frame() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let frame = |id| QueuedFrame {
            id,
            cancelled: cancelled.clone(),
        };
        let slot: FrameSlot<QueuedFrame> = FrameSlot::default();

        // Menu opened, closed and reopened before the first frame fired
        slot.hold(frame(1));
        slot.hold(frame(2));
        assert_eq!(*cancelled.borrow(), vec![1]);

        // Component cleanup
        slot.clone().cancel();
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_dropping_last_clone_cancels() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let slot: FrameSlot<QueuedFrame> = FrameSlot::default();
        let effect_copy = slot.clone();
        slot.hold(QueuedFrame {
            id: 7,
            cancelled: cancelled.clone(),
        });

        drop(slot);
        assert!(cancelled.borrow().is_empty());
        drop(effect_copy);
        assert_eq!(*cancelled.borrow(), vec![7]);
    }
}
