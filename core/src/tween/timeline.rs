use std::fmt;

use super::easing::Easing;
use super::style::{Property, PropertyDelta, StyleFrame};

// =============================================================================
// Position
// =============================================================================

/// Where a tween is placed on its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// Right after everything added so far.
    #[default]
    Sequence,
    /// Offset from the timeline's current end (`"-=0.8"`, `"+=0.2"`).
    Relative(f64),
}

// =============================================================================
// Tween
// =============================================================================

/// How many extra times a tween plays after the first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Never,
    Times(u32),
    Forever,
}

impl Repeat {
    fn iterations(self) -> f64 {
        match self {
            Repeat::Never => 1.0,
            Repeat::Times(n) => f64::from(n) + 1.0,
            Repeat::Forever => f64::INFINITY,
        }
    }
}

/// Declarative description of one property animation.
///
/// A tween targets a named group of elements. With `elements > 1` every
/// element runs the same deltas, offset by `stagger` seconds from the
/// previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: &'static str,
    pub deltas: Vec<PropertyDelta>,
    /// Seconds for one run of one element.
    pub duration: f64,
    pub ease: Easing,
    pub position: Position,
    pub stagger: f64,
    pub elements: usize,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl Tween {
    pub fn new(target: &'static str, duration: f64) -> Self {
        Self {
            target,
            deltas: Vec::new(),
            duration: duration.max(0.0),
            ease: Easing::default(),
            position: Position::Sequence,
            stagger: 0.0,
            elements: 1,
            repeat: Repeat::Never,
            yoyo: false,
        }
    }

    pub fn from_to(mut self, property: Property, from: f64, to: f64) -> Self {
        self.deltas.push(PropertyDelta::new(property, from, to));
        self
    }

    /// Animate from `from` to the property's resting value.
    pub fn reveal(mut self, property: Property, from: f64) -> Self {
        self.deltas.push(PropertyDelta::reveal(property, from));
        self
    }

    /// Animate from the resting value to `to`.
    pub fn conceal(mut self, property: Property, to: f64) -> Self {
        self.deltas.push(PropertyDelta::new(property, property.resting(), to));
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger.max(0.0);
        self
    }

    pub fn elements(mut self, count: usize) -> Self {
        self.elements = count;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Total time from the first element's start to the last element's end.
    pub fn span(&self) -> f64 {
        let last_offset = self.stagger * self.elements.saturating_sub(1) as f64;
        self.duration * self.repeat.iterations() + last_offset
    }

    /// Linear progress (0.0..=1.0) of one element at `local` seconds
    /// after the tween started, accounting for stagger, repeat and yoyo.
    pub fn element_progress(&self, local: f64, index: usize) -> f64 {
        let t = local - self.stagger * index as f64;
        if t <= 0.0 {
            return 0.0;
        }

        let iterations = self.repeat.iterations();
        if self.duration <= 0.0 || t >= self.duration * iterations {
            // Finished: a yoyo with an even run count ends where it began
            let even_runs = iterations.is_finite() && (iterations as u64) % 2 == 0;
            return if self.yoyo && even_runs { 0.0 } else { 1.0 };
        }

        let run = (t / self.duration).floor();
        let within = t / self.duration - run;
        if self.yoyo && (run as u64) % 2 == 1 {
            1.0 - within
        } else {
            within
        }
    }

    /// Property values for one element at `local` seconds.
    pub fn frame_at(&self, local: f64, index: usize) -> StyleFrame {
        let eased = self.ease.apply(self.element_progress(local, index));
        let mut frame = StyleFrame::default();
        for delta in &self.deltas {
            frame.set(delta.property, delta.value_at(eased));
        }
        frame
    }

    /// The frame every element holds once the tween has finished.
    pub fn final_frame(&self) -> StyleFrame {
        self.frame_at(self.span(), 0)
    }
}

// =============================================================================
// Timeline
// =============================================================================

/// Frame for one element of one target group.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFrame {
    pub target: &'static str,
    pub index: usize,
    pub frame: StyleFrame,
}

#[derive(Debug, Clone, PartialEq)]
struct Scheduled {
    tween: Tween,
    start: f64,
}

/// Ordered sequence of tweens with resolved start times.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    scheduled: Vec<Scheduled>,
    delay: f64,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait this long before the first tween.
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn then(mut self, tween: Tween) -> Self {
        self.push(tween);
        self
    }

    /// Append a tween, returning its resolved start time (before delay).
    pub fn push(&mut self, tween: Tween) -> f64 {
        let start = match tween.position {
            Position::Sequence => self.end,
            Position::Relative(offset) => self.end + offset,
        }
        .max(0.0);

        self.end = self.end.max(start + tween.span());
        self.scheduled.push(Scheduled { tween, start });
        start
    }

    /// Total length including the delay. Infinite if any tween repeats forever.
    pub fn duration(&self) -> f64 {
        self.delay + self.end
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }

    /// Tweens with their start times (including delay).
    pub fn tweens(&self) -> impl Iterator<Item = (&Tween, f64)> {
        self.scheduled.iter().map(move |s| (&s.tween, self.delay + s.start))
    }

    /// Adjust the element count of every tween on `target` and reflow.
    pub fn bind_elements(&mut self, target: &str, count: usize) {
        let tweens: Vec<Tween> = self
            .scheduled
            .drain(..)
            .map(|s| {
                let mut tween = s.tween;
                if tween.target == target {
                    tween.elements = count;
                }
                tween
            })
            .collect();
        self.end = 0.0;
        for tween in tweens {
            self.push(tween);
        }
    }

    /// Linear progress of the first tween on `target` at `time`.
    pub fn tween_progress(&self, target: &str, time: f64) -> Option<f64> {
        self.tweens()
            .find(|(tween, _)| tween.target == target)
            .map(|(tween, start)| {
                let span = tween.span();
                if span <= 0.0 {
                    if time >= start { 1.0 } else { 0.0 }
                } else {
                    ((time - start) / span).clamp(0.0, 1.0)
                }
            })
    }

    /// Evaluate every element of every target at `time` seconds.
    ///
    /// Tweens that have not started yet still report their from-values,
    /// but never overwrite values from an earlier tween that is running.
    pub fn sample(&self, time: f64) -> Vec<ElementFrame> {
        let mut frames: Vec<ElementFrame> = Vec::new();

        for (tween, start) in self.tweens() {
            let local = time - start;
            for index in 0..tween.elements {
                let frame = tween.frame_at(local, index);
                let started = local - tween.stagger * index as f64 > 0.0;

                match frames
                    .iter_mut()
                    .find(|f| f.target == tween.target && f.index == index)
                {
                    Some(existing) => {
                        for delta in &tween.deltas {
                            let unset = existing.frame.get(delta.property).is_none();
                            if started || unset {
                                if let Some(value) = frame.get(delta.property) {
                                    existing.frame.set(delta.property, value);
                                }
                            }
                        }
                    }
                    None => frames.push(ElementFrame {
                        target: tween.target,
                        index,
                        frame,
                    }),
                }
            }
        }

        frames
    }
}

// =============================================================================
// Playhead
// =============================================================================

/// Playback state of a [`Playhead`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// Not started, sitting at time 0.
    Idle,
    Playing,
    Reversing,
    /// Reached the end going forward.
    Completed,
    /// Reached the start going backward.
    Rewound,
    /// Stopped mid-way; `play` or `reverse` continues from here.
    Paused,
    /// Torn down; ignores every further command.
    Killed,
}

/// Event produced when playback reaches an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEvent {
    Completed,
    Rewound,
}

/// Moves a time cursor over a timeline of known duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Playhead {
    time: f64,
    duration: f64,
    state: PlayState,
}

impl Playhead {
    pub fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration: duration.max(0.0),
            state: PlayState::Idle,
        }
    }

    pub fn for_timeline(timeline: &Timeline) -> Self {
        Self::new(timeline.duration())
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PlayState::Playing | PlayState::Reversing)
    }

    pub fn is_killed(&self) -> bool {
        self.state == PlayState::Killed
    }

    /// Fraction of the duration elapsed (0.0 for infinite timelines).
    pub fn progress(&self) -> f64 {
        if !self.duration.is_finite() {
            0.0
        } else if self.duration <= 0.0 {
            if self.time > 0.0 || self.state == PlayState::Completed { 1.0 } else { 0.0 }
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Play forward from the current time.
    pub fn play(&mut self) {
        if self.state != PlayState::Killed {
            self.state = PlayState::Playing;
        }
    }

    /// Play backward from the current time.
    pub fn reverse(&mut self) {
        if self.state != PlayState::Killed {
            self.state = PlayState::Reversing;
        }
    }

    /// Jump back to 0 and play forward.
    pub fn restart(&mut self) {
        if self.state != PlayState::Killed {
            self.time = 0.0;
            self.state = PlayState::Playing;
        }
    }

    /// Jump to the end without emitting an event.
    pub fn finish(&mut self) {
        if self.state != PlayState::Killed && self.duration.is_finite() {
            self.time = self.duration;
            self.state = PlayState::Completed;
        }
    }

    /// Stop moving, keeping the current time.
    pub fn pause(&mut self) {
        if self.is_active() {
            self.state = PlayState::Paused;
        }
    }

    /// Back to time 0 without playing.
    pub fn reset(&mut self) {
        if self.state != PlayState::Killed {
            self.time = 0.0;
            self.state = PlayState::Idle;
        }
    }

    pub fn kill(&mut self) {
        self.state = PlayState::Killed;
    }

    /// Advance by `dt` seconds; reports when an end is reached.
    pub fn advance(&mut self, dt: f64) -> Option<PlayEvent> {
        let dt = dt.max(0.0);
        match self.state {
            PlayState::Playing => {
                self.time += dt;
                if self.time >= self.duration {
                    self.time = self.duration;
                    self.state = PlayState::Completed;
                    return Some(PlayEvent::Completed);
                }
                None
            }
            PlayState::Reversing => {
                self.time = self.time.min(self.duration) - dt;
                if self.time <= 0.0 {
                    self.time = 0.0;
                    self.state = PlayState::Rewound;
                    return Some(PlayEvent::Rewound);
                }
                None
            }
            _ => None,
        }
    }
}

impl fmt::Display for Playhead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:.3}s/{:.3}s", self.state, self.time, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_relative_offsets_resolve_against_end() {
        let mut tl = Timeline::new();
        assert_eq!(tl.push(Tween::new("a", 1.2)), 0.0);
        assert!(close(tl.push(Tween::new("b", 1.0).at(Position::Relative(-0.8))), 0.4));
        assert!(close(tl.push(Tween::new("c", 0.8).at(Position::Relative(-0.5))), 0.9));
        assert!(close(tl.push(Tween::new("d", 1.2).at(Position::Relative(-1.0))), 0.7));
        assert!(close(tl.duration(), 1.9));
    }

    #[test]
    fn test_offsets_never_go_negative() {
        let mut tl = Timeline::new();
        assert_eq!(tl.push(Tween::new("a", 0.5).at(Position::Relative(-2.0))), 0.0);
    }

    #[test]
    fn test_delay_shifts_everything() {
        let tl = Timeline::new().delay(0.5).then(Tween::new("a", 1.0));
        assert!(close(tl.duration(), 1.5));
        let (_, start) = tl.tweens().next().unwrap();
        assert!(close(start, 0.5));
    }

    #[test]
    fn test_sample_follows_easing() {
        let tl = Timeline::new().then(
            Tween::new("logo", 2.0)
                .reveal(Property::Opacity, 0.0)
                .ease(Easing::Linear),
        );
        let frames = tl.sample(0.5);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].frame.opacity, Some(0.25));

        let eased = Timeline::new().then(
            Tween::new("logo", 2.0)
                .reveal(Property::Opacity, 0.0)
                .ease(Easing::POWER2_OUT),
        );
        let value = eased.sample(1.0)[0].frame.opacity.unwrap();
        assert!(close(value, Easing::POWER2_OUT.apply(0.5)));
    }

    #[test]
    fn test_before_start_holds_from_values() {
        let tl = Timeline::new().delay(0.5).then(
            Tween::new("headline", 1.2)
                .reveal(Property::Opacity, 0.0)
                .reveal(Property::Y, 50.0),
        );
        let frame = tl.sample(0.1)[0].frame;
        assert_eq!(frame.opacity, Some(0.0));
        assert_eq!(frame.y, Some(50.0));
    }

    #[test]
    fn test_stagger() {
        let tween = Tween::new("cards", 0.8)
            .reveal(Property::Opacity, 0.0)
            .ease(Easing::Linear)
            .stagger(0.2)
            .elements(3);
        assert!(close(tween.span(), 1.2));

        let tl = Timeline::new().then(tween);
        let frames = tl.sample(0.4);
        assert_eq!(frames.len(), 3);
        assert!(close(frames[0].frame.opacity.unwrap(), 0.5));
        assert!(close(frames[1].frame.opacity.unwrap(), 0.25));
        assert_eq!(frames[2].frame.opacity, Some(0.0));
    }

    #[test]
    fn test_bind_elements_reflows() {
        let mut tl = Timeline::new()
            .then(Tween::new("items", 0.3).stagger(0.1))
            .then(Tween::new("after", 1.0));
        assert!(close(tl.duration(), 1.3));
        tl.bind_elements("items", 5);
        assert!(close(tl.duration(), 1.7));
    }

    #[test]
    fn test_yoyo_returns_to_start() {
        let pulse = Tween::new("button", 0.2)
            .from_to(Property::Scale, 1.0, 1.1)
            .ease(Easing::Linear)
            .repeat(Repeat::Times(1))
            .yoyo();
        assert!(close(pulse.span(), 0.4));
        assert!(close(pulse.frame_at(0.2, 0).scale.unwrap(), 1.1));
        assert!(close(pulse.frame_at(0.3, 0).scale.unwrap(), 1.05));
        assert_eq!(pulse.final_frame().scale, Some(1.0));
    }

    #[test]
    fn test_infinite_repeat() {
        let float = Tween::new("particles", 4.0)
            .from_to(Property::Y, 0.0, -10.0)
            .repeat(Repeat::Forever)
            .yoyo();
        assert!(float.span().is_infinite());
        // Still animating long after the first run
        let value = float.frame_at(1_000.0 + 2.0, 0).y.unwrap();
        assert!(value < 0.0 && value > -10.0);
    }

    #[test]
    fn test_tween_progress_is_linear() {
        let tl = Timeline::new()
            .then(Tween::new("logo", 1.0))
            .then(Tween::new("bar", 2.5).ease(Easing::POWER2_OUT).at(Position::Relative(-0.5)));
        assert_eq!(tl.tween_progress("bar", 0.2), Some(0.0));
        assert!(close(tl.tween_progress("bar", 1.75).unwrap(), 0.5));
        assert_eq!(tl.tween_progress("bar", 10.0), Some(1.0));
        assert_eq!(tl.tween_progress("missing", 1.0), None);
    }

    #[test]
    fn test_playhead_forward_and_reverse() {
        let mut head = Playhead::new(1.0);
        assert_eq!(head.advance(0.5), None);
        assert_eq!(head.time(), 0.0);

        head.play();
        assert_eq!(head.advance(0.6), None);
        assert_eq!(head.advance(0.6), Some(PlayEvent::Completed));
        assert_eq!(head.time(), 1.0);
        assert_eq!(head.advance(0.1), None);

        head.reverse();
        assert_eq!(head.advance(0.7), None);
        assert!(close(head.time(), 0.3));
        assert_eq!(head.advance(0.7), Some(PlayEvent::Rewound));
        assert_eq!(head.time(), 0.0);
    }

    #[test]
    fn test_playhead_kill_is_final() {
        let mut head = Playhead::new(1.0);
        head.play();
        head.kill();
        head.play();
        head.restart();
        assert_eq!(head.advance(5.0), None);
        assert!(head.is_killed());
    }

    #[test]
    fn test_playhead_finish_is_silent() {
        let mut head = Playhead::new(2.0);
        head.finish();
        assert_eq!(head.state(), PlayState::Completed);
        assert_eq!(head.progress(), 1.0);
        assert_eq!(head.advance(1.0), None);
    }

    #[test]
    fn test_pause_and_reset() {
        let mut head = Playhead::new(2.0);
        head.play();
        head.advance(0.5);
        head.pause();
        assert_eq!(head.state(), PlayState::Paused);
        assert_eq!(head.advance(1.0), None);
        assert!(close(head.time(), 0.5));

        head.play();
        head.advance(0.5);
        assert!(close(head.time(), 1.0));

        head.reset();
        assert_eq!(head.state(), PlayState::Idle);
        assert_eq!(head.time(), 0.0);

        head.kill();
        head.reset();
        assert!(head.is_killed());
    }
}
