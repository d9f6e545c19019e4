//! Progress-driven preloader.
//!
//! A closed-form timed sequence, advanced frame by frame:
//!
//! ```text
//! Intro (logo 0–1.0s, bar 0.5–3.0s) ─▶ Hold (0.5s) ─▶ Exit (1.0s fade/scale) ─▶ Done
//!                                                                     └─ Completed (once)
//! ```
//!
//! Cancelling at any point (unmount) guarantees `Completed` is never
//! reported afterwards.

use crate::tween::{ElementFrame, Easing, Playhead, PlayEvent, Position, Property, Timeline, Tween};

/// Title block (name + role).
pub const LOGO: &str = "logo";
/// The bar whose width fills from 0% to 100%.
pub const BAR: &str = "progress-bar";
/// The preloader overlay itself.
pub const OVERLAY: &str = "preloader";

/// Pause between a full bar and the exit animation (seconds).
pub const HOLD_SECS: f64 = 0.5;

/// Current stage of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Hold,
    Exit,
    Done,
    Cancelled,
}

/// Milestones reported by [`Preloader::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderEvent {
    /// The bar reached 100%.
    Filled,
    /// The overlay started fading out.
    ExitStarted,
    /// Hand control back to the page shell. Reported exactly once.
    Completed,
}

/// Logo entrance followed by the progress bar fill.
pub fn intro_timeline() -> Timeline {
    Timeline::new()
        .then(
            Tween::new(LOGO, 1.0)
                .reveal(Property::Scale, 0.8)
                .reveal(Property::Opacity, 0.0)
                .ease(Easing::BACK_OUT),
        )
        .then(
            Tween::new(BAR, 2.5)
                .from_to(Property::WidthPercent, 0.0, 100.0)
                .ease(Easing::POWER2_OUT)
                .at(Position::Relative(-0.5)),
        )
}

/// Overlay fades and shrinks away.
pub fn exit_timeline() -> Timeline {
    Timeline::new().then(
        Tween::new(OVERLAY, 1.0)
            .conceal(Property::Opacity, 0.0)
            .conceal(Property::Scale, 0.9)
            .ease(Easing::POWER2_IN_OUT),
    )
}

/// State of one preloader mount.
#[derive(Debug, Clone)]
pub struct Preloader {
    intro: Timeline,
    exit: Timeline,
    intro_head: Playhead,
    exit_head: Playhead,
    held: f64,
    phase: Phase,
    percent: u8,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Preloader {
    /// Build and start the sequence.
    pub fn new() -> Self {
        let intro = intro_timeline();
        let exit = exit_timeline();
        let mut intro_head = Playhead::for_timeline(&intro);
        intro_head.play();
        let exit_head = Playhead::for_timeline(&exit);

        Self {
            intro,
            exit,
            intro_head,
            exit_head,
            held: 0.0,
            phase: Phase::Intro,
            percent: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Intro | Phase::Hold | Phase::Exit)
    }

    /// Whole percentage shown in the readout (never decreases).
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Readout text, e.g. `"42%"`.
    pub fn readout(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Stop everything; no further events will be reported.
    pub fn cancel(&mut self) {
        if self.is_running() {
            log::debug!("Preloader cancelled during {:?}", self.phase);
        }
        self.intro_head.kill();
        self.exit_head.kill();
        if self.phase != Phase::Done {
            self.phase = Phase::Cancelled;
        }
    }

    /// Advance the sequence by `dt` seconds.
    ///
    /// Large steps carry over across phases, so a single call can report
    /// several events in order.
    pub fn advance(&mut self, dt: f64) -> Vec<PreloaderEvent> {
        let mut events = Vec::new();
        let mut remaining = dt.max(0.0);

        loop {
            match self.phase {
                Phase::Intro => {
                    let before = self.intro_head.time();
                    let event = self.intro_head.advance(remaining);
                    remaining -= self.intro_head.time() - before;
                    self.refresh_percent();
                    if event != Some(PlayEvent::Completed) {
                        break;
                    }
                    events.push(PreloaderEvent::Filled);
                    self.phase = Phase::Hold;
                }
                Phase::Hold => {
                    let left = HOLD_SECS - self.held;
                    if remaining < left {
                        self.held += remaining;
                        break;
                    }
                    remaining -= left;
                    self.held = HOLD_SECS;
                    self.exit_head.play();
                    self.phase = Phase::Exit;
                    events.push(PreloaderEvent::ExitStarted);
                }
                Phase::Exit => {
                    if self.exit_head.advance(remaining) != Some(PlayEvent::Completed) {
                        break;
                    }
                    self.phase = Phase::Done;
                    events.push(PreloaderEvent::Completed);
                    log::info!("✨ Preloader complete");
                    break;
                }
                Phase::Done | Phase::Cancelled => break,
            }
        }

        events
    }

    fn refresh_percent(&mut self) {
        let progress = self
            .intro
            .tween_progress(BAR, self.intro_head.time())
            .unwrap_or(0.0);
        let percent = (progress * 100.0).round().clamp(0.0, 100.0) as u8;
        self.percent = self.percent.max(percent);
    }

    /// Styles for the logo, the bar and the overlay at the current instant.
    pub fn frames(&self) -> Vec<ElementFrame> {
        let mut frames = self.intro.sample(self.intro_head.time());
        if matches!(self.phase, Phase::Exit | Phase::Done) {
            frames.extend(self.exit.sample(self.exit_head.time()));
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_timeline_layout() {
        let intro = intro_timeline();
        let starts: Vec<f64> = intro.tweens().map(|(_, start)| start).collect();
        assert_eq!(starts, vec![0.0, 0.5]);
        assert!((intro.duration() - 3.0).abs() < 1e-9);
        assert!((intro.duration() + HOLD_SECS + exit_timeline().duration() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_readout_is_monotonic_and_full_before_completion() {
        let mut preloader = Preloader::new();
        assert_eq!(preloader.readout(), "0%");

        let mut last = 0;
        let mut completions = 0;
        for _ in 0..(6 * 60) {
            for event in preloader.advance(FRAME) {
                if event == PreloaderEvent::Completed {
                    assert_eq!(preloader.readout(), "100%");
                    completions += 1;
                }
            }
            assert!(preloader.percent() >= last);
            last = preloader.percent();
        }

        assert_eq!(completions, 1);
        assert_eq!(preloader.phase(), Phase::Done);
    }

    #[test]
    fn test_readout_tracks_elapsed_fraction() {
        let mut preloader = Preloader::new();
        // Bar starts at 0.5s and runs 2.5s; 1.75s is the halfway point
        preloader.advance(1.75);
        assert_eq!(preloader.readout(), "50%");
    }

    #[test]
    fn test_events_in_order_with_large_step() {
        let mut preloader = Preloader::new();
        let events = preloader.advance(10.0);
        assert_eq!(
            events,
            vec![
                PreloaderEvent::Filled,
                PreloaderEvent::ExitStarted,
                PreloaderEvent::Completed
            ]
        );
        assert!(preloader.advance(10.0).is_empty());
    }

    #[test]
    fn test_hold_delays_exit() {
        let mut preloader = Preloader::new();
        assert_eq!(preloader.advance(3.0), vec![PreloaderEvent::Filled]);
        assert_eq!(preloader.phase(), Phase::Hold);
        assert!(preloader.advance(0.4).is_empty());
        assert_eq!(preloader.advance(0.2), vec![PreloaderEvent::ExitStarted]);
    }

    #[test]
    fn test_cancel_suppresses_completion() {
        let mut preloader = Preloader::new();
        preloader.advance(2.0);
        preloader.cancel();
        assert_eq!(preloader.phase(), Phase::Cancelled);
        assert!(preloader.advance(100.0).is_empty());
        assert!(!preloader.is_running());
    }

    #[test]
    fn test_cancel_after_done_keeps_done() {
        let mut preloader = Preloader::new();
        preloader.advance(10.0);
        preloader.cancel();
        assert_eq!(preloader.phase(), Phase::Done);
    }

    #[test]
    fn test_exit_frames_fade_out() {
        let mut preloader = Preloader::new();
        preloader.advance(10.0);
        let overlay = preloader
            .frames()
            .into_iter()
            .find(|f| f.target == OVERLAY)
            .unwrap();
        assert_eq!(overlay.frame.opacity, Some(0.0));
        assert_eq!(overlay.frame.scale, Some(0.9));
    }
}
