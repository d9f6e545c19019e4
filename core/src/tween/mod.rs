//! Tween engine.
//!
//! Animations are plain data: a [`Tween`] lists property deltas, a
//! duration, an [`Easing`] and a [`Position`] on its [`Timeline`]. The
//! timeline resolves positions into start times and can be sampled at
//! any instant; a [`Playhead`] moves the sampling time forward or back.
//!
//! ```text
//! Tween ──push──▶ Timeline ──sample(t)──▶ [ElementFrame] ──css()──▶ inline styles
//!                    ▲
//!                 Playhead (play / reverse / kill, advance(dt))
//! ```
//!
//! Nothing here touches the DOM; the frontend applies the frames.

mod easing;
mod style;
mod timeline;

pub use easing::{EaseDir, Easing};
pub use style::{Property, PropertyDelta, StyleFrame};
pub use timeline::{
    ElementFrame, PlayEvent, PlayState, Playhead, Position, Repeat, Timeline, Tween,
};
