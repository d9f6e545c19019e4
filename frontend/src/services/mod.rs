//! Browser-side services.
//!
//! # Services
//!
//! - [`animator`] - requestAnimationFrame loop and timeline playback
//! - [`scroll`] - scroll observers and section reveal mounting
//! - [`relay`] - EmailJS REST relay for the contact form
//! - [`dom`] - scrolling, measuring and inline style helpers

pub mod animator;
pub mod dom;
pub mod relay;
pub mod scroll;

pub use animator::{FrameLoop, TimelinePlayer};
pub use relay::EmailJsRelay;
pub use scroll::{use_section_reveal, ScrollObservers};
