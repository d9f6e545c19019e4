//! Scroll-triggered reveals.
//!
//! - [`trigger`] - band geometry (`"top 80%"`) and toggle actions
//! - [`registry`] - the process-wide observer set, released per owner
//! - [`reveal`] - what each section registers on mount

pub mod registry;
pub mod reveal;
pub mod trigger;

pub use registry::{ObserverId, ObserverRegistry};
pub use reveal::{Fallback, MountOutcome, MountReport, RevealGroup, SectionReveal, TriggerSource};
pub use trigger::{
    Anchor, Bounds, Edge, ScrollTrigger, ToggleAction, ToggleActions, TriggerConfig, Zone,
};
