//! # Folio - portfolio site orchestration
//!
//! The DOM-free half of the Folio portfolio site: animation timelines,
//! scroll-triggered reveals, the preloader sequence and the contact form
//! flow. The Leptos frontend renders the page and feeds these types with
//! frame times, scroll positions and element measurements.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Preloader  │────▶│ Page Shell  │────▶│  Sections   │
//! │ (timeline)  │done │ (LoadState) │     │ (reveals)   │
//! └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                │ mount / unmount
//!                     ┌─────────────┐     ┌──────▼──────┐
//!                     │   Tweens    │◀────│  Observer   │
//!                     │ (play/rev)  │     │  Registry   │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::presets::hero_entrance;
//! use folio::tween::Playhead;
//!
//! let timeline = hero_entrance();
//! let mut head = Playhead::for_timeline(&timeline);
//! head.play();
//! head.advance(1.0);
//! let frames = timeline.sample(head.time());
//! assert!(!frames.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Site constants
//! - [`tween`] - Easing, tweens, timelines and playheads
//! - [`scroll`] - Scroll triggers and the observer registry
//! - [`presets`] - The site's animations
//! - [`preloader`] - Timed loading sequence
//! - [`contact`] - Contact form submission flow
//! - [`nav`] - Navigation state and section anchors
//! - [`shell`] - Page loading flag
//! - [`content`] - Projects, skills and copy

// Core modules
pub mod config;
pub mod error;

// Animation
pub mod presets;
pub mod scroll;
pub mod tween;

// Page components
pub mod contact;
pub mod content;
pub mod nav;
pub mod preloader;
pub mod shell;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError, RelayError, RelayResult, SubmitError, SubmitResult,
};

// =============================================================================
// Re-exports - Animation
// =============================================================================

pub use scroll::{ObserverId, ObserverRegistry, SectionReveal, ToggleAction};
pub use tween::{Easing, ElementFrame, PlayEvent, Playhead, StyleFrame, Timeline, Tween};

// =============================================================================
// Re-exports - Components
// =============================================================================

pub use contact::{
    ContactDraft, ContactForm, EmailRelay, Field, Notification, RelayConfig, RelayRequest,
    SubmitState, TemplateParams, Variant,
};
pub use nav::{NavState, SectionId};
pub use preloader::{Phase, Preloader, PreloaderEvent};
pub use shell::{LoadState, PageShell};
