//! Application configuration.
//!
//! Relay credentials are captured at compile time (see `build.rs`); site
//! constants live in [`folio::config`].

use folio::RelayConfig;

/// EmailJS service id.
pub const EMAILJS_SERVICE_ID: Option<&str> = option_env!("EMAILJS_SERVICE_ID");

/// EmailJS template id.
pub const EMAILJS_TEMPLATE_ID: Option<&str> = option_env!("EMAILJS_TEMPLATE_ID");

/// EmailJS public key (sent as `user_id`).
pub const EMAILJS_PUBLIC_KEY: Option<&str> = option_env!("EMAILJS_PUBLIC_KEY");

/// Page title.
pub const PAGE_TITLE: &str = "Sayan Das | Web Developer";

/// Longest frame step fed to animations (seconds).
///
/// Keeps a backgrounded tab from jumping a whole timeline in one frame.
pub const MAX_FRAME_STEP: f64 = 0.1;

/// Relay credentials as built into this binary.
pub fn relay_config() -> RelayConfig {
    RelayConfig::new(EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY)
}
