//! Site configuration.
//!
//! Compile-time constants shared by the core and the frontend.

/// Address every contact message is forwarded to.
pub const CONTACT_EMAIL: &str = "sayandas4312@gmail.com";

/// EmailJS REST endpoint for sending a templated email.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Vertical scroll offset (px) past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// How long a toast notification stays on screen (ms).
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum toasts kept on screen at once.
pub const MAX_TOASTS: usize = 3;

/// Owner name shown in the preloader, hero and footer.
pub const OWNER_NAME: &str = "Sayan Das";

/// Owner role line.
pub const OWNER_ROLE: &str = "Web Developer";
