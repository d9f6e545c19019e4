//! Contact form submission flow.
//!
//! ```text
//!            submit                 relay ok
//!   Idle ───────────▶ Submitting ───────────▶ Succeeded (draft cleared)
//!    ▲                    │
//!    │     next edit      │ missing config / relay error
//!    └────────────────────┴───────────────────▶ Failed (draft kept)
//! ```
//!
//! The relay is injected through [`EmailRelay`]; nothing here knows
//! how the message actually travels.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CONTACT_EMAIL;
use crate::error::{ConfigError, RelayResult, SubmitError, SubmitResult};

// =============================================================================
// Draft
// =============================================================================

/// One of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// The input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Relay configuration
// =============================================================================

/// Relay credentials as provided by the build environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

/// All three credentials, known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn new(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        let clean = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            service_id: clean(service_id),
            template_id: clean(template_id),
            public_key: clean(public_key),
        }
    }

    /// Fail with the first missing credential.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let service_id = self.service_id.clone().ok_or(ConfigError::Missing("service id"))?;
        let template_id = self.template_id.clone().ok_or(ConfigError::Missing("template id"))?;
        let public_key = self.public_key.clone().ok_or(ConfigError::Missing("public key"))?;
        Ok(Credentials {
            service_id,
            template_id,
            public_key,
        })
    }

    /// Loggable view of the configuration: 8-char prefixes or `MISSING`.
    pub fn summary(&self) -> String {
        let mask = |value: &Option<String>| match value {
            Some(v) => format!("{}...", v.chars().take(8).collect::<String>()),
            None => "MISSING".to_string(),
        };
        format!(
            "serviceId: {}, templateId: {}, publicKey: {}",
            mask(&self.service_id),
            mask(&self.template_id),
            mask(&self.public_key)
        )
    }
}

// =============================================================================
// Relay interface
// =============================================================================

/// Template variables sent with every message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    pub fn from_draft(draft: &ContactDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
            to_email: CONTACT_EMAIL.to_string(),
        }
    }
}

/// Everything a relay needs to send one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub params: TemplateParams,
}

/// Something that can forward a contact message as an email.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, request: &RelayRequest) -> RelayResult<()>;
}

// =============================================================================
// Notifications
// =============================================================================

/// Visual treatment of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Default,
    Destructive,
}

/// A toast shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            title: "Message Sent Successfully!".to_string(),
            description: "Thank you for reaching out. I'll get back to you soon.".to_string(),
            variant: Variant::Default,
        }
    }

    pub fn failure(error: &SubmitError) -> Self {
        Self {
            title: "Failed to Send Message".to_string(),
            description: format!(
                "Something went wrong: {}. Please try again or contact me directly.",
                error.description()
            ),
            variant: Variant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

// =============================================================================
// State machine
// =============================================================================

/// Where the submission flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for SubmitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubmitState::Idle => "idle",
            SubmitState::Submitting => "submitting",
            SubmitState::Succeeded => "succeeded",
            SubmitState::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Draft plus submission state for one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// True between submit and the relay's answer.
    pub fn in_flight(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Record a keystroke. A finished submission drops back to `Idle`.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        if matches!(self.state, SubmitState::Succeeded | SubmitState::Failed) {
            self.state = SubmitState::Idle;
        }
    }

    /// Enter `Submitting` and build the relay request.
    ///
    /// A missing credential fails right away (state `Failed`, draft kept,
    /// no request built). Submitting twice is rejected without touching
    /// the in-flight submission.
    pub fn begin(&mut self, config: &RelayConfig) -> SubmitResult<RelayRequest> {
        if self.in_flight() {
            return Err(SubmitError::InFlight);
        }
        self.state = SubmitState::Submitting;
        log::info!("EmailJS config: {}", config.summary());

        let credentials = match config.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                self.state = SubmitState::Failed;
                return Err(e.into());
            }
        };

        Ok(RelayRequest {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            public_key: credentials.public_key,
            params: TemplateParams::from_draft(&self.draft),
        })
    }

    /// Apply the relay's answer and produce the notification to show.
    pub fn finish(&mut self, outcome: RelayResult<()>) -> Notification {
        match outcome {
            Ok(()) => {
                log::info!("✅ Contact message sent");
                self.state = SubmitState::Succeeded;
                self.draft.clear();
                Notification::success()
            }
            Err(e) => {
                log::error!("❌ Contact message failed (status {:?}): {}", e.status(), e);
                self.state = SubmitState::Failed;
                Notification::failure(&SubmitError::Relay(e))
            }
        }
    }

    /// Notification for a submission that failed before reaching the relay.
    pub fn rejected(&mut self, error: &SubmitError) -> Notification {
        if !matches!(error, SubmitError::InFlight) {
            self.state = SubmitState::Failed;
        }
        log::warn!("⚠️ Contact submission rejected: {}", error);
        Notification::failure(error)
    }

    /// Run a whole submission against `relay`.
    ///
    /// Returns `None` when a submission is already in flight.
    pub async fn submit<R: EmailRelay>(
        &mut self,
        config: &RelayConfig,
        relay: &R,
    ) -> Option<Notification> {
        match self.begin(config) {
            Ok(request) => {
                let outcome = relay.send(&request).await;
                Some(self.finish(outcome))
            }
            Err(SubmitError::InFlight) => None,
            Err(e) => Some(self.rejected(&e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Relay that records requests and answers from a script.
    struct ScriptedRelay {
        answer: RelayResult<()>,
        sent: RefCell<Vec<RelayRequest>>,
    }

    impl ScriptedRelay {
        fn answering(answer: RelayResult<()>) -> Self {
            Self {
                answer,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl EmailRelay for ScriptedRelay {
        async fn send(&self, request: &RelayRequest) -> RelayResult<()> {
            self.sent.borrow_mut().push(request.clone());
            self.answer.clone()
        }
    }

    fn configured() -> RelayConfig {
        RelayConfig::new(Some("service_abc123"), Some("template_xyz"), Some("pk_live_key"))
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "A");
        form.edit(Field::Email, "a@b.com");
        form.edit(Field::Message, "hi");
        form
    }

    #[test]
    fn test_successful_submission_clears_draft() {
        let mut form = filled_form();
        let request = form.begin(&configured()).unwrap();
        assert!(form.in_flight());
        assert_eq!(request.params.to_email, CONTACT_EMAIL);
        assert_eq!(request.params.name, "A");

        let note = form.finish(Ok(()));
        assert!(!form.in_flight());
        assert_eq!(form.state(), SubmitState::Succeeded);
        assert_eq!(form.draft(), &ContactDraft::new("", "", ""));
        assert_eq!(note.title, "Message Sent Successfully!");
        assert!(!note.is_error());
    }

    #[test]
    fn test_submit_with_relay() {
        let relay = ScriptedRelay::answering(Ok(()));
        let mut form = filled_form();
        let note = block_on(form.submit(&configured(), &relay)).unwrap();

        assert_eq!(note.title, "Message Sent Successfully!");
        assert!(form.draft().is_empty());
        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].service_id, "service_abc123");
        assert_eq!(sent[0].params.message, "hi");
    }

    #[test]
    fn test_missing_config_never_calls_relay() {
        for config in [
            RelayConfig::new(None, Some("t"), Some("k")),
            RelayConfig::new(Some("s"), None, Some("k")),
            RelayConfig::new(Some("s"), Some("t"), Some("   ")),
        ] {
            let relay = ScriptedRelay::answering(Ok(()));
            let mut form = filled_form();
            let note = block_on(form.submit(&config, &relay)).unwrap();

            assert!(relay.sent.borrow().is_empty());
            assert!(note.is_error());
            assert!(note.description.contains("Missing EmailJS configuration"));
            assert!(!form.in_flight());
            assert_eq!(form.draft().name, "A");
        }
    }

    #[test]
    fn test_relay_rejection_keeps_draft() {
        let relay = ScriptedRelay::answering(Err(RelayError::Rejected {
            status: 400,
            text: "The template ID is invalid".into(),
        }));
        let mut form = filled_form();
        let before = form.draft().clone();
        let note = block_on(form.submit(&configured(), &relay)).unwrap();

        assert_eq!(form.state(), SubmitState::Failed);
        assert_eq!(form.draft(), &before);
        assert_eq!(note.title, "Failed to Send Message");
        assert!(note.description.contains("The template ID is invalid"));
    }

    #[test]
    fn test_transport_error_message() {
        let mut form = filled_form();
        form.begin(&configured()).unwrap();
        let note = form.finish(Err(RelayError::Transport("Failed to fetch".into())));
        assert_eq!(
            note.description,
            "Something went wrong: Failed to fetch. Please try again or contact me directly."
        );
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut form = filled_form();
        form.begin(&configured()).unwrap();
        assert_eq!(form.begin(&configured()), Err(SubmitError::InFlight));
        assert!(form.in_flight());
    }

    #[test]
    fn test_edit_after_outcome_returns_to_idle() {
        let mut form = filled_form();
        form.begin(&configured()).unwrap();
        form.finish(Err(RelayError::Transport("offline".into())));
        assert_eq!(form.state(), SubmitState::Failed);

        form.edit(Field::Message, "hi again");
        assert_eq!(form.state(), SubmitState::Idle);

        form.begin(&configured()).unwrap();
        form.finish(Ok(()));
        form.edit(Field::Name, "B");
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_config_summary_masks_values() {
        let summary = configured().summary();
        assert!(summary.contains("service_..."));
        assert!(!summary.contains("abc123"));
        assert!(RelayConfig::default().summary().contains("MISSING"));
    }

    #[test]
    fn test_template_params_json() {
        let params = TemplateParams::from_draft(&ContactDraft::new("A", "a@b.com", "hi"));
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["to_email"], CONTACT_EMAIL);
        assert_eq!(json["email"], "a@b.com");
    }

    #[test]
    fn test_field_names() {
        let names: Vec<&str> = [Field::Name, Field::Email, Field::Message]
            .iter()
            .map(Field::as_str)
            .collect();
        assert_eq!(names, vec!["name", "email", "message"]);
    }
}
