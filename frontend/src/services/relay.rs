//! EmailJS relay over its REST endpoint.

use folio::config::EMAILJS_SEND_URL;
use folio::contact::{EmailRelay, RelayRequest, TemplateParams};
use folio::{RelayError, RelayResult};
use gloo_net::http::Request;
use serde::Serialize;

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Clone, Serialize)]
pub struct SendBody<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// The account's public key.
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl<'a> From<&'a RelayRequest> for SendBody<'a> {
    fn from(request: &'a RelayRequest) -> Self {
        Self {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.params,
        }
    }
}

/// Sends contact messages through EmailJS.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    url: String,
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self {
            url: EMAILJS_SEND_URL.to_string(),
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, request: &RelayRequest) -> RelayResult<()> {
        log::info!("📨 Sending contact message via EmailJS...");

        let response = Request::post(&self.url)
            .json(&SendBody::from(request))
            .map_err(|e| RelayError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if !response.ok() {
            let text = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: response.status(),
                text,
            });
        }

        log::info!("✅ EmailJS accepted the message ({})", response.status());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::contact::ContactDraft;

    #[test]
    fn test_send_body_shape() {
        let request = RelayRequest {
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "pk_1".into(),
            params: TemplateParams::from_draft(&ContactDraft::new("A", "a@b.com", "hi")),
        };
        let json = serde_json::to_value(SendBody::from(&request)).unwrap();

        assert_eq!(json["service_id"], "service_1");
        assert_eq!(json["user_id"], "pk_1");
        assert_eq!(json["template_params"]["name"], "A");
        assert_eq!(json["template_params"]["to_email"], "sayandas4312@gmail.com");
        assert!(json.get("public_key").is_none());
    }
}
