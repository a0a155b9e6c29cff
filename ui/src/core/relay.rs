//! Delivery of service requests through the hosted email relay.
//!
//! The relay is an opaque collaborator: one call per submit, success or
//! failure, nothing else. [`EmailRelay`] is the seam the form flow depends
//! on; [`EmailJsRelay`] is the production implementation posting to the
//! EmailJS REST endpoint (`gloo-net` in the browser, `reqwest` natively).

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::RelayConfig;

use super::request::ServiceRequest;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay unreachable: {0}")]
    Transport(String),

    #[error("relay rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Something that can deliver a [`ServiceRequest`] to the business inbox.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, request: &ServiceRequest) -> Result<(), RelayError>;
}

/// Body of an EmailJS `email/send` call.
#[derive(Debug, Serialize)]
pub struct SendPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ServiceRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn payload<'a>(&'a self, request: &'a ServiceRequest) -> SendPayload<'a> {
        SendPayload {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: request,
        }
    }
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self::new(crate::config::RELAY)
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, request: &ServiceRequest) -> Result<(), RelayError> {
        debug!(service = request.service.value(), "posting service request to relay");
        let result = post_json(self.config.endpoint, &self.payload(request)).await;
        if let Err(err) = &result {
            warn!(%err, "relay delivery failed");
        }
        result
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_json(url: &str, payload: &SendPayload<'_>) -> Result<(), RelayError> {
    use gloo_net::http::Request;

    let response = Request::post(url)
        .json(payload)
        .map_err(|e| RelayError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(RelayError::Rejected {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json(url: &str, payload: &SendPayload<'_>) -> Result<(), RelayError> {
    let response = reqwest::Client::new()
        .post(url)
        .json(payload)
        .send()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RELAY;
    use crate::core::request::ServiceKind;

    #[test]
    fn payload_carries_fixed_credentials_and_field_params() {
        let relay = EmailJsRelay::default();
        let request = ServiceRequest {
            name: "Jane Doe".into(),
            phone: "5155551234".into(),
            service: ServiceKind::Jumpstart,
            car_details: "2020 Honda Civic".into(),
            location: "Downtown Des Moines".into(),
            description: "Clicking noise".into(),
        };

        let json = serde_json::to_value(relay.payload(&request)).unwrap();

        assert_eq!(json["service_id"], RELAY.service_id);
        assert_eq!(json["template_id"], RELAY.template_id);
        assert_eq!(json["user_id"], RELAY.public_key);

        let params = &json["template_params"];
        assert_eq!(params["name"], "Jane Doe");
        assert_eq!(params["phone"], "5155551234");
        assert_eq!(params["service"], "jumpstart");
        assert_eq!(params["carDetails"], "2020 Honda Civic");
        assert_eq!(params["location"], "Downtown Des Moines");
        assert_eq!(params["description"], "Clicking noise");
    }

    #[test]
    fn rejected_error_mentions_status() {
        let err = RelayError::Rejected {
            status: 412,
            body: "template not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "relay rejected the request (412): template not found"
        );
    }
}
