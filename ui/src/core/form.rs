//! Lead-capture form lifecycle.
//!
//! Per submission: `Idle → Submitting → Idle`. A successful delivery resets
//! the draft to defaults; a failed one leaves it untouched for a retry. While
//! a submission is in flight further submits are refused.

use thiserror::Error;
use tracing::{debug, info};

use super::relay::{EmailRelay, RelayError};
use super::request::{Field, ServiceKind, ServiceRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Outcome shown to the user after a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
    Incomplete,
}

impl Notice {
    pub fn message_key(self) -> &'static str {
        match self {
            Notice::Sent => "notice-sent",
            Notice::Failed => "notice-failed",
            Notice::Incomplete => "notice-incomplete",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, Notice::Sent)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(Field),

    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadForm {
    draft: ServiceRequest,
    phase: SubmitPhase,
    notice: Option<Notice>,
}

impl LeadForm {
    pub fn draft(&self) -> &ServiceRequest {
        &self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    pub fn select_service(&mut self, service: ServiceKind) {
        self.draft.service = service;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// Returns the snapshot to hand to the relay. On a missing field the
    /// `Incomplete` notice is raised and the phase stays `Idle`.
    pub fn begin_submit(&mut self) -> Result<ServiceRequest, FormError> {
        if self.is_submitting() {
            debug!("submit ignored while another is in flight");
            return Err(FormError::InFlight);
        }
        if let Some(field) = self.draft.first_missing() {
            debug!(%field, "submit refused: required field empty");
            self.notice = Some(Notice::Incomplete);
            return Err(FormError::MissingField(field));
        }
        self.notice = None;
        self.phase = SubmitPhase::Submitting;
        Ok(self.draft.clone())
    }

    /// Apply the relay outcome and return the notice now shown.
    pub fn finish_submit(&mut self, outcome: Result<(), RelayError>) -> Notice {
        self.phase = SubmitPhase::Idle;
        let notice = match outcome {
            Ok(()) => {
                info!(service = self.draft.service.value(), "service request delivered");
                self.draft = ServiceRequest::default();
                Notice::Sent
            }
            Err(_) => Notice::Failed,
        };
        self.notice = Some(notice);
        notice
    }
}

/// Run one complete submission against `relay`.
///
/// Headless driver for callers that own the form outright (tests, scripts).
/// The landing view runs the same `begin_submit` → `send` → `finish_submit`
/// steps itself, split around `spawn`, because its form lives in a signal
/// that must not stay borrowed across the relay call.
pub async fn submit<R: EmailRelay>(form: &mut LeadForm, relay: &R) -> Result<Notice, FormError> {
    let request = form.begin_submit()?;
    let outcome = relay.send(&request).await;
    Ok(form.finish_submit(outcome))
}
