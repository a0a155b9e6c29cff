//! Framework-free logic behind the landing page: the form draft, its submit
//! lifecycle and the email relay seam.

pub mod form;
pub mod relay;
pub mod request;

pub use form::{submit, FormError, LeadForm, Notice, SubmitPhase};
pub use relay::{EmailJsRelay, EmailRelay, RelayError};
pub use request::{Field, ServiceKind, ServiceRequest};
