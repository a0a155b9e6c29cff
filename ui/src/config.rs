//! Fixed business details and email-relay credentials.
//!
//! Everything here is compiled in; the site reads no environment or files.

/// Phone number as shown on the page.
pub const PHONE_DISPLAY: &str = "(515) 305-8807";

/// Click-to-call link behind the "Call Now" button.
pub const PHONE_TEL_URI: &str = "tel:+15153058807";

pub const CONTACT_EMAIL: &str = "support@desmoines.com";

pub const CONTACT_MAILTO_URI: &str = "mailto:support@desmoines.com";

/// Credentials for the hosted email relay (EmailJS). The public key is
/// meant to ship to browsers; it only authorises sends through the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub const RELAY: RelayConfig = RelayConfig {
    endpoint: "https://api.emailjs.com/api/v1.0/email/send",
    service_id: "service_roadside",
    template_id: "template_service_request",
    public_key: "dsm-roadside-public-key",
};

/// Static head metadata. Only `og:locale` follows the selected language.
pub mod meta {
    pub const TITLE: &str = "24/7 Emergency Vehicle Services | Lockout & Jump Start in Des Moines";
    pub const DESCRIPTION: &str = "Fast, reliable vehicle lockout assistance and jump start service \
        across the Greater Des Moines area. Overnight and evening service on weekdays, 24 hours on weekends.";
    pub const KEYWORDS: &str = "car lockout, vehicle lockout, jump start, dead battery, roadside assistance, \
        Des Moines, emergency vehicle services";
    pub const OG_TITLE: &str = "24/7 Emergency Vehicle Services in Des Moines";
    pub const OG_DESCRIPTION: &str = "Locked out or battery dead? Call (515) 305-8807 for fast help in Des Moines.";
    pub const OG_TYPE: &str = "website";
}
