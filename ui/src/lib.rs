//! Shared UI crate for the Emergency Vehicle Services site. All logic, copy
//! and views live here; the `web` and `desktop` crates only launch them.

pub mod components;
pub mod config;
pub mod core;
pub mod i18n;
pub mod locale;
pub mod views;

#[cfg(test)]
mod test_support;

pub use locale::Locale;
pub use views::LandingPage;
