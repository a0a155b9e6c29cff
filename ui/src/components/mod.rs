mod language_toggle;
pub use language_toggle::LanguageToggle;

mod notice;
pub use notice::NoticeBanner;

mod page_meta;
pub use page_meta::PageMeta;

mod request_form;
pub use request_form::RequestForm;

mod sections;
pub use sections::{Hero, HoursAndContact, Services, SiteFooter};
