//! Page sections. Each one reads the view's [`Selection`] from context and
//! renders the matching copy table.

use dioxus::prelude::*;

use crate::copy::{CopyTable, LocaleCode, LocaleStore, Selection};

mod contact_form;
mod footer;
mod lang_toggle;
mod navbar;
mod sections;

pub use contact_form::{ContactNotice, ContactSection};
pub use footer::SiteFooter;
pub use lang_toggle::LangToggle;
pub use navbar::SiteNavbar;
pub use sections::{CtaBanner, Featured, Hero, HowItWorks, Testimonials, WhyUs};

/// Locale selected for the current view. Subscribes the calling component to
/// the shared selection signal; outside a provider this is the primary locale.
pub fn use_locale() -> LocaleCode {
    try_use_context::<Signal<Selection>>()
        .map(|selection| selection().locale())
        .unwrap_or_default()
}

/// Copy table for [`use_locale`].
pub fn use_active_copy() -> &'static CopyTable {
    LocaleStore::global().get_copy(use_locale())
}
