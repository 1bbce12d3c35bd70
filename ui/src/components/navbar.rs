use dioxus::prelude::*;

use super::{use_active_copy, LangToggle};
use crate::core::format::BRAND;

/// Sticky top bar: brand mark, in-page anchors and the language toggle.
///
/// Anchors are plain fragment links (`#how`, `#featured`, ...); there is no
/// router state behind them.
#[component]
pub fn SiteNavbar() -> Element {
    let copy = use_active_copy();

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    div { class: "navbar__brand-mark", aria_hidden: "true", "U" }
                    span { class: "navbar__brand-name", "{BRAND}" }
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "#how", "{copy.nav.how}" }
                    a { class: "navbar__link", href: "#featured", "{copy.nav.featured}" }
                    a { class: "navbar__link", href: "#testimonials", "{copy.nav.testimonials}" }
                    a { class: "navbar__link", href: "#contact", "{copy.nav.contact}" }
                }

                LangToggle {}
            }
        }
    }
}
