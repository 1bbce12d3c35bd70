use dioxus::prelude::*;

use super::use_active_copy;
use crate::core::format;

#[component]
pub fn SiteFooter() -> Element {
    let copy = use_active_copy();
    let year = use_hook(format::current_year);
    let copyright = format::copyright_line(year, &copy.footer.rights);

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__rights", "{copyright}" }
                div { class: "footer__tagline", "{copy.footer.tagline}" }
            }
        }
    }
}
