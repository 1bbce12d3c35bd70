use dioxus::prelude::*;

use crate::components::{
    ContactSection, CtaBanner, Featured, Hero, HowItWorks, SiteFooter, SiteNavbar, Testimonials,
    WhyUs,
};
use crate::copy::{LocaleCode, Selection};
use crate::core::format::BRAND;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// The brochure page.
///
/// Owns the view's [`Selection`] and shares it through context; every section
/// subscribes to it and re-renders with the matching copy. The selection is
/// dropped with the view (a reload starts over on the primary locale).
#[component]
pub fn Home() -> Element {
    let selection = use_signal(Selection::new);
    use_context_provider(|| selection);
    let locale = selection().locale();

    // `<html lang>` lives outside the component tree.
    use_effect(move || {
        let _ = document::eval(&document_lang_script(selection().locale()));
    });

    rsx! {
        document::Title { "{BRAND}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        main { class: "page", lang: locale.html_lang(),
            SiteNavbar {}
            Hero {}
            HowItWorks {}
            Featured {}
            WhyUs {}
            Testimonials {}
            CtaBanner {}
            ContactSection {}
            SiteFooter {}
        }
    }
}

fn document_lang_script(locale: LocaleCode) -> String {
    format!("document.documentElement.lang = \"{}\";", locale.html_lang())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lang_follows_locale() {
        assert_eq!(
            document_lang_script(LocaleCode::Spanish),
            "document.documentElement.lang = \"es\";"
        );
        assert!(document_lang_script(LocaleCode::English).contains("\"en\""));
    }
}
