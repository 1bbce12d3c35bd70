use dioxus::prelude::*;
use tracing::debug;

use crate::copy::{LocaleCode, Selection};

/// One button per locale; the active one is pressed.
///
/// Writes straight into the view's selection signal. Switching only swaps
/// text: form input and scroll position are left alone. Outside a provider
/// the primary locale shows as pressed and clicks do nothing.
#[component]
pub fn LangToggle() -> Element {
    let selection = try_use_context::<Signal<Selection>>();
    let current = super::use_locale();
    let label = super::use_active_copy().nav.language_label.as_str();

    rsx! {
        div { class: "lang-toggle", role: "group", aria_label: "{label}",
            for code in LocaleCode::ALL {
                button {
                    key: "{code}",
                    r#type: "button",
                    class: if code == current { "lang-toggle__button lang-toggle__button--active" } else { "lang-toggle__button" },
                    aria_pressed: if code == current { "true" } else { "false" },
                    onclick: move |_| {
                        if let Some(mut selection) = selection {
                            debug!(locale = %code, "locale selected");
                            selection.write().set_locale(code);
                        }
                    },
                    {code.short_label()}
                }
            }
        }
    }
}
