//! Internationalization (i18n) support for `uaskibuy-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (per-locale loader construction)
//! - `fluent` (message formatting and syntax validation)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/uaskibuy-ui.ftl   (fallback/reference)
//!   es-ES/uaskibuy-ui.ftl   (secondary locale)
//! ```
//!
//! Unlike a process-wide loader, every locale gets its own
//! `FluentLanguageLoader`. The page keeps its selected locale per view and
//! reads from prebuilt copy tables (see [`crate::copy`]), so nothing here
//! holds a "current language".
//!
//! To add a new locale:
//! 1. Copy `en-US/uaskibuy-ui.ftl` to `i18n/<lang-id>/uaskibuy-ui.ftl`.
//! 2. Translate each message value (keep IDs and numbered entries identical).
//! 3. Add the variant to `LocaleCode` and run tests to ensure completeness.
use std::collections::BTreeSet;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use rust_embed::Embed;

use crate::copy::LocaleCode;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
pub const DOMAIN: &str = "uaskibuy-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Build a loader that resolves messages for `locale` (falling back to the
/// primary locale for anything the resource lacks).
pub fn loader_for(locale: LocaleCode) -> Result<FluentLanguageLoader, I18nEmbedError> {
    let loader = FluentLanguageLoader::new(DOMAIN, LocaleCode::PRIMARY.language_id());
    // Plain text output: no bidi isolation marks around placeables.
    loader.set_use_isolating(false);
    i18n_embed::select(&loader, &Localizations, &[locale.language_id()])?;
    Ok(loader)
}

/// Raw Fluent source embedded for `locale`, if any.
pub fn resource_source(locale: LocaleCode) -> Option<String> {
    let path = format!("{}/{DOMAIN}.ftl", locale.tag());
    Localizations::get(&path).map(|file| String::from_utf8_lossy(&file.data).into_owned())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Message ids defined in a Fluent source. Only the resource itself is
/// consulted (no fallback), so a missing translation shows up as a missing id.
///
/// Returns the number of parser errors if the source is not valid Fluent.
pub fn message_ids(src: &str) -> Result<BTreeSet<String>, usize> {
    Ok(message_id_list(src)?.into_iter().collect())
}

/// Like [`message_ids`] but in definition order, duplicates kept.
pub fn message_id_list(src: &str) -> Result<Vec<String>, usize> {
    fluent::FluentResource::try_new(src.to_string()).map_err(|(_, errors)| errors.len())?;

    let mut ids = Vec::new();
    for line in src.lines() {
        // Continuation and attribute lines are indented; ids start at column 0.
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(valid_id_char) {
                ids.push(id.to_string());
            }
        }
    }
    Ok(ids)
}

fn valid_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
