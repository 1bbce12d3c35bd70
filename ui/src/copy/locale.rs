use std::fmt;
use std::str::FromStr;

use unic_langid::{langid, LanguageIdentifier};

use crate::error::LocaleParseError;

/// Supported display languages. The set is closed: every lookup keyed by a
/// `LocaleCode` is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LocaleCode {
    /// Primary locale, rendered before any user interaction.
    #[default]
    English,
    Spanish,
}

impl LocaleCode {
    /// All locales in toggle display order.
    pub const ALL: [LocaleCode; 2] = [LocaleCode::English, LocaleCode::Spanish];

    pub const PRIMARY: LocaleCode = LocaleCode::English;

    /// Folder name of the embedded Fluent resource (`i18n/<tag>/`).
    pub fn tag(self) -> &'static str {
        match self {
            LocaleCode::English => "en-US",
            LocaleCode::Spanish => "es-ES",
        }
    }

    /// Label on the toggle button.
    pub fn short_label(self) -> &'static str {
        match self {
            LocaleCode::English => "EN",
            LocaleCode::Spanish => "ES",
        }
    }

    /// Value for the document `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            LocaleCode::English => "en",
            LocaleCode::Spanish => "es",
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        match self {
            LocaleCode::English => langid!("en-US"),
            LocaleCode::Spanish => langid!("es-ES"),
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Accepts the full tag (`es-ES`) or the bare language (`es`), any case.
impl FromStr for LocaleCode {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LocaleCode::ALL
            .into_iter()
            .find(|code| {
                trimmed.eq_ignore_ascii_case(code.tag())
                    || trimmed.eq_ignore_ascii_case(code.html_lang())
            })
            .ok_or_else(|| LocaleParseError::new(s))
    }
}
