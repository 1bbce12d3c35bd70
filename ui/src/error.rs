//! Error types for the copy store.
//!
//! The embedded copy is fixed at compile time, so any of these surfacing at
//! runtime means a translation file was edited out of step with the fallback.

use i18n_embed::I18nEmbedError;
use snafu::Snafu;

use crate::copy::LocaleCode;

/// Failure while building the per-locale copy tables.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CopyError {
    /// No `.ftl` resource is embedded for the locale.
    #[snafu(display("no embedded copy for {locale}"))]
    MissingResource { locale: LocaleCode },

    /// The resource exists but does not parse as Fluent.
    #[snafu(display("{count} syntax error(s) in {locale} copy"))]
    Syntax { locale: LocaleCode, count: usize },

    /// `i18n-embed` refused to load the locale.
    #[snafu(display("failed to load {locale} copy: {source}"))]
    Loader {
        locale: LocaleCode,
        source: I18nEmbedError,
    },

    /// Message ids differ from the fallback locale.
    #[snafu(display(
        "{locale} copy keys differ from fallback (missing: {missing:?}, extra: {extra:?})"
    ))]
    KeyMismatch {
        locale: LocaleCode,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    /// Section or sequence layout differs from the fallback locale.
    #[snafu(display("{locale} copy shape differs from fallback"))]
    ShapeMismatch { locale: LocaleCode },
}

/// Input that names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("unsupported locale `{input}`"))]
pub struct LocaleParseError {
    input: String,
}

impl LocaleParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}
