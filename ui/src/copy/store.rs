use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use snafu::{ensure, OptionExt, ResultExt};
use tracing::{debug, info, warn};

use super::{CopyTable, LocaleCode};
use crate::error::{
    CopyError, KeyMismatchSnafu, LoaderSnafu, MissingResourceSnafu, ShapeMismatchSnafu,
    SyntaxSnafu,
};
use crate::i18n;

static STORE: Lazy<LocaleStore> = Lazy::new(|| {
    // The copy is embedded at compile time; failing here is a broken build.
    LocaleStore::load().unwrap_or_else(|err| panic!("embedded copy failed to load: {err}"))
});

/// Holds one [`CopyTable`] per [`LocaleCode`]. Both tables are guaranteed to
/// share the same shape once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStore {
    english: CopyTable,
    spanish: CopyTable,
}

impl LocaleStore {
    /// Process-wide store built from the embedded Fluent resources.
    pub fn global() -> &'static LocaleStore {
        &STORE
    }

    /// Build every table from the embedded resources, rejecting any locale
    /// whose message ids or sequence lengths differ from the fallback.
    pub fn load() -> Result<Self, CopyError> {
        for tag in i18n::available_languages() {
            if tag.parse::<LocaleCode>().is_err() {
                warn!(%tag, "embedded copy folder has no matching locale; ignoring");
            }
        }

        let reference = load_ids(LocaleCode::PRIMARY)?;
        let english = build_table(LocaleCode::English, &reference)?;
        let spanish = build_table(LocaleCode::Spanish, &reference)?;
        let store = Self::from_tables(english, spanish)?;

        info!(
            locales = LocaleCode::ALL.len(),
            messages = reference.len(),
            "copy tables loaded"
        );
        Ok(store)
    }

    /// Assemble a store from prebuilt tables, enforcing shape parity against
    /// the primary locale.
    pub fn from_tables(english: CopyTable, spanish: CopyTable) -> Result<Self, CopyError> {
        let expected = english.shape();
        ensure!(
            spanish.shape() == expected,
            ShapeMismatchSnafu {
                locale: LocaleCode::Spanish
            }
        );
        Ok(Self { english, spanish })
    }

    /// Total lookup over the closed locale set.
    pub fn get_copy(&self, locale: LocaleCode) -> &CopyTable {
        match locale {
            LocaleCode::English => &self.english,
            LocaleCode::Spanish => &self.spanish,
        }
    }
}

fn load_ids(locale: LocaleCode) -> Result<BTreeSet<String>, CopyError> {
    let src = i18n::resource_source(locale).context(MissingResourceSnafu { locale })?;
    i18n::message_ids(&src).map_err(|count| SyntaxSnafu { locale, count }.build())
}

fn build_table(locale: LocaleCode, reference: &BTreeSet<String>) -> Result<CopyTable, CopyError> {
    let ids = load_ids(locale)?;
    check_ids(locale, reference, &ids)?;

    let loader = i18n::loader_for(locale).context(LoaderSnafu { locale })?;
    let table = CopyTable::from_loader(&loader, &ids);
    debug!(%locale, shape = ?table.shape(), "copy table built");
    Ok(table)
}

/// The loader silently falls back to the primary locale for missing ids, so
/// parity is checked on the raw resource instead.
pub(crate) fn check_ids(
    locale: LocaleCode,
    reference: &BTreeSet<String>,
    ids: &BTreeSet<String>,
) -> Result<(), CopyError> {
    let missing: Vec<String> = reference.difference(ids).cloned().collect();
    let extra: Vec<String> = ids.difference(reference).cloned().collect();
    ensure!(
        missing.is_empty() && extra.is_empty(),
        KeyMismatchSnafu {
            locale,
            missing,
            extra
        }
    );
    Ok(())
}
