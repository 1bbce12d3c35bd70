use super::{CopyTable, LocaleCode, LocaleStore};

/// Which locale a single page view is showing.
///
/// Starts on the primary locale and only changes through [`set_locale`].
/// Lives as long as the view that owns it; nothing persists it.
///
/// [`set_locale`]: Selection::set_locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    locale: LocaleCode,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    pub fn set_locale(&mut self, locale: LocaleCode) {
        self.locale = locale;
    }

    pub fn active_copy<'a>(&self, store: &'a LocaleStore) -> &'a CopyTable {
        store.get_copy(self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_primary_locale() {
        assert_eq!(Selection::new().locale(), LocaleCode::PRIMARY);
    }

    #[test]
    fn set_locale_is_immediately_observable() {
        let store = LocaleStore::global();
        let mut selection = Selection::new();
        selection.set_locale(LocaleCode::Spanish);
        assert_eq!(selection.locale(), LocaleCode::Spanish);
        assert_eq!(
            selection.active_copy(store),
            store.get_copy(LocaleCode::Spanish)
        );
    }
}
