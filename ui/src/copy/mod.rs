//! Localized page copy: the per-locale tables and the view's selection.
//!
//! ```ignore
//! use ui::copy::{LocaleCode, LocaleStore, Selection};
//!
//! let mut selection = Selection::new();
//! selection.set_locale(LocaleCode::Spanish);
//! let copy = selection.active_copy(LocaleStore::global());
//! assert_eq!(copy.nav.contact, "Contacto");
//! ```

mod locale;
mod selection;
mod store;
mod table;

pub use locale::LocaleCode;
pub use selection::Selection;
pub use store::LocaleStore;
pub use table::{
    ContactCopy, CopyShape, CopyTable, CtaCopy, FeaturedCopy, FooterCopy, HeroCopy, HowCopy,
    NavCopy, Step, Testimonial, TestimonialsCopy, Vehicle, WhyCopy, SECTION_KEYS,
};
