//! Shared UI crate for the UaskIbuy brochure site. Copy, form logic and all
//! page components live here; platform crates only launch [`views::Home`].

pub mod components;
pub mod contact;
pub mod copy;
pub mod core;
pub mod error;
pub mod i18n;
pub mod views;

pub use copy::{CopyTable, LocaleCode, LocaleStore, Selection};
