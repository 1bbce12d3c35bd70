//! Small pure helpers shared by the page components.

pub mod format;
