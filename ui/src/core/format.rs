//! Formatting helpers for presenting copy.

use time::OffsetDateTime;

/// Brand name as shown in the navbar and footer.
pub const BRAND: &str = "UaskIbuy";

/// Step ordinal as shown on the "how it works" cards: `01`, `02`, ...
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn quoted(text: &str) -> String {
    format!("“{text}”")
}

pub fn attribution(name: &str, role: &str) -> String {
    format!("— {name} · {role}")
}

pub fn copyright_line(year: i32, rights: &str) -> String {
    format!("© {year} {BRAND}. {rights}")
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_are_zero_padded() {
        assert_eq!(step_number(0), "01");
        assert_eq!(step_number(8), "09");
        assert_eq!(step_number(11), "12");
    }

    #[test]
    fn testimonial_formatting() {
        assert_eq!(quoted("Handled everything."), "“Handled everything.”");
        assert_eq!(attribution("M. Haddad", "UAE"), "— M. Haddad · UAE");
    }

    #[test]
    fn copyright_uses_brand() {
        assert_eq!(
            copyright_line(2025, "All rights reserved."),
            "© 2025 UaskIbuy. All rights reserved."
        );
        assert!(current_year() >= 2025);
    }
}
