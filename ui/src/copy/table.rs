//! Typed copy table: every display string on the page, grouped by section.

use std::collections::BTreeSet;

use i18n_embed::fluent::FluentLanguageLoader;

use crate::i18n::fl;

/// Section keys, in page order.
pub const SECTION_KEYS: [&str; 9] = [
    "nav",
    "hero",
    "how",
    "featured",
    "why",
    "testimonials",
    "cta",
    "contact",
    "footer",
];

/// Complete display copy for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTable {
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub how: HowCopy,
    pub featured: FeaturedCopy,
    pub why: WhyCopy,
    pub testimonials: TestimonialsCopy,
    pub cta: CtaCopy,
    pub contact: ContactCopy,
    pub footer: FooterCopy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCopy {
    pub how: String,
    pub featured: String,
    pub testimonials: String,
    pub contact: String,
    pub language_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCopy {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub image_caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HowCopy {
    pub heading: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedCopy {
    pub heading: String,
    /// Spec line shown on every vehicle card.
    pub badge: String,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub name: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhyCopy {
    pub heading: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialsCopy {
    pub heading: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaCopy {
    pub line: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCopy {
    pub heading: String,
    pub name_label: String,
    pub email_label: String,
    pub vehicle_label: String,
    pub vehicle_placeholder: String,
    pub message_label: String,
    pub message_placeholder: String,
    pub submit: String,
    pub acknowledgment: String,
    pub dismiss: String,
    pub missing_name: String,
    pub missing_email: String,
    pub invalid_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterCopy {
    pub rights: String,
    pub tagline: String,
}

/// Structural fingerprint of a [`CopyTable`]: which sections exist and how
/// long each sequence is. Two locales render consistently only if their
/// shapes are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyShape {
    pub sections: Vec<&'static str>,
    pub steps: usize,
    pub vehicles: usize,
    pub points: usize,
    pub testimonials: usize,
}

impl CopyTable {
    /// Resolve every message through `loader`. Numbered entries are counted
    /// from `ids`, the message ids the locale's own resource defines.
    pub fn from_loader(loader: &FluentLanguageLoader, ids: &BTreeSet<String>) -> Self {
        let steps = (1..=sequence_len(ids, "how-step", "-title"))
            .map(|n| Step {
                title: loader.get(&format!("how-step-{n}-title")),
                body: loader.get(&format!("how-step-{n}-body")),
            })
            .collect();

        let vehicles = (1..=sequence_len(ids, "featured-vehicle", "-name"))
            .map(|n| Vehicle {
                name: loader.get(&format!("featured-vehicle-{n}-name")),
                year: loader.get(&format!("featured-vehicle-{n}-year")),
            })
            .collect();

        let points = (1..=sequence_len(ids, "why-point", ""))
            .map(|n| loader.get(&format!("why-point-{n}")))
            .collect();

        let items = (1..=sequence_len(ids, "testimonial", "-quote"))
            .map(|n| Testimonial {
                quote: loader.get(&format!("testimonial-{n}-quote")),
                name: loader.get(&format!("testimonial-{n}-name")),
                role: loader.get(&format!("testimonial-{n}-role")),
            })
            .collect();

        Self {
            nav: NavCopy {
                how: fl!(loader, "nav-how"),
                featured: fl!(loader, "nav-featured"),
                testimonials: fl!(loader, "nav-testimonials"),
                contact: fl!(loader, "nav-contact"),
                language_label: fl!(loader, "nav-language-label"),
            },
            hero: HeroCopy {
                title: fl!(loader, "hero-title"),
                subtitle: fl!(loader, "hero-subtitle"),
                cta: fl!(loader, "hero-cta"),
                image_caption: fl!(loader, "hero-image-caption"),
            },
            how: HowCopy {
                heading: fl!(loader, "how-heading"),
                steps,
            },
            featured: FeaturedCopy {
                heading: fl!(loader, "featured-heading"),
                badge: fl!(loader, "featured-badge"),
                vehicles,
            },
            why: WhyCopy {
                heading: fl!(loader, "why-heading"),
                points,
            },
            testimonials: TestimonialsCopy {
                heading: fl!(loader, "testimonials-heading"),
                items,
            },
            cta: CtaCopy {
                line: fl!(loader, "cta-line"),
                button: fl!(loader, "cta-button"),
            },
            contact: ContactCopy {
                heading: fl!(loader, "contact-heading"),
                name_label: fl!(loader, "contact-name-label"),
                email_label: fl!(loader, "contact-email-label"),
                vehicle_label: fl!(loader, "contact-vehicle-label"),
                vehicle_placeholder: fl!(loader, "contact-vehicle-placeholder"),
                message_label: fl!(loader, "contact-message-label"),
                message_placeholder: fl!(loader, "contact-message-placeholder"),
                submit: fl!(loader, "contact-submit"),
                acknowledgment: fl!(loader, "contact-acknowledgment"),
                dismiss: fl!(loader, "contact-dismiss"),
                missing_name: fl!(loader, "contact-missing-name"),
                missing_email: fl!(loader, "contact-missing-email"),
                invalid_email: fl!(loader, "contact-invalid-email"),
            },
            footer: FooterCopy {
                rights: fl!(loader, "footer-rights"),
                tagline: fl!(loader, "footer-tagline"),
            },
        }
    }

    pub fn shape(&self) -> CopyShape {
        CopyShape {
            sections: SECTION_KEYS.to_vec(),
            steps: self.how.steps.len(),
            vehicles: self.featured.vehicles.len(),
            points: self.why.points.len(),
            testimonials: self.testimonials.items.len(),
        }
    }
}

/// Count consecutive `{prefix}-{n}{suffix}` ids starting at 1.
fn sequence_len(ids: &BTreeSet<String>, prefix: &str, suffix: &str) -> usize {
    (1..)
        .take_while(|n| ids.contains(&format!("{prefix}-{n}{suffix}")))
        .count()
}
