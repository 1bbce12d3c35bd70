use dioxus::prelude::*;

use super::use_active_copy;
use crate::core::format;

#[component]
pub fn Hero() -> Element {
    let copy = use_active_copy();

    rsx! {
        section { class: "hero",
            div { class: "hero__inner",
                div { class: "hero__text",
                    h1 { class: "hero__title",
                        span { class: "hero__title-accent", "{copy.hero.title}" }
                    }
                    p { class: "hero__subtitle", "{copy.hero.subtitle}" }
                    div { class: "hero__actions",
                        a { class: "button button--primary", href: "#contact", "{copy.hero.cta}" }
                        a { class: "hero__secondary", href: "#how", "{copy.nav.how}" }
                    }
                }
                // Placeholder visual until real photography lands.
                div { class: "hero__visual",
                    div { class: "hero__caption", "{copy.hero.image_caption}" }
                }
            }
        }
    }
}

#[component]
pub fn HowItWorks() -> Element {
    let copy = use_active_copy();

    rsx! {
        section { id: "how", class: "section",
            h2 { class: "section__heading", "{copy.how.heading}" }
            div { class: "section__grid section__grid--thirds",
                for (index, step) in copy.how.steps.iter().enumerate() {
                    div { key: "{index}", class: "card",
                        div { class: "card__ordinal", {format::step_number(index)} }
                        h3 { class: "card__title", "{step.title}" }
                        p { class: "card__body", "{step.body}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Featured() -> Element {
    let copy = use_active_copy();

    rsx! {
        section { id: "featured", class: "section",
            h2 { class: "section__heading", "{copy.featured.heading}" }
            div { class: "section__grid section__grid--thirds",
                for (index, vehicle) in copy.featured.vehicles.iter().enumerate() {
                    article { key: "{index}", class: "vehicle-card",
                        div { class: "vehicle-card__image" }
                        div { class: "vehicle-card__content",
                            div { class: "vehicle-card__header",
                                h3 { class: "vehicle-card__name", "{vehicle.name}" }
                                span { class: "vehicle-card__year", "{vehicle.year}" }
                            }
                            p { class: "vehicle-card__badge", "{copy.featured.badge}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn WhyUs() -> Element {
    let copy = use_active_copy();

    rsx! {
        section { class: "section",
            h2 { class: "section__heading", "{copy.why.heading}" }
            ul { class: "section__grid section__grid--thirds",
                for (index, point) in copy.why.points.iter().enumerate() {
                    li { key: "{index}", class: "card card--point", "{point}" }
                }
            }
        }
    }
}

#[component]
pub fn Testimonials() -> Element {
    let copy = use_active_copy();

    rsx! {
        section { id: "testimonials", class: "section",
            h2 { class: "section__heading", "{copy.testimonials.heading}" }
            div { class: "section__grid section__grid--halves",
                for (index, item) in copy.testimonials.items.iter().enumerate() {
                    figure { key: "{index}", class: "testimonial",
                        blockquote { class: "testimonial__quote", {format::quoted(&item.quote)} }
                        figcaption { class: "testimonial__caption",
                            {format::attribution(&item.name, &item.role)}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CtaBanner() -> Element {
    let copy = use_active_copy();

    rsx! {
        section { class: "cta",
            div { class: "cta__panel",
                h3 { class: "cta__line", "{copy.cta.line}" }
                a { class: "button button--primary", href: "#contact", "{copy.cta.button}" }
            }
        }
    }
}
