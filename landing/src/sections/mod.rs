// Landing page sections, in page order

use pulse_core::SiteConfig;

mod blog;
mod case_studies;
mod contact;
mod faq;
mod footer;
mod header;
mod hero;
mod lead_modal;
mod services;
mod team;
mod testimonials;

pub use blog::Blog;
pub use case_studies::CaseStudies;
pub use contact::Contact;
pub use faq::Faq;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use lead_modal::LeadCaptureModal;
pub use services::Services;
pub use team::Team;
pub use testimonials::Testimonials;

/// Configuration provided by the page shell, or defaults outside of it.
fn site_config() -> SiteConfig {
    leptos::prelude::use_context::<SiteConfig>().unwrap_or_default()
}

/// Split "PulseDigital" into the accented "Pulse" and the plain "Digital".
///
/// The accent runs up to the second capital letter; names without one are
/// rendered without an accent.
fn split_brand(name: &str) -> (String, String) {
    let split = name
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_uppercase())
        .map(|(i, _)| i);
    match split {
        Some(i) => (name[..i].to_string(), name[i..].to_string()),
        None => (String::new(), name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::split_brand;

    #[test]
    fn brand_splits_at_second_capital() {
        assert_eq!(
            split_brand("PulseDigital"),
            ("Pulse".to_string(), "Digital".to_string())
        );
        assert_eq!(split_brand("acme"), (String::new(), "acme".to_string()));
    }
}
