//! # pulse-core
//!
//! Platform-independent state behind the PulseDigital landing page.
//!
//! Everything interactive on the page is a small, synchronous state machine
//! held in a reactive signal by the `landing` crate. Keeping those machines
//! here means they compile and test natively, without a browser.
//!
//! ## Modules
//!
//! - [`lead`] - lead form data and the service catalog
//! - [`wizard`] - the three-step proposal wizard
//! - [`capture`] - modal visibility paired with the wizard
//! - [`carousel`] - timer-driven slide index
//! - [`selection`] - exclusive single selection (accordion, tabs, overlays)
//! - [`header`] - scroll-aware header, mobile menu and dropdowns
//! - [`newsletter`] - footer subscription form
//! - [`sink`] - where submitted leads go
//! - [`config`] - site configuration loaded from TOML
//!
//! ## Example
//!
//! ```rust
//! use pulse_core::{LeadCapture, LeadField, LogSink};
//!
//! let mut capture = LeadCapture::default();
//! capture.open();
//!
//! let wizard = capture.wizard_mut();
//! wizard.set_field(LeadField::FirstName, "Jane");
//! wizard.set_field(LeadField::LastName, "Doe");
//! wizard.set_field(LeadField::Email, "jane@x.com");
//! assert!(wizard.can_continue());
//! wizard.next_step();
//! wizard.toggle_service("seo");
//! wizard.next_step();
//! wizard.submit(&LogSink).unwrap();
//!
//! assert!(capture.wizard().is_completed());
//! capture.close();
//! assert!(capture.wizard().form().is_blank());
//! ```

#![warn(missing_docs)]

pub mod capture;
pub mod carousel;
pub mod config;
pub mod error;
pub mod header;
pub mod lead;
pub mod newsletter;
pub mod selection;
pub mod sink;
pub mod wizard;

pub use capture::LeadCapture;
pub use carousel::{Carousel, HERO_PERIOD, TESTIMONIAL_PERIOD};
pub use config::SiteConfig;
pub use error::{ConfigError, LeadError};
pub use header::HeaderState;
pub use lead::{LeadField, LeadFormData, SERVICE_OPTIONS, ServiceOption};
pub use newsletter::Newsletter;
pub use selection::Selection;
pub use sink::{LeadSink, LogSink};
pub use wizard::{LeadWizard, WizardStep};
