//! Three-step proposal wizard.
//!
//! The wizard owns the lead being edited, the step cursor and the completion
//! flag. Step validity only gates the Continue control in the view; the
//! machine itself moves freely between steps and checks everything once more
//! when the lead is submitted.

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::LeadError;
use crate::lead::{LeadField, LeadFormData};
use crate::sink::LeadSink;

/// Page of the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    /// Contact details
    #[default]
    BasicInfo,
    /// Service checkboxes
    Services,
    /// Goals textarea and submit
    Goals,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [WizardStep; 3] = [
        WizardStep::BasicInfo,
        WizardStep::Services,
        WizardStep::Goals,
    ];

    /// 1-based step number shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Services => 2,
            WizardStep::Goals => 3,
        }
    }

    /// Caption under the step indicator.
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::Services => "Services",
            WizardStep::Goals => "Goals",
        }
    }

    /// Following step, saturating at [`WizardStep::Goals`].
    pub fn next(self) -> Self {
        match self {
            WizardStep::BasicInfo => WizardStep::Services,
            WizardStep::Services | WizardStep::Goals => WizardStep::Goals,
        }
    }

    /// Preceding step, saturating at [`WizardStep::BasicInfo`].
    pub fn prev(self) -> Self {
        match self {
            WizardStep::BasicInfo | WizardStep::Services => WizardStep::BasicInfo,
            WizardStep::Goals => WizardStep::Services,
        }
    }

    /// The last step, where Submit replaces Continue.
    pub fn is_last(self) -> bool {
        self == WizardStep::Goals
    }

    /// The first step, where Back is hidden.
    pub fn is_first(self) -> bool {
        self == WizardStep::BasicInfo
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

/// State of the lead-capture form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadWizard {
    form: LeadFormData,
    step: WizardStep,
    completed: bool,
}

impl LeadWizard {
    /// Empty form on the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lead as entered so far.
    pub fn form(&self) -> &LeadFormData {
        &self.form
    }

    /// Current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether the lead was submitted and the thank-you view is showing.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Store raw input for a text field.
    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Tick or untick a service checkbox.
    pub fn toggle_service(&mut self, id: &str) -> bool {
        self.form.toggle_service(id)
    }

    /// Validity predicate for an arbitrary step.
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::BasicInfo => self.form.has_contact_details(),
            WizardStep::Services => self.form.has_services(),
            WizardStep::Goals => true,
        }
    }

    /// Whether the Continue control for the current step is enabled.
    pub fn can_continue(&self) -> bool {
        self.is_step_valid(self.step)
    }

    /// Advance one step. Validity is enforced by the view, not here.
    pub fn next_step(&mut self) {
        self.step = self.step.next();
        debug!(step = self.step.number(), "wizard advanced");
    }

    /// Go back one step.
    pub fn prev_step(&mut self) {
        self.step = self.step.prev();
        debug!(step = self.step.number(), "wizard went back");
    }

    /// Width of the progress bar, in percent.
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.step.number()) / WizardStep::ALL.len() as f64 * 100.0
    }

    /// First step whose required input is missing.
    pub fn first_invalid_step(&self) -> Option<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .find(|step| !self.is_step_valid(*step))
    }

    /// Hand the lead to `sink` and switch to the thank-you view.
    ///
    /// Step validity only gates the Continue control. A submission with
    /// missing input is still delivered as entered, with a warning.
    pub fn submit(&mut self, sink: &dyn LeadSink) -> Result<(), LeadError> {
        if self.completed {
            return Err(LeadError::AlreadySubmitted);
        }
        if let Some(step) = self.first_invalid_step() {
            warn!(%step, "submitting lead with incomplete step");
        }

        sink.deliver(&self.form);
        self.completed = true;
        info!(services = self.form.services.len(), "lead captured");
        Ok(())
    }

    /// Clear every field, return to step one and drop the completion flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::testing::RecordingSink;
    use pretty_assertions::assert_eq;

    fn with_contact(wizard: &mut LeadWizard) {
        wizard.set_field(LeadField::FirstName, "Jane");
        wizard.set_field(LeadField::LastName, "Doe");
        wizard.set_field(LeadField::Email, "jane@x.com");
    }

    #[test]
    fn starts_empty_on_first_step() {
        let wizard = LeadWizard::new();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert!(wizard.form().is_blank());
        assert!(!wizard.is_completed());
        assert!(!wizard.can_continue());
    }

    #[test]
    fn continue_enabled_iff_required_contact_fields_present() {
        let mut wizard = LeadWizard::new();
        wizard.set_field(LeadField::FirstName, "Jane");
        assert!(!wizard.can_continue());
        wizard.set_field(LeadField::LastName, "Doe");
        assert!(!wizard.can_continue());
        wizard.set_field(LeadField::Email, "jane@x.com");
        assert!(wizard.can_continue());
        wizard.set_field(LeadField::FirstName, "");
        assert!(!wizard.can_continue());
    }

    #[test]
    fn services_step_needs_one_selection() {
        let mut wizard = LeadWizard::new();
        with_contact(&mut wizard);
        wizard.next_step();
        assert_eq!(wizard.step(), WizardStep::Services);
        assert!(!wizard.can_continue());

        wizard.toggle_service("seo");
        assert!(wizard.can_continue());
        wizard.toggle_service("seo");
        assert!(!wizard.can_continue());
    }

    #[test]
    fn goals_step_is_always_valid() {
        let wizard = LeadWizard::new();
        assert!(wizard.is_step_valid(WizardStep::Goals));
    }

    #[test]
    fn steps_saturate_at_bounds() {
        let mut wizard = LeadWizard::new();
        wizard.prev_step();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);

        wizard.next_step();
        wizard.next_step();
        wizard.next_step();
        assert_eq!(wizard.step(), WizardStep::Goals);
        assert!(wizard.step().is_last());

        wizard.prev_step();
        assert_eq!(wizard.step(), WizardStep::Services);
    }

    #[test]
    fn progress_tracks_step() {
        let mut wizard = LeadWizard::new();
        assert!((wizard.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
        wizard.next_step();
        wizard.next_step();
        assert!((wizard.progress_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn submit_delivers_exact_snapshot_once() {
        let sink = RecordingSink::default();
        let mut wizard = LeadWizard::new();
        with_contact(&mut wizard);
        wizard.next_step();
        wizard.toggle_service("seo");
        wizard.toggle_service("ppc");
        wizard.next_step();
        wizard.set_field(LeadField::Goals, "Double our inbound leads");

        wizard.submit(&sink).unwrap();

        let leads = sink.leads();
        assert_eq!(leads.len(), 1);
        assert_eq!(
            leads[0],
            LeadFormData {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "jane@x.com".into(),
                services: vec!["seo".into(), "ppc".into()],
                goals: "Double our inbound leads".into(),
                ..Default::default()
            }
        );
        assert!(wizard.is_completed());
    }

    #[test]
    fn second_submit_is_rejected() {
        let sink = RecordingSink::default();
        let mut wizard = LeadWizard::new();
        with_contact(&mut wizard);
        wizard.toggle_service("content");
        wizard.submit(&sink).unwrap();

        assert_eq!(wizard.submit(&sink), Err(LeadError::AlreadySubmitted));
        assert_eq!(sink.leads().len(), 1);
    }

    #[test]
    fn partial_form_still_reaches_the_sink() {
        let sink = RecordingSink::default();
        let mut wizard = LeadWizard::new();
        wizard.set_field(LeadField::FirstName, "Jane");
        assert_eq!(wizard.first_invalid_step(), Some(WizardStep::BasicInfo));

        assert_eq!(wizard.submit(&sink), Ok(()));

        let leads = sink.leads();
        assert_eq!(leads.len(), 1);
        assert_eq!(
            leads[0],
            LeadFormData {
                first_name: "Jane".into(),
                ..Default::default()
            }
        );
        assert!(wizard.is_completed());
    }

    #[test]
    fn first_invalid_step_walks_in_order() {
        let mut wizard = LeadWizard::new();
        with_contact(&mut wizard);
        assert_eq!(wizard.first_invalid_step(), Some(WizardStep::Services));
        wizard.toggle_service("seo");
        assert_eq!(wizard.first_invalid_step(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let sink = RecordingSink::default();
        let mut wizard = LeadWizard::new();
        with_contact(&mut wizard);
        wizard.next_step();
        wizard.toggle_service("analytics");
        wizard.submit(&sink).unwrap();

        wizard.reset();
        assert_eq!(wizard, LeadWizard::new());
    }

    #[test]
    fn step_display_names_number_and_label() {
        assert_eq!(WizardStep::Services.to_string(), "2 (Services)");
        assert_eq!(
            LeadError::AlreadySubmitted.to_string(),
            "lead was already submitted"
        );
    }
}
