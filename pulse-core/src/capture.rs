//! Lead-capture modal state.
//!
//! Visibility is a page-lifetime flag toggled by the "Get a Proposal" style
//! buttons. Closing the modal discards whatever was entered, at any step and
//! whether or not the lead was submitted.

use tracing::debug;

use crate::error::LeadError;
use crate::sink::LeadSink;
use crate::wizard::LeadWizard;

/// Modal visibility plus the wizard shown inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadCapture {
    visible: bool,
    wizard: LeadWizard,
}

impl LeadCapture {
    /// Show the modal. Opening an already open modal keeps its input.
    pub fn open(&mut self) {
        if !self.visible {
            debug!("lead modal opened");
        }
        self.visible = true;
    }

    /// Hide the modal and reset the wizard.
    pub fn close(&mut self) {
        self.visible = false;
        self.wizard.reset();
        debug!("lead modal closed");
    }

    /// Whether the modal is showing.
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// The wizard inside the modal.
    pub fn wizard(&self) -> &LeadWizard {
        &self.wizard
    }

    /// Mutable access for field input and navigation.
    pub fn wizard_mut(&mut self) -> &mut LeadWizard {
        &mut self.wizard
    }

    /// Submit the wizard's lead.
    pub fn submit(&mut self, sink: &dyn LeadSink) -> Result<(), LeadError> {
        self.wizard.submit(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::LeadField;
    use crate::sink::testing::RecordingSink;
    use crate::wizard::WizardStep;

    fn fill(capture: &mut LeadCapture) {
        let wizard = capture.wizard_mut();
        wizard.set_field(LeadField::FirstName, "Jane");
        wizard.set_field(LeadField::LastName, "Doe");
        wizard.set_field(LeadField::Email, "jane@x.com");
        wizard.next_step();
        wizard.toggle_service("seo");
        wizard.toggle_service("ppc");
        wizard.next_step();
    }

    #[test]
    fn starts_hidden() {
        assert!(!LeadCapture::default().is_open());
    }

    #[test]
    fn close_at_any_step_resets_the_form() {
        for steps in 0..3 {
            let mut capture = LeadCapture::default();
            capture.open();
            let wizard = capture.wizard_mut();
            wizard.set_field(LeadField::FirstName, "Jane");
            wizard.toggle_service("social");
            for _ in 0..steps {
                wizard.next_step();
            }

            capture.close();
            assert!(!capture.is_open());
            assert_eq!(capture.wizard().step(), WizardStep::BasicInfo);
            assert!(capture.wizard().form().is_blank());

            capture.open();
            assert!(capture.wizard().form().is_blank());
        }
    }

    #[test]
    fn reopening_while_open_keeps_input() {
        let mut capture = LeadCapture::default();
        capture.open();
        capture
            .wizard_mut()
            .set_field(LeadField::Company, "Horizon Fashion");
        capture.open();
        assert_eq!(capture.wizard().form().company, "Horizon Fashion");
    }

    #[test]
    fn completed_state_is_cleared_on_close() {
        let sink = RecordingSink::default();
        let mut capture = LeadCapture::default();
        capture.open();
        fill(&mut capture);
        capture.submit(&sink).unwrap();
        assert!(capture.wizard().is_completed());

        capture.close();
        capture.open();
        assert!(!capture.wizard().is_completed());
        assert_eq!(sink.leads().len(), 1);
    }

    #[test]
    fn walkthrough_delivers_jane() {
        let sink = RecordingSink::default();
        let mut capture = LeadCapture::default();
        capture.open();
        fill(&mut capture);
        capture
            .wizard_mut()
            .set_field(LeadField::Goals, "Rank for running shoes");
        capture.submit(&sink).unwrap();

        let json = serde_json::to_value(&sink.leads()[0]).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["services"], serde_json::json!(["seo", "ppc"]));
        assert_eq!(json["phone"], "");
        assert_eq!(json["goals"], "Rank for running shoes");
    }
}
