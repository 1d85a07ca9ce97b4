//! Destinations for submitted leads.
//!
//! A sink is fire-and-forget: `deliver` returns nothing and the wizard shows
//! its thank-you view regardless of what the sink does with the lead.

use tracing::{info, warn};

use crate::lead::LeadFormData;

/// Receives a completed lead exactly once per submission.
pub trait LeadSink {
    /// Take a snapshot of the submitted lead.
    fn deliver(&self, lead: &LeadFormData);
}

/// Writes the lead to the log as a single JSON event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSink;

impl LeadSink for LogSink {
    fn deliver(&self, lead: &LeadFormData) {
        match serde_json::to_string(lead) {
            Ok(json) => info!(target: "pulse::lead", lead = %json, "lead submitted"),
            Err(err) => warn!(target: "pulse::lead", error = %err, "lead could not be serialized"),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Keeps every delivered lead for later assertions.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        leads: RefCell<Vec<LeadFormData>>,
    }

    impl RecordingSink {
        pub(crate) fn leads(&self) -> Vec<LeadFormData> {
            self.leads.borrow().clone()
        }
    }

    impl LeadSink for RecordingSink {
        fn deliver(&self, lead: &LeadFormData) {
            self.leads.borrow_mut().push(lead.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn recording_sink_keeps_delivery_order() {
        let sink = RecordingSink::default();
        let first = LeadFormData {
            email: "ops@example.com".into(),
            ..Default::default()
        };
        let second = LeadFormData {
            email: "cto@example.com".into(),
            ..Default::default()
        };

        let dyn_sink: &dyn LeadSink = &sink;
        dyn_sink.deliver(&first);
        dyn_sink.deliver(&second);

        assert_eq!(sink.leads(), vec![first, second]);
    }

    #[test]
    fn log_sink_accepts_any_lead() {
        LogSink.deliver(&LeadFormData::default());
    }
}
