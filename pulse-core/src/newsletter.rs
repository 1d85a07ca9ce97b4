//! Footer newsletter form.

use tracing::info;

/// Email input plus the temporary "Thanks for subscribing!" flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Newsletter {
    email: String,
    subscribed: bool,
}

impl Newsletter {
    /// Current input value.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Store raw input.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Whether the confirmation is showing.
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Subscribe with the current input.
    ///
    /// An empty input is ignored. Otherwise the address is returned, the input
    /// is cleared and the confirmation shows until [`Newsletter::dismiss`].
    pub fn submit(&mut self) -> Option<String> {
        if self.email.is_empty() {
            return None;
        }
        let email = std::mem::take(&mut self.email);
        info!(target: "pulse::newsletter", %email, "newsletter subscription");
        self.subscribed = true;
        Some(email)
    }

    /// Hide the confirmation and show the form again.
    pub fn dismiss(&mut self) {
        self.subscribed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_ignored() {
        let mut form = Newsletter::default();
        assert_eq!(form.submit(), None);
        assert!(!form.is_subscribed());
    }

    #[test]
    fn submit_clears_input_and_confirms_until_dismissed() {
        let mut form = Newsletter::default();
        form.set_email("reader@example.com");
        assert_eq!(form.submit().as_deref(), Some("reader@example.com"));
        assert_eq!(form.email(), "");
        assert!(form.is_subscribed());

        form.dismiss();
        assert!(!form.is_subscribed());
        assert_eq!(form, Newsletter::default());
    }
}
