//! Lead sinks available in the browser.

use gloo_net::http::Request;
use pulse_core::{LeadFormData, LeadSink, LogSink, SiteConfig};
use tracing::{debug, warn};

/// POSTs the lead as JSON without waiting for the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpLeadSink {
    endpoint: String,
}

impl HttpLeadSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl LeadSink for HttpLeadSink {
    fn deliver(&self, lead: &LeadFormData) {
        let endpoint = self.endpoint.clone();
        let lead = lead.clone();
        leptos::task::spawn_local(async move {
            match post_lead(&endpoint, &lead).await {
                Ok(status) if (200..300).contains(&status) => {
                    debug!(%endpoint, status, "lead delivered")
                }
                Ok(status) => warn!(%endpoint, status, "lead endpoint rejected lead"),
                Err(err) => warn!(%endpoint, error = %err, "lead delivery failed"),
            }
        });
    }
}

async fn post_lead(endpoint: &str, lead: &LeadFormData) -> Result<u16, gloo_net::Error> {
    let response = Request::post(endpoint).json(lead)?.send().await?;
    Ok(response.status())
}

/// The sink the page was configured with.
///
/// Every lead is logged; with an endpoint configured it is also POSTed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSink {
    Log(LogSink),
    Http(HttpLeadSink),
}

impl SiteSink {
    pub fn from_config(config: &SiteConfig) -> Self {
        match config.lead_endpoint() {
            Some(endpoint) => SiteSink::Http(HttpLeadSink::new(endpoint)),
            None => SiteSink::Log(LogSink),
        }
    }
}

impl LeadSink for SiteSink {
    fn deliver(&self, lead: &LeadFormData) {
        match self {
            SiteSink::Log(log) => log.deliver(lead),
            SiteSink::Http(http) => {
                LogSink.deliver(lead);
                http.deliver(lead);
            }
        }
    }
}
