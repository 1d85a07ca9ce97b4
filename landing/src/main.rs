// PulseDigital landing page, Leptos 0.8 CSR
// Built with trunk: `trunk serve` from this directory

mod dom;
mod sections;
mod sink;
mod timer;

use leptos::prelude::*;
use pulse_core::{LeadCapture, SiteConfig};
use sections::*;
use sink::SiteSink;

/// Site configuration, baked in at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = SiteConfig::from_toml_or_default(SITE_TOML)
        .with_endpoint_override(option_env!("PULSE_LEAD_ENDPOINT"));
    tracing::info!(
        agency = %config.agency_name,
        endpoint = config.lead_endpoint().unwrap_or("<log only>"),
        "mounting landing page"
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let capture = RwSignal::new(LeadCapture::default());
    let open_lead_modal = Callback::new(move |()| capture.update(LeadCapture::open));
    let sink = SiteSink::from_config(&config);
    provide_context(config);

    view! {
        <div class="min-h-screen bg-white">
            <Header open_lead_modal=open_lead_modal />
            <main>
                <Hero open_lead_modal=open_lead_modal />
                <Services />
                <CaseStudies />
                <Testimonials />
                <Team />
                <Blog />
                <Faq />
                <Contact open_lead_modal=open_lead_modal />
            </main>
            <Footer />
            <LeadCaptureModal capture=capture sink=sink />
        </div>
    }
}
