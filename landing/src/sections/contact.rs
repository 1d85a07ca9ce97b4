use leptos::prelude::*;

/// (label, value, href)
const DETAILS: &[(&str, &str, &str)] = &[
    ("Email", "hello@pulsedigital.com", "mailto:hello@pulsedigital.com"),
    ("Phone", "+1 (555) 123-4567", "tel:+15551234567"),
    ("Office", "123 Market Street, San Francisco, CA", "#contact"),
];

#[component]
pub fn Contact(open_lead_modal: Callback<()>) -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-gradient-to-r from-blue-600 to-blue-800 text-white">
            <div class="container mx-auto px-4 md:px-6">
                <div class="md:flex md:items-center md:justify-between gap-12">
                    <div class="md:w-3/5 mb-10 md:mb-0">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">"Ready to Grow Your Business?"</h2>
                        <p class="text-xl text-blue-100 mb-8">
                            "Tell us about your goals and we'll put together a tailored digital marketing proposal, free of charge."
                        </p>
                        <button
                            class="bg-white text-blue-700 hover:bg-blue-50 px-8 py-4 rounded-md font-semibold text-lg shadow-lg transition-colors duration-300"
                            on:click=move |_| open_lead_modal.run(())
                        >
                            "Get Your Free Proposal"
                        </button>
                    </div>
                    <div class="md:w-2/5 bg-white/10 rounded-xl p-8 space-y-6">
                        {DETAILS.iter().map(|&(label, value, href)| view! {
                            <div>
                                <div class="text-sm uppercase tracking-wide text-blue-200 mb-1">{label}</div>
                                <a href=href class="text-lg font-medium hover:underline">{value}</a>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
