use leptos::prelude::*;
use pulse_core::Newsletter;

use super::{site_config, split_brand};
use crate::dom;
use crate::timer::use_timeout;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("#facebook", "Facebook"),
    ("#twitter", "Twitter"),
    ("#linkedin", "LinkedIn"),
    ("#instagram", "Instagram"),
];

const SERVICE_LINKS: &[(&str, &str)] = &[
    ("#seo", "SEO Optimization"),
    ("#ppc", "PPC Management"),
    ("#social", "Social Media Marketing"),
    ("#content", "Content Marketing"),
    ("#analytics", "Analytics & Insights"),
    ("#strategy", "Digital Strategy"),
];

const RESOURCE_LINKS: &[(&str, &str)] = &[
    ("#case-studies", "Case Studies"),
    ("#blog", "Blog"),
    ("#guides", "Marketing Guides"),
    ("#tools", "Free Tools"),
    ("#faq", "FAQ"),
];

const LEGAL_LINKS: &[(&str, &str)] = &[
    ("#privacy", "Privacy Policy"),
    ("#terms", "Terms of Service"),
    ("#contact", "Contact Us"),
];

fn link_list(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <ul class="space-y-3">
            {links.iter().map(|&(href, label)| view! {
                <li><a href=href class="text-gray-400 hover:text-white transition-colors">{label}</a></li>
            }).collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = site_config();
    let confirmation = config.newsletter_confirmation();
    let (brand_accent, brand_rest) = split_brand(&config.agency_name);
    let copyright = format!("© 2025 {}. All rights reserved.", config.agency_name);

    let newsletter = RwSignal::new(Newsletter::default());
    let confirmation_timer = use_timeout();
    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let subscribed = newsletter.try_update(|n| n.submit().is_some()).unwrap_or(false);
        if subscribed {
            confirmation_timer.arm(confirmation, move || newsletter.update(Newsletter::dismiss));
        }
    };

    view! {
        <footer class="bg-gray-900 text-white">
            <div class="container mx-auto px-4 md:px-6 pt-16 pb-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-10">
                    <div class="md:col-span-1">
                        <div class="text-2xl font-bold mb-6">
                            <span class="text-blue-500">{brand_accent}</span>
                            {brand_rest}
                        </div>
                        <p class="text-gray-400 mb-6">
                            "Data-driven digital marketing services that deliver measurable results for businesses of all sizes."
                        </p>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS.iter().map(|&(href, label)| view! {
                                <a href=href class="text-gray-400 hover:text-white transition-colors">{label}</a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-bold mb-6">"Our Services"</h3>
                        {link_list(SERVICE_LINKS)}
                    </div>

                    <div>
                        <h3 class="text-lg font-bold mb-6">"Resources"</h3>
                        {link_list(RESOURCE_LINKS)}
                    </div>

                    <div id="subscribe">
                        <h3 class="text-lg font-bold mb-6">"Subscribe to Newsletter"</h3>
                        <p class="text-gray-400 mb-4">
                            "Get the latest digital marketing insights straight to your inbox."
                        </p>
                        <Show
                            when=move || newsletter.with(Newsletter::is_subscribed)
                            fallback=move || view! {
                                <form class="mb-4" on:submit=on_subscribe>
                                    <div class="flex">
                                        <input
                                            type="email"
                                            placeholder="Your email address"
                                            required
                                            class="flex-grow px-4 py-2 bg-gray-800 border border-gray-700 rounded-l-md focus:outline-none focus:ring-1 focus:ring-blue-500 text-gray-200"
                                            prop:value=move || newsletter.with(|n| n.email().to_string())
                                            on:input=move |ev| newsletter.update(|n| n.set_email(event_target_value(&ev)))
                                        />
                                        <button
                                            type="submit"
                                            class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-r-md transition-colors"
                                        >
                                            "Subscribe"
                                        </button>
                                    </div>
                                </form>
                            }
                        >
                            <div class="bg-blue-900 border border-blue-700 text-blue-200 px-4 py-3 rounded-md mb-4">
                                <p>"Thanks for subscribing!"</p>
                            </div>
                        </Show>
                        <p class="text-gray-500 text-sm">
                            "By subscribing, you agree to our Privacy Policy and consent to receive marketing communications."
                        </p>
                    </div>
                </div>

                <hr class="border-gray-800 my-10" />

                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-400 mb-4 md:mb-0">{copyright}</p>
                    <div class="flex space-x-6">
                        {LEGAL_LINKS.iter().map(|&(href, label)| view! {
                            <a href=href class="text-gray-400 hover:text-white transition-colors">{label}</a>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <button
                class="fixed bottom-6 right-6 bg-blue-600 hover:bg-blue-700 text-white p-3 rounded-full shadow-lg transition-colors z-50"
                aria-label="Back to top"
                on:click=move |_| dom::scroll_to_top()
            >
                "▲"
            </button>
        </footer>
    }
}
