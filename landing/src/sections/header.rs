use leptos::prelude::*;
use pulse_core::HeaderState;
use pulse_core::header::{MOBILE_SERVICES_DROPDOWN, SERVICES_DROPDOWN};

use super::{site_config, split_brand};
use crate::dom;

/// Service anchors listed in both dropdowns.
const SERVICE_LINKS: &[(&str, &str)] = &[
    ("#seo", "SEO Optimization"),
    ("#ppc", "PPC Campaigns"),
    ("#social", "Social Media"),
    ("#content", "Content Marketing"),
];

/// Plain section anchors after the dropdown.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#case-studies", "Case Studies"),
    ("#team", "Our Team"),
    ("#blog", "Blog"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header(open_lead_modal: Callback<()>) -> impl IntoView {
    let config = site_config();
    let threshold = config.scroll_threshold_px;
    let state = RwSignal::new(HeaderState::default());

    let on_scroll = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = dom::scroll_offset();
        state.maybe_update(|s| s.on_scroll(offset, threshold));
    });
    on_cleanup(move || on_scroll.remove());

    let scrolled = move || state.with(HeaderState::is_scrolled);
    let dropdown_open = move |name: &'static str| state.with(|s| s.is_dropdown_open(name));

    let (brand_accent, brand_rest) = split_brand(&config.agency_name);

    view! {
        <header class=move || {
            if scrolled() {
                "fixed w-full z-50 transition-all duration-300 bg-white shadow-md py-2"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex justify-between items-center">
                    <a href="#" class="text-2xl font-bold text-blue-900">
                        <span class="text-blue-500">{brand_accent}</span>
                        {brand_rest}
                    </a>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center space-x-8">
                        <div class="relative">
                            <button
                                class="flex items-center text-gray-800 hover:text-blue-600 font-medium transition-colors"
                                on:click=move |_| state.update(|s| s.toggle_dropdown(SERVICES_DROPDOWN))
                            >
                                "Services "<span class="ml-1">"▾"</span>
                            </button>
                            <div class=move || {
                                if dropdown_open(SERVICES_DROPDOWN) {
                                    "absolute left-0 mt-2 w-48 bg-white rounded-md shadow-lg overflow-hidden transition-all duration-200 opacity-100 visible"
                                } else {
                                    "absolute left-0 mt-2 w-48 bg-white rounded-md shadow-lg overflow-hidden transition-all duration-200 opacity-0 invisible"
                                }
                            }>
                                {SERVICE_LINKS.iter().map(|&(href, label)| view! {
                                    <a href=href class="block px-4 py-2 text-sm text-gray-700 hover:bg-blue-50">{label}</a>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                        {NAV_LINKS.iter().map(|&(href, label)| view! {
                            <a href=href class="text-gray-800 hover:text-blue-600 font-medium transition-colors">{label}</a>
                        }).collect::<Vec<_>>()}
                        <button
                            class=move || {
                                if scrolled() {
                                    "bg-blue-600 text-white hover:bg-blue-700 hover:text-white transition-colors py-2 px-4 rounded-md font-medium shadow-sm"
                                } else {
                                    "bg-white text-blue-600 hover:bg-blue-700 hover:text-white transition-colors py-2 px-4 rounded-md font-medium shadow-sm"
                                }
                            }
                            on:click=move |_| open_lead_modal.run(())
                        >
                            "Get a Proposal"
                        </button>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden text-gray-800 text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| state.update(HeaderState::toggle_menu)
                    >
                        {move || if state.with(HeaderState::is_menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile menu
                <div class=move || if state.with(HeaderState::is_menu_open) { "md:hidden block" } else { "md:hidden hidden" }>
                    <div class="px-2 pt-2 pb-3 space-y-1 bg-white rounded-md mt-2 shadow-lg">
                        <div>
                            <button
                                class="w-full text-left px-3 py-2 text-gray-800 hover:bg-blue-50 font-medium flex justify-between items-center"
                                on:click=move |_| state.update(|s| s.toggle_dropdown(MOBILE_SERVICES_DROPDOWN))
                            >
                                "Services"
                                <span class=move || {
                                    if dropdown_open(MOBILE_SERVICES_DROPDOWN) { "transition-transform rotate-180" } else { "transition-transform" }
                                }>"▾"</span>
                            </button>
                            <div class=move || if dropdown_open(MOBILE_SERVICES_DROPDOWN) { "block pl-4" } else { "hidden pl-4" }>
                                {SERVICE_LINKS.iter().map(|&(href, label)| view! {
                                    <a href=href class="block px-3 py-2 text-sm text-gray-700 hover:bg-blue-50">{label}</a>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                        {NAV_LINKS.iter().map(|&(href, label)| view! {
                            <a href=href class="block px-3 py-2 text-gray-800 hover:bg-blue-50 font-medium">{label}</a>
                        }).collect::<Vec<_>>()}
                        <button
                            class="w-full text-left px-3 py-2 text-blue-600 hover:bg-blue-50 font-medium"
                            on:click=move |_| {
                                open_lead_modal.run(());
                                state.update(HeaderState::close_menu);
                            }
                        >
                            "Get a Proposal"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
