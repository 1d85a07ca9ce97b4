use leptos::prelude::*;
use pulse_core::Selection;

/// Tailwind palette name used for a service's tab and detail panel
#[derive(Clone, Copy)]
struct Palette(&'static str);

impl Palette {
    fn tab(self, active: bool) -> String {
        let c = self.0;
        if active {
            format!("bg-{c}-500 text-white")
        } else {
            format!("bg-white text-{c}-600 hover:bg-gray-50 border-b-2 border-{c}-500")
        }
    }
}

struct Service {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    palette: Palette,
}

const SERVICES: &[Service] = &[
    Service {
        id: "seo",
        icon: "📈",
        title: "SEO Optimization",
        description: "Drive organic traffic with data-driven SEO strategies that position your brand at the top of search results.",
        features: &[
            "Comprehensive SEO audits and competitor analysis",
            "On-page & technical SEO optimization",
            "Content strategy and keyword research",
            "Link building and authority development",
            "Local SEO for businesses targeting specific regions",
        ],
        palette: Palette("blue"),
    },
    Service {
        id: "ppc",
        icon: "📊",
        title: "PPC Management",
        description: "Maximize ROI with targeted pay-per-click campaigns across Google, Bing, and social media platforms.",
        features: &[
            "Strategic ad copy and creative development",
            "Advanced audience targeting and segmentation",
            "Conversion tracking and attribution modeling",
            "A/B testing and continuous optimization",
            "Transparent reporting and ROI analysis",
        ],
        palette: Palette("orange"),
    },
    Service {
        id: "social",
        icon: "👥",
        title: "Social Media Marketing",
        description: "Build brand awareness and engagement with strategic social media campaigns that resonate with your audience.",
        features: &[
            "Platform-specific strategy development",
            "Content creation and community management",
            "Paid social campaigns with precision targeting",
            "Influencer marketing and partnerships",
            "Social listening and competitor analysis",
        ],
        palette: Palette("pink"),
    },
    Service {
        id: "content",
        icon: "✍️",
        title: "Content Marketing",
        description: "Engage your audience with compelling content that establishes authority and drives conversions.",
        features: &[
            "Content strategy aligned with business goals",
            "Blog posts, articles, and long-form content",
            "Video production and multimedia content",
            "Email marketing campaigns and automation",
            "Content distribution and promotion",
        ],
        palette: Palette("green"),
    },
    Service {
        id: "analytics",
        icon: "✨",
        title: "Analytics & Insights",
        description: "Make data-driven decisions with comprehensive analytics that reveal actionable insights.",
        features: &[
            "Custom dashboard development",
            "Conversion rate optimization (CRO)",
            "User behavior analysis",
            "Comprehensive performance reporting",
            "Predictive analytics and trend forecasting",
        ],
        palette: Palette("purple"),
    },
    Service {
        id: "strategy",
        icon: "🧭",
        title: "Digital Strategy",
        description: "Develop a holistic digital strategy that aligns marketing efforts with your business objectives.",
        features: &[
            "Brand positioning and competitive analysis",
            "Customer journey mapping",
            "Multi-channel marketing roadmaps",
            "Growth hacking and innovation planning",
            "Budget allocation and ROI projection",
        ],
        palette: Palette("indigo"),
    },
];

/// Service for a tab id; unknown ids show the first service.
fn service_for(id: Option<&str>) -> &'static Service {
    id.and_then(|id| SERVICES.iter().find(|s| s.id == id))
        .unwrap_or(&SERVICES[0])
}

#[component]
pub fn Services() -> impl IntoView {
    let active_tab = RwSignal::new(Selection::with("seo"));
    let active = move || service_for(active_tab.with(|t| t.get()));

    view! {
        <section id="services" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4 md:px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Our Digital Marketing Services"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Comprehensive solutions designed to elevate your brand and drive measurable results"
                    </p>
                </div>

                // Service tabs
                <div class="flex flex-wrap justify-center gap-2 mb-12">
                    {SERVICES.iter().map(|service| {
                        let id = service.id;
                        let palette = service.palette;
                        view! {
                            <button
                                class=move || format!(
                                    "px-5 py-3 rounded-md font-medium transition-all duration-300 flex items-center {}",
                                    palette.tab(active().id == id)
                                )
                                on:click=move |_| active_tab.update(|t| t.select(id))
                            >
                                <span class="mr-2">{service.icon}</span>
                                {service.title}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                // Active service
                {move || {
                    let service = active();
                    let c = service.palette.0;
                    view! {
                        <div class="bg-white rounded-xl shadow-xl overflow-hidden transition-all duration-500">
                            <div class="md:flex">
                                <div class=format!("md:w-1/2 p-8 md:p-12 bg-{c}-50")>
                                    <div class=format!("inline-block p-3 rounded-full bg-{c}-100 text-{c}-600 mb-6 text-2xl")>
                                        {service.icon}
                                    </div>
                                    <h3 class="text-2xl md:text-3xl font-bold text-gray-900 mb-4">{service.title}</h3>
                                    <p class="text-lg text-gray-700 mb-6">{service.description}</p>
                                    <a href="#contact" class=format!("inline-flex items-center text-{c}-600 font-semibold hover:underline")>
                                        {format!("Learn more about {}", service.title)}
                                        <span class="ml-2">"→"</span>
                                    </a>
                                </div>
                                <div class="md:w-1/2 p-8 md:p-12 bg-gray-900 text-white">
                                    <h4 class="text-xl font-semibold mb-6">"What's Included:"</h4>
                                    <ul class="space-y-4">
                                        {service.features.iter().map(|&feature| view! {
                                            <li class="flex items-start">
                                                <span class=format!("mr-3 text-{c}-400 flex-shrink-0")>"✓"</span>
                                                <span>{feature}</span>
                                            </li>
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            </div>
                        </div>
                    }
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tab_falls_back_to_first_service() {
        assert_eq!(service_for(Some("ppc")).title, "PPC Management");
        assert_eq!(service_for(Some("nope")).id, "seo");
        assert_eq!(service_for(None).id, "seo");
    }

    #[test]
    fn tab_classes_follow_palette() {
        assert_eq!(Palette("pink").tab(true), "bg-pink-500 text-white");
        assert!(Palette("pink").tab(false).contains("border-pink-500"));
    }
}
