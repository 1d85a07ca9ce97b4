use leptos::prelude::*;
use pulse_core::Selection;

use crate::dom;

/// Characters of the challenge shown on a card before the ellipsis
const TEASER_CHARS: usize = 120;

struct CaseStudy {
    id: u32,
    title: &'static str,
    client: &'static str,
    industry: &'static str,
    image: &'static str,
    challenge: &'static str,
    solution: &'static str,
    /// (metric, value)
    results: &'static [(&'static str, &'static str)],
}

const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        title: "Boosting E-commerce Sales Through SEO & PPC",
        client: "Fashion Retailer",
        industry: "E-commerce",
        image: "https://images.pexels.com/photos/6956800/pexels-photo-6956800.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        challenge: "A national fashion retailer was struggling with stagnant online sales and high customer acquisition costs.",
        solution: "We implemented a comprehensive SEO strategy alongside targeted PPC campaigns, focusing on high-intent keywords and optimizing the conversion funnel.",
        results: &[
            ("Organic Traffic", "+187%"),
            ("Conversion Rate", "+43%"),
            ("Cost per Acquisition", "-32%"),
            ("Return on Ad Spend", "426%"),
        ],
    },
    CaseStudy {
        id: 2,
        title: "Local Business Growth Through Digital Transformation",
        client: "Health & Wellness Clinic",
        industry: "Healthcare",
        image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        challenge: "A local wellness clinic needed to expand their customer base and establish themselves as industry leaders in a competitive market.",
        solution: "We created a local SEO strategy, content marketing plan, and implemented a lead generation system with automated follow-ups.",
        results: &[
            ("Local Search Visibility", "+152%"),
            ("New Patient Inquiries", "+89%"),
            ("Website Conversion Rate", "+67%"),
            ("Marketing ROI", "380%"),
        ],
    },
    CaseStudy {
        id: 3,
        title: "B2B Lead Generation Campaign",
        client: "Software Solution Provider",
        industry: "SaaS",
        image: "https://images.pexels.com/photos/3182812/pexels-photo-3182812.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        challenge: "A B2B software company was struggling to generate qualified leads and had a lengthy sales cycle impacting revenue growth.",
        solution: "We developed a multi-channel approach with content marketing, LinkedIn advertising, and marketing automation to nurture leads through the funnel.",
        results: &[
            ("Qualified Leads", "+215%"),
            ("Sales Cycle Length", "-41%"),
            ("Cost per Lead", "-28%"),
            ("Closed Deals", "+76%"),
        ],
    },
];

/// First `max` characters of `text` followed by "...".
fn teaser(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

#[component]
pub fn CaseStudies() -> impl IntoView {
    let active = RwSignal::new(Selection::<u32>::new());
    let close = move || active.update(Selection::clear);

    view! {
        <section id="case-studies" class="py-20 bg-white">
            <div class="container mx-auto px-4 md:px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Client Success Stories"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Real results for real businesses. Explore how our strategies drive measurable growth."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {CASE_STUDIES.iter().map(|study| {
                        let id = study.id;
                        view! {
                            <div
                                class="bg-white rounded-xl shadow-lg overflow-hidden transition-all duration-300 hover:shadow-xl hover:-translate-y-1 cursor-pointer"
                                on:click=move |_| active.update(|a| a.select(id))
                            >
                                <div
                                    class="h-60 bg-center bg-cover"
                                    style=format!("background-image: url({})", study.image)
                                ></div>
                                <div class="p-6">
                                    <div class="text-sm font-medium text-blue-600 mb-2">{study.industry}</div>
                                    <h3 class="text-xl font-bold text-gray-900 mb-3">{study.title}</h3>
                                    <p class="text-gray-600 mb-4">{teaser(study.challenge, TEASER_CHARS)}</p>
                                    <button class="text-blue-600 font-medium flex items-center hover:text-blue-800 transition-colors">
                                        "Read case study"<span class="ml-1">"›"</span>
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                // Detail overlay
                {move || {
                    let id = active.with(|a| a.get())?;
                    let study = CASE_STUDIES.iter().find(|s| s.id == id)?;
                    Some(view! {
                        <div
                            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4"
                            on:click=move |_| close()
                        >
                            <div
                                class="bg-white rounded-xl max-w-4xl w-full max-h-[90vh] overflow-y-auto"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <div
                                    class="h-72 bg-center bg-cover relative"
                                    style=format!(
                                        "background-image: linear-gradient(rgba(0, 0, 0, 0.3), rgba(0, 0, 0, 0.3)), url({})",
                                        study.image
                                    )
                                >
                                    <button
                                        class="absolute top-4 right-4 bg-white rounded-full p-2 w-10 h-10"
                                        aria-label="Close"
                                        on:click=move |_| close()
                                    >
                                        "✕"
                                    </button>
                                    <div class="absolute bottom-6 left-6 text-white">
                                        <div class="text-sm font-medium mb-2">
                                            {format!("{} • {}", study.client, study.industry)}
                                        </div>
                                        <h3 class="text-2xl md:text-3xl font-bold">{study.title}</h3>
                                    </div>
                                </div>

                                <div class="p-6 md:p-8">
                                    <div class="mb-8">
                                        <h4 class="text-xl font-bold text-gray-900 mb-3">"The Challenge"</h4>
                                        <p class="text-gray-700">{study.challenge}</p>
                                    </div>
                                    <div class="mb-8">
                                        <h4 class="text-xl font-bold text-gray-900 mb-3">"Our Solution"</h4>
                                        <p class="text-gray-700">{study.solution}</p>
                                    </div>
                                    <div>
                                        <h4 class="text-xl font-bold text-gray-900 mb-3">"The Results"</h4>
                                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                                            {study.results.iter().map(|&(metric, value)| view! {
                                                <div class="bg-gray-50 p-4 rounded-lg text-center">
                                                    <div class="text-3xl font-bold text-blue-600 mb-1">{value}</div>
                                                    <div class="text-sm text-gray-600">{metric}</div>
                                                </div>
                                            }).collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                    <div class="mt-8 text-center">
                                        <button
                                            class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-md font-medium"
                                            on:click=move |_| {
                                                close();
                                                dom::scroll_to_anchor("contact");
                                            }
                                        >
                                            "Discuss Your Project"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    })
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teaser_cuts_on_characters() {
        assert_eq!(teaser("short", 120), "short...");
        assert_eq!(teaser("abcdef", 3), "abc...");
        assert_eq!(teaser("ééé", 2), "éé...");
    }

    #[test]
    fn card_teasers_fit_the_limit() {
        for study in CASE_STUDIES {
            let t = teaser(study.challenge, TEASER_CHARS);
            assert!(t.chars().count() <= TEASER_CHARS + 3, "{}", study.title);
        }
    }

    #[test]
    fn case_study_ids_are_unique() {
        let mut ids: Vec<u32> = CASE_STUDIES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CASE_STUDIES.len());
    }
}
