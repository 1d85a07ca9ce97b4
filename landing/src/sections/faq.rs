use leptos::prelude::*;
use pulse_core::Selection;

struct FaqItem {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "What makes your digital marketing approach unique?",
        answer: "Our data-driven methodology combines advanced analytics with creative strategy. We don't just follow industry trends, we create customized solutions based on your specific business goals, target audience, and market dynamics. Our team continuously monitors and optimizes campaigns to ensure maximum ROI.",
    },
    FaqItem {
        question: "How long does it take to see results from SEO?",
        answer: "While initial improvements can be seen within 3-6 months, sustainable SEO results typically develop over 6-12 months. We focus on building a strong foundation with technical SEO, quality content, and authoritative backlinks. Our transparent reporting keeps you informed of progress throughout the journey.",
    },
    FaqItem {
        question: "What's included in your social media management services?",
        answer: "Our comprehensive social media management includes content strategy, creation, and scheduling, community management, paid advertising, performance tracking, and monthly analytics reports. We handle everything from graphic design to engagement monitoring while maintaining your brand's voice.",
    },
    FaqItem {
        question: "How do you measure campaign success?",
        answer: "We establish clear KPIs aligned with your business objectives and track them through advanced analytics tools. Metrics may include traffic growth, conversion rates, lead quality, ROI, and brand engagement. You'll receive detailed monthly reports with actionable insights and recommendations.",
    },
    FaqItem {
        question: "What is your pricing structure?",
        answer: "We offer customized packages based on your specific needs and goals. After understanding your requirements through an initial consultation, we'll provide a detailed proposal outlining recommended services and investment levels. All packages include regular reporting and dedicated account management.",
    },
    FaqItem {
        question: "Do you offer contracts or is it month-to-month?",
        answer: "We offer both monthly and long-term agreements. While we recommend a minimum 6-month commitment for optimal results, especially for SEO and content marketing, we also provide flexible month-to-month options. Each agreement includes clear deliverables and performance metrics.",
    },
];

/// Accordion with at most one answer open.
#[component]
pub fn Faq() -> impl IntoView {
    let open = RwSignal::new(Selection::<usize>::new());

    view! {
        <section id="faq" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4 md:px-6">
                <div class="max-w-3xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Frequently Asked Questions"</h2>
                        <p class="text-xl text-gray-600">
                            "Get answers to common questions about our digital marketing services"
                        </p>
                    </div>

                    <div class="space-y-4">
                        {FAQ_ITEMS.iter().enumerate().map(|(i, item)| {
                            let is_open = move || open.with(|o| o.is_selected(&i));
                            view! {
                                <div class="bg-white rounded-xl overflow-hidden shadow-sm hover:shadow-md transition-shadow duration-300">
                                    <button
                                        class="w-full px-6 py-4 text-left flex items-center justify-between focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-opacity-50"
                                        aria-expanded=move || is_open().to_string()
                                        on:click=move |_| {
                                            open.update(|o| {
                                                o.toggle(i);
                                            });
                                        }
                                    >
                                        <span class="text-lg font-semibold text-gray-900">{item.question}</span>
                                        <span class="ml-4 flex-shrink-0 text-blue-600 text-xl">
                                            {move || if is_open() { "−" } else { "+" }}
                                        </span>
                                    </button>
                                    <div class=move || if is_open() {
                                        "transition-all duration-300 ease-in-out max-h-96 opacity-100 overflow-hidden"
                                    } else {
                                        "transition-all duration-300 ease-in-out max-h-0 opacity-0 overflow-hidden"
                                    }>
                                        <div class="px-6 pb-4 text-gray-600">{item.answer}</div>
                                    </div>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>

                    <div class="mt-12 text-center">
                        <p class="text-gray-600 mb-6">"Still have questions? We're here to help!"</p>
                        <a
                            href="#contact"
                            class="inline-flex items-center justify-center px-6 py-3 border border-transparent text-base font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors duration-300"
                        >
                            "Contact Us"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
