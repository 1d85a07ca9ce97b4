use leptos::prelude::*;
use pulse_core::Carousel;

use super::site_config;
use crate::timer::use_interval;

/// Stars drawn under every portrait
const MAX_RATING: u8 = 5;

struct Testimonial {
    name: &'static str,
    company: &'static str,
    role: &'static str,
    image: &'static str,
    rating: u8,
    content: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex Johnson",
        company: "Horizon Fashion",
        role: "Marketing Director",
        image: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        rating: 5,
        content: "Working with PulseDigital transformed our online presence. Their SEO strategy increased our organic traffic by 187% in just six months, leading to a significant boost in sales. The team's attention to detail and data-driven approach sets them apart.",
    },
    Testimonial {
        name: "Sarah Williams",
        company: "Wellness Central",
        role: "CEO",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        rating: 5,
        content: "As a local business competing in a crowded market, we needed a partner who understood our challenges. PulseDigital delivered beyond our expectations, creating a digital strategy that generated 89% more patient inquiries and transformed our business growth.",
    },
    Testimonial {
        name: "Michael Chen",
        company: "CloudSoft Solutions",
        role: "Head of Growth",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        rating: 4,
        content: "The PulseDigital team revamped our lead generation strategy and implemented marketing automation that shortened our sales cycle by 41%. Their expertise in B2B marketing and understanding of the SaaS industry made all the difference.",
    },
];

fn star_class(position: u8, rating: u8) -> &'static str {
    if position < rating {
        "text-yellow-400 text-xl"
    } else {
        "text-gray-300 text-xl"
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let slides = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let paused = Memo::new(move |_| slides.with(Carousel::is_paused));
    use_interval(
        site_config().testimonial_interval(),
        paused.into(),
        move || {
            slides.maybe_update(Carousel::tick);
        },
    );

    let is_active = move |i: usize| slides.with(|c| c.is_active(i));

    view! {
        <section class="py-20 bg-blue-900 text-white">
            <div class="container mx-auto px-4 md:px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"What Our Clients Say"</h2>
                    <p class="text-xl text-blue-200 max-w-3xl mx-auto">
                        "Don't just take our word for it, hear from businesses we've helped grow"
                    </p>
                </div>

                <div
                    class="relative max-w-4xl mx-auto"
                    on:mouseenter=move |_| slides.update(Carousel::pause)
                    on:mouseleave=move |_| slides.update(Carousel::resume)
                >
                    <div class="overflow-hidden rounded-xl">
                        <div
                            class="flex transition-transform duration-500 ease-in-out"
                            style=move || format!(
                                "transform: translateX(-{}%)",
                                slides.with(Carousel::offset_percent)
                            )
                        >
                            {TESTIMONIALS.iter().map(|t| view! {
                                <div class="w-full flex-shrink-0 bg-white text-gray-900 rounded-xl p-8 md:p-10">
                                    <div class="flex flex-col md:flex-row gap-6 md:gap-10 h-full">
                                        <div class="md:w-1/3 flex flex-col items-center">
                                            <img src=t.image alt=t.name class="w-24 h-24 rounded-full object-cover mb-4" />
                                            <div class="flex mb-2" aria-label=format!("{} out of {MAX_RATING} stars", t.rating)>
                                                {(0..MAX_RATING).map(|i| view! {
                                                    <span class=star_class(i, t.rating)>"★"</span>
                                                }).collect::<Vec<_>>()}
                                            </div>
                                            <div class="text-center">
                                                <h4 class="font-bold text-gray-900">{t.name}</h4>
                                                <p class="text-sm text-gray-600">{t.role}</p>
                                                <p class="text-sm font-medium text-blue-600">{t.company}</p>
                                            </div>
                                        </div>
                                        <div class="md:w-2/3 flex items-center">
                                            <blockquote class="italic text-gray-700 text-lg">
                                                {format!("\"{}\"", t.content)}
                                            </blockquote>
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <button
                        class="absolute top-1/2 left-0 transform -translate-y-1/2 -translate-x-1/2 bg-white text-blue-600 rounded-full p-3 shadow-lg hover:bg-blue-50 transition-colors md:-translate-x-6"
                        aria-label="Previous testimonial"
                        on:click=move |_| {
                            slides.maybe_update(Carousel::prev);
                        }
                    >
                        "‹"
                    </button>
                    <button
                        class="absolute top-1/2 right-0 transform -translate-y-1/2 translate-x-1/2 bg-white text-blue-600 rounded-full p-3 shadow-lg hover:bg-blue-50 transition-colors md:translate-x-6"
                        aria-label="Next testimonial"
                        on:click=move |_| {
                            slides.maybe_update(Carousel::next);
                        }
                    >
                        "›"
                    </button>

                    <div class="flex justify-center mt-6 space-x-2">
                        {(0..TESTIMONIALS.len()).map(|i| view! {
                            <button
                                class=move || if is_active(i) {
                                    "h-3 rounded-full transition-all duration-300 bg-white w-8"
                                } else {
                                    "w-3 h-3 rounded-full transition-all duration-300 bg-blue-200 bg-opacity-50"
                                }
                                aria-label=format!("Go to slide {}", i + 1)
                                on:click=move |_| {
                                    slides.maybe_update(|c| c.go_to(i));
                                }
                            ></button>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_star_rating_greys_out_the_last_star() {
        let classes: Vec<_> = (0..MAX_RATING).map(|i| star_class(i, 4)).collect();
        assert_eq!(classes.iter().filter(|c| c.contains("yellow")).count(), 4);
        assert!(classes[4].contains("gray"));
    }

    #[test]
    fn ratings_stay_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= MAX_RATING));
    }
}
