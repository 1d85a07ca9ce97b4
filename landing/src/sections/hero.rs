use leptos::prelude::*;
use pulse_core::Carousel;

use super::site_config;
use crate::timer::use_interval;

/// One rotating hero slide
struct Slide {
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "Drive Growth with Data-Driven Marketing Strategies",
        subtitle: "Increase ROI and maximize your digital presence with our expert team",
        image: "https://images.pexels.com/photos/3182812/pexels-photo-3182812.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Slide {
        title: "Transform Your Brand's Digital Presence",
        subtitle: "Award-winning campaigns that convert visitors into loyal customers",
        image: "https://images.pexels.com/photos/3182777/pexels-photo-3182777.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Slide {
        title: "Outrank Your Competitors on Every Platform",
        subtitle: "Strategic SEO and PPC campaigns that deliver measurable results",
        image: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

#[component]
pub fn Hero(open_lead_modal: Callback<()>) -> impl IntoView {
    let slides = RwSignal::new(Carousel::new(SLIDES.len()));
    use_interval(
        site_config().hero_interval(),
        Signal::stored(false),
        move || {
            slides.maybe_update(Carousel::tick);
        },
    );

    let is_active = move |i: usize| slides.with(|c| c.is_active(i));

    view! {
        <section class="relative h-screen">
            // Background images
            {SLIDES.iter().enumerate().map(|(i, slide)| {
                let background = format!(
                    "background-image: linear-gradient(rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.5)), url({}); background-size: cover; background-position: center;",
                    slide.image
                );
                view! {
                    <div
                        class=move || if is_active(i) {
                            "absolute inset-0 transition-opacity duration-1000 opacity-100 z-10"
                        } else {
                            "absolute inset-0 transition-opacity duration-1000 opacity-0 z-0"
                        }
                        style=background
                    ></div>
                }
            }).collect::<Vec<_>>()}

            // Copy
            <div class="absolute inset-0 z-20 flex items-center">
                <div class="container mx-auto px-4 md:px-6">
                    <div class="max-w-2xl text-white">
                        {SLIDES.iter().enumerate().map(|(i, slide)| view! {
                            <Show when=move || is_active(i)>
                                <div class="transition-all duration-1000 opacity-100">
                                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4 leading-tight">
                                        {slide.title}
                                    </h1>
                                    <p class="text-xl md:text-2xl mb-8 text-gray-200">{slide.subtitle}</p>
                                </div>
                            </Show>
                        }).collect::<Vec<_>>()}

                        <div class="flex flex-col sm:flex-row gap-4 mt-8">
                            <button
                                class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-md font-medium text-lg flex items-center justify-center transition-colors duration-300"
                                on:click=move |_| open_lead_modal.run(())
                            >
                                "Get a Free Audit"
                                <span class="ml-2">"›"</span>
                            </button>
                            <a
                                href="#case-studies"
                                class="bg-transparent border-2 border-white hover:bg-white hover:text-blue-900 text-white px-6 py-3 rounded-md font-medium text-lg flex items-center justify-center transition-all duration-300"
                            >
                                "View Our Work"
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            // Slide indicators
            <div class="absolute bottom-8 left-0 right-0 z-20 flex justify-center">
                <div class="flex space-x-2">
                    {(0..SLIDES.len()).map(|i| view! {
                        <button
                            class=move || if is_active(i) {
                                "h-3 rounded-full transition-all duration-300 bg-white w-8"
                            } else {
                                "w-3 h-3 rounded-full transition-all duration-300 bg-gray-400 bg-opacity-50"
                            }
                            aria-label=format!("Go to slide {}", i + 1)
                            on:click=move |_| {
                                slides.maybe_update(|c| c.go_to(i));
                            }
                        ></button>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
