use leptos::prelude::*;
use pulse_core::Selection;

#[derive(Clone, Copy)]
struct Social {
    linkedin: Option<&'static str>,
    twitter: Option<&'static str>,
    email: Option<&'static str>,
}

impl Social {
    /// (label, href) for every network the member is on.
    fn links(&self) -> Vec<(&'static str, String)> {
        let mut links = Vec::new();
        if let Some(url) = self.linkedin {
            links.push(("LinkedIn", url.to_string()));
        }
        if let Some(url) = self.twitter {
            links.push(("Twitter", url.to_string()));
        }
        if let Some(address) = self.email {
            links.push(("Email", format!("mailto:{address}")));
        }
        links
    }
}

struct TeamMember {
    id: u32,
    name: &'static str,
    role: &'static str,
    image: &'static str,
    bio: &'static str,
    expertise: &'static [&'static str],
    social: Social,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        id: 1,
        name: "Emma Richards",
        role: "CEO & Founder",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        bio: "Emma has over 15 years of experience in digital marketing. Prior to founding PulseDigital, she led marketing at several Fortune 500 companies, driving significant revenue growth through innovative digital strategies.",
        expertise: &["Strategic Planning", "Growth Marketing", "Digital Transformation"],
        social: Social {
            linkedin: Some("#"),
            twitter: Some("#"),
            email: Some("emma@pulsedigital.com"),
        },
    },
    TeamMember {
        id: 2,
        name: "David Chen",
        role: "Head of SEO",
        image: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        bio: "With a background in computer science and 10+ years in SEO, David specializes in technical SEO and algorithm analysis. He's helped clients achieve first-page rankings for some of the most competitive keywords in their industries.",
        expertise: &["Technical SEO", "Content Strategy", "Local SEO Optimization"],
        social: Social {
            linkedin: Some("#"),
            twitter: Some("#"),
            email: Some("david@pulsedigital.com"),
        },
    },
    TeamMember {
        id: 3,
        name: "Sophia Martinez",
        role: "PPC & Social Media Director",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        bio: "Sophia is a certified Google Ads expert with a passion for data-driven marketing. She's managed multi-million dollar ad budgets and specializes in creating high-converting campaigns across search and social platforms.",
        expertise: &["Paid Search", "Social Media Advertising", "Conversion Optimization"],
        social: Social {
            linkedin: Some("#"),
            twitter: Some("#"),
            email: Some("sophia@pulsedigital.com"),
        },
    },
    TeamMember {
        id: 4,
        name: "James Wilson",
        role: "Content Marketing Strategist",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        bio: "James combines his journalism background with marketing expertise to create content that resonates with audiences and drives results. He specializes in developing comprehensive content strategies across multiple channels.",
        expertise: &["Content Creation", "Storytelling", "Editorial Strategy"],
        social: Social {
            linkedin: Some("#"),
            twitter: Some("#"),
            email: Some("james@pulsedigital.com"),
        },
    },
];

/// "+N more" badge for the tags hidden on a card.
fn more_badge(expertise: &[&str]) -> Option<String> {
    match expertise.len() {
        0 | 1 => None,
        n => Some(format!("+{} more", n - 1)),
    }
}

#[component]
pub fn Team() -> impl IntoView {
    let active = RwSignal::new(Selection::<u32>::new());
    let close = move || active.update(Selection::clear);

    view! {
        <section id="team" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4 md:px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Meet Our Expert Team"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Passionate digital marketing professionals dedicated to your success"
                    </p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {TEAM.iter().map(|member| {
                        let id = member.id;
                        view! {
                            <div
                                class="bg-white rounded-xl shadow-md overflow-hidden transition-all duration-300 hover:shadow-xl cursor-pointer group"
                                on:click=move |_| active.update(|a| a.select(id))
                            >
                                <div class="relative overflow-hidden">
                                    <img
                                        src=member.image
                                        alt=member.name
                                        class="w-full h-72 object-cover object-center transition-transform duration-500 group-hover:scale-105"
                                    />
                                    <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end">
                                        <div class="p-4 w-full flex justify-center space-x-3">
                                            // Clicking a social link must not open the profile
                                            {member.social.links().into_iter().map(|(label, href)| view! {
                                                <a
                                                    href=href
                                                    class="bg-white/20 backdrop-blur-sm px-3 py-1 rounded-full hover:bg-white/40 transition-colors text-white text-sm"
                                                    on:click=|ev| ev.stop_propagation()
                                                >
                                                    {label}
                                                </a>
                                            }).collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                </div>
                                <div class="p-6">
                                    <h3 class="text-xl font-bold text-gray-900">{member.name}</h3>
                                    <p class="text-blue-600 font-medium">{member.role}</p>
                                    <div class="mt-4 flex flex-wrap gap-2">
                                        {member.expertise.first().map(|&skill| view! {
                                            <span class="text-xs font-medium bg-blue-50 text-blue-700 px-2 py-1 rounded-full">{skill}</span>
                                        })}
                                        {more_badge(member.expertise).map(|badge| view! {
                                            <span class="text-xs font-medium bg-gray-100 text-gray-700 px-2 py-1 rounded-full">{badge}</span>
                                        })}
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                // Profile overlay
                {move || {
                    let id = active.with(|a| a.get())?;
                    let member = TEAM.iter().find(|m| m.id == id)?;
                    Some(view! {
                        <div
                            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4"
                            on:click=move |_| close()
                        >
                            <div
                                class="relative bg-white rounded-xl max-w-2xl w-full overflow-hidden"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <div class="md:flex">
                                    <div class="md:w-2/5">
                                        <img src=member.image alt=member.name class="w-full h-full object-cover" />
                                    </div>
                                    <div class="md:w-3/5 p-6">
                                        <button
                                            class="absolute top-4 right-4 text-gray-500 hover:text-gray-700"
                                            aria-label="Close"
                                            on:click=move |_| close()
                                        >
                                            "✕"
                                        </button>
                                        <h3 class="text-2xl font-bold text-gray-900">{member.name}</h3>
                                        <p class="text-blue-600 font-medium mb-4">{member.role}</p>
                                        <p class="text-gray-700 mb-6">{member.bio}</p>
                                        <div class="mb-6">
                                            <h4 class="text-sm font-semibold text-gray-900 uppercase mb-2">"Expertise"</h4>
                                            <div class="flex flex-wrap gap-2">
                                                {member.expertise.iter().map(|&skill| view! {
                                                    <span class="text-sm bg-blue-50 text-blue-700 px-3 py-1 rounded-full">{skill}</span>
                                                }).collect::<Vec<_>>()}
                                            </div>
                                        </div>
                                        <div class="flex space-x-4">
                                            {member.social.links().into_iter().map(|(label, href)| view! {
                                                <a href=href class="text-gray-500 hover:text-blue-600 transition-colors">{label}</a>
                                            }).collect::<Vec<_>>()}
                                        </div>
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
    fn card_shows_first_tag_and_counts_the_rest() {
        assert_eq!(more_badge(&["a", "b", "c"]).as_deref(), Some("+2 more"));
        assert_eq!(more_badge(&["a"]), None);
        assert_eq!(more_badge(&[]), None);
    }

    #[test]
    fn email_links_use_mailto() {
        let social = Social {
            linkedin: None,
            twitter: Some("#"),
            email: Some("emma@pulsedigital.com"),
        };
        assert_eq!(
            social.links(),
            vec![
                ("Twitter", "#".to_string()),
                ("Email", "mailto:emma@pulsedigital.com".to_string()),
            ]
        );
    }
}
