use leptos::prelude::*;

/// Blog post metadata
struct BlogPost {
    id: u32,
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    image: &'static str,
    date: &'static str,
    read_time: &'static str,
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "10 SEO Strategies That Will Boost Your Rankings in 2025",
        excerpt: "Discover the latest SEO techniques that are driving results in the ever-changing search landscape.",
        category: "SEO",
        image: "https://images.pexels.com/photos/1591060/pexels-photo-1591060.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        date: "May 15, 2025",
        read_time: "8 min read",
    },
    BlogPost {
        id: 2,
        title: "How to Build a Content Strategy That Converts",
        excerpt: "Learn how to create content that not only attracts visitors but turns them into customers.",
        category: "Content Marketing",
        image: "https://images.pexels.com/photos/6476254/pexels-photo-6476254.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        date: "May 3, 2025",
        read_time: "6 min read",
    },
    BlogPost {
        id: 3,
        title: "The Ultimate Guide to Social Media Advertising in 2025",
        excerpt: "Stay ahead of the curve with the latest social media advertising trends and best practices.",
        category: "Social Media",
        image: "https://images.pexels.com/photos/5313130/pexels-photo-5313130.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        date: "April 28, 2025",
        read_time: "10 min read",
    },
];

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section id="blog" class="py-20 bg-white">
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-12">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Latest from Our Blog"</h2>
                        <p class="text-xl text-gray-600 max-w-2xl">
                            "Insights, strategies, and industry trends to keep you informed"
                        </p>
                    </div>
                    <a href="#blog" class="mt-4 md:mt-0 text-blue-600 hover:text-blue-800 font-medium flex items-center transition-colors">
                        "View all articles"<span class="ml-1">"›"</span>
                    </a>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {POSTS.iter().map(|post| {
                        view! {
                            <article class="bg-white rounded-xl overflow-hidden shadow-md hover:shadow-xl transition-shadow duration-300">
                                <a href=format!("#blog-post-{}", post.id) class="block">
                                    <div class="relative h-48 overflow-hidden">
                                        <img
                                            src=post.image
                                            alt=post.title
                                            class="w-full h-full object-cover transition-transform duration-500 hover:scale-105"
                                        />
                                        <div class="absolute top-0 left-0 m-4">
                                            <span class="bg-blue-600 text-white text-xs font-semibold px-3 py-1 rounded-full">
                                                {post.category}
                                            </span>
                                        </div>
                                    </div>
                                    <div class="p-6">
                                        <div class="flex items-center text-sm text-gray-500 mb-3">
                                            <span class="mr-4">{post.date}</span>
                                            <span>{post.read_time}</span>
                                        </div>
                                        <h3 class="text-xl font-bold text-gray-900 mb-3">{post.title}</h3>
                                        <p class="text-gray-600 mb-4">{post.excerpt}</p>
                                        <span class="text-blue-600 font-medium hover:text-blue-800 transition-colors">
                                            "Read more →"
                                        </span>
                                    </div>
                                </a>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="mt-12 text-center">
                    <a
                        href="#subscribe"
                        class="inline-flex items-center bg-gray-900 hover:bg-black text-white px-6 py-3 rounded-md font-medium transition-colors duration-300"
                    >
                        "Subscribe to Our Newsletter"
                        <span class="ml-2">"↓"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
