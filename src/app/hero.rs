use leptos::prelude::*;

use super::{reveal_class, scroll_to_section};

/// Full-viewport intro. Unlike the scrolled sections, the hero is already
/// on screen at load, so it reveals from a mount effect instead of an
/// intersection watch.
#[component]
pub fn HeroSection() -> impl IntoView {
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| set_visible.set(true));

    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center pt-32 pb-12 px-8">
            <div class="max-w-4xl mx-auto text-center">
                <div class=move || reveal_class("", "translate-y-8", visible.get())>
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-4">
                        "Hi, I'm "
                        <span class="bg-gradient-to-r from-primary to-blue-400 bg-clip-text text-transparent">
                            "Atishay Jain"
                        </span>
                    </h1>
                </div>

                <div class=move || reveal_class("delay-200", "translate-y-8", visible.get())>
                    <p class="text-xl md:text-2xl text-muted mb-3">
                        "Developer. Problem-Solver. Builder of Things that Matter."
                    </p>
                </div>

                <div class=move || reveal_class("delay-400", "translate-y-8", visible.get())>
                    <p class="text-lg text-muted max-w-2xl mx-auto mb-8">
                        "I design and develop scalable web apps and real-time platforms that simplify workflows and create impact."
                    </p>
                </div>

                <div class=move || reveal_class("delay-600", "translate-y-8", visible.get())>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-8">
                        <button
                            class="text-base px-8 py-4 rounded-md bg-blue-800 hover:bg-blue-700 text-white transition-colors duration-200"
                            on:click=move |_| scroll_to_section("projects")
                        >
                            "Explore Projects"
                        </button>
                        <button
                            class="text-base px-8 py-4 rounded-md border border-muted/30 hover:border-muted transition-colors duration-200"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Contact Me"
                        </button>
                    </div>
                </div>

                <div class=move || reveal_class("delay-800", "translate-y-8", visible.get())>
                    <div class="flex justify-center gap-6 mb-8">
                        <a
                            href="mailto:aj722@snu.edu.in"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-2xl hover:text-primary"
                            aria-label="Email"
                        >
                            <i class="extra-mail"></i>
                        </a>
                        <a
                            href="https://www.linkedin.com/in/atishay08/"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-2xl hover:text-primary"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href="https://github.com/atishay08"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-2xl hover:text-primary"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                    </div>
                </div>

                <div class=move || reveal_class("delay-1000", "translate-y-8", visible.get())>
                    <button
                        class="animate-bounce text-2xl"
                        on:click=move |_| scroll_to_section("about")
                        aria-label="Scroll down"
                    >
                        <i class="extra-chevron-down"></i>
                    </button>
                </div>
            </div>
        </section>
    }
}
