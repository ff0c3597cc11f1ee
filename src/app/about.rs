use leptos::prelude::*;

use super::data::{HIGHLIGHTS, RESUME_PATH};
use super::reveal_class;
use crate::reveal::use_reveal;

#[component]
pub fn AboutSection() -> impl IntoView {
    let (section_ref, visible) = use_reveal(0.3);

    view! {
        <section node_ref=section_ref id="about" class="py-12 px-8 bg-card/30 min-h-[90vh]">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class("", "translate-y-8", visible.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"About Me"</h2>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class=move || reveal_class("delay-200", "-translate-x-8", visible.get())>
                        <div class="space-y-3 text-muted text-base">
                            <p>
                                "I'm a Computer Science undergraduate at Shiv Nadar University (Batch 2026), building impactful digital solutions."
                            </p>
                            <p>
                                "Skilled in the MERN stack and real-time systems, I create scalable, user-friendly applications."
                            </p>
                            <p>
                                "I focus on e-commerce platforms, live tracking apps, and robust web solutions."
                            </p>
                            <p>
                                "Beyond coding, I collaborate on university events and tech communities like GDSC."
                            </p>
                        </div>

                        <div class="mt-6">
                            <a
                                href=RESUME_PATH
                                download="Atishay_Jain.pdf"
                                class="inline-flex items-center gap-2 px-6 py-3 rounded-md bg-blue-800 hover:bg-blue-700 text-white transition-colors duration-200"
                            >
                                <i class="extra-download"></i>
                                "Download Resume"
                            </a>
                        </div>
                    </div>

                    <div class=move || reveal_class("delay-400", "translate-x-8", visible.get())>
                        <div class="grid sm:grid-cols-2 gap-4">
                            {HIGHLIGHTS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="p-6 rounded-lg border border-muted/30 bg-brightBlack/20 hover:bg-brightBlack/30 transition-colors duration-300">
                                            <div class="flex items-start gap-3">
                                                <div class="p-2 bg-primary/10 rounded-md">
                                                    <i class=item.icon></i>
                                                </div>
                                                <div>
                                                    <h3 class="font-semibold mb-1">{item.title}</h3>
                                                    <p class="text-sm text-muted">{item.description}</p>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
