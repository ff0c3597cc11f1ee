use leptos::prelude::*;

use super::data::SKILL_CATEGORIES;
use super::reveal_class;
use crate::reveal::use_reveal;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (section_ref, visible) = use_reveal(0.3);

    view! {
        <section node_ref=section_ref id="skills" class="py-16 px-8">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class("", "translate-y-8", visible.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                        "Technical Skills"
                    </h2>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            let delay = match index {
                                0 => "delay-200",
                                1 => "delay-400",
                                2 => "delay-600",
                                _ => "delay-800",
                            };
                            view! {
                                <div class=move || {
                                    reveal_class(delay, "translate-y-8", visible.get())
                                }>
                                    <div class="h-full p-4 rounded-lg border border-muted/30 bg-brightBlack/20">
                                        <div class="flex items-center gap-3 mb-4">
                                            <div class="p-2 bg-primary/10 rounded-md">
                                                <i class=category.icon></i>
                                            </div>
                                            <h3 class="text-lg font-semibold">{category.title}</h3>
                                        </div>
                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="text-xs px-2 py-1 rounded-md bg-brightBlack">
                                                            {*skill}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
