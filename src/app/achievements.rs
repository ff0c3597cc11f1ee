use leptos::prelude::*;

use super::data::ACHIEVEMENTS;
use super::reveal_class;
use crate::reveal::use_reveal;

#[component]
pub fn AchievementsSection() -> impl IntoView {
    let (section_ref, visible) = use_reveal(0.3);

    view! {
        <section node_ref=section_ref id="achievements" class="py-16 px-8">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class("", "translate-y-8", visible.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                        "Achievements & Extra-Curricular"
                    </h2>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(index, achievement)| {
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
                                    <div class="h-full p-6 rounded-lg border border-muted/30 bg-brightBlack/20 text-center">
                                        <div class=format!(
                                            "inline-flex items-center justify-center w-16 h-16 rounded-full bg-gradient-to-r {} mb-4",
                                            achievement.accent,
                                        )>
                                            <i class=format!("{} text-white text-2xl", achievement.icon)></i>
                                        </div>

                                        <h3 class="font-semibold text-lg mb-2">{achievement.title}</h3>
                                        <p class="text-sm text-muted mb-4">{achievement.description}</p>

                                        <span class="text-xs px-2 py-1 rounded-md bg-brightBlack">
                                            {achievement.category}
                                        </span>
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
