use leptos::{html, prelude::*};

use super::{reveal::use_reveal, use_content, SectionBadge};
use crate::content::Skill;
use crate::nav::Section;
use crate::reveal::{reveal_class, Slide, SECTION_THRESHOLD};
use crate::skills::{bar_delay, card_delay_ms, categories, filter_skills, BarAnimation, ALL_CATEGORY};

#[component]
pub fn Skills() -> impl IntoView {
    let content = use_content();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, SECTION_THRESHOLD);
    let (active, set_active) = signal(ALL_CATEGORY.to_string());
    let bars = RwSignal::new(BarAnimation::default());

    // Refill the bars one by one whenever the section is shown or the category changes.
    Effect::new(move |_| {
        if !visible.get() {
            return;
        }
        let category = active.get();
        let Some(generation) = bars.try_update(BarAnimation::restart) else {
            return;
        };
        for (i, skill) in filter_skills(&content.skills, &category).into_iter().enumerate() {
            set_timeout(
                move || {
                    bars.try_update(|b| b.fill(generation, &skill.name));
                },
                bar_delay(i),
            );
        }
    });

    view! {
        <section node_ref=section_ref id=Section::Skills.id() class="relative py-24 md:py-32 overflow-hidden">
            <div class="absolute inset-0 bg-hollow-dark" />
            <div class="absolute top-1/4 left-0 w-64 h-64 bg-hollow-gold/5 rounded-full blur-3xl" />
            <div class="absolute bottom-1/4 right-0 w-64 h-64 bg-hollow-blue-light/5 rounded-full blur-3xl" />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class=move || {
                    reveal_class("text-center mb-12 transition-all duration-1000", Slide::Up, visible.get())
                }>
                    <SectionBadge label="Habilidades" />
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-cinzel font-bold text-hollow-white mb-4">
                        "Amuletos de " <span class="gradient-text">"Poder"</span>
                    </h2>
                    <p class="text-hollow-blue-accent/70 max-w-2xl mx-auto">
                        "Cada habilidad es un amuleto que he recolectado en mi viaje, otorgándome el poder de enfrentar cualquier desafío."
                    </p>
                </div>

                <div class=move || {
                    reveal_class(
                        "flex flex-wrap justify-center gap-2 mb-12 transition-all duration-1000 delay-200",
                        Slide::Up,
                        visible.get(),
                    )
                }>
                    {categories(&content.skills)
                        .into_iter()
                        .map(|category| {
                            let is_active = Memo::new({
                                let category = category.clone();
                                move |_| active.with(|a| *a == category)
                            });
                            let pick = category.clone();
                            view! {
                                <button
                                    aria-pressed=move || is_active.get().to_string()
                                    class=move || {
                                        if is_active.get() {
                                            "px-4 py-2 rounded-full text-sm font-cinzel transition-all duration-300 bg-hollow-gold/20 border border-hollow-gold text-hollow-gold"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-cinzel transition-all duration-300 bg-hollow-blue/50 border border-hollow-gold/20 text-hollow-blue-accent/70 hover:border-hollow-gold/50 hover:text-hollow-gold/70"
                                        }
                                    }
                                    on:click=move |_| set_active.set(pick.clone())
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    {move || {
                        filter_skills(&content.skills, &active.get())
                            .into_iter()
                            .enumerate()
                            .map(|(index, skill)| view! { <SkillCard index skill bars visible /> })
                            .collect_view()
                    }}
                </div>

                <div class=move || {
                    reveal_class(
                        "mt-16 grid grid-cols-2 md:grid-cols-4 gap-6 transition-all duration-1000 delay-500",
                        Slide::Up,
                        visible.get(),
                    )
                }>
                    {content
                        .site
                        .skill_stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center p-6 rounded-xl bg-hollow-blue/30 border border-hollow-gold/10 hover:border-hollow-gold/30 transition-all duration-300">
                                    <div class="text-3xl md:text-4xl font-cinzel font-bold gradient-text mb-2">
                                        {stat.value.as_str()}
                                    </div>
                                    <div class="text-sm text-hollow-blue-accent/60">{stat.label.as_str()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    index: usize,
    skill: &'static Skill,
    bars: RwSignal<BarAnimation>,
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            style=format!("transition-delay: {}ms", card_delay_ms(index))
            class=move || {
                reveal_class(
                    "group relative bg-hollow-blue/40 backdrop-blur-sm border border-hollow-gold/10 rounded-lg p-5 hover:border-hollow-gold/40 hover:bg-hollow-blue/60 transition-all duration-500",
                    Slide::Up,
                    visible.get(),
                )
            }
        >
            <div class="flex items-center gap-4">
                <div class="w-10 h-10 rounded-lg bg-hollow-dark/70 border border-hollow-gold/20 flex items-center justify-center group-hover:border-hollow-gold/50 group-hover:bg-hollow-gold/10 transition-all duration-300">
                    <i class=format!(
                        "{} text-lg text-hollow-gold/70 group-hover:text-hollow-gold transition-colors",
                        skill.icon,
                    ) />
                </div>

                <div class="flex-1">
                    <div class="flex justify-between items-center mb-2">
                        <span class="text-hollow-white font-medium">{skill.name.as_str()}</span>
                        <span class="text-hollow-gold text-sm font-cinzel">{format!("{}%", skill.level)}</span>
                    </div>
                    <div
                        class="h-1.5 bg-hollow-dark rounded-full overflow-hidden"
                        role="progressbar"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuenow=skill.level.to_string()
                        aria-label=skill.name.as_str()
                    >
                        <div
                            class="h-full bg-gradient-to-r from-hollow-gold to-hollow-gold-light rounded-full transition-all duration-1000 ease-out"
                            style=move || format!("width: {}", bars.with(|b| b.width(skill)))
                        />
                    </div>
                </div>
            </div>

            <div class="absolute inset-0 rounded-lg bg-gradient-to-r from-hollow-gold/0 via-hollow-gold/5 to-hollow-gold/0 opacity-0 group-hover:opacity-100 transition-opacity duration-500" />
        </div>
    }
}
