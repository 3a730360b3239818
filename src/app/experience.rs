use leptos::prelude::*;

use crate::{config::SITE_CONFIG, content::WorkItem, sections};

use super::shared::{AnimatedCard, BadgeStyle, PageSection, SectionHeader, TagList};

#[component]
pub fn WorkExperience(items: &'static [WorkItem]) -> impl IntoView {
    view! {
        <PageSection id=sections::EXPERIENCE>
            <SectionHeader
                title="Work Experience"
                subtitle="Internships and freelance work so far"
            />
            <div class="space-y-6 sm:space-y-8">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, work)| view! { <WorkCard work=work index=i /> })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn WorkCard(work: &'static WorkItem, index: usize) -> impl IntoView {
    view! {
        <AnimatedCard delay={index as f64 * 0.1} hover_scale=1.01 class="overflow-hidden">
            <div class="grid grid-cols-1 md:grid-cols-5">
                <div class="md:col-span-3 p-4 sm:p-6 space-y-3">
                    <div class="flex flex-wrap items-center gap-2">
                        <span class="badge">{work.kind.label()}</span>
                        <span class="text-xs text-muted">{work.duration.clone()}</span>
                    </div>
                    <h3 class="text-xl sm:text-2xl font-bold">{work.role.clone()}</h3>
                    <p class="text-cyan font-medium">{work.company.clone()}</p>
                    <p class="text-sm sm:text-base text-muted leading-relaxed">
                        {work.description.clone()}
                    </p>
                    <TagList tags=work.technologies.as_slice() variant=BadgeStyle::Outline />
                    {work
                        .copyright
                        .clone()
                        .map(|c| view! { <p class="text-xs text-muted/70 italic">{c}</p> })}
                </div>
                {work
                    .images
                    .first()
                    .map(|src| {
                        view! {
                            <div class="md:col-span-2 bg-brightBlack/40 overflow-hidden">
                                <img
                                    src=SITE_CONFIG.asset_path(src)
                                    alt=format!("{} preview", work.company)
                                    loading="lazy"
                                    class="w-full h-full object-cover"
                                />
                            </div>
                        }
                    })}
            </div>
        </AnimatedCard>
    }
}
