use leptos::prelude::*;

use crate::{content::EducationItem, sections};

use super::shared::{AnimatedCard, BadgeStyle, PageSection, SectionHeader, TagList};

#[component]
pub fn Education(items: &'static [EducationItem]) -> impl IntoView {
    view! {
        <PageSection id=sections::EDUCATION>
            <SectionHeader title="Education" subtitle="Degrees and coursework" />
            <div class="space-y-6">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| view! { <EducationCard item=item index=i /> })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn EducationCard(item: &'static EducationItem, index: usize) -> impl IntoView {
    view! {
        <AnimatedCard delay={index as f64 * 0.15} hover_scale=1.01 class="p-4 sm:p-6 space-y-3">
            <div class="flex flex-wrap items-start justify-between gap-2">
                <div>
                    <h3 class="text-xl sm:text-2xl font-bold">{item.degree.clone()}</h3>
                    <p class="text-cyan">{item.field.clone()}</p>
                    <p class="text-sm text-muted">{item.institution.clone()}</p>
                </div>
                <div class="text-right text-sm text-muted">
                    <p>{item.duration.clone()}</p>
                    {item
                        .gpa
                        .clone()
                        .map(|gpa| view! { <p class="font-medium text-green">"GPA " {gpa}</p> })}
                </div>
            </div>
            <Show when=move || !item.achievements.is_empty()>
                <ul class="list-disc list-inside text-sm text-muted space-y-1">
                    {item
                        .achievements
                        .iter()
                        .map(|a| view! { <li>{a.clone()}</li> })
                        .collect_view()}
                </ul>
            </Show>
            <Show when=move || !item.courses.is_empty()>
                <div>
                    <h4 class="text-sm font-medium mb-2">"Relevant coursework"</h4>
                    <TagList tags=item.courses.as_slice() variant=BadgeStyle::Outline />
                </div>
            </Show>
        </AnimatedCard>
    }
}
