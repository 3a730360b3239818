use leptos::prelude::*;

use crate::{content::SkillCategory, sections};

use super::shared::{AnimatedCard, CardTitle, PageSection, SectionHeader, TagList};

#[component]
pub fn Skills(categories: &'static [SkillCategory]) -> impl IntoView {
    view! {
        <PageSection id=sections::SKILLS>
            <SectionHeader title="Skills" subtitle="Languages, frameworks and tools I work with" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 sm:gap-6">
                {categories
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <AnimatedCard delay={i as f64 * 0.1} class="p-4 sm:p-6">
                                <CardTitle icon=category.icon.as_str() title=category.title.clone() />
                                <TagList tags=category.skills.as_slice() />
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

