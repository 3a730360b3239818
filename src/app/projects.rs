use leptos::{html, prelude::*};

use crate::{
    content::{Project, Projects as ProjectsContent},
    reveal::RootMargin,
    sections,
};

use super::{
    hooks::use_first_sight,
    shared::{AnimatedCard, PageSection, SectionHeader, TagList},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Personal,
    Academic,
}

impl Group {
    fn label(self) -> &'static str {
        match self {
            Group::Personal => "Personal Projects",
            Group::Academic => "Academic Projects",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Group::Personal => "extra-code",
            Group::Academic => "extra-graduation",
        }
    }
}

#[component]
pub fn Projects(projects: &'static ProjectsContent) -> impl IntoView {
    let personal_ref = NodeRef::<html::Div>::new();
    let academic_ref = NodeRef::<html::Div>::new();
    let (hovered, set_hovered) = signal(None::<Group>);
    // second group slides in once, when it has scrolled well into the viewport
    let academic_shown = use_first_sight(academic_ref, 0.0, RootMargin::new(-120, 0));

    let jump_to = move |group: Group| {
        let target = match group {
            Group::Personal => personal_ref,
            Group::Academic => academic_ref,
        };
        if let Some(el) = target.get_untracked() {
            el.scroll_into_view();
        }
    };

    view! {
        <PageSection id=sections::PROJECTS>
            <SectionHeader title="Projects" subtitle="Things I've built, for fun and for credit" />
            <div class="flex gap-2 mb-8" role="tablist">
                {[Group::Personal, Group::Academic]
                    .into_iter()
                    .map(|group| {
                        view! {
                            <button
                                role="tab"
                                class=move || {
                                    if hovered.get() == Some(group) {
                                        "tab is-hovered"
                                    } else {
                                        "tab"
                                    }
                                }
                                on:mouseenter=move |_| set_hovered.set(Some(group))
                                on:mouseleave=move |_| set_hovered.set(None)
                                on:click=move |_| jump_to(group)
                            >
                                <i class=group.icon() />
                                {group.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div node_ref=personal_ref class="scroll-mt-24">
                <ProjectGrid group=Group::Personal items=projects.personal.as_slice() />
            </div>
            <div
                node_ref=academic_ref
                class=move || {
                    if academic_shown.get() {
                        "project-group is-shown scroll-mt-24 mt-12"
                    } else {
                        "project-group scroll-mt-24 mt-12"
                    }
                }
            >
                <ProjectGrid group=Group::Academic items=projects.academic.as_slice() />
            </div>
        </PageSection>
    }
}

#[component]
fn ProjectGrid(group: Group, items: &'static [Project]) -> impl IntoView {
    view! {
        <h3 class="flex items-center gap-2 text-xl font-semibold mb-4">
            <i class=format!("{} text-cyan", group.icon()) />
            {group.label()}
        </h3>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 sm:gap-6">
            {items
                .iter()
                .enumerate()
                .map(|(i, project)| view! { <ProjectCard project=project index=i /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    view! {
        <AnimatedCard delay={index as f64 * 0.1} class="p-4 sm:p-6 flex flex-col gap-3">
            <div class="flex items-center justify-between gap-2 text-xs text-muted">
                <span>{project.course.clone()}</span>
                <span class="badge badge--outline">{project.year.clone()}</span>
            </div>
            <h4 class="text-lg font-bold leading-snug">{project.title.clone()}</h4>
            <p class="text-sm text-muted leading-relaxed flex-1">
                {project.description.clone()}
            </p>
            <TagList tags=project.technologies.as_slice() />
            <div class="flex gap-4 pt-2 text-sm">
                {project
                    .github_url
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="link">
                                <i class="extra-github" />
                                " Code"
                            </a>
                        }
                    })}
                {project
                    .demo_url
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="link">
                                <i class="extra-external" />
                                " Demo"
                            </a>
                        }
                    })}
            </div>
        </AnimatedCard>
    }
}
