use leptos::{html, prelude::*};

use crate::reveal::RevealOptions;

use super::hooks::{use_reveal, Reveal, ScrollSpy, SectionScope};

/// A navigable region of the page. Everything rendered inside it replays its
/// reveal animation when the location fragment targets `id`.
#[component]
pub fn PageSection(
    id: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    provide_context(SectionScope(id));
    let node_ref = NodeRef::<html::Div>::new();
    let Reveal { visible, epoch } = use_reveal(node_ref, RevealOptions::section());

    let spy = use_context::<ScrollSpy>();
    Effect::new(move |_| {
        if let (true, Some(spy)) = (visible.get(), spy) {
            spy.mark(id);
        }
    });

    view! {
        <section
            id=id
            class=format!("relative px-4 sm:px-6 lg:px-8 py-12 sm:py-20 {class}")
        >
            <div node_ref=node_ref class="max-w-7xl mx-auto">
                {move || {
                    let epoch = epoch.get();
                    view! {
                        <div
                            class=move || {
                                if visible.get() { "section-rule is-visible" } else { "section-rule" }
                            }
                            data-epoch=epoch.to_string()
                        />
                    }
                }}
                {children()}
            </div>
        </section>
    }
}

/// Card that fades up on entry. The inner subtree is rebuilt on every replay so
/// CSS animations start from their first keyframe.
#[component]
pub fn AnimatedCard(
    #[prop(optional)] delay: f64,
    #[prop(default = 1.02)] hover_scale: f64,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let Reveal { visible, epoch } = use_reveal(node_ref, RevealOptions::card());
    let style = format!("--reveal-delay: {delay}s; --hover-scale: {hover_scale};");

    view! {
        <div node_ref=node_ref class="h-full">
            {move || {
                let epoch = epoch.get();
                let class = format!(
                    "reveal-card h-full rounded-xl border border-muted/40 bg-brightBlack/30 backdrop-blur-sm {class}",
                );
                view! {
                    <div
                        class=move || {
                            if visible.get() { format!("{class} is-visible") } else { class.clone() }
                        }
                        style=style.clone()
                        data-epoch=epoch.to_string()
                    >
                        {children()}
                    </div>
                }
            }}
        </div>
    }
}

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let Reveal { visible, epoch } = use_reveal(node_ref, RevealOptions::header());

    view! {
        <div node_ref=node_ref class=format!("mb-8 md:mb-12 {class}")>
            {move || {
                let epoch = epoch.get();
                let title = title.clone();
                let subtitle = subtitle.clone();
                view! {
                    <div
                        class=move || {
                            if visible.get() { "reveal-rise is-visible" } else { "reveal-rise" }
                        }
                        data-epoch=epoch.to_string()
                    >
                        <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-2 md:mb-3">
                            {title}
                        </h2>
                        {subtitle
                            .map(|s| {
                                view! {
                                    <p class="text-base md:text-lg text-muted max-w-2xl">{s}</p>
                                }
                            })}
                    </div>
                }
            }}
        </div>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    #[default]
    Filled,
    Outline,
}

#[component]
pub fn TagList(
    tags: &'static [String],
    #[prop(optional)] variant: BadgeStyle,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let badge = match variant {
        BadgeStyle::Filled => "badge",
        BadgeStyle::Outline => "badge badge--outline",
    };
    view! {
        <div class=format!("flex flex-wrap gap-1.5 sm:gap-2 {class}")>
            {tags.iter().map(|tag| view! { <span class=badge>{tag.clone()}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn CardTitle(icon: &'static str, #[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 mb-3">
            <i class=format!("{icon} text-cyan") />
            <h3 class="font-semibold text-base sm:text-lg">{title}</h3>
        </div>
    }
}
