use leptos::{html, prelude::*};

use crate::{
    config::SITE_CONFIG,
    content::{Bento, Featured, Location, Stat, TagGroup},
    reveal::RootMargin,
    sections,
};

use super::{
    hooks::use_first_sight,
    shared::{AnimatedCard, BadgeStyle, CardTitle, PageSection, SectionHeader, TagList},
};

#[component]
pub fn Highlights(bento: &'static Bento) -> impl IntoView {
    view! {
        <PageSection id=sections::BENTO>
            <SectionHeader title=bento.title.clone() subtitle=bento.subtitle.clone() />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4 sm:gap-6 mb-4 sm:mb-6">
                <AnimatedCard delay=0.1 class="p-4 sm:p-6 flex flex-col">
                    <CardTitle icon="extra-location" title="Location" />
                    <LocationMap location=&bento.location />
                </AnimatedCard>
                <AnimatedCard delay=0.2 class="overflow-hidden flex flex-col">
                    <FeaturedWork featured=&bento.featured />
                </AnimatedCard>
                <AnimatedCard delay=0.3 class="p-4 sm:p-6 flex flex-col">
                    <StatCard stat=&bento.stat />
                </AnimatedCard>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4 sm:gap-6">
                <AnimatedCard delay=0.4 class="p-4 sm:p-6">
                    <CardTitle icon="extra-layers" title="Stack" />
                    <TagGroups groups=bento.stack.as_slice() variant=BadgeStyle::Filled />
                </AnimatedCard>
                <AnimatedCard delay=0.5 class="p-4 sm:p-6">
                    <CardTitle icon="extra-wrench" title="Toolbox" />
                    <TagGroups groups=bento.toolbox.as_slice() variant=BadgeStyle::Outline />
                </AnimatedCard>
            </div>
        </PageSection>
    }
}

/// The embed is only requested once the card has been on screen.
#[component]
fn LocationMap(location: &'static Location) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let seen = use_first_sight(node_ref, 0.1, RootMargin::new(50, 50));
    let (loaded, set_loaded) = signal(false);

    view! {
        <div
            node_ref=node_ref
            class="aspect-video bg-brightBlack/30 rounded-lg mb-3 overflow-hidden relative"
        >
            <Show when=move || !loaded.get()>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-xs text-muted">"Loading map..."</span>
                </div>
            </Show>
            <Show when=move || seen.get()>
                <iframe
                    src=location.map_embed.clone()
                    width="100%"
                    height="100%"
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    title=format!("{} map", location.label)
                    class="absolute inset-0 opacity-80 map-dark"
                    on:load=move |_| set_loaded.set(true)
                />
            </Show>
        </div>
        <p class="text-sm text-muted mt-auto">{location.label.clone()}</p>
    }
}

#[component]
fn FeaturedWork(featured: &'static Featured) -> impl IntoView {
    view! {
        <div class="relative aspect-video overflow-hidden">
            <img
                src=SITE_CONFIG.asset_path(&featured.image)
                alt=featured.title.clone()
                loading="lazy"
                class="w-full h-full object-cover"
            />
            <span class="badge absolute top-3 left-3">{featured.badge.clone()}</span>
        </div>
        <div class="p-4 sm:p-6 flex flex-col gap-2 flex-1">
            <h3 class="font-semibold text-lg">{featured.title.clone()}</h3>
            <p class="text-sm text-muted leading-relaxed">{featured.body.clone()}</p>
            <a href=featured.href.clone() class="mt-auto text-sm text-cyan hover:underline">
                "View project"
            </a>
        </div>
    }
}

#[component]
fn StatCard(stat: &'static Stat) -> impl IntoView {
    view! {
        <CardTitle icon="extra-keyboard" title=stat.title.clone() />
        <div class="flex items-baseline gap-2 my-auto">
            <span class="text-5xl sm:text-6xl font-bold text-cyan">{stat.value}</span>
            <span class="text-lg text-muted">{stat.unit.clone()}</span>
        </div>
        <div class="flex gap-3 text-xs text-muted mt-4">
            {stat.meta.iter().map(|m| view! { <span>{m.clone()}</span> }).collect_view()}
        </div>
    }
}

#[component]
fn TagGroups(groups: &'static [TagGroup], variant: BadgeStyle) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {groups
                .iter()
                .map(|group| {
                    view! {
                        <div>
                            <h4 class="text-sm font-medium text-muted mb-2">
                                {group.title.clone()}
                            </h4>
                            <TagList tags=group.tags.as_slice() variant=variant />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
