use leptos::prelude::*;

use crate::{
    config::SITE_CONFIG,
    content::{Hero as HeroContent, SocialLink},
    sections,
};

use super::shared::PageSection;

#[component]
pub fn Hero(hero: &'static HeroContent) -> impl IntoView {
    view! {
        <PageSection id=sections::HOME class="min-h-screen flex items-center overflow-hidden">
            <div class="relative z-10 max-w-4xl w-full space-y-6 sm:space-y-8">
                <span class="hero-in inline-flex items-center rounded-full border border-muted/50 bg-brightBlack/50 px-3 py-1 text-sm">
                    <span class="w-2 h-2 rounded-full bg-green mr-2 animate-pulse" />
                    {hero.status.clone()}
                </span>
                <div class="hero-in space-y-3 sm:space-y-4" style="--reveal-delay: 0.2s">
                    <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold leading-tight">
                        "Hi, I'm " <span class="text-cyan">{hero.name.clone()}</span> "."
                    </h1>
                    <h2 class="text-xl sm:text-2xl md:text-3xl text-muted">
                        {hero.tagline.clone()}
                    </h2>
                </div>
                <p
                    class="hero-in text-base sm:text-lg text-muted max-w-2xl leading-relaxed"
                    style="--reveal-delay: 0.4s"
                >
                    {hero.summary.clone()}
                </p>
                <div class="flex flex-wrap items-center gap-4 sm:gap-6">
                    {hero
                        .socials
                        .iter()
                        .enumerate()
                        .map(|(i, link)| view! { <SocialButton link=link index=i /> })
                        .collect_view()}
                    <a
                        href=format!("#{}", sections::PROJECTS)
                        class="hero-in keycap keycap--cta"
                        style="--reveal-delay: 1.1s"
                    >
                        "Explore Projects"
                    </a>
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn SocialButton(link: &'static SocialLink, index: usize) -> impl IntoView {
    let external = link.is_external();
    let href = if external {
        link.href.clone()
    } else {
        SITE_CONFIG.asset_path(&link.href)
    };
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            download=link.download.then_some("")
            aria-label=link.label.clone()
            class="hero-in keycap keycap--icon"
            style=format!("--reveal-delay: {:.1}s", 0.7 + index as f64 * 0.1)
        >
            <i class=link.icon.clone() />
        </a>
    }
}
