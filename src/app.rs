mod education;
mod experience;
mod hero;
mod highlights;
pub mod hooks;
mod navigation;
mod projects;
pub mod shared;
mod skills;

use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    config::BUILD_TIME,
    content::portfolio,
    reveal::{HashBus, ReplayScheduler},
};

use education::Education;
use experience::WorkExperience;
use hero::Hero;
use highlights::Highlights;
use hooks::{use_hash_relay, BrowserScheduler, ScrollSpy};
use navigation::Navigation;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content=BUILD_TIME />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let bus = HashBus::new();
    provide_context(bus.clone());
    provide_context(ScrollSpy::new());
    provide_context::<Arc<dyn ReplayScheduler>>(Arc::new(BrowserScheduler::default()));
    use_hash_relay(bus);

    let owner = portfolio()
        .map(|p| p.hero.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <main class="relative min-h-screen overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=IndexPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn IndexPage() -> impl IntoView {
    match portfolio() {
        Ok(p) => Either::Left(view! {
            <Title text="Portfolio" />
            <Hero hero=&p.hero />
            <Highlights bento=&p.bento />
            <WorkExperience items=p.experience.as_slice() />
            <Projects projects=&p.projects />
            <Skills categories=p.skills.as_slice() />
            <Education items=p.education.as_slice() />
            <Navigation />
            <footer class="pt-8 pb-28 text-center text-xs text-muted">
                {format!("© {}", p.hero.name)}
            </footer>
        }),
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center text-muted">"Portfolio content is unavailable."</p>
            })
        }
    }
}
