mod contact;
mod hero;
mod icon;
mod navigation;
mod projects;
mod reveal;
mod scroll;
mod skills;
mod toasts;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::notice::Notices;
use crate::portfolio::{build_year, portfolio, ContentError};

use contact::ContactSection;
use hero::HeroSection;
use navigation::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;
use toasts::Toaster;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RwSignal::new(Notices::new()));

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
            </Routes>
            <Toaster />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(site) => Either::Left(view! {
            <Title text=format!("{} - {}", site.owner.name, site.owner.tagline) />
            <Meta name="description" content=site.owner.tagline.clone() />
            <div class="min-h-screen">
                <Navigation brand=site.owner.brand.clone() contact=&site.contact />
                <main>
                    <HeroSection hero=&site.hero />
                    <SkillsSection skills=site.skills.as_slice() />
                    <ProjectsSection catalog=site.projects.as_slice() />
                    <ContactSection contact=&site.contact />
                </main>
                <Footer owner=site.owner.name.clone() />
            </div>
        }),
        Err(e) => {
            log::error!("portfolio content failed to load: {e}");
            Either::Right(view! { <ContentUnavailable err=e /> })
        }
    }
}

#[component]
fn ContentUnavailable(err: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="max-w-2xl mx-auto py-20 text-center">
            <h1 class="text-2xl font-bold mb-4">"This page couldn't be built"</h1>
            <pre class="whitespace-pre-wrap text-muted-foreground">{err.to_string()}</pre>
        </div>
    }
}

#[component]
fn Footer(owner: String) -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border">
            <div class="max-w-7xl mx-auto px-6 text-center">
                <p class="text-muted-foreground font-rajdhani">
                    {format!(
                        "© {} {}. Crafted with passion and modern technologies.",
                        build_year(),
                        owner,
                    )}
                </p>
            </div>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <div class="max-w-2xl mx-auto py-20 text-center">
            <h1 class="text-2xl font-bold mb-4">"Page not found."</h1>
            <a href="/" class="text-primary hover:underline">
                "Back to the portfolio"
            </a>
        </div>
    }
}
