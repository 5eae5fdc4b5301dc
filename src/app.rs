mod about;
mod contact;
mod content;
mod footer;
mod hero;
pub mod lifecycle;
mod navbar;
mod projects;
mod scroll;
mod services;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::HeroHeader;
use navbar::Navbar;
use projects::Projects;
use services::Services;
use skills::Skills;
use testimonials::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                // Icon font plus the reveal-on-scroll and carousel collaborators.
                // The page stays readable if any of these fail to load.
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                />
                <link rel="stylesheet" href="https://unpkg.com/aos@2.3.1/dist/aos.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.css"
                />
                <script src="https://unpkg.com/aos@2.3.1/dist/aos.js"></script>
                <script src="https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.js"></script>
                <MetaTags />
            </head>
            <body class="bg-white text-gray-800">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One-time setup of the third-party libraries once the page is live in
    // the browser
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        lifecycle::init_page_effects();
    });

    view! {
        // sets the document title
        <Title formatter=|title| format!("MySite - {title}") />

        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Renders the single page: every section stacked in document order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HeroHeader />
        <About />
        <Skills />
        <Services />
        <Projects />
        <Testimonials />
        <Contact />
    }
}
