//! Root application component
//!
//! Provides the shared scroll feed, reveal coordinator and section registry
//! to every section and lays out the page.

use dioxus::prelude::*;

use crate::bridge::{SectionRegistry, SharedFeed, SharedReveal};
use crate::components::sections::{About, Contact, Footer, Hero, PracticeAreas, Team, Testimonials};
use crate::components::Navbar;
use crate::config::SiteConfig;
use crate::constants::*;

#[component]
pub fn App() -> Element {
    // Launchers hand the loaded config in as a root context; fall back to
    // defaults when rendered without one.
    let config = use_hook(|| try_consume_context::<SiteConfig>().unwrap_or_default());
    use_context_provider(|| config.clone());

    let feed = use_context_provider(SharedFeed::default);
    use_context_provider(SectionRegistry::default);

    let feed_eval = use_hook(|| document::eval(SCROLL_FEED_SCRIPT));
    let reveal_eval = use_hook(|| document::eval(REVEAL_OBSERVER_SCRIPT));
    let reveal = use_context_provider(|| SharedReveal::new(reveal_eval.clone()));

    use_future(move || {
        let feed = feed.clone();
        let eval = feed_eval.clone();
        async move {
            feed.pump(eval).await;
        }
    });

    use_future(move || {
        let reveal = reveal.clone();
        let eval = reveal_eval.clone();
        async move {
            reveal.pump(eval).await;
        }
    });

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html {{ scroll-behavior: smooth; }}
            html, body {{ margin: 0; padding: 0; background-color: {CREAM}; color: {NAVY_900}; }}
            body {{ font-family: {FONT_SANS}; -webkit-font-smoothing: antialiased; }}
            h1, h2, h3, h4 {{ font-family: {FONT_SERIF}; font-weight: 400; margin: 0; }}
            a {{ color: inherit; text-decoration: none; }}
            ::selection {{ background: {GOLD_500}; color: {NAVY_900}; }}

            .reveal {{ opacity: 0; transition: opacity 0.9s ease, transform 0.9s ease; }}
            .reveal-up {{ transform: translateY(40px); }}
            .reveal-left {{ transform: translateX(-40px); }}
            .reveal-right {{ transform: translateX(40px); }}
            .reveal-fade {{ transform: none; }}
            .reveal.is-visible {{ opacity: 1; transform: none; }}

            @keyframes fade-up {{
                from {{ opacity: 0; transform: translateY(30px); }}
                to {{ opacity: 1; transform: translateY(0); }}
            }}
            @keyframes fade-in {{
                from {{ opacity: 0; }}
                to {{ opacity: 1; }}
            }}
            .animate-fade-up {{ opacity: 0; animation: fade-up 1s ease forwards; }}
            .animate-fade-in {{ opacity: 0; animation: fade-in 1s ease forwards; }}
            @keyframes spin {{ to {{ transform: rotate(360deg); }} }}
            .spinner {{ display: inline-block; width: 1rem; height: 1rem; border: 2px solid currentColor; border-right-color: transparent; border-radius: 50%; animation: spin 0.8s linear infinite; }}

            .section-label {{ font-size: 0.75rem; letter-spacing: 0.3em; text-transform: uppercase; color: {GOLD_500}; }}
            .gold-rule {{ width: 3rem; height: 1px; background: {GOLD_500}; }}

            .btn-primary {{
                display: inline-block; padding: 1rem 2.5rem; border: 1px solid {GOLD_500};
                background: {GOLD_500}; color: {NAVY_900}; cursor: pointer;
                font-size: 0.8rem; letter-spacing: 0.2em; text-transform: uppercase;
                transition: background-color 0.4s ease, color 0.4s ease;
            }}
            .btn-primary:hover {{ background: transparent; color: {GOLD_500}; }}
            .btn-primary:disabled {{ opacity: 0.6; cursor: wait; }}
            .btn-outline-white {{
                display: inline-block; padding: 1rem 2.5rem; border: 1px solid rgba(255, 255, 255, 0.4);
                background: transparent; color: {WHITE}; cursor: pointer;
                font-size: 0.8rem; letter-spacing: 0.2em; text-transform: uppercase;
                transition: background-color 0.4s ease, color 0.4s ease;
            }}
            .btn-outline-white:hover {{ background: {WHITE}; color: {NAVY_900}; }}

            .nav-link {{ font-size: 0.8rem; letter-spacing: 0.15em; text-transform: uppercase; transition: color 0.3s ease; cursor: pointer; background: none; border: none; }}
            .nav-link:hover, .gold-hover:hover {{ color: {GOLD_500} !important; }}
            .nav-desktop {{ display: flex; }}
            .nav-toggle {{ display: none; }}
            .lift-card {{ transition: transform 0.5s ease, box-shadow 0.5s ease; }}
            .lift-card:hover {{ transform: translateY(-6px); box-shadow: 0 20px 40px rgba(13, 27, 42, 0.12); }}

            @media (max-width: 1023px) {{
                .nav-desktop {{ display: none; }}
                .nav-toggle {{ display: block; }}
                .stack-on-narrow {{ grid-template-columns: 1fr !important; }}
            }}
            "#
        }

        Navbar {}
        main {
            Hero {}
            About {}
            PracticeAreas {}
            Team {}
            Testimonials {}
            Contact {}
        }
        Footer {}
    }
}
