//! Full-height hero with the scroll-driven parallax background.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::config::SiteConfig;
use crate::constants::*;
use crate::content::{FIRM_NAME, HERO_STATS};
use crate::hooks::{use_section_anchor, use_viewport_events};
use crate::motion::{AnchorResolver, ParallaxController, ParallaxFrame, SectionId, ViewportEvent};

/// Measure the hero, store its height as the parallax reference and
/// return the frame for the latest offset.
async fn measure(
    element: Rc<MountedData>,
    parallax: Rc<RefCell<ParallaxController>>,
) -> Option<ParallaxFrame> {
    match element.get_client_rect().await {
        Ok(rect) => {
            let height = rect.size.height;
            debug!(height, "hero reference height captured");
            parallax.borrow_mut().capture_reference(height)
        }
        Err(err) => {
            debug!("hero measurement failed: {err:?}");
            None
        }
    }
}

/// Push a frame into the render signal when it differs.
fn show(mut frame: Signal<ParallaxFrame>, next: Option<ParallaxFrame>) {
    if let Some(next) = next {
        if *frame.peek() != next {
            frame.set(next);
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();
    let registry = use_section_anchor(SectionId::Hero);

    let parallax = use_hook(|| Rc::new(RefCell::new(ParallaxController::new())));
    let frame = use_signal(ParallaxFrame::rest);
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    let mut resize_tick = use_signal(|| 0_u64);

    {
        let parallax = parallax.clone();
        use_viewport_events(move |event| match event {
            ViewportEvent::Scrolled(offset) => show(frame, parallax.borrow_mut().on_scroll(offset)),
            ViewportEvent::Resized => resize_tick += 1,
        });
    }

    // Re-measure on mount and after every viewport resize.
    {
        let parallax = parallax.clone();
        use_effect(move || {
            let _ = resize_tick();
            let Some(element) = mounted() else {
                return;
            };
            let parallax = parallax.clone();
            spawn(async move {
                show(frame, measure(element, parallax).await);
            });
        });
    }

    {
        let parallax = parallax.clone();
        use_drop(move || parallax.borrow_mut().detach());
    }

    let scroll_to = {
        let registry = registry.clone();
        move |section: SectionId| {
            let mut resolver = registry.clone();
            resolver.scroll_into_view(section);
        }
    };
    let to_practice_areas = scroll_to.clone();
    let to_about = scroll_to;

    let current = frame();
    let background_style = current.background_style();
    let content_style = current.content_style();
    let hero_image = config.asset_url("hero-bg.jpg");
    let whatsapp = config.contact.whatsapp_url();

    rsx! {
        section {
            id: "{SectionId::Hero.anchor()}",
            style: "position: relative; min-height: 100vh; display: flex; align-items: center; overflow: hidden; background-color: {NAVY_900};",
            onmounted: move |e| {
                let element = e.data();
                registry.attach(SectionId::Hero, element.clone());
                mounted.set(Some(element));
            },

            div {
                style: "position: absolute; inset: 0; transition: transform 0.1s linear; {background_style}",
                img {
                    src: "{hero_image}",
                    alt: "Escritório de Advocacia",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                div { style: "position: absolute; inset: 0; background: linear-gradient(to right, rgba(13, 27, 42, 0.95), rgba(13, 27, 42, 0.8), transparent);" }
                div { style: "position: absolute; inset: 0; background: linear-gradient(to top, rgba(13, 27, 42, 0.9), transparent, rgba(13, 27, 42, 0.6));" }
            }

            div {
                style: "position: relative; z-index: 10; width: 100%; max-width: {SECTION_MAX_WIDTH}; margin: 0 auto; padding: 8rem 2rem; {content_style}",
                div {
                    style: "max-width: 48rem;",
                    div {
                        class: "animate-fade-up",
                        style: "display: flex; align-items: center; gap: 1rem; margin-bottom: 2rem;",
                        div { class: "gold-rule" }
                        span { class: "section-label", style: "color: {TEXT_ON_DARK}; font-size: 1.125rem;", "{FIRM_NAME}" }
                    }

                    h1 {
                        class: "animate-fade-up",
                        style: "color: {WHITE}; margin-bottom: 2rem; font-size: 3.5rem; line-height: 1.1; animation-delay: 100ms;",
                        span { style: "display: block; font-weight: 300; font-style: italic; color: {GOLD_400};", "Excelência Jurídica" }
                        span { style: "display: block; margin-top: 1rem;", "na Resolução de Causas" }
                    }

                    p {
                        class: "animate-fade-up",
                        style: "color: {TEXT_ON_DARK}; font-size: 1.25rem; line-height: 1.7; max-width: 42rem; margin: 0 0 2.5rem; animation-delay: 200ms;",
                        "Atuamos com foco exclusivo nas áreas "
                        span { style: "color: {GOLD_400}; font-weight: 500;", "Cível, Trabalhista e Criminal" }
                        ". Nossa equipe especializada garante a melhor estratégia para cada caso, com resultados comprovados e total comprometimento com seus direitos."
                    }

                    div {
                        class: "animate-fade-up",
                        style: "display: flex; flex-wrap: wrap; gap: 1rem; animation-delay: 300ms;",
                        a {
                            class: "btn-primary",
                            href: "{whatsapp}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Consulta Inicial"
                        }
                        button {
                            class: "btn-outline-white",
                            onclick: move |_| to_practice_areas(SectionId::PracticeAreas),
                            "Áreas de Atuação"
                        }
                    }

                    div {
                        class: "animate-fade-up",
                        style: "display: flex; gap: 4rem; margin-top: 4rem; padding-top: 2.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); animation-delay: 400ms;",
                        for stat in HERO_STATS {
                            div {
                                key: "{stat.label}",
                                div { style: "font-family: {FONT_SERIF}; font-size: 2.25rem; color: {GOLD_400};", "{stat.value}" }
                                div { style: "color: {TEXT_ON_DARK_MUTED}; font-size: 0.875rem; letter-spacing: 0.2em; text-transform: uppercase; margin-top: 0.5rem;", "{stat.label}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "animate-fade-in",
                style: "position: absolute; bottom: 2.5rem; left: 50%; transform: translateX(-50%); z-index: 10; animation-delay: 500ms;",
                button {
                    class: "gold-hover",
                    aria_label: "Rolar para O Escritório",
                    style: "background: none; border: none; cursor: pointer; font-size: 1.25rem; color: rgba(255, 255, 255, 0.4); transition: color 0.5s ease;",
                    onclick: move |_| to_about(SectionId::About),
                    "↓"
                }
            }
        }
    }
}
