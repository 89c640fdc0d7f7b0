//! Fixed navigation bar with the hover dropdown and the mobile overlay.

use dioxus::core::Task;
use dioxus::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::bridge::SectionRegistry;
use crate::config::SiteConfig;
use crate::constants::*;
use crate::content::{DROPDOWN_LINKS, FIRM_NAME, PRIMARY_LINKS};
use crate::hooks::use_viewport_events;
use crate::motion::{NavController, NavState, SectionId, ViewportEvent};
use crate::platform;

/// Mirror the controller into the render signal, only when something changed.
fn publish(controller: &RefCell<NavController>, mut nav: Signal<NavState>) {
    let next = controller.borrow().state().clone();
    if *nav.peek() != next {
        nav.set(next);
    }
}

fn cancel(task: &Cell<Option<Task>>) {
    if let Some(task) = task.take() {
        task.cancel();
    }
}

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<SiteConfig>();
    let registry = use_context::<SectionRegistry>();
    let threshold = config.nav_scroll_threshold_px;
    let close_delay = config.dropdown_close_delay();
    let whatsapp = config.contact.whatsapp_url();

    let controller = use_hook(|| Rc::new(RefCell::new(NavController::new(threshold))));
    let close_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    let nav = use_signal(NavState::default);

    {
        let controller = controller.clone();
        use_viewport_events(move |event| {
            if let ViewportEvent::Scrolled(offset) = event {
                controller.borrow_mut().on_scroll(offset);
                publish(&controller, nav);
            }
        });
    }

    {
        let controller = controller.clone();
        let close_task = close_task.clone();
        use_drop(move || {
            controller.borrow_mut().teardown();
            cancel(&close_task);
        });
    }

    let navigate = {
        let controller = controller.clone();
        let close_task = close_task.clone();
        use_callback(move |section: SectionId| {
            let mut resolver = registry.clone();
            controller
                .borrow_mut()
                .scroll_to_section(section.anchor(), &mut resolver);
            cancel(&close_task);
            publish(&controller, nav);
        })
    };

    let on_dropdown_enter = {
        let controller = controller.clone();
        let close_task = close_task.clone();
        move |_| {
            controller.borrow_mut().pointer_enter();
            cancel(&close_task);
            publish(&controller, nav);
        }
    };

    let on_dropdown_leave = {
        let controller = controller.clone();
        let close_task = close_task.clone();
        move |_| {
            let handle = controller.borrow_mut().pointer_leave();
            publish(&controller, nav);
            let timer_controller = controller.clone();
            let task = spawn(async move {
                platform::sleep(close_delay).await;
                if timer_controller.borrow_mut().close_elapsed(handle) {
                    publish(&timer_controller, nav);
                }
            });
            if let Some(previous) = close_task.replace(Some(task)) {
                previous.cancel();
            }
        }
    };

    let on_toggle_menu = {
        let controller = controller.clone();
        move |_| {
            controller.borrow_mut().toggle_mobile_menu();
            publish(&controller, nav);
        }
    };

    let on_close_menu = {
        let controller = controller.clone();
        move |_| {
            controller.borrow_mut().close_mobile_menu();
            publish(&controller, nav);
        }
    };

    let state = nav();
    let (bar_bg, bar_padding) = if state.scrolled {
        ("rgba(255, 255, 255, 0.98)", "1.25rem 0")
    } else {
        ("transparent", "1.5rem 0")
    };
    let logo_color = if state.scrolled { NAVY_900 } else { WHITE };
    let tagline_color = if state.scrolled { TEXT_GRAY } else { "rgba(255, 255, 255, 0.6)" };
    let link_color = if state.scrolled { "#4b5563" } else { TEXT_ON_DARK };
    let (cta_border, cta_color) = if state.scrolled {
        (NAVY_900, NAVY_900)
    } else {
        ("rgba(255, 255, 255, 0.4)", WHITE)
    };
    let chevron_rotation = if state.dropdown_open { "180deg" } else { "0deg" };
    let (dropdown_opacity, dropdown_shift, dropdown_events) = if state.dropdown_open {
        ("1", "0", "auto")
    } else {
        ("0", "0.5rem", "none")
    };
    let bridge_display = if state.dropdown_open { "block" } else { "none" };
    let (overlay_opacity, overlay_events) = if state.mobile_menu_open {
        ("1", "auto")
    } else {
        ("0", "none")
    };
    let menu_open = state.mobile_menu_open;
    let (item_opacity, item_shift) = if menu_open { ("1", "0") } else { ("0", "20px") };
    let toggle_icon = if menu_open { "✕" } else { "☰" };
    let firm_tagline = FIRM_NAME.trim_start_matches("P & B - ");
    let divider_delay = PRIMARY_LINKS.len() as f64 * 0.08;

    rsx! {
        nav {
            style: "
                position: fixed; top: 0; left: 0; right: 0; z-index: 50;
                padding: {bar_padding}; background-color: {bar_bg};
                transition: all 0.5s ease;
            ",
            div {
                style: "max-width: {SECTION_MAX_WIDTH}; margin: 0 auto; padding: 0 2rem; display: flex; align-items: center; justify-content: space-between;",

                a {
                    href: "{SectionId::Hero.href()}",
                    style: "display: flex; align-items: center; font-family: {FONT_SERIF}; font-size: 1.25rem; letter-spacing: 0.05em; color: {logo_color}; transition: color 0.5s ease;",
                    onclick: move |e: MouseEvent| {
                        e.prevent_default();
                        navigate.call(SectionId::Hero);
                    },
                    span { "P" }
                    span { style: "margin: 0 0.25rem; color: {GOLD_500};", "&" }
                    span { style: "font-weight: 500;", "B" }
                    span {
                        style: "margin-left: 0.75rem; font-size: 1rem; letter-spacing: 0.2em; text-transform: uppercase; color: {tagline_color};",
                        "{firm_tagline}"
                    }
                }

                div {
                    class: "nav-desktop",
                    style: "align-items: center; gap: 2.5rem;",
                    for link in PRIMARY_LINKS {
                        a {
                            key: "{link.section}",
                            class: "nav-link",
                            href: "{link.section.href()}",
                            style: "color: {link_color};",
                            onclick: move |e: MouseEvent| {
                                e.prevent_default();
                                navigate.call(link.section);
                            },
                            "{link.label}"
                        }
                    }

                    div {
                        style: "position: relative;",
                        onmouseenter: on_dropdown_enter,
                        onmouseleave: on_dropdown_leave,
                        button {
                            class: "nav-link",
                            style: "display: flex; align-items: center; gap: 0.25rem; padding: 1rem 0; color: {link_color};",
                            "Mais"
                            span {
                                style: "display: inline-block; transition: transform 0.3s ease; transform: rotate({chevron_rotation});",
                                "▾"
                            }
                        }
                        // Keeps the pointer inside the hover area while crossing the gap.
                        div { style: "position: absolute; left: 0; right: 0; top: 100%; height: 1rem; display: {bridge_display};" }
                        div {
                            style: "
                                position: absolute; top: calc(100% + 4px); right: 0; width: 16rem; padding: 0.75rem 0;
                                background-color: {NAVY_900}; border: 1px solid rgba(201, 176, 55, 0.2);
                                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
                                opacity: {dropdown_opacity}; transform: translateY({dropdown_shift});
                                pointer-events: {dropdown_events}; transition: all 0.3s ease;
                            ",
                            for link in DROPDOWN_LINKS {
                                a {
                                    key: "{link.section}",
                                    class: "gold-hover",
                                    href: "{link.section.href()}",
                                    style: "display: block; padding: 1.25rem 2rem; font-size: 0.85rem; letter-spacing: 0.15em; font-weight: 500; text-transform: uppercase; color: rgba(255, 255, 255, 0.7);",
                                    onclick: move |e: MouseEvent| {
                                        e.prevent_default();
                                        navigate.call(link.section);
                                    },
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }

                a {
                    class: "nav-desktop",
                    href: "{whatsapp}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    style: "font-size: 0.85rem; font-weight: 500; letter-spacing: 0.2em; text-transform: uppercase; padding: 0.75rem 1.5rem; border: 1px solid {cta_border}; color: {cta_color}; transition: all 0.5s ease;",
                    "Fale Conosco"
                }

                button {
                    class: "nav-toggle",
                    aria_label: "Toggle menu",
                    style: "padding: 0.5rem; background: none; border: none; font-size: 1.5rem; cursor: pointer; color: {logo_color};",
                    onclick: on_toggle_menu,
                    "{toggle_icon}"
                }
            }
        }

        div {
            style: "position: fixed; inset: 0; z-index: 40; opacity: {overlay_opacity}; pointer-events: {overlay_events}; transition: all 0.5s ease;",
            div {
                style: "position: absolute; inset: 0; background-color: rgba(13, 27, 42, 0.98);",
                onclick: on_close_menu,
            }
            div {
                style: "position: relative; height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem;",
                for (index, link) in PRIMARY_LINKS.into_iter().enumerate() {
                    a {
                        key: "{link.section}",
                        class: "gold-hover",
                        href: "{link.section.href()}",
                        style: "font-family: {FONT_SERIF}; font-size: 1.25rem; color: {WHITE}; opacity: {item_opacity}; transform: translateY({item_shift}); transition: all 0.4s ease {index as f64 * 0.08}s;",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            navigate.call(link.section);
                        },
                        "{link.label}"
                    }
                }
                div {
                    style: "width: 2.5rem; height: 1px; margin: 0.5rem 0; background-color: rgba(201, 176, 55, 0.3); opacity: {item_opacity}; transition: all 0.4s ease {divider_delay}s;",
                }
                for (index, link) in DROPDOWN_LINKS.into_iter().enumerate() {
                    a {
                        key: "{link.section}",
                        class: "gold-hover",
                        href: "{link.section.href()}",
                        style: "font-family: {FONT_SERIF}; font-size: 1.125rem; color: rgba(255, 255, 255, 0.6); opacity: {item_opacity}; transform: translateY({item_shift}); transition: all 0.4s ease {(PRIMARY_LINKS.len() + 1 + index) as f64 * 0.08}s;",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            navigate.call(link.section);
                        },
                        "{link.label}"
                    }
                }
                a {
                    href: "{whatsapp}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    style: "margin-top: 2rem; font-size: 0.85rem; font-weight: 500; letter-spacing: 0.2em; text-transform: uppercase; padding: 1rem 2rem; border: 1px solid {GOLD_500}; color: {GOLD_500}; opacity: {item_opacity}; transition: all 0.4s ease 0.6s;",
                    "Fale Conosco"
                }
            }
        }
    }
}
