use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::navigation::{self, MenuAction, NavItem};

#[derive(Properties, PartialEq)]
pub struct SiteNavProps {
    /// Plain part of the logo, e.g. "Zineb".
    pub brand: AttrValue,
    /// Italic part of the logo, e.g. "Moudden".
    pub brand_accent: AttrValue,
    pub items: &'static [NavItem],
    pub cta_label: AttrValue,
    pub cta_section: &'static str,
}

#[function_component(SiteNav)]
pub fn site_nav(props: &SiteNavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| navigation::is_scrolled(navigation::window_scroll_y()));

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    is_scrolled.set(navigation::is_scrolled(navigation::window_scroll_y()));
                });

                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Could not listen to scroll: {:?}", e);
                }

                Box::new(move || {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not remove scroll listener: {:?}", e);
                    }
                })
            } else {
                warn!("No window, header stays in its initial style");
                Box::new(|| ())
            };
            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        let items = props.items;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *menu_open {
                debug!("Mobile menu closed");
            } else {
                debug!("Mobile menu opened with {:?}", navigation::menu_labels(items));
            }
            menu_open.set(navigation::menu_open_after(*menu_open, MenuAction::Toggle));
        })
    };

    // Scroll to a section and fold the mobile menu away.
    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: &'static str| {
            navigation::scroll_to_section(section);
            menu_open.set(navigation::menu_open_after(*menu_open, MenuAction::Choose));
        })
    };

    let link = |item: &NavItem, class: &'static str| {
        let go_to = go_to.clone();
        let section = item.section;
        html! {
            <button key={item.section} class={class} onclick={Callback::from(move |_: MouseEvent| go_to.emit(section))}>
                {item.label}
                <span class="nav-underline"></span>
            </button>
        }
    };

    let cta = |class: &'static str| {
        let go_to = go_to.clone();
        let section = props.cta_section;
        html! {
            <button class={class} onclick={Callback::from(move |_: MouseEvent| go_to.emit(section))}>
                {props.cta_label.clone()}
            </button>
        }
    };

    let on_logo = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit("hero"))
    };

    html! {
        <nav class={classes!("site-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo" onclick={on_logo}>
                    {props.brand.clone()}{" "}<span class="nav-logo-accent">{props.brand_accent.clone()}</span>
                </div>

                <div class="nav-links">
                    { for props.items.iter().map(|item| link(item, "nav-link")) }
                    { cta("nav-cta") }
                </div>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <Icon kind={if *menu_open { IconKind::X } else { IconKind::Menu }} size={24} />
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for navigation::menu_items(props.items, *menu_open).iter().map(|item| link(item, "mobile-link")) }
                            { cta("mobile-cta") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.25rem 0;
                    background: transparent;
                    transition: all 0.5s ease;
                    animation: navDrop 0.6s ease-out;
                }
                .site-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                @keyframes navDrop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-family: 'Cormorant Garamond', serif;
                    font-size: 1.875rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    cursor: pointer;
                    color: #000;
                    transition: transform 0.2s ease;
                }
                .nav-logo:hover {
                    transform: scale(1.05);
                }
                .nav-logo-accent {
                    font-style: italic;
                    font-weight: 500;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2.5rem;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    font-weight: 300;
                }
                .nav-link {
                    position: relative;
                    background: none;
                    border: none;
                    color: #000;
                    cursor: pointer;
                    font: inherit;
                    letter-spacing: inherit;
                    text-transform: inherit;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: var(--rose);
                }
                .nav-underline {
                    position: absolute;
                    bottom: -4px;
                    left: 0;
                    width: 0;
                    height: 1px;
                    background: var(--rose);
                    transition: width 0.3s ease;
                }
                .nav-link:hover .nav-underline {
                    width: 100%;
                }
                .nav-cta, .mobile-cta {
                    background: #000;
                    color: #fff;
                    border: none;
                    border-radius: 2px;
                    padding: 0.625rem 1.5rem;
                    cursor: pointer;
                    font: inherit;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    transition: all 0.3s ease;
                }
                .nav-cta:hover {
                    background: var(--rose);
                    color: #000;
                    transform: scale(1.05);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #000;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    background: #fff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    display: none;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 2rem 0;
                    animation: menuIn 0.3s ease-out;
                }
                .mobile-link {
                    background: none;
                    border: none;
                    font-family: 'Cormorant Garamond', serif;
                    font-size: 1.125rem;
                    letter-spacing: 0.025em;
                    color: #000;
                    cursor: pointer;
                }
                .mobile-link .nav-underline {
                    display: none;
                }
                .mobile-cta {
                    padding: 0.75rem 2rem;
                }
                @keyframes menuIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .mobile-menu {
                        display: flex;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
