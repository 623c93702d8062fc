use super::{
    hooks::{use_ledger, use_viewport},
    Route,
};
use crate::site::{
    content::{ExternalLink, NAV_LINKS, NAV_LOGO, NAV_TITLE},
    viewport::LogoSize,
};
use yew::prelude::*;
use yew_router::prelude::Link;

const SWORD_PATH: &str = "M48 0h4v12h-4zM44 0h4v4h-4zM40 0h4v4h-4zM36 4h4v4h-4zM32 8h4v4h-4zM28 12h4v4h-4zM24 16h4v4h-4zM20 20h4v4h-4zM16 24h4v4h-4zM44 12h4v4h-4zM40 16h4v4h-4zM36 20h4v4h-4zM32 24h4v4h-4zM28 28h4v4h-4zM24 32h4v4h-4zM4 24h4v12h-4zM8 28h8v8h-8zM8 36h16v8h-16zM0 44h28v4h-28zM0 48h8v4h-8z";

fn sword_icon(size: LogoSize) -> Html {
    html! {
        <svg
            class="nav-icon"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 52 65"
            width={size.width.to_string()}
            height={size.height.to_string()}
            aria-hidden="true"
        >
            <path d={SWORD_PATH} fill="currentColor" />
        </svg>
    }
}

fn nav_link(link: &ExternalLink, icon: Option<Html>) -> Html {
    html! {
        <a
            class="nav-link"
            href={link.href}
            target="_blank"
            rel="noopener noreferrer"
        >
            {icon}
            {link.label}
        </a>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let ledger = use_ledger();
    let viewport = use_viewport(&ledger);
    let menu_open = use_state_eq(|| false);
    let style = viewport.screen_size().layout_style();

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = |with_icon: bool| -> Html {
        NAV_LINKS
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let icon = (with_icon && index == 0).then(|| sword_icon(style.logo_size));
                nav_link(link, icon)
            })
            .collect()
    };

    html! {
        <nav class={classes!("navbar", style.header_padding)}>
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-brand">
                    <img src={NAV_LOGO} alt="logo" width="55" height="55" />
                    <h1 class="font-bold navbar-title">{NAV_TITLE}</h1>
                </Link<Route>>
                <div class="navbar-links">{links(true)}</div>
                <button
                    class="navbar-menu-toggle"
                    type="button"
                    aria-label="Toggle menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={on_toggle_menu}
                >
                    {"☰"}
                </button>
            </div>
            if *menu_open {
                <div class="navbar-menu">{links(false)}</div>
            }
        </nav>
    }
}
