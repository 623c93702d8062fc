use super::{
    hooks::{use_ledger, use_page_metadata, use_progress, use_view_ledger, use_viewport},
    navbar::Navbar,
    widgets::{Accordion, Bubble, BubbleDirection, Card, Popup, ProgressBar},
    Route,
};
use crate::site::{
    content::{
        BubbleCopy, CARD_BODY, CARD_IMAGE, CARD_TITLE, COMPACT_BUBBLES, COMPACT_PROGRESS_CAPTION,
        DECOR_POPUP, DECOR_POPUP_BUTTON, DESKTOP_BUBBLES, DESKTOP_PROGRESS_CAPTION, HERO_TAGLINE_EMPHASIS,
        HERO_TAGLINE_LEAD, HERO_TITLE_LINES, HOME_FAQ, WELCOME_BUTTON, WELCOME_POPUP,
    },
    lifecycle::ResourceLedger,
    metadata::Page,
    viewport::{desktop_transform, BackgroundPlacements, LayoutStyle, ScreenSize, ViewportState},
};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[function_component(Home)]
pub fn home() -> Html {
    let ledger = use_view_ledger("home");

    html! {
        <ContextProvider<ResourceLedger> context={ledger}>
            <HomeView />
        </ContextProvider<ResourceLedger>>
    }
}

fn code_card(class: &'static str, style: String, title_class: &'static str) -> Html {
    html! {
        <Card class={classes!("decor", "decor-card", class)} style={AttrValue::from(style)}>
            <img src={CARD_IMAGE} alt="Mew" />
            <div class="decor-card-copy">
                <h1 class={classes!("font-bold", title_class)}>{CARD_TITLE}</h1>
                <p>{CARD_BODY}</p>
            </div>
        </Card>
    }
}

fn progress_panel(class: &'static str, style: String, caption: &'static str, progress: u8) -> Html {
    html! {
        <div class={classes!("decor", "decor-progress", class)} style={style}>
            <p class="text-center">{caption}</p>
            <ProgressBar value={progress} />
            <p class="text-right">{format!("{progress}%")}</p>
        </div>
    }
}

fn bubbles(copy: BubbleCopy, left_style: String, right_style: String, class: &'static str) -> Html {
    html! {
        <>
            <div class={classes!("decor", "decor-bubble", class, "bubble-left-slot")} style={left_style}>
                <Bubble direction={BubbleDirection::Left} text={copy.left} />
            </div>
            <div class={classes!("decor", "decor-bubble", class, "bubble-right-slot")} style={right_style}>
                <Bubble direction={BubbleDirection::Right} text={copy.right} />
            </div>
        </>
    }
}

fn desktop_decorations(width: i32, progress: u8, on_open_popup: Callback<MouseEvent>, popup: Html) -> Html {
    html! {
        <>
            {code_card("desktop-card", desktop_transform(-15, width), "text-2xl")}
            <div class="decor decor-popup desktop-popup" style={desktop_transform(15, width)}>
                <button class="pixel-button" type="button" onclick={on_open_popup}>{DECOR_POPUP_BUTTON}</button>
                {popup}
            </div>
            <div class="decor decor-accordion desktop-accordion" style={desktop_transform(10, width)}>
                <Accordion items={HOME_FAQ} />
            </div>
            {progress_panel("desktop-progress", desktop_transform(-15, width), DESKTOP_PROGRESS_CAPTION, progress)}
            {bubbles(
                DESKTOP_BUBBLES,
                desktop_transform(10, width),
                desktop_transform(-10, width),
                "desktop-bubble",
            )}
        </>
    }
}

fn compact_decorations(table: &BackgroundPlacements, style: &LayoutStyle, progress: u8) -> Html {
    html! {
        <>
            {code_card("compact-card", table.card.css("40%"), "text-2xl")}
            <div class="decor decor-form" style={table.form.css("40%")}>
                <input class="pixel-input" placeholder="Enter Name" />
                <textarea class="pixel-textarea" placeholder="Type something..."></textarea>
                <div class="decor-form-actions">
                    <button class={classes!("pixel-button", style.button_size)} type="button">{"Submit Form"}</button>
                    <button class={classes!("pixel-button", "pixel-button-accent", style.button_size)} type="button">{"Cancel"}</button>
                </div>
            </div>
            <div class="decor decor-accordion" style={table.accordion.css("50%")}>
                <Accordion items={HOME_FAQ} />
            </div>
            {progress_panel("compact-progress", table.progress_bar.css("50%"), COMPACT_PROGRESS_CAPTION, progress)}
            {bubbles(
                COMPACT_BUBBLES,
                table.bubble_left.css("auto"),
                table.bubble_right.css("auto"),
                "compact-bubble",
            )}
        </>
    }
}

#[function_component(HomeView)]
fn home_view() -> Html {
    use_page_metadata(Page::Home);

    let ledger = use_ledger();
    let viewport: ViewportState = use_viewport(&ledger);
    let progress = use_progress(&ledger);
    let popup_open = use_state_eq(|| false);
    let navigator = use_navigator();

    let screen_size = viewport.screen_size();
    let style = screen_size.layout_style();

    let on_open_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: MouseEvent| popup_open.set(true))
    };
    let on_close_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: ()| popup_open.set(false))
    };
    let on_explore = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Guide);
        }
    });

    let decorations = match (screen_size, screen_size.background_placements()) {
        (ScreenSize::Mobile, _) => html! {},
        (_, Some(table)) => compact_decorations(table, style, progress),
        (_, None) => desktop_decorations(
            viewport.width(),
            progress,
            on_open_popup.clone(),
            html! {
                <Popup open={*popup_open} on_close={on_close_popup.clone()} class="popup-accent">
                    {DECOR_POPUP}
                </Popup>
            },
        ),
    };

    html! {
        <div class="home">
            <Navbar />
            <main class={classes!("home-main", style.main_padding)}>
                <div class="text-center">
                    <div class="hero">
                        <img src="/sparkle.png" class="sparkle sparkle-top" alt="sparkle" width="80" height="80" />
                        <img src="/sparkle.png" class="sparkle sparkle-bottom" alt="sparkle" width="80" height="80" />
                        <h1 class={classes!("hero-title", "font-bold", style.title_size)}>
                            {HERO_TITLE_LINES[0]}<br />{HERO_TITLE_LINES[1]}
                        </h1>
                        <p class={classes!("hero-tagline", style.subtitle_size)}>
                            {HERO_TAGLINE_LEAD}
                            <span class="font-bold">{HERO_TAGLINE_EMPHASIS}</span>
                        </p>
                    </div>
                    <div class="hero-actions">
                        <div>
                            <button class="pixel-button" type="button" onclick={on_open_popup}>{WELCOME_BUTTON}</button>
                            <Popup open={*popup_open} on_close={on_close_popup}>
                                {WELCOME_POPUP}
                            </Popup>
                        </div>
                        <button class="pixel-button pixel-button-accent" type="button" onclick={on_explore}>
                            {"Explore guide"}
                        </button>
                    </div>
                </div>
            </main>
            <div class={classes!("decorations", screen_size.as_str())}>
                {decorations}
            </div>
        </div>
    }
}
