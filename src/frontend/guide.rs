use super::{
    hooks::{scroll_to_section, use_active_section, use_ledger, use_page_metadata, use_view_ledger},
    navbar::Navbar,
    widgets::{Card, CopyableCode},
    Route,
};
use crate::site::{
    accordion::{chevron_rotation, panel_style, OpenItem},
    content::{
        Tip, TipBlock, CLEAN_CODE_TIPS, CORE_PRINCIPLES, GUIDE_INTRO, GUIDE_INTRO_TITLE,
        GUIDE_SIGN_OFF, NEXT_STEPS_LINK,
    },
    lifecycle::ResourceLedger,
    metadata::Page,
    sections::{ActiveSection, GUIDE_SECTIONS},
};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const GUIDE_BACKDROP: &str = "https://tse1.mm.bing.net/th?id=OIP.3TCx9qKNvsGIehvF4OZWlwHaFu&pid=15.1";

#[function_component(Guide)]
pub fn guide() -> Html {
    let ledger = use_view_ledger("guide");

    html! {
        <ContextProvider<ResourceLedger> context={ledger}>
            <GuideView />
        </ContextProvider<ResourceLedger>>
    }
}

fn section_index(active: &ActiveSection) -> Html {
    html! {
        <aside class="section-index" aria-label="Index">
            <h2 class="font-bold">{"Index"}</h2>
            <ul>
                { for GUIDE_SECTIONS.iter().map(|section| {
                    let id = section.id;
                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(id));
                    html! {
                        <li key={id}>
                            <button
                                type="button"
                                class={classes!("section-index-link", active.is_active(id).then_some("is-active"))}
                                {onclick}
                            >
                                {section.title}
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </aside>
    }
}

fn tip_body(tip: &Tip) -> Html {
    tip.blocks
        .iter()
        .map(|block| match *block {
            TipBlock::Text(text) => html! { <p class="tip-text">{text}</p> },
            TipBlock::Code(code) => html! { <CopyableCode code={code} class="tip-code" /> },
            TipBlock::CodePair(before, after) => html! {
                <div class="tip-code-pair">
                    <CopyableCode code={before} class="tip-code" />
                    <CopyableCode code={after} class="tip-code" />
                </div>
            },
        })
        .collect()
}

fn section_heading(number: Option<u8>, title: &'static str) -> Html {
    html! {
        <div class="section-heading">
            if let Some(number) = number {
                <div class="section-number">{number.to_string()}</div>
            }
            <h1 class="font-bold section-title">{title}</h1>
        </div>
    }
}

#[function_component(GuideView)]
fn guide_view() -> Html {
    use_page_metadata(Page::Guide);

    let ledger = use_ledger();
    let active = use_active_section(&ledger, &GUIDE_SECTIONS);
    let open_tip = use_state_eq(OpenItem::closed);
    let navigator = use_navigator();

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Home);
        }
    });

    let backdrop_style = format!(
        "background-image: url('{GUIDE_BACKDROP}'); background-size: cover; background-position: center; background-repeat: no-repeat;"
    );

    html! {
        <>
            <Navbar />
            <main class="guide">
                <div class="guide-backdrop" style={backdrop_style}></div>

                <button class="back-link" type="button" onclick={on_back}>
                    <span aria-hidden="true">{"← "}</span>
                    {"Back to Home Page"}
                </button>

                {section_index(&active)}

                <div class="guide-body">
                    <h1 class="font-bold guide-title">{GUIDE_INTRO_TITLE}</h1>
                    <p class="guide-intro">{GUIDE_INTRO}</p>

                    <hr class="guide-rule" />

                    <section id={GUIDE_SECTIONS[0].id} class="guide-section">
                        {section_heading(Some(1), GUIDE_SECTIONS[0].title)}
                        <div class="principle-grid">
                            { for CORE_PRINCIPLES.iter().map(|principle| html! {
                                <Card class="principle-card">
                                    <h2 class="font-bold">{principle.name}</h2>
                                    <p>{principle.summary}</p>
                                </Card>
                            }) }
                        </div>
                    </section>

                    <hr class="guide-rule" />

                    <section id={GUIDE_SECTIONS[1].id} class="guide-section">
                        {section_heading(Some(2), GUIDE_SECTIONS[1].title)}
                        <div class="tip-list">
                            { for CLEAN_CODE_TIPS.iter().enumerate().map(|(index, tip)| {
                                let is_open = open_tip.is_open(index);
                                let onclick = {
                                    let open_tip = open_tip.clone();
                                    Callback::from(move |_: MouseEvent| open_tip.set(open_tip.toggled(index)))
                                };

                                html! {
                                    <Card class="tip-card" key={index}>
                                        <button class="tip-trigger" type="button" aria-expanded={is_open.to_string()} {onclick}>
                                            <img class="tip-chevron" src="/arrow.svg" alt="Toggle" style={chevron_rotation(is_open)} />
                                            {tip.title}
                                        </button>
                                        <div class="tip-panel" style={panel_style(is_open)}>
                                            <div class="tip-content">{tip_body(tip)}</div>
                                        </div>
                                    </Card>
                                }
                            }) }
                        </div>
                    </section>

                    <hr class="guide-rule" />

                    <section id={GUIDE_SECTIONS[2].id} class="guide-section">
                        {section_heading(None, GUIDE_SECTIONS[2].title)}
                        <ul class="next-steps">
                            <li>
                                {"Check out this "}
                                <a href={NEXT_STEPS_LINK.href} target="_blank" rel="noopener noreferrer">
                                    {NEXT_STEPS_LINK.label}
                                </a>
                                {" for examples and best practices."}
                            </li>
                        </ul>
                        <p class="guide-sign-off">{GUIDE_SIGN_OFF}</p>
                    </section>
                </div>
            </main>
        </>
    }
}
