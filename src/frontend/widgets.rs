//! Small display components: cards, speech bubbles, the progress bar, the
//! popup, the FAQ accordion and copyable code blocks.

use super::hooks::use_ledger;
use crate::site::{
    accordion::{chevron_rotation, panel_style, OpenItem},
    content::FaqItem,
    lifecycle::{release_slot, Lease, ResourceKind},
};
use gloo::timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use yew::prelude::*;

const COPIED_FEEDBACK_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("pixel-card", props.class.clone())} style={props.style.clone()}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum BubbleDirection {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct BubbleProps {
    pub direction: BubbleDirection,
    pub text: AttrValue,
}

#[function_component(Bubble)]
pub fn bubble(props: &BubbleProps) -> Html {
    let direction = match props.direction {
        BubbleDirection::Left => "bubble-left",
        BubbleDirection::Right => "bubble-right",
    };

    html! {
        <p class={classes!("pixel-bubble", direction)}>{props.text.clone()}</p>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub value: u8,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let style = format!("width: {}%;", props.value.min(100));

    html! {
        <div
            class="pixel-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={props.value.to_string()}
        >
            <div class="pixel-progress-fill" style={style}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Popup)]
pub fn popup(props: &PopupProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="popup-backdrop" onclick={on_backdrop}>
            <div class={classes!("popup-panel", props.class.clone())} role="dialog" aria-modal="true" onclick={on_panel}>
                <button class="popup-close" type="button" aria-label="Close" onclick={on_button}>{"×"}</button>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: &'static [FaqItem],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state_eq(OpenItem::closed);

    html! {
        <div class={classes!("pixel-accordion", props.class.clone())}>
            { for props.items.iter().enumerate().map(|(index, item)| {
                let is_open = open.is_open(index);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |_: MouseEvent| open.set(open.toggled(index)))
                };

                html! {
                    <div class="accordion-item" key={index}>
                        <button class="accordion-trigger" type="button" aria-expanded={is_open.to_string()} {onclick}>
                            <span>{item.question}</span>
                            <span class="accordion-chevron" style={chevron_rotation(is_open)} aria-hidden="true">{"▸"}</span>
                        </button>
                        <div class="accordion-content" style={panel_style(is_open)}>
                            {item.answer}
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

fn write_to_clipboard(text: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let win: JsValue = win.into();

    let Ok(navigator) = Reflect::get(&win, &JsValue::from_str("navigator")) else {
        return false;
    };
    let Ok(clipboard) = Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let Ok(write_text) = Reflect::get(&clipboard, &JsValue::from_str("writeText")) else {
        return false;
    };
    let Some(write_text) = write_text.dyn_ref::<Function>() else {
        return false;
    };

    write_text.call1(&clipboard, &JsValue::from_str(text)).is_ok()
}

#[derive(Properties, PartialEq)]
pub struct CopyableCodeProps {
    pub code: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CopyableCode)]
pub fn copyable_code(props: &CopyableCodeProps) -> Html {
    let ledger = use_ledger();
    let copied = use_state_eq(|| false);
    let reset = use_mut_ref(|| Option::<Lease<Timeout>>::None);

    {
        let reset = reset.clone();
        use_effect_with((), move |_| {
            move || release_slot(&mut reset.borrow_mut())
        });
    }

    let onclick = {
        let code = props.code.clone();
        let copied = copied.clone();
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| {
            if !write_to_clipboard(&code) {
                return;
            }
            copied.set(true);

            let timeout = {
                let copied = copied.clone();
                Timeout::new(COPIED_FEEDBACK_MS, move || copied.set(false))
            };
            // Replacing the lease cancels a pending reset.
            *reset.borrow_mut() = Some(ledger.acquire(ResourceKind::Timer, timeout));
        })
    };

    html! {
        <div class={classes!("copyable-code", props.class.clone())}>
            <button class="copy-button" type="button" {onclick}>
                { if *copied { "Copied!" } else { "Copy" } }
            </button>
            <pre><code>{props.code.clone()}</code></pre>
        </div>
    }
}
