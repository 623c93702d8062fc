use super::console;
use crate::site::{
    lifecycle::{release_slot, Lease, ResourceKind, ResourceLedger},
    metadata::{self, HeadTag, Page, SITE},
    progress::{on_tick, ProgressCounter, Tick, PROGRESS_INTERVAL_MS},
    sections::{ActiveSection, IntersectionNotice, Section, CENTER_BAND_ROOT_MARGIN, OBSERVER_THRESHOLD},
    viewport::ViewportState,
};
use gloo::{
    events::EventListener,
    timers::callback::{Interval, Timeout},
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

fn document() -> Option<Document> {
    window()?.document()
}

fn current_width() -> Option<i32> {
    let width = window()?.inner_width().ok()?.as_f64()?;
    Some(width as i32)
}

/// Ledger for everything one page acquires. After the page unmounts and its
/// effects have torn down, anything still live is reported.
#[hook]
pub fn use_view_ledger(view: &'static str) -> ResourceLedger {
    let ledger = (*use_memo((), |_| ResourceLedger::new())).clone();

    {
        let ledger = ledger.clone();
        use_effect_with((), move |_| {
            console::debug(&format!("[view] {view} mounted"));
            move || {
                // Child effects are destroyed after this one; check on the next turn.
                Timeout::new(0, move || report_leaks(view, &ledger)).forget();
            }
        });
    }

    ledger
}

fn report_leaks(view: &str, ledger: &ResourceLedger) {
    if ledger.total_live() == 0 {
        console::debug(&format!("[view] {view} unmounted cleanly"));
    } else {
        console::warn(&format!("[view] {view} unmounted with live resources: {ledger:?}"));
    }
}

/// The page ledger from context, or a detached one outside a page.
#[hook]
pub fn use_ledger() -> ResourceLedger {
    let fallback = use_memo((), |_| ResourceLedger::new());
    use_context::<ResourceLedger>().unwrap_or_else(|| (*fallback).clone())
}

#[hook]
pub fn use_viewport(ledger: &ResourceLedger) -> ViewportState {
    let viewport = use_state_eq(|| {
        current_width()
            .map(ViewportState::with_width)
            .unwrap_or_else(ViewportState::unavailable)
    });

    {
        let viewport = viewport.clone();
        let ledger = ledger.clone();
        use_effect_with((), move |_| {
            // The handle captured here never sees later renders.
            let latest = Rc::new(Cell::new(*viewport));
            let listener = window().map(|win| {
                let viewport = viewport.clone();
                let listener = EventListener::new(&win, "resize", move |_| {
                    let Some(width) = current_width() else {
                        return;
                    };
                    let mut next = latest.get();
                    let tier_changed = next.resize(width);
                    latest.set(next);
                    if tier_changed {
                        console::debug(&format!(
                            "[viewport] {} at {width}px",
                            next.screen_size().as_str()
                        ));
                    }
                    viewport.set(next);
                });
                ledger.acquire(ResourceKind::ResizeListener, listener)
            });

            move || drop(listener)
        });
    }

    *viewport
}

#[hook]
pub fn use_progress(ledger: &ResourceLedger) -> u8 {
    let progress = use_state_eq(ProgressCounter::new);

    {
        let progress = progress.clone();
        let ledger = ledger.clone();
        use_effect_with((), move |_| {
            let counter = Rc::new(Cell::new(ProgressCounter::new()));
            let slot: Rc<RefCell<Option<Lease<Interval>>>> = Rc::new(RefCell::new(None));

            let interval = {
                let slot = slot.clone();
                Interval::new(PROGRESS_INTERVAL_MS, move || {
                    let mut next = counter.get();
                    let (tick, retired) = on_tick(&mut next, &mut slot.borrow_mut());
                    counter.set(next);
                    progress.set(next);

                    if let Tick::Advanced(value) = tick {
                        console::debug(&format!("[progress] {value}%"));
                    }
                    if let Some(mut lease) = retired {
                        console::debug("[progress] finished, stopping timer");
                        // The interval cannot be dropped from inside its own callback.
                        Timeout::new(0, move || lease.release()).forget();
                    }
                })
            };
            *slot.borrow_mut() = Some(ledger.acquire(ResourceKind::Timer, interval));

            move || release_slot(&mut slot.borrow_mut())
        });
    }

    progress.value()
}

/// Disconnects on drop.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_sections(
    sections: &[Section],
    mut on_batch: impl FnMut(Vec<IntersectionNotice>) + 'static,
) -> Option<SectionObserver> {
    let document = document()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionNotice::new(entry.target().id(), entry.is_intersecting()))
                .collect();
            on_batch(batch);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(CENTER_BAND_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    for section in sections {
        match document.get_element_by_id(section.id) {
            Some(element) => observer.observe(&element),
            None => console::debug(&format!("[sections] no anchor for #{}", section.id)),
        }
    }

    Some(SectionObserver {
        observer,
        _callback: callback,
    })
}

#[hook]
pub fn use_active_section(ledger: &ResourceLedger, sections: &'static [Section]) -> ActiveSection {
    let active = use_state_eq(ActiveSection::default);

    {
        let active = active.clone();
        let ledger = ledger.clone();
        use_effect_with((), move |_| {
            let tracker = Rc::new(RefCell::new(ActiveSection::default()));

            let observer = observe_sections(sections, move |batch| {
                let mut tracker = tracker.borrow_mut();
                if tracker.apply(batch) {
                    console::debug(&format!("[sections] active {:?}", tracker.current()));
                    active.set((*tracker).clone());
                }
            })
            .map(|observer| ledger.acquire(ResourceKind::Observer, observer));

            move || drop(observer)
        });
    }

    (*active).clone()
}

/// Smooth-scrolls a section anchor to the top of the viewport. The active
/// section follows from the observer, not from this call.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[hook]
pub fn use_page_metadata(page: Page) {
    use_effect_with(page, |page| {
        apply_page_metadata(*page);
        || ()
    });
}

fn apply_page_metadata(page: Page) {
    let Some(document) = document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    document.set_title(page.document_title());

    let base = metadata::default_base_url();
    for tag in SITE.head_tags(&base, page) {
        let (selector, tag_name, attributes) = match &tag {
            HeadTag::Meta { key, name, content } => (
                format!("meta[{}=\"{name}\"]", key.attribute()),
                "meta",
                [(key.attribute(), *name), ("content", content.as_str())],
            ),
            HeadTag::Link { rel, href } => (
                format!("link[rel=\"{rel}\"]"),
                "link",
                [("rel", *rel), ("href", href.as_str())],
            ),
        };

        let existing = document.query_selector(&selector).ok().flatten();
        let element = match existing {
            Some(element) => element,
            None => {
                let Ok(element) = document.create_element(tag_name) else {
                    continue;
                };
                if head.append_child(&element).is_err() {
                    continue;
                }
                element
            }
        };

        for (name, value) in attributes {
            if element.set_attribute(name, value).is_err() {
                console::debug(&format!("[metadata] could not set {name} on {selector}"));
            }
        }
    }
}
