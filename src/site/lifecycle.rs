//! Scoped ownership of timers, listeners and observers.
//!
//! Every browser resource a view acquires is wrapped in a [`Lease`] that
//! holds one slot in the view's [`ResourceLedger`]. Dropping or releasing
//! the lease frees the resource and the slot, so an unmounted view can be
//! checked for leaks by asking the ledger what is still live.

use std::{cell::Cell, fmt, rc::Rc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Timer,
    ResizeListener,
    Observer,
}

impl ResourceKind {
    fn slot(self) -> usize {
        match self {
            Self::Timer => 0,
            Self::ResizeListener => 1,
            Self::Observer => 2,
        }
    }
}

#[derive(Clone, Default)]
pub struct ResourceLedger {
    live: Rc<[Cell<usize>; 3]>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self, kind: ResourceKind) -> usize {
        self.live[kind.slot()].get()
    }

    pub fn total_live(&self) -> usize {
        self.live.iter().map(Cell::get).sum()
    }

    pub fn acquire<T>(&self, kind: ResourceKind, resource: T) -> Lease<T> {
        let slot = &self.live[kind.slot()];
        slot.set(slot.get() + 1);

        Lease {
            resource: Some(resource),
            kind,
            ledger: self.clone(),
        }
    }

    fn free(&self, kind: ResourceKind) {
        let slot = &self.live[kind.slot()];
        slot.set(slot.get().saturating_sub(1));
    }
}

impl fmt::Debug for ResourceLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceLedger")
            .field("timers", &self.live(ResourceKind::Timer))
            .field("resize_listeners", &self.live(ResourceKind::ResizeListener))
            .field("observers", &self.live(ResourceKind::Observer))
            .finish()
    }
}

impl PartialEq for ResourceLedger {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.live, &other.live)
    }
}

/// A live resource bound to a ledger slot.
pub struct Lease<T> {
    resource: Option<T>,
    kind: ResourceKind,
    ledger: ResourceLedger,
}

impl<T> Lease<T> {
    /// Drops the resource and frees its slot. Later calls do nothing.
    pub fn release(&mut self) {
        if let Some(resource) = self.resource.take() {
            drop(resource);
            self.ledger.free(self.kind);
        }
    }
}

impl<T> Drop for Lease<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Releases whatever lease `slot` still holds. Used by effect teardown, where
/// a lease may already have been taken out and released elsewhere.
pub fn release_slot<T>(slot: &mut Option<Lease<T>>) {
    if let Some(mut lease) = slot.take() {
        lease.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{
        progress::{on_tick, ProgressCounter, Tick},
        sections::{ActiveSection, IntersectionNotice, GUIDE_SECTIONS},
        viewport::{ScreenSize, ViewportState},
    };
    use std::cell::RefCell;

    struct Disconnect(Rc<Cell<bool>>);

    impl Drop for Disconnect {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn release_is_idempotent() {
        let ledger = ResourceLedger::new();
        let mut lease = ledger.acquire(ResourceKind::Timer, ());
        assert_eq!(ledger.live(ResourceKind::Timer), 1);

        lease.release();
        lease.release();
        drop(lease);

        assert_eq!(ledger.live(ResourceKind::Timer), 0);
    }

    #[test]
    fn dropping_a_lease_runs_the_resource_teardown() {
        let ledger = ResourceLedger::new();
        let disconnected = Rc::new(Cell::new(false));

        let lease = ledger.acquire(ResourceKind::Observer, Disconnect(disconnected.clone()));
        assert_eq!(ledger.live(ResourceKind::Observer), 1);
        assert!(!disconnected.get());

        drop(lease);
        assert!(disconnected.get());
        assert_eq!(ledger.total_live(), 0);
    }

    /// A home page mount driven through the same steps `use_progress` takes:
    /// `on_tick` per firing, retired leases parked until the next turn, and
    /// `release_slot` on teardown.
    struct HomeMount {
        viewport: ViewportState,
        _resize: Lease<()>,
        counter: ProgressCounter,
        timer: Option<Lease<()>>,
    }

    impl HomeMount {
        fn mount(ledger: &ResourceLedger) -> Self {
            Self {
                viewport: ViewportState::unavailable(),
                _resize: ledger.acquire(ResourceKind::ResizeListener, ()),
                counter: ProgressCounter::new(),
                timer: Some(ledger.acquire(ResourceKind::Timer, ())),
            }
        }

        fn fire_timer(&mut self, next_turn: &mut Vec<Lease<()>>) -> Tick {
            let (tick, retired) = on_tick(&mut self.counter, &mut self.timer);
            next_turn.extend(retired);
            tick
        }

        fn unmount(mut self) {
            release_slot(&mut self.timer);
        }
    }

    fn run_next_turn(next_turn: &mut Vec<Lease<()>>) {
        for mut lease in next_turn.drain(..) {
            lease.release();
        }
    }

    #[test]
    fn unmounting_home_mid_animation_leaves_nothing_live() {
        let ledger = ResourceLedger::new();
        let mut next_turn = Vec::new();
        let mut view = HomeMount::mount(&ledger);
        assert_eq!(ledger.live(ResourceKind::Timer), 1);
        assert_eq!(ledger.live(ResourceKind::ResizeListener), 1);

        view.viewport.resize(900);
        assert_eq!(view.viewport.screen_size(), ScreenSize::Tablet);
        assert_eq!(view.fire_timer(&mut next_turn), Tick::Advanced(10));

        view.unmount();
        run_next_turn(&mut next_turn);
        assert_eq!(ledger.total_live(), 0, "{ledger:?}");
    }

    #[test]
    fn finished_timer_is_released_on_the_next_turn() {
        let ledger = ResourceLedger::new();
        let mut next_turn = Vec::new();
        let mut view = HomeMount::mount(&ledger);

        while view.fire_timer(&mut next_turn) != Tick::Finished {}
        assert_eq!(view.counter.value(), 100);
        assert_eq!(ledger.live(ResourceKind::Timer), 1);

        run_next_turn(&mut next_turn);
        assert_eq!(ledger.live(ResourceKind::Timer), 0);
        assert_eq!(ledger.live(ResourceKind::ResizeListener), 1);

        view.unmount();
        assert_eq!(ledger.total_live(), 0, "{ledger:?}");
    }

    #[test]
    fn unmount_between_finish_and_next_turn_releases_once() {
        let ledger = ResourceLedger::new();
        let mut next_turn = Vec::new();
        let mut view = HomeMount::mount(&ledger);

        while view.fire_timer(&mut next_turn) != Tick::Finished {}
        view.unmount();
        assert_eq!(ledger.live(ResourceKind::Timer), 1);

        run_next_turn(&mut next_turn);
        assert_eq!(ledger.total_live(), 0, "{ledger:?}");
    }

    #[test]
    fn unmounting_guide_disconnects_observer() {
        let ledger = ResourceLedger::new();
        let disconnected = Rc::new(Cell::new(false));
        let active = Rc::new(RefCell::new(ActiveSection::default()));

        let observer = ledger.acquire(ResourceKind::Observer, Disconnect(disconnected.clone()));
        active.borrow_mut().apply(
            GUIDE_SECTIONS
                .iter()
                .map(|section| IntersectionNotice::new(section.id, section.id == "cleancodetips")),
        );
        assert_eq!(active.borrow().current(), Some("cleancodetips"));

        drop(observer);
        assert!(disconnected.get());
        assert_eq!(ledger.live(ResourceKind::Observer), 0);
    }
}
