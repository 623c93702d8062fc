//! Tracking which guide section sits in the middle of the viewport.

/// Shrinks the observation root to the horizontal centre line.
pub const CENTER_BAND_ROOT_MARGIN: &str = "-50% 0px -50% 0px";
pub const OBSERVER_THRESHOLD: f64 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

pub const GUIDE_SECTIONS: [Section; 3] = [
    Section {
        id: "coreprinciples",
        title: "Core Principles",
    },
    Section {
        id: "cleancodetips",
        title: "Clean Code Tips",
    },
    Section {
        id: "next-steps",
        title: "Next Steps",
    },
];

/// One change record from an intersection callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionNotice {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionNotice {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    /// Applies one callback batch in delivery order. The last intersecting
    /// notice wins; a batch with nothing intersecting keeps the old value.
    /// Returns true when the active id changed.
    pub fn apply<I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = IntersectionNotice>,
    {
        let before = self.current.clone();

        for notice in batch {
            if notice.is_intersecting {
                self.current = Some(notice.id);
            }
        }

        before != self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let active = ActiveSection::default();
        assert_eq!(active.current(), None);
        assert!(!active.is_active("coreprinciples"));
    }

    #[test]
    fn single_intersecting_section_becomes_active() {
        let mut active = ActiveSection::default();

        let changed = active.apply([
            IntersectionNotice::new("coreprinciples", false),
            IntersectionNotice::new("cleancodetips", true),
        ]);

        assert!(changed);
        assert_eq!(active.current(), Some("cleancodetips"));
    }

    #[test]
    fn value_sticks_when_nothing_intersects() {
        let mut active = ActiveSection::default();
        active.apply([IntersectionNotice::new("next-steps", true)]);

        let changed = active.apply([
            IntersectionNotice::new("next-steps", false),
            IntersectionNotice::new("cleancodetips", false),
        ]);

        assert!(!changed);
        assert_eq!(active.current(), Some("next-steps"));

        assert!(!active.apply(Vec::new()));
        assert_eq!(active.current(), Some("next-steps"));
    }

    #[test]
    fn last_intersecting_notice_in_batch_wins() {
        let mut active = ActiveSection::default();

        active.apply([
            IntersectionNotice::new("coreprinciples", true),
            IntersectionNotice::new("cleancodetips", true),
            IntersectionNotice::new("next-steps", false),
        ]);

        assert_eq!(active.current(), Some("cleancodetips"));
    }

    #[test]
    fn reapplying_same_section_reports_no_change() {
        let mut active = ActiveSection::default();
        assert!(active.apply([IntersectionNotice::new("coreprinciples", true)]));
        assert!(!active.apply([IntersectionNotice::new("coreprinciples", true)]));
    }

    #[test]
    fn guide_sections_have_unique_ids() {
        let mut ids: Vec<_> = GUIDE_SECTIONS.iter().map(|section| section.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GUIDE_SECTIONS.len());
    }
}
