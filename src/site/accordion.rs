/// Index of the single expanded item in an ordered list, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenItem(Option<usize>);

impl OpenItem {
    pub fn closed() -> Self {
        Self(None)
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }

    pub fn is_open(self, index: usize) -> bool {
        self.index() == Some(index)
    }

    /// Selecting the open item closes it; anything else opens in its place.
    pub fn toggled(self, index: usize) -> Self {
        if self.is_open(index) {
            Self(None)
        } else {
            Self(Some(index))
        }
    }
}

pub fn chevron_rotation(open: bool) -> &'static str {
    if open {
        "transform: rotate(90deg);"
    } else {
        "transform: rotate(0deg);"
    }
}

pub fn panel_style(open: bool) -> &'static str {
    if open {
        "max-height: 1000px; opacity: 1; overflow: hidden;"
    } else {
        "max-height: 0; opacity: 0; overflow: hidden;"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_closes_again() {
        let open = OpenItem::closed().toggled(3);
        assert!(open.is_open(3));

        let closed = open.toggled(3);
        assert_eq!(closed, OpenItem::closed());
        assert_eq!(closed.index(), None);
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        let first = OpenItem::closed().toggled(0);
        let second = first.toggled(4);

        assert!(second.is_open(4));
        assert!(!second.is_open(0));
        assert_eq!(second.index(), Some(4));
    }

    #[test]
    fn affordance_follows_open_flag() {
        assert_eq!(chevron_rotation(true), "transform: rotate(90deg);");
        assert!(panel_style(false).contains("max-height: 0"));
    }
}
