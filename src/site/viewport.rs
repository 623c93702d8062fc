//! Viewport width classification and the layout tables keyed by it.

const MOBILE_BREAKPOINT: i32 = 800;
const TABLET_BREAKPOINT: i32 = 1200;
const WIDE_DESKTOP_WIDTH: i32 = 1440;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScreenSize {
    Mobile,
    Tablet,
    Desktop,
}

impl ScreenSize {
    pub fn classify(width: i32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else if width < TABLET_BREAKPOINT {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    pub fn layout_style(self) -> &'static LayoutStyle {
        match self {
            Self::Mobile => &MOBILE_STYLE,
            Self::Tablet => &TABLET_STYLE,
            Self::Desktop => &DESKTOP_STYLE,
        }
    }

    /// Desktop decorations use fixed placement, so only the two narrow tiers
    /// have a table.
    pub fn background_placements(self) -> Option<&'static BackgroundPlacements> {
        match self {
            Self::Mobile => Some(&MOBILE_BACKGROUND),
            Self::Tablet => Some(&TABLET_BACKGROUND),
            Self::Desktop => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LayoutStyle {
    pub header_padding: &'static str,
    pub logo_size: LogoSize,
    pub main_padding: &'static str,
    pub title_size: &'static str,
    pub subtitle_size: &'static str,
    pub button_size: &'static str,
}

static MOBILE_STYLE: LayoutStyle = LayoutStyle {
    header_padding: "pad-3",
    logo_size: LogoSize { width: 20, height: 20 },
    main_padding: "pad-x-4",
    title_size: "text-3xl",
    subtitle_size: "text-base",
    button_size: "button-sm",
};

static TABLET_STYLE: LayoutStyle = LayoutStyle {
    header_padding: "pad-4",
    logo_size: LogoSize { width: 22, height: 22 },
    main_padding: "pad-x-8",
    title_size: "text-5xl",
    subtitle_size: "text-xl",
    button_size: "button-md",
};

static DESKTOP_STYLE: LayoutStyle = LayoutStyle {
    header_padding: "pad-5",
    logo_size: LogoSize { width: 25, height: 25 },
    main_padding: "pad-x-10",
    title_size: "text-7xl",
    subtitle_size: "text-3xl",
    button_size: "button-lg",
};

#[derive(Debug, PartialEq, Eq)]
pub struct ElementPlacement {
    pub top: Option<&'static str>,
    pub right: Option<&'static str>,
    pub bottom: Option<&'static str>,
    pub left: Option<&'static str>,
    pub width: Option<&'static str>,
    pub rotate: &'static str,
}

impl ElementPlacement {
    /// Inline style for an absolutely positioned decoration. Unset edges are
    /// left out so the stylesheet decides them; an unset width becomes
    /// `default_width`.
    pub fn css(&self, default_width: &str) -> String {
        let mut style = String::new();

        for (edge, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if let Some(value) = value {
                style.push_str(&format!("{edge}: {value}; "));
            }
        }

        let width = self.width.unwrap_or(default_width);
        style.push_str(&format!("width: {width}; transform: rotate({});", self.rotate));
        style
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct BackgroundPlacements {
    pub card: ElementPlacement,
    pub form: ElementPlacement,
    pub accordion: ElementPlacement,
    pub progress_bar: ElementPlacement,
    pub bubble_left: ElementPlacement,
    pub bubble_right: ElementPlacement,
}

const fn place(
    top: Option<&'static str>,
    right: Option<&'static str>,
    bottom: Option<&'static str>,
    left: Option<&'static str>,
    width: Option<&'static str>,
    rotate: &'static str,
) -> ElementPlacement {
    ElementPlacement {
        top,
        right,
        bottom,
        left,
        width,
        rotate,
    }
}

static MOBILE_BACKGROUND: BackgroundPlacements = BackgroundPlacements {
    card: place(Some("5%"), Some("-10%"), None, None, Some("60%"), "-10deg"),
    form: place(None, Some("-5%"), Some("5%"), None, Some("60%"), "10deg"),
    accordion: place(Some("20%"), None, None, Some("-5%"), Some("70%"), "5deg"),
    progress_bar: place(None, None, Some("30%"), Some("-5%"), Some("70%"), "-10deg"),
    bubble_left: place(None, None, Some("10%"), Some("0"), None, "5deg"),
    bubble_right: place(None, None, Some("5%"), Some("20%"), None, "-5deg"),
};

static TABLET_BACKGROUND: BackgroundPlacements = BackgroundPlacements {
    card: place(Some("10%"), Some("-10%"), None, None, Some("30%"), "-15deg"),
    form: place(None, Some("-10%"), Some("10%"), None, Some("30%"), "15deg"),
    accordion: place(Some("25%"), None, None, Some("-5%"), Some("30%"), "10deg"),
    progress_bar: place(None, None, Some("35%"), Some("-8%"), Some("30%"), "-15deg"),
    bubble_left: place(None, None, Some("15%"), Some("-5%"), None, "10deg"),
    bubble_right: place(None, None, Some("5%"), Some("18%"), None, "-10deg"),
};

/// Scale applied to the fixed desktop decorations.
pub fn desktop_scale(width: i32) -> f64 {
    if width >= WIDE_DESKTOP_WIDTH {
        0.9
    } else {
        0.8
    }
}

pub fn desktop_transform(rotate_deg: i32, width: i32) -> String {
    format!(
        "transform: rotate({rotate_deg}deg) scale({});",
        desktop_scale(width)
    )
}

/// Last known viewport width. Before a live width exists it reads as 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    width: i32,
}

impl ViewportState {
    pub fn unavailable() -> Self {
        Self { width: 0 }
    }

    pub fn with_width(width: i32) -> Self {
        Self { width }
    }

    pub fn width(self) -> i32 {
        self.width
    }

    pub fn screen_size(self) -> ScreenSize {
        ScreenSize::classify(self.width)
    }

    /// Returns true when the new width lands in a different tier.
    pub fn resize(&mut self, width: i32) -> bool {
        let before = self.screen_size();
        self.width = width;
        before != self.screen_size()
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_partition_widths() {
        assert_eq!(ScreenSize::classify(799), ScreenSize::Mobile);
        assert_eq!(ScreenSize::classify(800), ScreenSize::Tablet);
        assert_eq!(ScreenSize::classify(1199), ScreenSize::Tablet);
        assert_eq!(ScreenSize::classify(1200), ScreenSize::Desktop);
    }

    #[test]
    fn classification_is_total_and_monotone() {
        let mut previous = ScreenSize::classify(i32::MIN);
        assert_eq!(previous, ScreenSize::Mobile);

        for width in (-50..4000).step_by(7).chain([i32::MAX]) {
            let current = ScreenSize::classify(width);
            assert!(current >= previous, "tier dropped at width {width}");
            previous = current;
        }

        assert_eq!(previous, ScreenSize::Desktop);
    }

    #[test]
    fn resize_sequence_selects_matching_tables() {
        let mut viewport = ViewportState::unavailable();
        let mut sizes = Vec::new();
        let mut titles = Vec::new();

        for width in [500, 900, 1300] {
            viewport.resize(width);
            sizes.push(viewport.screen_size());
            titles.push(viewport.screen_size().layout_style().title_size);
        }

        assert_eq!(
            sizes,
            vec![ScreenSize::Mobile, ScreenSize::Tablet, ScreenSize::Desktop]
        );
        assert_eq!(titles, vec!["text-3xl", "text-5xl", "text-7xl"]);
        assert!(ScreenSize::Desktop.background_placements().is_none());
        assert_eq!(
            ScreenSize::Tablet
                .background_placements()
                .map(|table| table.card.width),
            Some(Some("30%"))
        );
    }

    #[test]
    fn missing_width_reads_as_mobile_until_resized() {
        let mut viewport = ViewportState::default();
        assert_eq!(viewport.width(), 0);
        assert_eq!(viewport.screen_size(), ScreenSize::Mobile);

        assert!(viewport.resize(1280));
        assert!(!viewport.resize(1500));
        assert_eq!(viewport.screen_size(), ScreenSize::Desktop);
    }

    #[test]
    fn placement_css_omits_unset_edges_and_defaults_width() {
        let bubble = &MOBILE_BACKGROUND.bubble_left;
        let css = bubble.css("40%");
        assert_eq!(css, "bottom: 10%; left: 0; width: 40%; transform: rotate(5deg);");
        assert!(!css.contains("top:"), "{css}");
        assert!(!css.contains("right:"), "{css}");

        let card = &TABLET_BACKGROUND.card;
        assert_eq!(
            card.css("40%"),
            "top: 10%; right: -10%; width: 30%; transform: rotate(-15deg);"
        );
    }

    #[test]
    fn desktop_scale_grows_on_wide_screens() {
        assert_eq!(desktop_scale(1439), 0.8);
        assert_eq!(desktop_scale(1440), 0.9);
        assert_eq!(
            desktop_transform(-15, 1600),
            "transform: rotate(-15deg) scale(0.9);"
        );
    }
}
