use smallvec::SmallVec;

pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const ACTIVE_PROBE_OFFSET_PX: f64 = 150.0;
pub const ACTIVE_LINK_COLOR: &str = "#6c63ff";

/// Navbar gets its `scrolled` class strictly past the threshold.
#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Vertical extent of a `section[id]` in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub type ActiveFlags = SmallVec<[bool; 8]>;

/// For each section, whether its nav link should be highlighted at `scroll_y`.
///
/// The probe sits 150 px below the top of the viewport. Overlapping sections
/// can both be active.
pub fn active_flags(scroll_y: f64, sections: &[SectionSpan]) -> ActiveFlags {
    let probe = scroll_y + ACTIVE_PROBE_OFFSET_PX;
    sections.iter().map(|s| s.contains(probe)).collect()
}

/// Selector for the nav link pointing at section `id`.
pub fn nav_link_selector(id: &str) -> String {
    format!("a[href=\"#{}\"]", id)
}

/// Mobile menu open/closed state mirrored on the hamburger and link list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
