//! Scroll-driven state
//!
//! Pure geometry behind the scroll behaviors: the active menu tab, the
//! smooth-scroll target for a clicked tab, reveal decisions, stagger
//! delays, and the reading-progress ratio. The host feeds current
//! geometry in and mirrors the results out.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Extra clearance under the fixed bars when picking the active section.
const ACTIVE_TAB_SLACK: f64 = 50.0;
/// Extra clearance under the fixed bars when scrolling to a section.
const SCROLL_TARGET_SLACK: f64 = 20.0;
/// The viewport bottom is pulled up this much before an element counts
/// as visible, so reveals fire slightly before elements fully enter.
const REVEAL_BOTTOM_MARGIN: f64 = 100.0;
/// Fraction of an element that must be visible to reveal it.
const REVEAL_THRESHOLD: f64 = 0.1;
/// Stagger step between grid items revealed together.
const STAGGER_STEP_MS: u64 = 100;

/// One menu section's layout, as measured by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    pub id: String,
    /// Document-space top of the section
    pub top: f64,
    pub height: f64,
}

/// Heights of the fixed bars stacked above the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedBars {
    pub nav_height: f64,
    pub menu_nav_height: f64,
}

impl FixedBars {
    fn offset(&self, slack: f64) -> f64 {
        self.nav_height + self.menu_nav_height + slack
    }
}

/// Pick the section the menu tabs should highlight for a scroll position.
///
/// Sections are tested in document order; when fixed bars make two
/// overlap, the later one wins.
pub fn active_section<'a>(
    sections: &'a [SectionGeometry],
    bars: FixedBars,
    scroll_y: f64,
) -> Option<&'a str> {
    let offset = bars.offset(ACTIVE_TAB_SLACK);
    let mut current = None;
    for section in sections {
        let top = section.top - offset;
        if scroll_y >= top && scroll_y < top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Scroll position that puts a section's top just under the fixed bars.
pub fn scroll_target(section_top: f64, bars: FixedBars) -> f64 {
    section_top - bars.offset(SCROLL_TARGET_SLACK)
}

/// Whether an element should reveal at the current scroll position.
pub fn should_reveal(
    element_top: f64,
    element_height: f64,
    scroll_y: f64,
    viewport_height: f64,
) -> bool {
    let view_top = scroll_y;
    let view_bottom = scroll_y + viewport_height - REVEAL_BOTTOM_MARGIN;
    let visible = (element_top + element_height).min(view_bottom) - element_top.max(view_top);
    if visible <= 0.0 {
        return false;
    }
    element_height <= 0.0 || visible / element_height >= REVEAL_THRESHOLD
}

/// Transition delay for the n-th item of a grid revealed together.
pub fn stagger_delay(index: usize) -> Duration {
    Duration::from_millis(index as u64 * STAGGER_STEP_MS)
}

/// Reading progress in `0.0..=1.0` for the progress bar.
///
/// A page with no scrollable height reports 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}
