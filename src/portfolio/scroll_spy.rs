use crate::config::SCROLL_PROBE_DIVISOR;

use super::Section;

/// Scroll state sampled from the window on each scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub inner_height: f64,
}

impl Viewport {
    pub fn probe(&self) -> f64 {
        self.scroll_y + self.inner_height / SCROLL_PROBE_DIVISOR
    }
}

/// Folds the section offsets in the order given. Every section whose top is at or
/// above `probe` overwrites the result, so the last qualifying one wins. Sections
/// without an element (`None`) are skipped, and `current` is kept when nothing
/// qualifies.
pub fn resolve_active<I>(current: Section, probe: f64, offsets: I) -> Section
where
    I: IntoIterator<Item = (Section, Option<f64>)>,
{
    offsets
        .into_iter()
        .fold(current, |active, (section, top)| match top {
            Some(top) if top <= probe => section,
            _ => active,
        })
}
