//! Section scroll-position map and the scroll-to-section target computation.

use std::collections::HashMap;

use tracing::debug;

/// Default distance kept between the top of the viewport and a section.
pub const DEFAULT_VISUAL_OFFSET: f64 = 80.0;

/// Section id -> vertical offset inside the scroll container. Each section
/// records itself once laid out; the last report wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionPositions {
    positions: HashMap<String, f64>,
}

impl SectionPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-finite offsets are ignored.
    pub fn record(&mut self, id: impl Into<String>, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        let id = id.into();
        debug!(section = %id, offset, "section position recorded");
        self.positions.insert(id, offset);
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Where to scroll for `id`, or `None` when it has not been measured yet.
    pub fn scroll_target(&self, id: &str, visual_offset: f64, max_scroll: f64) -> Option<f64> {
        match self.get(id) {
            Some(position) => Some(scroll_target(position, visual_offset, max_scroll)),
            None => {
                debug!(section = %id, "scroll request dropped, section not measured");
                None
            }
        }
    }
}

/// `position - visual_offset`, clamped to `[0, max_scroll]`. An infinite
/// `max_scroll` leaves the upper end open.
pub fn scroll_target(position: f64, visual_offset: f64, max_scroll: f64) -> f64 {
    let upper = if max_scroll.is_nan() { 0.0 } else { max_scroll.max(0.0) };
    (position - visual_offset).max(0.0).min(upper)
}
