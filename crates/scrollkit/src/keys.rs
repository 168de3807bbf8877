//! Keyboard scrolling table
//!
//! Maps the keys that scroll a page to signed deltas (positive = down).
//! Key names use the DOM `KeyboardEvent.code` spelling and are matched
//! case-sensitively.

use std::fmt;
use std::str::FromStr;

use scrollkit_core::Error;

/// Delta for Space and PageDown
pub const PAGE_DELTA: f64 = 700.0;

/// Delta for ArrowDown
pub const LINE_DELTA: f64 = 50.0;

/// A key that scrolls the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScrollKey {
    Space,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    End,
    Home,
}

impl ScrollKey {
    pub const ALL: [ScrollKey; 7] = [
        ScrollKey::Space,
        ScrollKey::ArrowUp,
        ScrollKey::ArrowDown,
        ScrollKey::PageUp,
        ScrollKey::PageDown,
        ScrollKey::End,
        ScrollKey::Home,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScrollKey::Space => "Space",
            ScrollKey::ArrowUp => "ArrowUp",
            ScrollKey::ArrowDown => "ArrowDown",
            ScrollKey::PageUp => "PageUp",
            ScrollKey::PageDown => "PageDown",
            ScrollKey::End => "End",
            ScrollKey::Home => "Home",
        }
    }

    #[inline]
    pub fn is_arrow(self) -> bool {
        matches!(self, ScrollKey::ArrowUp | ScrollKey::ArrowDown)
    }

    /// Delta for this key given the full scrollable height
    pub fn delta(self, full_height: f64) -> f64 {
        match self {
            ScrollKey::Space | ScrollKey::PageDown => PAGE_DELTA,
            ScrollKey::PageUp => -PAGE_DELTA,
            ScrollKey::ArrowDown => LINE_DELTA,
            ScrollKey::ArrowUp => -LINE_DELTA,
            ScrollKey::End => full_height,
            ScrollKey::Home => -full_height,
        }
    }
}

impl fmt::Display for ScrollKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScrollKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownKey(s.to_string()))
    }
}

/// Immutable key-to-delta table produced by [`scroll_delta`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDeltas {
    full_height: f64,
}

impl ScrollDeltas {
    pub fn get(&self, key: ScrollKey) -> f64 {
        key.delta(self.full_height)
    }

    /// Delta for a key name, or `None` if it does not scroll
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        name.parse::<ScrollKey>().ok().map(|key| self.get(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        ScrollKey::ALL.into_iter().map(ScrollKey::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScrollKey, f64)> + '_ {
        ScrollKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Scroll deltas for every key; End and Home move by `full_height`
pub fn scroll_delta(full_height: f64) -> ScrollDeltas {
    ScrollDeltas { full_height }
}

/// Whether `name` is a key that scrolls the page
pub fn is_valid_key(name: &str) -> bool {
    name.parse::<ScrollKey>().is_ok()
}

/// Whether `name` is ArrowUp or ArrowDown
pub fn is_arrow_key(name: &str) -> bool {
    name.parse::<ScrollKey>().map_or(false, ScrollKey::is_arrow)
}
