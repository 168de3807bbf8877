//! Host environment abstraction
//!
//! Helpers never read browser globals directly. Instead they receive a
//! [`Host`] that answers the few questions they need: is there a document,
//! what is the device pixel ratio, and what is the user agent.

use serde::Serialize;

/// Capabilities of the environment the helpers run in
pub trait Host {
    /// Whether a document-like object exists (false when headless)
    fn has_document(&self) -> bool;

    /// Physical pixels per logical pixel reported by the display
    fn device_pixel_ratio(&self) -> f64;

    /// Navigator user-agent string
    fn user_agent(&self) -> &str;
}

impl<H: Host + ?Sized> Host for &H {
    fn has_document(&self) -> bool {
        (**self).has_document()
    }

    fn device_pixel_ratio(&self) -> f64 {
        (**self).device_pixel_ratio()
    }

    fn user_agent(&self) -> &str {
        (**self).user_agent()
    }
}

/// A host with fixed answers, loadable from the `[host]` config section
///
/// Deserialization lives in `config.rs` so the section can also be given
/// as a preset name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticHost {
    /// Whether a document is present
    pub document: bool,
    /// Device pixel ratio
    pub device_pixel_ratio: f64,
    /// User-agent string
    pub user_agent: String,
}

impl Default for StaticHost {
    fn default() -> Self {
        Self {
            document: default_true(),
            device_pixel_ratio: default_device_pixel_ratio(),
            user_agent: String::new(),
        }
    }
}

impl StaticHost {
    /// A browser-like host with the given pixel ratio and user agent
    pub fn browser(device_pixel_ratio: f64, user_agent: impl Into<String>) -> Self {
        Self {
            document: true,
            device_pixel_ratio,
            user_agent: user_agent.into(),
        }
    }

    /// A server-side host with no document
    pub fn headless() -> Self {
        Self {
            document: false,
            ..Self::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }
}

impl Host for StaticHost {
    fn has_document(&self) -> bool {
        self.document
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_device_pixel_ratio() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_host_has_document() {
        let host = StaticHost::default();
        assert!(host.has_document());
        assert_eq!(host.device_pixel_ratio(), 1.0);
        assert_eq!(host.user_agent(), "");
    }

    #[test]
    fn test_headless_host() {
        let host = StaticHost::headless().with_user_agent("node");
        assert!(!host.has_document());
        assert_eq!(host.user_agent(), "node");
    }

    #[test]
    fn test_host_by_reference() {
        fn ratio<H: Host>(host: H) -> f64 {
            host.device_pixel_ratio()
        }

        let host = StaticHost::browser(2.0, "Mozilla/5.0");
        assert_eq!(ratio(&host), 2.0);
    }
}
