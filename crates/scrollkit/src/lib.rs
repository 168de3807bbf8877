//! Browser-side helpers with an injected host environment
//!
//! - `event` - bind a listener and get back an unsubscribe handle
//! - `easing` - quadratic ease-in-out
//! - `zoom` - device pixel ratio, with a headless fallback
//! - `keys` - keyboard scroll deltas and key-name checks
//! - `device` - mobile user-agent detection
//! - `tween` - time-driven smooth scrolling built on `easing`
//!
//! # Usage
//!
//! ```
//! use scrollkit::{get_zoom, is_mobile, scroll_delta, ScrollKey, StaticHost};
//!
//! let host = StaticHost::browser(1.5, "Mozilla/5.0 (Linux; Android 14)");
//! assert_eq!(get_zoom(&host), 1.5);
//! assert!(is_mobile(&host));
//!
//! let deltas = scroll_delta(3200.0);
//! assert_eq!(deltas.get(ScrollKey::End), 3200.0);
//! ```

pub mod device;
pub mod easing;
pub mod event;
pub mod keys;
pub mod tween;
pub mod zoom;

pub use device::{is_mobile, is_mobile_user_agent};
pub use easing::ease;
pub use event::{
    bind_event, listener, Event, EventTarget, Listener, ListenerOptions, ListenerRegistry,
    Subscription,
};
pub use keys::{is_arrow_key, is_valid_key, scroll_delta, ScrollDeltas, ScrollKey};
pub use tween::ScrollTween;
pub use zoom::get_zoom;

pub use scrollkit_core::{Config, Error, Host, Result, StaticHost};
