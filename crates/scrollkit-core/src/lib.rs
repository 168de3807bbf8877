pub mod config;
pub mod error;
pub mod host;
pub mod logging;

pub use config::{Config, GeneralConfig};
pub use error::{Error, Result};
pub use host::{Host, StaticHost};
