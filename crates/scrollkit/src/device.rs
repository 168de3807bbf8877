use std::sync::OnceLock;

use regex::Regex;
use scrollkit_core::Host;

fn mobile_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new("(?i)iphone|ipad|ipod|android").expect("mobile user-agent pattern is valid")
    })
}

/// Whether a user-agent string names a mobile device (case-insensitive)
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    mobile_pattern().is_match(user_agent)
}

/// Whether the host's user agent names a mobile device
pub fn is_mobile<H: Host + ?Sized>(host: &H) -> bool {
    is_mobile_user_agent(host.user_agent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollkit_core::StaticHost;

    #[test]
    fn test_mobile_user_agents() {
        for ua in [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
            "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)",
            "Mozilla/5.0 (iPod touch; CPU iPhone OS 12_0 like Mac OS X)",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
            "some-client ANDROID build",
            "iphone",
        ] {
            assert!(is_mobile_user_agent(ua), "{} should be mobile", ua);
        }
    }

    #[test]
    fn test_desktop_user_agents() {
        for ua in [
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) Safari/605.1.15",
            "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
            "",
        ] {
            assert!(!is_mobile_user_agent(ua), "{} should not be mobile", ua);
        }
    }

    #[test]
    fn test_is_mobile_reads_host() {
        assert!(is_mobile(&StaticHost::default().with_user_agent("Android")));
        assert!(!is_mobile(&StaticHost::default().with_user_agent("Windows NT")));
        assert!(!is_mobile(&StaticHost::headless()));
    }
}
