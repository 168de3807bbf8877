use scrollkit_core::Host;
use tracing::debug;

/// Zoom used when there is no document to measure
pub const HEADLESS_ZOOM: f64 = 1.0;

/// Current zoom level: the host's device pixel ratio rounded to 2 decimals,
/// or [`HEADLESS_ZOOM`] when the host has no document.
pub fn get_zoom<H: Host + ?Sized>(host: &H) -> f64 {
    if !host.has_document() {
        debug!("No document available, using zoom {}", HEADLESS_ZOOM);
        return HEADLESS_ZOOM;
    }

    round_2(host.device_pixel_ratio())
}

/// Round the exact stored value to 2 decimals, ties upward.
///
/// `1.255` is stored just below 1.255, so it rounds to 1.25. Scaling by 100
/// first would round the product instead and give 1.26.
fn round_2(value: f64) -> f64 {
    let mut hundredths = (value * 100.0).floor();

    // Sign of `value * k - c` computed exactly by a fused multiply-add
    if value.mul_add(100.0, -hundredths) < 0.0 {
        hundredths -= 1.0;
    } else if value.mul_add(100.0, -(hundredths + 1.0)) >= 0.0 {
        hundredths += 1.0;
    }

    if value.mul_add(200.0, -(2.0 * hundredths + 1.0)) >= 0.0 {
        hundredths += 1.0;
    }
    hundredths / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollkit_core::StaticHost;

    #[test]
    fn test_headless_zoom_is_one() {
        let host = StaticHost::headless().with_device_pixel_ratio(3.0);
        assert_eq!(get_zoom(&host), 1.0);
    }

    #[test]
    fn test_zoom_reports_ratio() {
        assert_eq!(get_zoom(&StaticHost::browser(1.5, "")), 1.5);
        assert_eq!(get_zoom(&StaticHost::browser(2.0, "")), 2.0);
    }

    #[test]
    fn test_zoom_rounds_to_two_decimals() {
        assert_eq!(get_zoom(&StaticHost::browser(1.3333333, "")), 1.33);
        assert_eq!(get_zoom(&StaticHost::browser(0.6666, "")), 0.67);
        assert_eq!(get_zoom(&StaticHost::browser(1.125, "")), 1.13);
    }

    #[test]
    fn test_zoom_rounds_stored_value_not_scaled_product() {
        // Each literal is stored slightly below its decimal spelling
        assert_eq!(get_zoom(&StaticHost::browser(1.255, "")), 1.25);
        assert_eq!(get_zoom(&StaticHost::browser(2.675, "")), 2.67);
        assert_eq!(get_zoom(&StaticHost::browser(1.005, "")), 1.0);
    }

    #[test]
    fn test_zoom_exact_tie_rounds_up() {
        assert_eq!(get_zoom(&StaticHost::browser(1.125, "")), 1.13);
        assert_eq!(get_zoom(&StaticHost::browser(0.375, "")), 0.38);
    }

    #[test]
    fn test_zoom_through_trait_object() {
        let host: Box<dyn Host> = Box::new(StaticHost::browser(1.75, ""));
        assert_eq!(get_zoom(host.as_ref()), 1.75);
    }
}
