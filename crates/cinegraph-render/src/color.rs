//! Color parsing and interpolation helpers

use plotters::style::RGBColor;

/// Parse a `#RRGGBB` color string. Falls back to black on malformed input.
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// Sequential two-color ramp for heatmap cells. `t` is clamped to [0, 1];
/// 0 maps to `low`, 1 to `high`.
pub fn ramp(low: RGBColor, high: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        lerp(low.0, high.0),
        lerp(low.1, high.1),
        lerp(low.2, high.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(parse_color("#00FF00"), RGBColor(0, 255, 0));
        assert_eq!(parse_color("#1E90FF"), RGBColor(30, 144, 255));

        // Malformed input defaults to black.
        assert_eq!(parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(parse_color("#ZZ0000"), RGBColor(0, 0, 0));
        assert_eq!(parse_color("#FFF"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_ramp_endpoints() {
        let low = RGBColor(247, 244, 249);
        let high = RGBColor(103, 0, 31);

        assert_eq!(ramp(low, high, 0.0), low);
        assert_eq!(ramp(low, high, 1.0), high);
        // Out-of-range values clamp.
        assert_eq!(ramp(low, high, -1.0), low);
        assert_eq!(ramp(low, high, 2.0), high);
    }

    #[test]
    fn test_ramp_midpoint() {
        let mid = ramp(RGBColor(0, 0, 0), RGBColor(255, 255, 255), 0.5);
        assert_eq!(mid, RGBColor(128, 128, 128));
    }
}
