//! Base-color theming
//!
//! The widget has one color input. Every change recomputes the whole
//! palette from that value: the panel takes the color as-is, the readout is
//! 5% darker, button groups move 5% away from the base (lighter on dark
//! themes, darker on light ones), and number buttons switch between two
//! fixed shades.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{WidgetError, WidgetResult};

/// Brightness below which a color counts as dark
pub const DARK_THRESHOLD: f64 = 128.0;

/// Number button background on dark themes
pub const DARK_BUTTON_BACKGROUND: &str = "#444";
/// Number button text on dark themes
pub const DARK_BUTTON_TEXT: &str = "#eee";
/// Number button background on light themes
pub const LIGHT_BUTTON_BACKGROUND: &str = "#ddd";
/// Number button text on light themes
pub const LIGHT_BUTTON_TEXT: &str = "#000";

/// Readout shade relative to the base color, in percent
const DISPLAY_SHIFT: f64 = -5.0;
/// Button group shade magnitude, in percent
const GROUP_SHIFT: f64 = 5.0;

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl ThemeColor {
    /// Creates a color from channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or the short `#rgb` form
    pub fn from_hex(hex: &str) -> WidgetResult<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| WidgetError::invalid_color(hex))?;

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| WidgetError::invalid_color(hex));

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(WidgetError::invalid_color(hex)),
        }
    }

    /// Returns the `#rrggbb` form
    #[must_use]
    pub fn to_hex(&self) -> String {
        let packed = (1u32 << 24) + (u32::from(self.r) << 16) + (u32::from(self.g) << 8) + u32::from(self.b);
        // Drop the leading "1" that keeps all six digits present
        format!("#{}", &format!("{packed:x}")[1..])
    }

    /// Perceptual brightness in `[0, 255]`
    #[must_use]
    pub fn brightness(&self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    /// Returns true if the color reads as dark
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.brightness() < DARK_THRESHOLD
    }

    /// Scales every channel by `percent`, clamped to `[0, 255]`
    #[must_use]
    pub fn adjusted(&self, percent: f64) -> Self {
        let shift = |c: u8| {
            let c = f64::from(c);
            // Truncation after clamping matches integer packing of the channel
            (c + c * percent / 100.0).clamp(0.0, 255.0).trunc() as u8
        };
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Returns true if `color` (`#rrggbb`) is a dark color
pub fn is_dark_theme(color: &str) -> WidgetResult<bool> {
    Ok(ThemeColor::from_hex(color)?.is_dark())
}

/// Brightens (positive) or darkens (negative) `hex` by `percent`
pub fn adjust_brightness(hex: &str, percent: f64) -> WidgetResult<String> {
    Ok(ThemeColor::from_hex(hex)?.adjusted(percent).to_hex())
}

/// The derived palette for one base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Base color exactly as entered; the panel background
    pub panel: String,
    /// Readout background
    pub display: String,
    /// Button group background
    pub button_group: String,
    /// Number button background
    pub button_background: String,
    /// Number button text color
    pub button_text: String,
    /// Whether the base color is dark
    pub dark: bool,
}

impl Theme {
    /// Derives the palette from a `#rrggbb` base color
    pub fn from_hex(color: &str) -> WidgetResult<Self> {
        let base = ThemeColor::from_hex(color)?;
        let dark = base.is_dark();
        let group_shift = if dark { GROUP_SHIFT } else { -GROUP_SHIFT };
        let (button_background, button_text) = if dark {
            (DARK_BUTTON_BACKGROUND, DARK_BUTTON_TEXT)
        } else {
            (LIGHT_BUTTON_BACKGROUND, LIGHT_BUTTON_TEXT)
        };

        let theme = Self {
            panel: color.to_string(),
            display: base.adjusted(DISPLAY_SHIFT).to_hex(),
            button_group: base.adjusted(group_shift).to_hex(),
            button_background: button_background.to_string(),
            button_text: button_text.to_string(),
            dark,
        };
        debug!(?theme, "theme derived");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ThemeColor =====

    #[test]
    fn test_from_hex_long() {
        assert_eq!(
            ThemeColor::from_hex("#4b5563").unwrap(),
            ThemeColor::new(0x4b, 0x55, 0x63)
        );
        assert_eq!(
            ThemeColor::from_hex("#FFaa00").unwrap(),
            ThemeColor::new(255, 170, 0)
        );
    }

    #[test]
    fn test_from_hex_short() {
        assert_eq!(
            ThemeColor::from_hex("#444").unwrap(),
            ThemeColor::new(0x44, 0x44, 0x44)
        );
        assert_eq!(
            ThemeColor::from_hex("#ddd").unwrap(),
            ThemeColor::new(0xdd, 0xdd, 0xdd)
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        for bad in ["", "#", "123456", "#12345", "#gggggg", "#1234567", "#+1+2+3"] {
            assert!(
                matches!(ThemeColor::from_hex(bad), Err(WidgetError::InvalidColor { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_hex_pads() {
        assert_eq!(ThemeColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(ThemeColor::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(ThemeColor::new(255, 255, 255).to_string(), "#ffffff");
    }

    #[test]
    fn test_brightness() {
        assert_eq!(ThemeColor::new(0, 0, 0).brightness(), 0.0);
        assert_eq!(ThemeColor::new(255, 255, 255).brightness(), 255.0);
        assert_eq!(ThemeColor::new(255, 0, 0).brightness(), 76.245);
    }

    // ===== is_dark_theme =====

    #[test]
    fn test_black_is_dark_white_is_not() {
        assert!(is_dark_theme("#000000").unwrap());
        assert!(!is_dark_theme("#ffffff").unwrap());
    }

    #[test]
    fn test_threshold_boundary() {
        // 128 exactly is light, 127 is dark
        assert!(!is_dark_theme("#808080").unwrap());
        assert!(is_dark_theme("#7f7f7f").unwrap());
    }

    // ===== adjust_brightness =====

    #[test]
    fn test_adjust_darken() {
        // 128 - 6.4 = 121.6 -> 121
        assert_eq!(adjust_brightness("#808080", -5.0).unwrap(), "#797979");
    }

    #[test]
    fn test_adjust_brighten() {
        // 100 + 5 = 105
        assert_eq!(adjust_brightness("#646464", 5.0).unwrap(), "#696969");
    }

    #[test]
    fn test_adjust_clamps_high() {
        assert_eq!(adjust_brightness("#f0f0f0", 50.0).unwrap(), "#ffffff");
        assert_eq!(adjust_brightness("#010101", 1e9).unwrap(), "#ffffff");
    }

    #[test]
    fn test_adjust_clamps_low() {
        assert_eq!(adjust_brightness("#f0f0f0", -150.0).unwrap(), "#000000");
    }

    #[test]
    fn test_adjust_black_stays_black() {
        assert_eq!(adjust_brightness("#000000", 90.0).unwrap(), "#000000");
    }

    #[test]
    fn test_adjust_invalid() {
        assert!(adjust_brightness("blue", 5.0).is_err());
    }

    // ===== Theme =====

    #[test]
    fn test_theme_dark() {
        let theme = Theme::from_hex("#202020").unwrap();
        assert!(theme.dark);
        assert_eq!(theme.panel, "#202020");
        // 32 - 1.6 = 30.4 -> 30
        assert_eq!(theme.display, "#1e1e1e");
        // 32 + 1.6 = 33.6 -> 33
        assert_eq!(theme.button_group, "#212121");
        assert_eq!(theme.button_background, DARK_BUTTON_BACKGROUND);
        assert_eq!(theme.button_text, DARK_BUTTON_TEXT);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::from_hex("#c8c8c8").unwrap();
        assert!(!theme.dark);
        // 200 - 10 = 190
        assert_eq!(theme.display, "#bebebe");
        assert_eq!(theme.button_group, "#bebebe");
        assert_eq!(theme.button_background, LIGHT_BUTTON_BACKGROUND);
        assert_eq!(theme.button_text, LIGHT_BUTTON_TEXT);
    }

    #[test]
    fn test_theme_keeps_input_spelling() {
        let theme = Theme::from_hex("#ABCDEF").unwrap();
        assert_eq!(theme.panel, "#ABCDEF");
    }

    #[test]
    fn test_theme_invalid() {
        assert!(Theme::from_hex("#12").is_err());
    }
}
