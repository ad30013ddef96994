use crate::error::ParamError;
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color as chosen in the color picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    pub const GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);
    pub const LIGHT_GRAY: Rgb = Rgb::new(0xd3, 0xd3, 0xd3);
    pub const DODGER_BLUE: Rgb = Rgb::new(0x1e, 0x90, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`, the format `<input type="color">` reports.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS color string with the given opacity.
    pub fn css(self, alpha: f64) -> String {
        if alpha >= 1.0 {
            self.to_hex()
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                alpha.clamp(0.0, 1.0)
            )
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParamError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
                Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

/// Chart colors for the light and dark themes. The wave itself keeps the user
/// color in both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
    pub grid: Rgb,
    pub readout_fill: Rgb,
    pub readout_edge: Rgb,
    pub overlay: Rgb,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Rgb::WHITE,
        foreground: Rgb::BLACK,
        grid: Rgb::LIGHT_GRAY,
        readout_fill: Rgb::WHITE,
        readout_edge: Rgb::GRAY,
        overlay: Rgb::RED,
    };

    pub const DARK: Theme = Theme {
        background: Rgb::BLACK,
        foreground: Rgb::WHITE,
        grid: Rgb::GRAY,
        readout_fill: Rgb::BLACK,
        readout_edge: Rgb::GRAY,
        overlay: Rgb::RED,
    };

    #[inline]
    pub fn select(dark_mode: bool) -> Theme {
        if dark_mode {
            Theme::DARK
        } else {
            Theme::LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#1E90FF".parse::<Rgb>(), Ok(Rgb::DODGER_BLUE));
        assert_eq!("#1e90ff".parse::<Rgb>(), Ok(Rgb::DODGER_BLUE));
        assert_eq!("#fff".parse::<Rgb>(), Ok(Rgb::WHITE));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["1E90FF", "#1E90F", "#GG0000", "", "#", "#1e90ff00"] {
            assert!(bad.parse::<Rgb>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn css_uses_hex_when_opaque() {
        assert_eq!(Rgb::DODGER_BLUE.css(1.0), "#1e90ff");
        assert_eq!(Rgb::RED.css(0.5), "rgba(255, 0, 0, 0.500)");
    }

    #[test]
    fn dark_theme_inverts_background() {
        assert_eq!(Theme::select(false).background, Rgb::WHITE);
        assert_eq!(Theme::select(true).background, Rgb::BLACK);
        assert_eq!(Theme::select(true).grid, Rgb::GRAY);
    }
}
