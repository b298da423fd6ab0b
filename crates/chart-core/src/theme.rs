// File: crates/chart-core/src/theme.rs
// Summary: Color value type and day/night theme presets injected into a chart session.

use crate::error::{ChartError, Result};

/// Straight (non-premultiplied) ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn parse_hex(s: &str) -> Result<Self> {
        let invalid = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self::from_argb(255, (v >> 16) as u8, (v >> 8) as u8, v as u8)),
            8 => Ok(Self::from_argb((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8)),
            _ => Err(invalid()),
        }
    }

    /// Scale this color's own alpha by `alpha / 255`.
    pub fn faded(self, alpha: u8) -> Self {
        let a = (self.a as u16 * alpha as u16 + 127) / 255;
        Self { a: a as u8, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub title: Color,
    pub grid: Color,
    pub axis_label: Color,
    pub date_label: Color,
    /// Dims the overview outside the slider window.
    pub slider_dim: Color,
    pub slider_frame: Color,
    pub handle_decoration: Color,
}

impl Theme {
    pub fn day() -> Self {
        Self {
            name: "day",
            background: Color::from_rgb(0xff, 0xff, 0xff),
            title: Color::from_rgb(0x22, 0x22, 0x22),
            grid: Color::from_rgb(0xf2, 0xf4, 0xf5),
            axis_label: Color::from_rgb(0x96, 0xa2, 0xaa),
            date_label: Color::from_rgb(0x96, 0xa2, 0xaa),
            slider_dim: Color::from_argb(0x99, 0xe2, 0xee, 0xf9),
            slider_frame: Color::from_argb(0xcc, 0xc0, 0xd1, 0xe1),
            handle_decoration: Color::from_rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn night() -> Self {
        Self {
            name: "night",
            background: Color::from_rgb(0x24, 0x2f, 0x3e),
            title: Color::from_rgb(0xff, 0xff, 0xff),
            grid: Color::from_rgb(0x29, 0x35, 0x44),
            axis_label: Color::from_rgb(0x54, 0x67, 0x78),
            date_label: Color::from_rgb(0x54, 0x67, 0x78),
            slider_dim: Color::from_argb(0x99, 0x30, 0x42, 0x59),
            slider_frame: Color::from_argb(0xcc, 0x56, 0x62, 0x6d),
            handle_decoration: Color::from_rgb(0xff, 0xff, 0xff),
        }
    }

    /// The other member of the day/night pair.
    pub fn toggled(&self) -> Self {
        if self.name == "night" { Self::day() } else { Self::night() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::day()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::day(), Theme::night()]
}

/// Find a theme by its `name`, falling back to day.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::day)
}
