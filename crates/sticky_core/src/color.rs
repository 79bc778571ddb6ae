use std::fmt;

use thiserror::Error;

/// Background used when nothing valid has been configured.
pub const DEFAULT_BACKGROUND_HEX: &str = "FFFFFF";

/// Alpha applied to the toolbar tint so the page stays faintly visible behind it.
pub const TOOLBAR_TINT_ALPHA: u8 = 210;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color text is empty")]
    Empty,
    #[error("expected 6 hex digits, got {0}")]
    WrongLength(usize),
    #[error("invalid hex digits in {0:?}")]
    InvalidDigits(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized uppercase form without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceived brightness in `0.0..=1.0`.
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    pub fn is_dark(self) -> bool {
        self.luminance() < 0.5
    }

    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// CSS `rgba()` notation, alpha scaled to `0..=1`.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            f64::from(self.a) / 255.0
        )
    }
}

/// Parse `RRGGBB` or `#RRGGBB` (surrounding whitespace ignored).
pub fn parse_hex_color(text: &str) -> Result<HexColor, ColorParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.chars().count() != 6 {
        return Err(ColorParseError::WrongLength(digits.chars().count()));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigits(digits.to_string()));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorParseError::InvalidDigits(digits.to_string()))?;
    Ok(HexColor::rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// Uppercase hex for valid input, [`DEFAULT_BACKGROUND_HEX`] otherwise.
pub fn normalize_hex_text(text: &str) -> String {
    parse_hex_color(text)
        .map(HexColor::to_hex)
        .unwrap_or_else(|_| DEFAULT_BACKGROUND_HEX.to_string())
}
