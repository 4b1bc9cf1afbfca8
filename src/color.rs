use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur while parsing a CSS-style color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("unsupported color syntax: {0:?}")]
    UnsupportedSyntax(String),

    #[error("invalid component {component:?} in color {input:?}")]
    InvalidComponent { input: String, component: String },
}

/// An immutable RGBA color.
///
/// Channels are `0..=255`; alpha is `0.0..=1.0`, matching CSS `rgba()`.
/// A fresh value is constructed on every brush configuration update, so a
/// color can never be mutated behind the controller's back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Render as a CSS `rgba(...)` string, e.g. `rgba(0,0,0,0.5)`.
    pub fn to_rgba_string(&self) -> String {
        self.to_string()
    }

    /// Convert to the host engine's color type.
    pub fn to_color32(&self) -> egui::Color32 {
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

/// Semi-transparent black, the stock brush color.
impl Default for Rgba {
    fn default() -> Self {
        Self::new(0, 0, 0, 0.5)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(trimmed, hex);
        }
        if let Some(inner) = strip_function(trimmed, "rgba") {
            return parse_components(trimmed, inner, true);
        }
        if let Some(inner) = strip_function(trimmed, "rgb") {
            return parse_components(trimmed, inner, false);
        }
        Err(ColorParseError::UnsupportedSyntax(trimmed.to_string()))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rgba_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

fn strip_function<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(input: &str, hex: &str) -> Result<Rgba, ColorParseError> {
    // The fixed byte offsets below assume single-byte characters
    if !hex.is_ascii() {
        return Err(ColorParseError::UnsupportedSyntax(input.to_string()));
    }

    let channel = |part: &str| {
        u8::from_str_radix(part, 16).map_err(|_| ColorParseError::InvalidComponent {
            input: input.to_string(),
            component: part.to_string(),
        })
    };

    match hex.len() {
        // #rgb: each nibble doubled
        3 => {
            let mut channels = [0u8; 3];
            for (slot, ch) in channels.iter_mut().zip(hex.chars()) {
                let nibble = channel(&ch.to_string())?;
                *slot = nibble << 4 | nibble;
            }
            Ok(Rgba::opaque(channels[0], channels[1], channels[2]))
        }
        6 => Ok(Rgba::opaque(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Ok(Rgba::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            f32::from(channel(&hex[6..8])?) / 255.0,
        )),
        _ => Err(ColorParseError::UnsupportedSyntax(input.to_string())),
    }
}

fn parse_components(input: &str, inner: &str, with_alpha: bool) -> Result<Rgba, ColorParseError> {
    let invalid = |part: &str| ColorParseError::InvalidComponent {
        input: input.to_string(),
        component: part.to_string(),
    };

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::UnsupportedSyntax(input.to_string()));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(parts.iter().copied()) {
        *slot = part.parse().map_err(|_| invalid(part))?;
    }

    let alpha = if with_alpha {
        let part = parts[3];
        let value: f32 = part.parse().map_err(|_| invalid(part))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(part));
        }
        value
    } else {
        1.0
    };

    Ok(Rgba::new(channels[0], channels[1], channels[2], alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgba_function() {
        let color: Rgba = "rgba(255, 0, 0, 1)".parse().unwrap();
        assert_eq!(color, Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn parses_rgb_function_as_opaque() {
        let color: Rgba = "rgb(10,20,30)".parse().unwrap();
        assert_eq!(color, Rgba::new(10, 20, 30, 1.0));
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#ff8000".parse::<Rgba>().unwrap(), Rgba::opaque(255, 128, 0));
        assert_eq!("#f80".parse::<Rgba>().unwrap(), Rgba::opaque(255, 136, 0));

        let with_alpha = "#00000080".parse::<Rgba>().unwrap();
        assert_eq!((with_alpha.r, with_alpha.g, with_alpha.b), (0, 0, 0));
        assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_unknown_syntax() {
        assert!(matches!(
            "hsl(0, 100%, 50%)".parse::<Rgba>(),
            Err(ColorParseError::UnsupportedSyntax(_))
        ));
    }

    #[test]
    fn rejects_non_ascii_hex_without_panicking() {
        // "€" is three bytes, so the payload length looks like "#rrggbb"
        assert!(matches!(
            "#€€".parse::<Rgba>(),
            Err(ColorParseError::UnsupportedSyntax(_))
        ));
        assert!(matches!(
            "#é1".parse::<Rgba>(),
            Err(ColorParseError::UnsupportedSyntax(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(matches!(
            "rgba(300,0,0,1)".parse::<Rgba>(),
            Err(ColorParseError::InvalidComponent { .. })
        ));
        assert!(matches!(
            "rgba(0,0,0,1.5)".parse::<Rgba>(),
            Err(ColorParseError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let color = Rgba::new(12, 34, 56, 0.5);
        assert_eq!(color.to_rgba_string().parse::<Rgba>().unwrap(), color);
    }

    #[test]
    fn converts_to_host_color() {
        assert_eq!(
            Rgba::new(12, 34, 56, 0.5).to_color32(),
            egui::Color32::from_rgba_unmultiplied(12, 34, 56, 128)
        );
        assert_eq!(
            Rgba::opaque(255, 0, 0).to_color32(),
            egui::Color32::from_rgb(255, 0, 0)
        );
    }

    #[test]
    fn serializes_as_css_string() {
        let json = serde_json::to_string(&Rgba::default()).unwrap();
        assert_eq!(json, "\"rgba(0,0,0,0.5)\"");

        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba::default());
    }
}
