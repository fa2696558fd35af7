//! Model a color in the sRGB color space, either as 8-bit gamma encoded
//! channels or as linear light.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    color::{Component, Components},
    error::{Error, Result},
};

/// A color in the sRGB color space with 8-bit gamma encoded channels. This is
/// the boundary representation of every color the engine produces and is
/// written as `#rrggbb`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Format the color as `#` followed by 6 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Return the channels scaled into [0..1].
    pub fn to_components(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Create a color from channels in [0..1]. Each channel is rounded to the
    /// nearest 8-bit value and clamped, so out of range input saturates.
    pub fn from_components(components: Components) -> Self {
        fn channel(value: Component) -> u8 {
            (value * 255.0).round().clamp(0.0, 255.0) as u8
        }

        Self::new(
            channel(components.0),
            channel(components.1),
            channel(components.2),
        )
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> LinearRgb {
        self.to_components()
            .map(|value| {
                let abs = value.abs();

                if abs < 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            })
            .into()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse 3 or 6 hex digits with an optional leading `#`. The 3 digit
    /// shorthand duplicates each digit, so `#abc` is `#aabbcc`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidHex(s.to_string());

        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => Ok(Self::new(
                parse(0..1)? * 0x11,
                parse(1..2)? * 0x11,
                parse(2..3)? * 0x11,
            )),
            6 => Ok(Self::new(parse(0..2)?, parse(2..4)?, parse(4..6)?)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

shadecraft_macros::gen_model! {
    /// A color in the sRGB color space with no gamma encoding.
    pub struct LinearRgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl LinearRgb {
    /// Convert this model from linear light to gamma encoded 8-bit channels.
    /// Components outside of the sRGB gamut are clipped.
    pub fn to_gamma_encoded(&self) -> Rgb {
        Rgb::from_components(self.to_components().map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        }))
    }
}

/// Parse a hex color. See [`Rgb::from_str`] for the accepted forms.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    hex.parse()
}

/// Format 8-bit channels as `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Returns true if `hex` matches `^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$`, the
/// form accepted from color pickers. Parsing is more lenient than this.
pub fn is_valid_hex(hex: &str) -> bool {
    hex.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("#3b82f6", Rgb::new(0x3b, 0x82, 0xf6))]
    #[test_case("3b82f6", Rgb::new(0x3b, 0x82, 0xf6))]
    #[test_case("#3B82F6", Rgb::new(0x3b, 0x82, 0xf6))]
    #[test_case("#abc", Rgb::new(0xaa, 0xbb, 0xcc))]
    #[test_case("fff", Rgb::new(255, 255, 255))]
    #[test_case("#000000", Rgb::new(0, 0, 0))]
    fn parse_hex(hex: &str, expected: Rgb) {
        assert_eq!(hex_to_rgb(hex).unwrap(), expected);
    }

    #[test_case("")]
    #[test_case("#")]
    #[test_case("#12")]
    #[test_case("#1234")]
    #[test_case("#12345g")]
    #[test_case("##123456")]
    #[test_case("#+12345")]
    #[test_case("#ééé")]
    fn reject_malformed_hex(hex: &str) {
        assert!(matches!(hex_to_rgb(hex), Err(Error::InvalidHex(s)) if s == hex));
    }

    #[test]
    fn format_is_lowercase_and_zero_padded() {
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 3)), "#010203");
        assert_eq!(Rgb::new(0xab, 0xcd, 0xef).to_hex(), "#abcdef");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn hex_round_trip_is_exact() {
        for hex in ["#3b82f6", "#f59e0b", "#000000", "#ffffff", "#0a0b0c"] {
            assert_eq!(hex_to_rgb(hex).unwrap().to_hex(), hex);
        }
        assert_eq!(hex_to_rgb("#3B82F6").unwrap().to_hex(), "#3b82f6");
    }

    #[test]
    fn picker_validation() {
        assert!(is_valid_hex("#3b82f6"));
        assert!(is_valid_hex("#ABC"));
        assert!(!is_valid_hex("3b82f6"));
        assert!(!is_valid_hex("#3b82f"));
        assert!(!is_valid_hex("#3b82fg"));
        assert!(!is_valid_hex("#3b82f6ff"));
    }

    #[test]
    fn out_of_range_components_saturate() {
        let rgb = Rgb::from_components(Components(-0.2, 0.5, 1.7));
        assert_eq!(rgb, Rgb::new(0, 128, 255));
    }

    #[test]
    fn linear_light_round_trip() {
        let rgb = Rgb::new(210, 105, 30);
        let linear = rgb.to_linear_light();
        assert_component_eq!(linear.red, 0.6444796819705821);
        assert_component_eq!(linear.green, 0.14126329114027164);
        assert_component_eq!(linear.blue, 0.012983032342173012);
        assert_eq!(linear.to_gamma_encoded(), rgb);
    }

    #[test]
    fn serde_uses_hex_strings() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Doc {
            color: Rgb,
        }

        let doc: Doc = toml::from_str(r##"color = "#abc""##).unwrap();
        assert_eq!(doc.color, Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(toml::to_string(&doc).unwrap().trim(), r##"color = "#aabbcc""##);

        assert!(toml::from_str::<Doc>(r#"color = "blue""#).is_err());
    }
}
