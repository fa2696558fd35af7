//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::{Component, Components},
    error::Result,
    models::rgb::Rgb,
};

shadecraft_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space. All
    /// three components are in [0..1]; the hue is a fraction of a full turn.
    pub struct Hsl {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Hsl {
    /// Convert to 8-bit sRGB. Channels are rounded half up and clamped.
    pub fn to_rgb(&self) -> Rgb {
        let Self {
            hue,
            saturation,
            lightness,
        } = *self;

        if saturation == 0.0 {
            return Rgb::from_components(Components(lightness, lightness, lightness));
        }

        fn hue_to_rgb(p: Component, q: Component, t: Component) -> Component {
            let t = if t < 0.0 {
                t + 1.0
            } else if t > 1.0 {
                t - 1.0
            } else {
                t
            };

            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Rgb::from_components(Components(
            hue_to_rgb(p, q, hue + 1.0 / 3.0),
            hue_to_rgb(p, q, hue),
            hue_to_rgb(p, q, hue - 1.0 / 3.0),
        ))
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        let Components(red, green, blue) = value.to_components();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        // Achromatic.
        if max == min {
            return Self::new(0.0, 0.0, lightness);
        }

        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let hue = if max == red {
            (green - blue) / d + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / d + 2.0
        } else {
            (red - green) / d + 4.0
        };

        Self::new(hue / 6.0, saturation, lightness)
    }
}

/// Parse a hex color and convert it to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(Hsl::from(hex.parse::<Rgb>()?))
}

/// Convert an HSL color to `#rrggbb`.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_rgb().to_hex()
}
