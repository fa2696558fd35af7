//! Models for the Oklab color space in its rectangular (Oklab) and polar
//! (Oklch) forms.
//! <https://bottosson.github.io/posts/oklab/>

use crate::{
    color::Component,
    error::Result,
    math::{almost_zero, normalize_hue, transform, transform_3x3, Transform},
    models::rgb::{LinearRgb, Rgb},
};

shadecraft_macros::gen_model! {
    /// The model for a color specified in the oklab color space with the
    /// rectangular orthogonal form.
    pub struct Oklab {
        /// The lightness component, in [0..1].
        lightness: Component,
        /// The a (green-red) component.
        a: Component,
        /// The b (blue-yellow) component.
        b: Component,
    }
}

shadecraft_macros::gen_model! {
    /// The model for a color specified in the oklab color space with the
    /// cylindrical polar form.
    pub struct Oklch {
        /// The lightness component, in [0..1].
        lightness: Component,
        /// The chroma component, never negative.
        chroma: Component,
        /// The hue component in degrees, in [0..360).
        hue: Component,
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_LMS: Transform = transform_3x3(
    0.4122214708, 0.2119034982, 0.0883024619,
    0.5363325363, 0.6806995451, 0.2817188376,
    0.0514459929, 0.1073969566, 0.6299787005,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: Transform = transform_3x3(
     0.2104542553,  1.9779984951,  0.0259040371,
     0.7936177850, -2.4285922050,  0.7827717662,
    -0.0040720468,  0.4505937099, -0.8086757660,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: Transform = transform_3x3(
    1.0,           1.0,           1.0,
    0.3963377774, -0.1055613458, -0.0894841775,
    0.2158037573, -0.0638541728, -1.2914855480,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_LINEAR_SRGB: Transform = transform_3x3(
     4.0767416621, -1.2684380046, -0.0041960863,
    -3.3077115913,  2.6097574011, -0.7034186147,
     0.2309699292, -0.3413193965,  1.7076147010,
);

impl From<LinearRgb> for Oklab {
    fn from(value: LinearRgb) -> Self {
        let lms = transform(&LINEAR_SRGB_TO_LMS, value.to_components());
        let lms = lms.map(|v| v.cbrt());
        transform(&LMS_TO_OKLAB, lms).into()
    }
}

impl Oklab {
    /// Convert to sRGB with no gamma encoding. The result may be outside of
    /// the sRGB gamut.
    pub fn to_linear_light(&self) -> LinearRgb {
        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_LINEAR_SRGB, lms).into()
    }

    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. Achromatic colors get a hue of 0.
    pub fn to_polar(&self) -> Oklch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Oklch::new(self.lightness, chroma, hue)
    }
}

impl Oklch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Oklab {
        let hue = self.hue.to_radians();
        Oklab::new(
            self.lightness,
            self.chroma * hue.cos(),
            self.chroma * hue.sin(),
        )
    }

    /// Convert to 8-bit sRGB, clipping anything outside of the gamut.
    pub fn to_rgb(&self) -> Rgb {
        self.to_rectangular().to_linear_light().to_gamma_encoded()
    }
}

impl From<Rgb> for Oklab {
    fn from(value: Rgb) -> Self {
        value.to_linear_light().into()
    }
}

impl From<Rgb> for Oklch {
    fn from(value: Rgb) -> Self {
        Oklab::from(value).to_polar()
    }
}

/// Parse a hex color and convert it to Oklch.
pub fn hex_to_oklch(hex: &str) -> Result<Oklch> {
    Ok(Oklch::from(hex.parse::<Rgb>()?))
}

/// Convert an Oklch color to `#rrggbb`. Channels are clamped into range.
pub fn oklch_to_hex(oklch: Oklch) -> String {
    oklch.to_rgb().to_hex()
}
