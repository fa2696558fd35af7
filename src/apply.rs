//! Reshape a scale with user edited lightness and chroma curves.
//!
//! Curves are sampled at each shade's position and applied to the base
//! color in HSL: the lightness curve sets the shade's lightness directly and
//! the chroma curve multiplies the base saturation.

use tracing::{trace, warn};

use crate::{
    color::Component,
    curve::{ControlPoint, Curve, RangeType},
    generate::generate_color_scale,
    models::{Hsl, Rgb},
    shade::{ColorScale, Shade},
};

/// Lightness curve used when none is given. Points are denser around the
/// middle to keep contrast near shade 500.
pub const DEFAULT_LIGHTNESS_CURVE: [ControlPoint; 7] = [
    ControlPoint::with_lightness(0.0, 0.98),
    ControlPoint::with_lightness(0.2, 0.9),
    ControlPoint::with_lightness(0.4, 0.75),
    ControlPoint::with_lightness(0.5, 0.6),
    ControlPoint::with_lightness(0.6, 0.45),
    ControlPoint::with_lightness(0.8, 0.25),
    ControlPoint::with_lightness(1.0, 0.1),
];

/// Chroma curve used when none is given.
pub const DEFAULT_CHROMA_CURVE: [ControlPoint; 7] = [
    ControlPoint::with_saturation(0.0, 0.7),
    ControlPoint::with_saturation(0.2, 0.85),
    ControlPoint::with_saturation(0.4, 0.95),
    ControlPoint::with_saturation(0.5, 1.0),
    ControlPoint::with_saturation(0.6, 0.95),
    ControlPoint::with_saturation(0.8, 0.85),
    ControlPoint::with_saturation(1.0, 0.7),
];

/// Lightness curve for shades 50 to 500 when none is given.
pub const DEFAULT_LIGHT_LIGHTNESS_CURVE: [ControlPoint; 5] = [
    ControlPoint::with_lightness(0.0, 0.98).in_range(RangeType::Light),
    ControlPoint::with_lightness(0.25, 0.9).in_range(RangeType::Light),
    ControlPoint::with_lightness(0.5, 0.8).in_range(RangeType::Light),
    ControlPoint::with_lightness(0.75, 0.7).in_range(RangeType::Light),
    ControlPoint::with_lightness(1.0, 0.55).in_range(RangeType::Light),
];

/// Lightness curve for shades 600 to 950 when none is given.
pub const DEFAULT_DARK_LIGHTNESS_CURVE: [ControlPoint; 5] = [
    ControlPoint::with_lightness(0.0, 0.45).in_range(RangeType::Dark),
    ControlPoint::with_lightness(0.25, 0.35).in_range(RangeType::Dark),
    ControlPoint::with_lightness(0.5, 0.25).in_range(RangeType::Dark),
    ControlPoint::with_lightness(0.75, 0.15).in_range(RangeType::Dark),
    ControlPoint::with_lightness(1.0, 0.05).in_range(RangeType::Dark),
];

/// Chroma curve for shades 50 to 500 when none is given.
pub const DEFAULT_LIGHT_CHROMA_CURVE: [ControlPoint; 5] = flat_chroma(RangeType::Light);

/// Chroma curve for shades 600 to 950 when none is given.
pub const DEFAULT_DARK_CHROMA_CURVE: [ControlPoint; 5] = flat_chroma(RangeType::Dark);

const fn flat_chroma(range: RangeType) -> [ControlPoint; 5] {
    [
        ControlPoint::with_saturation(0.0, 1.0).in_range(range),
        ControlPoint::with_saturation(0.25, 1.0).in_range(range),
        ControlPoint::with_saturation(0.5, 1.0).in_range(range),
        ControlPoint::with_saturation(0.75, 1.0).in_range(range),
        ControlPoint::with_saturation(1.0, 1.0).in_range(range),
    ]
}

fn or_default<'a>(points: &'a [ControlPoint], default: &'a [ControlPoint]) -> &'a [ControlPoint] {
    if points.is_empty() {
        default
    } else {
        points
    }
}

/// Compute the color of a shade from a target lightness and a saturation
/// multiplier. Returns `None` if either is not a finite number.
fn shade_color(
    base: Hsl,
    shade: Shade,
    lightness: Component,
    multiplier: Component,
) -> Option<Rgb> {
    if !lightness.is_finite() || !multiplier.is_finite() {
        warn!(%shade, lightness, multiplier, "Curve produced a value that is not a number");
        return None;
    }

    let saturation = (base.saturation * multiplier).clamp(0.0, 1.0);
    let rgb = Hsl::new(base.hue, saturation, lightness).to_rgb();
    trace!(%shade, lightness, saturation, %rgb);
    Some(rgb)
}

/// Apply a lightness and a chroma curve over the whole scale.
///
/// Each shade samples both curves at its position (50 at 0.0 up to 950 at
/// 1.0). An empty slice uses [`DEFAULT_LIGHTNESS_CURVE`] or
/// [`DEFAULT_CHROMA_CURVE`]. If the curves produce a value that is not a
/// number the result falls back to [`generate_color_scale`].
/// ```rust
/// use shadecraft::{apply::apply_color_curves, Shade};
/// let scale = apply_color_curves("#f59e0b".parse().unwrap(), &[], &[]);
/// assert_eq!(scale.hex(Shade::S500), "#f7b13b");
/// ```
pub fn apply_color_curves(
    base: Rgb,
    lightness_points: &[ControlPoint],
    chroma_points: &[ControlPoint],
) -> ColorScale {
    let lightness = Curve::new(or_default(lightness_points, &DEFAULT_LIGHTNESS_CURVE));
    let chroma = Curve::new(or_default(chroma_points, &DEFAULT_CHROMA_CURVE));
    let hsl = Hsl::from(base);

    ColorScale::try_from_fn(|shade| {
        let position = shade.position();
        shade_color(
            hsl,
            shade,
            lightness.lightness_at(position),
            chroma.chroma_at(position),
        )
    })
    .unwrap_or_else(|| {
        warn!(%base, "Falling back to the default color scale");
        generate_color_scale(base)
    })
}

/// Separate curves for the light (50 to 500) and dark (600 to 950) halves of
/// a scale.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitCurves {
    /// Lightness curve for the light half.
    pub light_lightness: Vec<ControlPoint>,
    /// Lightness curve for the dark half.
    pub dark_lightness: Vec<ControlPoint>,
    /// Chroma curve for the light half.
    pub light_chroma: Vec<ControlPoint>,
    /// Chroma curve for the dark half.
    pub dark_chroma: Vec<ControlPoint>,
}

impl Default for SplitCurves {
    fn default() -> Self {
        Self {
            light_lightness: DEFAULT_LIGHT_LIGHTNESS_CURVE.to_vec(),
            dark_lightness: DEFAULT_DARK_LIGHTNESS_CURVE.to_vec(),
            light_chroma: DEFAULT_LIGHT_CHROMA_CURVE.to_vec(),
            dark_chroma: DEFAULT_DARK_CHROMA_CURVE.to_vec(),
        }
    }
}

impl SplitCurves {
    /// The lightness curve for a half of the scale. Falls back to the default
    /// curve when empty.
    pub fn lightness(&self, range: RangeType) -> &[ControlPoint] {
        match range {
            RangeType::Light => or_default(&self.light_lightness, &DEFAULT_LIGHT_LIGHTNESS_CURVE),
            RangeType::Dark => or_default(&self.dark_lightness, &DEFAULT_DARK_LIGHTNESS_CURVE),
        }
    }

    /// The chroma curve for a half of the scale. Falls back to the default
    /// curve when empty.
    pub fn chroma(&self, range: RangeType) -> &[ControlPoint] {
        match range {
            RangeType::Light => or_default(&self.light_chroma, &DEFAULT_LIGHT_CHROMA_CURVE),
            RangeType::Dark => or_default(&self.dark_chroma, &DEFAULT_DARK_CHROMA_CURVE),
        }
    }
}

/// Apply separate curves to the light and dark halves of the scale.
///
/// Shades sample the curves of their own half at their position inside that
/// half, so shade 500 sits at the end of the light curves and shade 600 at
/// the start of the dark curves. Falls back to [`generate_color_scale`] like
/// [`apply_color_curves`].
pub fn apply_split_color_curves(base: Rgb, curves: &SplitCurves) -> ColorScale {
    let curve = |range: RangeType| {
        (
            Curve::new(curves.lightness(range)),
            Curve::new(curves.chroma(range)),
        )
    };
    let light = curve(RangeType::Light);
    let dark = curve(RangeType::Dark);
    let hsl = Hsl::from(base);

    ColorScale::try_from_fn(|shade| {
        let (lightness, chroma) = match shade.range() {
            RangeType::Light => &light,
            RangeType::Dark => &dark,
        };
        let position = shade.range_position();
        shade_color(
            hsl,
            shade,
            lightness.lightness_at(position),
            chroma.chroma_at(position),
        )
    })
    .unwrap_or_else(|| {
        warn!(%base, "Falling back to the default color scale");
        generate_color_scale(base)
    })
}
