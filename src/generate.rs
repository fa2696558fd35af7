//! Generate complete color scales from a single base color.
//!
//! All generators keep the hue of the base color (neutrals rotate it
//! slightly) and only vary lightness and saturation in the HSL model.

use tracing::trace;

use crate::{
    color::Component,
    curve::{ControlPoint, Curve, CurveKind, DEFAULT_LIGHTNESS},
    math::normalize_turn,
    models::{Hsl, Rgb},
    shade::{ColorScale, Shade},
};

/// Lightness of every shade produced by [`generate_color_scale`].
pub const SCALE_LIGHTNESS: [Component; Shade::COUNT] = [
    0.97, 0.94, 0.86, 0.76, 0.66, 0.56, 0.46, 0.38, 0.30, 0.22, 0.14,
];

/// Lightness of every shade produced by [`generate_neutrals`].
pub const NEUTRAL_LIGHTNESS: [Component; Shade::COUNT] = [
    0.98, 0.90, 0.82, 0.74, 0.66, 0.58, 0.48, 0.40, 0.32, 0.24, 0.16,
];

/// Control points used by [`generate_custom_color_scale`] when none are given.
pub const DEFAULT_CUSTOM_POINTS: [ControlPoint; 5] = [
    ControlPoint::with_lightness(0.0, 0.97),
    ControlPoint::with_lightness(0.25, 0.85),
    ControlPoint::with_lightness(0.5, 0.56),
    ControlPoint::with_lightness(0.75, 0.32),
    ControlPoint::with_lightness(1.0, 0.14),
];

/// Maximum saturation of a neutral shade.
const NEUTRAL_MAX_SATURATION: Component = 0.08;

/// Scale saturation for how light the shade is: light shades are muted and
/// dark shades are boosted.
fn shade_saturation(saturation: Component, lightness: Component) -> Component {
    if lightness > 0.7 {
        saturation * 0.8
    } else if lightness < 0.3 {
        saturation * 1.2
    } else {
        saturation
    }
}

fn to_rgb(shade: Shade, hsl: Hsl) -> Rgb {
    let rgb = hsl.to_rgb();
    trace!(%shade, hue = hsl.hue, saturation = hsl.saturation, lightness = hsl.lightness, %rgb);
    rgb
}

/// Generate a scale with a fixed lightness profile.
///
/// Near-gray base colors get their saturation boosted 3x so the scale still
/// shows the hue; very saturated base colors are toned down to 0.85x.
/// ```rust
/// use shadecraft::{generate::generate_color_scale, Shade};
/// let scale = generate_color_scale("#3b82f6".parse().unwrap());
/// assert_eq!(scale.hex(Shade::S500), "#387ae6");
/// ```
pub fn generate_color_scale(base: Rgb) -> ColorScale {
    let Hsl {
        hue, saturation, ..
    } = Hsl::from(base);

    let adjustment = if saturation < 0.15 {
        3.0
    } else if saturation > 0.9 {
        0.85
    } else {
        1.0
    };

    ColorScale::from_fn(|shade| {
        let lightness = SCALE_LIGHTNESS[shade.index()];
        let saturation = (shade_saturation(saturation, lightness) * adjustment).clamp(0.0, 1.0);
        to_rgb(shade, Hsl::new(hue, saturation, lightness))
    })
}

/// Generate a scale whose lightness follows the curve through
/// `control_points`. An empty slice uses [`DEFAULT_CUSTOM_POINTS`].
///
/// Saturation is interpolated as an absolute value where both points around
/// a shade specify one. Otherwise the base saturation is muted or boosted by
/// the shade's lightness, as in [`generate_color_scale`].
pub fn generate_custom_color_scale(base: Rgb, control_points: &[ControlPoint]) -> ColorScale {
    let control_points = if control_points.is_empty() {
        &DEFAULT_CUSTOM_POINTS[..]
    } else {
        control_points
    };
    let curve = Curve::new(control_points);

    let Hsl {
        hue, saturation, ..
    } = Hsl::from(base);

    ColorScale::from_fn(|shade| {
        let (lightness, curved_saturation) = match curve.bracket(shade.position()) {
            Some(bracket) => (
                bracket.interpolate(ControlPoint::lightness, DEFAULT_LIGHTNESS),
                bracket.interpolate_both(ControlPoint::saturation),
            ),
            None => (curve.value_at(CurveKind::Lightness, shade.position()), None),
        };

        let saturation = curved_saturation
            .unwrap_or_else(|| shade_saturation(saturation, lightness))
            .clamp(0.0, 1.0);

        to_rgb(shade, Hsl::new(hue, saturation, lightness))
    })
}

/// The HSL tone of a neutral shade, before it is quantized to 8 bits.
fn neutral_tone(base: Hsl, shade: Shade) -> Hsl {
    let hue = if base.hue > 0.3 && base.hue < 0.7 {
        base.hue + 0.05
    } else {
        base.hue - 0.05
    };

    let lightness = NEUTRAL_LIGHTNESS[shade.index()];
    let max_saturation = NEUTRAL_MAX_SATURATION.min(base.saturation * 0.12);
    let saturation = if lightness > 0.9 || lightness < 0.2 {
        max_saturation / 2.0
    } else {
        max_saturation
    };

    Hsl::new(normalize_turn(hue), saturation, lightness)
}

/// Generate a scale of grays tinted with the hue of `base`.
///
/// Cool bases (hue between 0.3 and 0.7 of a turn) rotate the tint forward,
/// everything else rotates it backward. Saturation never exceeds 0.08 and is
/// halved at the very light and very dark ends.
pub fn generate_neutrals(base: Rgb) -> ColorScale {
    let base = Hsl::from(base);
    ColorScale::from_fn(|shade| to_rgb(shade, neutral_tone(base, shade)))
}
