//! The color state of a design system: a primary, an accent and a neutral
//! color, each with its generated scale, plus the curves that shape them.
//!
//! ```rust
//! use shadecraft::{ColorRole, DesignSystem, Shade};
//!
//! let mut system = DesignSystem::default();
//! system.set_base_color(ColorRole::Primary, "#10b981".parse().unwrap());
//! assert_eq!(system.entry(ColorRole::Neutral).base, system.entry(ColorRole::Primary).base);
//! println!("{}", system.entry(ColorRole::Primary).scale.hex(Shade::S500));
//! ```

use std::fmt;

use tracing::debug;

use crate::{
    apply::{apply_color_curves, apply_split_color_curves, SplitCurves},
    config::EngineConfig,
    curve::ControlPoint,
    generate::{generate_color_scale, generate_neutrals},
    models::Rgb,
    shade::ColorScale,
};

/// Default primary color, a blue.
pub const DEFAULT_PRIMARY: Rgb = Rgb::new(0x3b, 0x82, 0xf6);

/// Default accent color, a pink.
pub const DEFAULT_ACCENT: Rgb = Rgb::new(0xec, 0x48, 0x99);

/// The role a color plays in the design system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// The main brand color.
    Primary,
    /// The secondary highlight color.
    Accent,
    /// The gray family, derived from the primary color unless set.
    Neutral,
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorRole::Primary => "primary",
            ColorRole::Accent => "accent",
            ColorRole::Neutral => "neutral",
        })
    }
}

/// A base color and the scale generated from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorEntry {
    /// The color picked by the user.
    pub base: Rgb,
    /// The scale derived from `base`.
    pub scale: ColorScale,
}

/// The curves that shape the primary and accent scales. The neutral scale
/// always comes from [`generate_neutrals`], whatever the curves are.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Curves {
    /// No curves, scales use the fixed lightness profile.
    #[default]
    None,
    /// One lightness and one chroma curve over the whole scale.
    Global {
        /// The lightness curve.
        lightness: Vec<ControlPoint>,
        /// The chroma curve.
        chroma: Vec<ControlPoint>,
    },
    /// Separate curves for the light and dark halves of the scale.
    Split(SplitCurves),
}

impl Curves {
    /// Generate the scale for `base` with these curves.
    pub fn scale(&self, base: Rgb) -> ColorScale {
        match self {
            Curves::None => generate_color_scale(base),
            Curves::Global { lightness, chroma } => {
                if lightness.is_empty() && chroma.is_empty() {
                    generate_color_scale(base)
                } else {
                    apply_color_curves(base, lightness, chroma)
                }
            }
            Curves::Split(curves) => apply_split_color_curves(base, curves),
        }
    }
}

/// Color state of a design system.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignSystem {
    primary: ColorEntry,
    accent: ColorEntry,
    neutral: ColorEntry,
    curves: Curves,
}

impl Default for DesignSystem {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY, DEFAULT_ACCENT)
    }
}

impl DesignSystem {
    /// Create a design system without curves. The neutral scale is derived
    /// from `primary`.
    pub fn new(primary: Rgb, accent: Rgb) -> Self {
        Self::with_curves(primary, accent, Curves::None)
    }

    /// Create a design system whose primary and accent scales are shaped by
    /// `curves`.
    pub fn with_curves(primary: Rgb, accent: Rgb, curves: Curves) -> Self {
        let entry = |base| ColorEntry {
            base,
            scale: curves.scale(base),
        };

        Self {
            primary: entry(primary),
            accent: entry(accent),
            neutral: ColorEntry {
                base: primary,
                scale: generate_neutrals(primary),
            },
            curves,
        }
    }

    /// Create a design system from a configuration. Split curves take
    /// precedence over whole scale curves when both are given.
    pub fn from_config(config: &EngineConfig) -> Self {
        let split = &config.split;
        let curves = if !(split.light_lightness.is_empty()
            && split.dark_lightness.is_empty()
            && split.light_chroma.is_empty()
            && split.dark_chroma.is_empty())
        {
            Curves::Split(config.split_curves())
        } else if !(config.curves.lightness.is_empty() && config.curves.chroma.is_empty()) {
            Curves::Global {
                lightness: config.lightness_points(),
                chroma: config.chroma_points(),
            }
        } else {
            Curves::None
        };

        debug!(?curves, "Creating design system from configuration");

        Self::with_curves(
            config.colors.primary.unwrap_or(DEFAULT_PRIMARY),
            config.colors.accent.unwrap_or(DEFAULT_ACCENT),
            curves,
        )
    }

    /// The base color and scale for `role`.
    pub fn entry(&self, role: ColorRole) -> &ColorEntry {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Accent => &self.accent,
            ColorRole::Neutral => &self.neutral,
        }
    }

    /// The curves shaping the primary and accent scales.
    pub fn curves(&self) -> &Curves {
        &self.curves
    }

    /// Change the base color for `role` and regenerate its scale. Changing the
    /// primary color also derives a new neutral scale from it.
    pub fn set_base_color(&mut self, role: ColorRole, base: Rgb) {
        debug!(%role, %base, "Setting base color");

        match role {
            ColorRole::Primary => {
                self.primary = ColorEntry {
                    base,
                    scale: self.curves.scale(base),
                };
                self.set_neutral(base);
            }
            ColorRole::Accent => {
                self.accent = ColorEntry {
                    base,
                    scale: self.curves.scale(base),
                };
            }
            ColorRole::Neutral => self.set_neutral(base),
        }
    }

    fn set_neutral(&mut self, base: Rgb) {
        self.neutral = ColorEntry {
            base,
            scale: generate_neutrals(base),
        };
    }

    /// Replace the curves and regenerate the primary and accent scales. The
    /// neutral scale is left on [`generate_neutrals`].
    pub fn set_curves(&mut self, curves: Curves) {
        debug!(?curves, "Setting curves");

        self.curves = curves;
        self.primary.scale = self.curves.scale(self.primary.base);
        self.accent.scale = self.curves.scale(self.accent.base);
    }
}
