//! shadecraft derives design-system color scales from a single base color.
//!
//! A scale has 11 shades, from 50 (lightest) to 950 (darkest). Scales can be
//! generated with a fixed lightness profile, shaped by user edited lightness
//! and chroma curves, or turned into a family of tinted grays.
//!
//! ```rust
//! use shadecraft::{apply_color_curves, generate_color_scale, Rgb, Shade};
//!
//! let base: Rgb = "#3b82f6".parse().unwrap();
//! let scale = generate_color_scale(base);
//! assert_eq!(scale.hex(Shade::S950), "#021c45");
//!
//! let curved = apply_color_curves(base, &[], &[]);
//! assert_eq!(curved.to_hex_map()["500"], "#3c83f6");
//! ```

#![deny(missing_docs)]

pub mod apply;
pub mod color;
pub mod config;
pub mod curve;
pub mod design_system;
pub mod error;
pub mod generate;
mod math;
pub mod models;
pub mod plot;
pub mod shade;

#[cfg(test)]
mod test;

pub use apply::{apply_color_curves, apply_split_color_curves, SplitCurves};
pub use color::{Component, Components};
pub use config::EngineConfig;
pub use curve::{interpolate_chroma, interpolate_lightness, ControlPoint, CurveKind, RangeType};
pub use design_system::{ColorRole, Curves, DesignSystem};
pub use error::{Error, Result};
pub use generate::{generate_color_scale, generate_custom_color_scale, generate_neutrals};
pub use models::{Hsl, Oklab, Oklch, Rgb};
pub use plot::{
    curve_path_definition, generate_chroma_points, generate_curve_points,
    ui_points_to_control_points, Canvas, Point,
};
pub use shade::{ColorScale, Shade};
