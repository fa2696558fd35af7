//! Color models and the conversions between them.
//!
//! Each color space/form is modeled with its own type and conversions are
//! only implemented where they make sense:
//!
//! ```text
//! hex <-> Rgb <-> Hsl
//!          |
//!      LinearRgb <-> Oklab <-> Oklch
//! ```
//!
//! ```rust
//! use shadecraft::models::{Hsl, Oklch, Rgb};
//!
//! let blue: Rgb = "#3b82f6".parse().unwrap();
//! let hsl = Hsl::from(blue);
//! let oklch = Oklch::from(blue);
//! assert_eq!(hsl.to_rgb(), blue);
//! assert_eq!(oklch.to_rgb(), blue);
//! ```

pub mod hsl;
pub mod oklab;
pub mod rgb;

pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use oklab::{hex_to_oklch, oklch_to_hex, Oklab, Oklch};
pub use rgb::{hex_to_rgb, is_valid_hex, rgb_to_hex, LinearRgb, Rgb};
