//! Control points and the piecewise-linear curves they define.
//!
//! A curve is a sparse set of [`ControlPoint`]s. Points are sorted by
//! position before use; querying a position finds the first adjacent pair of
//! points that brackets it and interpolates linearly between them. Positions
//! before the first point or after the last point take the value of that
//! endpoint, so curves never extrapolate.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{color::Component, math::lerp};

/// Lightness used when a curve has no points, or a point has no lightness.
pub const DEFAULT_LIGHTNESS: Component = 0.5;

/// Saturation multiplier used when a curve has no points, or a point has no
/// saturation.
pub const DEFAULT_SATURATION: Component = 1.0;

bitflags! {
    /// Flags to mark any missing values on a [`ControlPoint`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the point does not specify a lightness.
        const LIGHTNESS_IS_NONE = 1 << 0;
        /// Set when the point does not specify a saturation.
        const SATURATION_IS_NONE = 1 << 1;
    }
}

/// Which half of a scale a control point was placed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    /// Shades 50 to 500.
    Light,
    /// Shades 600 to 950.
    Dark,
}

/// Which value of a [`ControlPoint`] a curve editor manipulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// The curve sets lightness.
    Lightness,
    /// The curve sets the saturation (chroma) multiplier.
    Chroma,
}

/// A struct that holds details about a value passed to
/// [`ControlPoint::new`]. Values can be given as a [`Component`] or as an
/// `Option<Component>`, where `None` marks the value as missing.
#[derive(Clone, Copy, Debug)]
pub struct ValueDetails {
    value: Component,
    is_none: bool,
}

impl ValueDetails {
    /// Extract the value and set the given flag if the value is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ValueDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ValueDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}

/// A user-placed anchor on a lightness or chroma curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    /// Normalized position along the curve, 0.0 being the lightest shade.
    pub position: Component,
    lightness: Component,
    saturation: Component,
    /// The half of the scale this point was placed for, if any.
    pub range: Option<RangeType>,
    /// Holds the flags for any missing values.
    pub flags: Flags,
}

impl ControlPoint {
    /// Create a new control point. The lightness and saturation can take
    /// values that convert into a [`ValueDetails`]:
    /// ```rust
    /// use shadecraft::curve::ControlPoint;
    /// let p = ControlPoint::new(0.5, 0.6, None);
    /// assert_eq!(p.lightness(), Some(0.6));
    /// assert_eq!(p.saturation(), None);
    /// ```
    pub fn new(
        position: Component,
        lightness: impl Into<ValueDetails>,
        saturation: impl Into<ValueDetails>,
    ) -> Self {
        let mut flags = Flags::empty();

        let lightness = lightness
            .into()
            .value_and_flag(&mut flags, Flags::LIGHTNESS_IS_NONE);
        let saturation = saturation
            .into()
            .value_and_flag(&mut flags, Flags::SATURATION_IS_NONE);

        Self {
            position,
            lightness,
            saturation,
            range: None,
            flags,
        }
    }

    /// A point that only specifies lightness.
    pub const fn with_lightness(position: Component, lightness: Component) -> Self {
        Self {
            position,
            lightness,
            saturation: 0.0,
            range: None,
            flags: Flags::SATURATION_IS_NONE,
        }
    }

    /// A point that only specifies a saturation multiplier.
    pub const fn with_saturation(position: Component, saturation: Component) -> Self {
        Self {
            position,
            lightness: 0.0,
            saturation,
            range: None,
            flags: Flags::LIGHTNESS_IS_NONE,
        }
    }

    /// A point for the given curve kind, holding `value` as lightness or
    /// saturation.
    pub const fn with_value(kind: CurveKind, position: Component, value: Component) -> Self {
        match kind {
            CurveKind::Lightness => Self::with_lightness(position, value),
            CurveKind::Chroma => Self::with_saturation(position, value),
        }
    }

    /// Tag the point with the half of the scale it was placed for.
    pub const fn in_range(mut self, range: RangeType) -> Self {
        self.range = Some(range);
        self
    }

    /// The lightness of the point, if it has one.
    pub fn lightness(&self) -> Option<Component> {
        if self.flags.contains(Flags::LIGHTNESS_IS_NONE) {
            None
        } else {
            Some(self.lightness)
        }
    }

    /// The saturation of the point, if it has one.
    pub fn saturation(&self) -> Option<Component> {
        if self.flags.contains(Flags::SATURATION_IS_NONE) {
            None
        } else {
            Some(self.saturation)
        }
    }

    /// The value a curve of `kind` reads from this point.
    pub fn value(&self, kind: CurveKind) -> Option<Component> {
        match kind {
            CurveKind::Lightness => self.lightness(),
            CurveKind::Chroma => self.saturation(),
        }
    }
}

/// The pair of control points around a position, and how far along the
/// segment between them the position is.
#[derive(Clone, Copy, Debug)]
pub struct Bracket<'a> {
    /// The point at or before the position.
    pub lower: &'a ControlPoint,
    /// The point at or after the position.
    pub upper: &'a ControlPoint,
    /// Progress from `lower` to `upper`, in [0..1] for finite input.
    pub t: Component,
}

impl<'a> Bracket<'a> {
    fn at(point: &'a ControlPoint) -> Self {
        Self {
            lower: point,
            upper: point,
            t: 0.0,
        }
    }

    /// Interpolate the value selected by `value`, substituting `default` on
    /// either end when the point does not have it.
    pub fn interpolate(
        &self,
        value: impl Fn(&ControlPoint) -> Option<Component>,
        default: Component,
    ) -> Component {
        let lower = value(self.lower).unwrap_or(default);
        let upper = value(self.upper).unwrap_or(default);
        lerp(lower, upper, self.t)
    }

    /// Interpolate the value selected by `value` only when both ends have it.
    pub fn interpolate_both(
        &self,
        value: impl Fn(&ControlPoint) -> Option<Component>,
    ) -> Option<Component> {
        Some(lerp(value(self.lower)?, value(self.upper)?, self.t))
    }
}

/// A piecewise-linear curve through a set of control points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    points: Vec<ControlPoint>,
}

impl Curve {
    /// Create a curve from points in any order. Points sharing a position
    /// keep their relative order.
    pub fn new(points: &[ControlPoint]) -> Self {
        let mut points = points.to_vec();
        points.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { points }
    }

    /// The control points, sorted by position.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Returns true if the curve has no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Find the points around `position`. Returns `None` for an empty curve.
    ///
    /// When several segments contain the position (duplicate positions), the
    /// first one in sorted order wins.
    pub fn bracket(&self, position: Component) -> Option<Bracket<'_>> {
        let first = self.points.first()?;
        let last = self.points.last()?;

        if position < first.position {
            return Some(Bracket::at(first));
        }
        if position > last.position {
            return Some(Bracket::at(last));
        }

        // A lone point has no segments and a NaN position misses all of them.
        // Both fall through to the outer pair.
        let (lower, upper) = self
            .points
            .windows(2)
            .find(|pair| position >= pair[0].position && position <= pair[1].position)
            .map_or((first, last), |pair| (&pair[0], &pair[1]));

        let range = upper.position - lower.position;
        let t = if range == 0.0 {
            0.0
        } else {
            (position - lower.position) / range
        };

        Some(Bracket { lower, upper, t })
    }

    /// Interpolate the value of `kind` at `position`.
    pub fn value_at(&self, kind: CurveKind, position: Component) -> Component {
        let default = match kind {
            CurveKind::Lightness => DEFAULT_LIGHTNESS,
            CurveKind::Chroma => DEFAULT_SATURATION,
        };

        self.bracket(position)
            .map_or(default, |bracket| bracket.interpolate(|p| p.value(kind), default))
    }

    /// Interpolate the lightness at `position`.
    pub fn lightness_at(&self, position: Component) -> Component {
        self.value_at(CurveKind::Lightness, position)
    }

    /// Interpolate the saturation multiplier at `position`.
    pub fn chroma_at(&self, position: Component) -> Component {
        self.value_at(CurveKind::Chroma, position)
    }
}

/// Interpolate a lightness at `position` along the curve defined by
/// `points`. An empty set of points gives [`DEFAULT_LIGHTNESS`].
pub fn interpolate_lightness(position: Component, points: &[ControlPoint]) -> Component {
    Curve::new(points).lightness_at(position)
}

/// Interpolate a saturation multiplier at `position` along the curve defined
/// by `points`. An empty set of points gives [`DEFAULT_SATURATION`].
pub fn interpolate_chroma(position: Component, points: &[ControlPoint]) -> Component {
    Curve::new(points).chroma_at(position)
}
