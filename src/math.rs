//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in the upper left corner of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from 9 values. Each line of arguments is a column
/// of the conventional row-major matrix, because euclid multiplies row
/// vectors.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Wrap a hue in degrees into the range [0..360).
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Wrap a hue expressed as a fraction of a turn into the range [0..1).
pub fn normalize_turn(hue: Component) -> Component {
    hue.rem_euclid(1.0)
}

/// Returns true if the value is small enough to be considered zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-6
}

/// Linearly interpolate from `a` to `b` with `t` as the progress between
/// them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}
