use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Decimal places kept on a plane-normal cosine before `acos`.
pub const COSINE_DECIMALS: i32 = 5;

/// Maps an angle given by its cosine onto `[0, 1]` (0° → 0, 180° → 1).
#[inline]
pub fn scaled_angle(cosine: f64) -> f64 {
    cosine.acos() / PI
}

/// Rounds half to even at the given number of decimal places.
#[inline]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Largest binary exponent a rescaling factor may undo; keeps the factor itself normal.
const MAX_RESCALE_EXPONENT: f64 = 1000.0;

/// Power of two that brings `magnitude` to about 1.
///
/// Multiplying by a power of two is exact, so rescaled arithmetic gives the same
/// directions and cosines as the unscaled one wherever the latter does not overflow
/// or underflow.
fn power_of_two_scale(magnitude: f64) -> f64 {
    let exponent = magnitude
        .log2()
        .floor()
        .clamp(-MAX_RESCALE_EXPONENT, MAX_RESCALE_EXPONENT);
    2f64.powi(-(exponent as i32))
}

/// Scales `v` by a power of two so that its largest component is about 1.
///
/// The zero vector is returned unchanged.
pub fn rescale(v: &Vector3<f64>) -> Vector3<f64> {
    let magnitude = v.amax();
    if magnitude == 0.0 {
        return *v;
    }
    v * power_of_two_scale(magnitude)
}

/// Direction of `to - from`, rescaled as by [`rescale`].
///
/// Both points are brought to a common scale before subtracting, so the difference of
/// two finite positions never overflows. The result is exactly zero if and only if the
/// points coincide.
pub fn displacement(from: &Point3<f64>, to: &Point3<f64>) -> Vector3<f64> {
    let magnitude = from.coords.amax().max(to.coords.amax());
    if magnitude == 0.0 {
        return Vector3::zeros();
    }
    let factor = power_of_two_scale(magnitude);
    rescale(&(to.coords * factor - from.coords * factor))
}

/// Cosine of the angle between two non-zero vectors.
#[inline]
pub fn cosine_between(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    let (u, v) = (rescale(u), rescale(v));
    u.dot(&v) / (u.norm() * v.norm())
}

/// Normal of the plane through three consecutive positions, along `(b - a) × (c - b)`.
///
/// Only the direction is meaningful: the bond vectors are rescaled before the cross
/// product. The result is the zero vector when the three points are collinear or two of
/// them coincide.
#[inline]
pub fn plane_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    rescale(&displacement(a, b).cross(&displacement(b, c)))
}

#[inline]
pub fn is_degenerate(v: &Vector3<f64>) -> bool {
    *v == Vector3::zeros()
}

/// Sign-carrying evaluation of `n·p + d` for the plane with normal `n` passing through
/// `on_plane`, where `d = -n·on_plane`.
///
/// Computed as `n·(p - on_plane)` on rescaled operands, so the value is a positive
/// multiple of `n·p + d`: its sign is exact, its magnitude is not a distance.
pub fn signed_plane_offset(
    normal: &Vector3<f64>,
    on_plane: &Point3<f64>,
    point: &Point3<f64>,
) -> f64 {
    rescale(normal).dot(&displacement(on_plane, point))
}
