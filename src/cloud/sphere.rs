//! Sphere placement, incremental rotation and depth styling.
//!
//! Pure functions over [`Point3`]; [`TagCloud`](super::TagCloud) strings them
//! together into initialize/step/draw.

use crate::domain::Point3;
use rand::Rng;
use std::f64::consts::PI;

/// Fraction of the smaller surface dimension used as the sphere radius.
pub const RADIUS_FACTOR: f64 = 0.4;

/// Radians of rotation per pixel of pointer offset from the surface center.
pub const POINTER_SENSITIVITY: f64 = 0.0001;

/// Radius for a surface of the given size.
#[must_use]
pub fn radius_for(width: f64, height: f64) -> f64 {
    width.min(height) * RADIUS_FACTOR
}

/// Places one of `count` labels on a sphere of `radius`.
///
/// `phi = acos(-1 + (2u - 1))`, `theta = sqrt(count * pi) * phi`. The `acos`
/// argument ranges over `[-2, 0)`; values below `-1` are clamped so those
/// labels sit on the south pole instead of becoming NaN. This clusters labels
/// near the poles and is kept as-is: the look of the cloud depends on it.
pub fn sample_position<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f64) -> Point3 {
    let u: f64 = rng.gen();
    position_from_unit(u, count, radius)
}

/// Deterministic half of [`sample_position`], for a uniform sample `u` in `[0, 1)`.
#[must_use]
pub fn position_from_unit(u: f64, count: usize, radius: f64) -> Point3 {
    let arg = (-1.0 + (2.0 * u - 1.0)).clamp(-1.0, 1.0);
    let phi = arg.acos();
    #[allow(clippy::cast_precision_loss)]
    let theta = (count as f64 * PI).sqrt() * phi;

    Point3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

/// Rotates `(y, z)` about the X axis by `angle` radians.
#[must_use]
pub fn rotate_x(p: Point3, angle: f64) -> Point3 {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotates `(x, z)` about the Y axis by `angle` radians.
#[must_use]
pub fn rotate_y(p: Point3, angle: f64) -> Point3 {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Visual parameters derived from a label's depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStyle {
    /// 0 at the back of the sphere, 1 at the front.
    pub scale: f64,
    /// Opacity in `[0.5, 1]`.
    pub alpha: f64,
    /// Font size in pixels, `[10, 22]`.
    pub font_size: f64,
}

/// Computes scale, alpha and font size for depth `z` on a sphere of `radius`.
///
/// Accumulated rotation can drift a point a hair off the sphere, so `scale`
/// is clamped into `[0, 1]`.
#[must_use]
pub fn depth_style(z: f64, radius: f64) -> DepthStyle {
    let scale = if radius > 0.0 {
        ((z + radius) / (2.0 * radius)).clamp(0.0, 1.0)
    } else {
        1.0
    };

    DepthStyle {
        scale,
        alpha: scale * 0.5 + 0.5,
        font_size: scale * 12.0 + 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_uses_smaller_dimension() {
        assert!((radius_for(500.0, 300.0) - 120.0).abs() < 1e-12);
        assert!((radius_for(200.0, 800.0) - 80.0).abs() < 1e-12);
    }

    #[test]
    fn samples_at_or_below_zero_land_on_south_pole() {
        let p = position_from_unit(0.25, 10, 100.0);
        assert!((p.z + 100.0).abs() < 1e-9);
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
    }

    #[test]
    fn upper_half_samples_follow_the_formula() {
        let u = 0.9_f64;
        let n = 7;
        let r = 50.0;
        let phi = (-1.0 + (2.0 * u - 1.0)).acos();
        let theta = (7.0 * PI).sqrt() * phi;
        let p = position_from_unit(u, n, r);
        assert!((p.x - r * theta.cos() * phi.sin()).abs() < 1e-12);
        assert!((p.y - r * theta.sin() * phi.sin()).abs() < 1e-12);
        assert!((p.z - r * phi.cos()).abs() < 1e-12);
    }

    #[test]
    fn rotations_preserve_length() {
        let p = Point3::new(3.0, -4.0, 12.0);
        let q = rotate_y(rotate_x(p, 0.3), -1.1);
        assert!((q.norm() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn zero_angle_rotation_is_identity() {
        let p = Point3::new(1.5, -2.25, 0.125);
        assert_eq!(rotate_y(rotate_x(p, 0.0), 0.0), p);
    }

    #[test]
    fn depth_style_bounds() {
        let back = depth_style(-10.0, 10.0);
        let front = depth_style(10.0, 10.0);
        assert_eq!(back.scale, 0.0);
        assert_eq!(back.alpha, 0.5);
        assert_eq!(back.font_size, 10.0);
        assert_eq!(front.scale, 1.0);
        assert_eq!(front.alpha, 1.0);
        assert_eq!(front.font_size, 22.0);

        let drifted = depth_style(10.000_001, 10.0);
        assert_eq!(drifted.scale, 1.0);
    }
}
