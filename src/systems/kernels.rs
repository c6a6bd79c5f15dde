//! SPH smoothing kernels (Müller et al. 2003).
//!
//! Pure functions of separation and support radius h. They know nothing about
//! particle indices; callers only evaluate them on pairs within h.

use std::f32::consts::PI;

use crate::core::math::Vec3;

/// Poly6 density kernel: `315/(64π h⁹) (h² − r²)³` for `0 ≤ r ≤ h`.
#[inline]
pub fn poly6(r: f32, h: f32) -> f32 {
    SphKernels::new(h).poly6_sq(r * r)
}

/// Spiky gradient for pressure: `−45/(π h⁶) (h − r)² r̂` for `0 < r ≤ h`.
///
/// `r` is the separation vector `xi − xj`. Zero at r = 0.
#[inline]
pub fn spiky_gradient(r: Vec3, h: f32) -> Vec3 {
    SphKernels::new(h).spiky_gradient(r, r.length())
}

/// Viscosity Laplacian: `45/(π h⁶) (h − r)` for `0 ≤ r ≤ h`.
#[inline]
pub fn viscosity_laplacian(r: f32, h: f32) -> f32 {
    SphKernels::new(h).viscosity_laplacian(r)
}

/// Kernel coefficients precomputed for one smoothing radius.
#[derive(Clone, Copy, Debug)]
pub struct SphKernels {
    pub h: f32,
    pub h_sq: f32,
    poly6_coeff: f32,
    spiky_grad_coeff: f32,
    visc_lap_coeff: f32,
}

impl SphKernels {
    pub fn new(h: f32) -> Self {
        let h3 = h * h * h;
        let h6 = h3 * h3;
        let h9 = h6 * h3;
        Self {
            h,
            h_sq: h * h,
            poly6_coeff: 315.0 / (64.0 * PI * h9),
            spiky_grad_coeff: -45.0 / (PI * h6),
            visc_lap_coeff: 45.0 / (PI * h6),
        }
    }

    /// Poly6 from squared distance (saves the sqrt in the density pass).
    #[inline]
    pub fn poly6_sq(&self, r_sq: f32) -> f32 {
        if !(0.0..=self.h_sq).contains(&r_sq) {
            return 0.0;
        }
        let diff = self.h_sq - r_sq;
        self.poly6_coeff * diff * diff * diff
    }

    /// Spiky gradient given the separation vector and its length.
    #[inline]
    pub fn spiky_gradient(&self, r: Vec3, r_len: f32) -> Vec3 {
        if r_len > self.h || r_len <= 0.0 {
            return Vec3::ZERO;
        }
        let diff = self.h - r_len;
        r * (self.spiky_grad_coeff * diff * diff / r_len)
    }

    #[inline]
    pub fn viscosity_laplacian(&self, r_len: f32) -> f32 {
        if !(0.0..=self.h).contains(&r_len) {
            return 0.0;
        }
        self.visc_lap_coeff * (self.h - r_len)
    }

    /// Density a lone particle gets from its own mass.
    #[inline]
    pub fn self_density(&self, mass: f32) -> f32 {
        mass * self.poly6_sq(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 0.5;

    #[test]
    fn kernels_vanish_beyond_support() {
        for r in [H * 1.0001, H * 1.5, 3.0, 100.0] {
            assert_eq!(poly6(r, H), 0.0);
            assert_eq!(viscosity_laplacian(r, H), 0.0);
            assert_eq!(spiky_gradient(Vec3::new(r, 0.0, 0.0), H), Vec3::ZERO);
        }
    }

    #[test]
    fn kernels_are_continuous_at_support_edge() {
        let eps = 1e-4;
        assert_eq!(poly6(H, H), 0.0);
        assert_eq!(viscosity_laplacian(H, H), 0.0);
        assert_eq!(spiky_gradient(Vec3::new(H, 0.0, 0.0), H), Vec3::ZERO);

        assert!(poly6(H - eps, H).abs() < 1e-6);
        assert!(viscosity_laplacian(H - eps, H).abs() < 0.2);
        assert!(spiky_gradient(Vec3::new(H - eps, 0.0, 0.0), H).length() < 1e-4);
    }

    #[test]
    fn poly6_matches_closed_form_at_origin() {
        let expected = 315.0 / (64.0 * PI * H.powi(9)) * H.powi(6);
        assert!((poly6(0.0, H) - expected).abs() / expected < 1e-5);
    }

    #[test]
    fn spiky_gradient_points_toward_neighbor_and_is_zero_at_origin() {
        assert_eq!(spiky_gradient(Vec3::ZERO, H), Vec3::ZERO);
        let g = spiky_gradient(Vec3::new(0.2, 0.0, 0.0), H);
        assert!(g.x < 0.0);
        assert_eq!(g.y, 0.0);
        let expected = 45.0 / (PI * H.powi(6)) * (H - 0.2) * (H - 0.2);
        assert!((g.length() - expected).abs() / expected < 1e-5);
    }

    #[test]
    fn spiky_gradient_is_odd() {
        let r = Vec3::new(0.1, -0.2, 0.15);
        let a = spiky_gradient(r, H);
        let b = spiky_gradient(-r, H);
        assert!((a + b).length() < 1e-4);
    }
}
