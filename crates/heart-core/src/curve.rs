use crate::params::HeartParams;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Point on the closed-form heart curve for parameter `t` (radians), on the z = 0 plane.
#[inline]
pub fn heart_point(t: f32) -> Vec3 {
    let s = t.sin();
    let x = 16.0 * s * s * s;
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec3::new(x, y, 0.0)
}

/// Sample `count` target positions along the heart curve.
///
/// Returns a flat `[x0, y0, z0, x1, ...]` buffer of length `count * 3`. Each particle
/// draws its own curve parameter, an outward spread factor in
/// `[1, 1 + spread_jitter)` applied to x/y, and a depth in `[-depth_jitter, depth_jitter)`.
pub fn sample_targets<R: Rng + ?Sized>(count: usize, params: &HeartParams, rng: &mut R) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let t = rng.gen_range(0.0..TAU);
        let p = heart_point(t);
        let spread = 1.0 + jitter(rng, 0.0, params.spread_jitter);
        let z = jitter(rng, -params.depth_jitter, params.depth_jitter);
        out.push(p.x * spread);
        out.push(p.y * spread);
        out.push(z);
    }
    out
}

// gen_range panics on an empty range; a zero jitter is a valid configuration.
#[inline]
fn jitter<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
