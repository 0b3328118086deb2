// Scalar helpers shared by the lattice noises

// 2^32 - 1, so the largest hash maps exactly to 1.0
const UNIT_DIVISOR: f64 = u32::MAX as f64;

// Map a 32-bit hash onto [0.0, 1.0], both ends included
#[inline]
pub fn to_unit(v: u32) -> f64 {
    v as f64 / UNIT_DIVISOR
}

// Linear interpolation
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

// Quintic fade 6t^5 − 15t^4 + 10t^3
// First and second derivatives vanish at t=0 and t=1
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

// Clamp into [0.0, 1.0]; NaN collapses to 0.0
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

// 2^32, the period of the lattice index
const LATTICE_PERIOD: f64 = 4_294_967_296.0;

// Split a coordinate into its lattice cell and the floor as a float.
// The cell index is the floor reduced modulo 2^32, exact for every finite
// input, so it can be fed straight into hash2d. Non-finite input lands on 0.
#[inline]
pub fn lattice(v: f64) -> (i32, f64) {
    let floor = v.floor();
    (floor.rem_euclid(LATTICE_PERIOD) as u32 as i32, floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_unit_endpoints() {
        assert_eq!(to_unit(0), 0.0);
        assert_eq!(to_unit(u32::MAX), 1.0);
        assert!((to_unit(u32::MAX / 2) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.25, 0.75, 0.0), 0.25);
        assert_eq!(lerp(0.25, 0.75, 1.0), 0.75);
        assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
    }

    #[test]
    fn fade_shape() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
        // monotone on [0, 1]
        let mut prev = 0.0;
        for i in 1..=100 {
            let f = fade(i as f64 / 100.0);
            assert!(f >= prev);
            prev = f;
        }
    }

    #[test]
    fn clamp_unit_edges() {
        assert_eq!(clamp_unit(-0.1), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.3), 0.3);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn lattice_negative_and_wrapping() {
        assert_eq!(lattice(2.7), (2, 2.0));
        assert_eq!(lattice(-0.5), (-1, -1.0));
        assert_eq!(lattice(-3.0), (-3, -3.0));
        // 2^32 + 5 wraps back onto cell 5
        assert_eq!(lattice(4_294_967_301.25).0, 5);
        assert_eq!(lattice(-4_294_967_297.5).0, -2);
    }

    #[test]
    fn lattice_wraps_past_i64_range() {
        // 10^19 mod 2^32, read as i32
        assert_eq!(lattice(1e19).0, -1_981_284_352);
        assert_eq!(lattice(-1e19).0, 1_981_284_352);
        assert_eq!(lattice(f64::MAX).0, 0);
        assert_eq!(lattice(f64::NAN).0, 0);
        assert_eq!(lattice(f64::INFINITY).0, 0);
    }
}
