// Integer hashing shared by every noise type.
// All randomness in the crate comes out of these two functions.

const MIX_A: u32 = 0x7feb_352d;
const MIX_B: u32 = 0x846c_a68b;

// Per-axis seed spreading constants
const SEED_X: u32 = 0x9e37_79b1;
const SEED_Y: u32 = 0x85eb_ca6b;

/// 32-bit avalanche mix (xorshift-multiply, two rounds).
#[inline]
pub fn hash32(mut v: u32) -> u32 {
    v ^= v >> 16;
    v = v.wrapping_mul(MIX_A);
    v ^= v >> 15;
    v = v.wrapping_mul(MIX_B);
    v ^= v >> 16;
    v
}

/// Hash a lattice coordinate together with a seed.
///
/// Coordinates and seed are treated as raw 32-bit words, so negative
/// coordinates wrap the same way they would in two's complement.
#[inline]
pub fn hash2d(x: i32, y: i32, seed: u32) -> u32 {
    let h = hash32((x as u32).wrapping_add(seed.wrapping_mul(SEED_X)));
    let k = hash32((y as u32) ^ seed.wrapping_mul(SEED_Y));
    hash32(h ^ k)
}

#[cfg(test)]
mod tests {
    use super::{hash2d, hash32};
    use crate::utils::to_unit;

    #[test]
    fn hash32_fixtures() {
        assert_eq!(hash32(0), 0);
        assert_eq!(hash32(1), 1_753_845_952);
        assert_eq!(hash32(0xdead_beef), 3_861_431_939);
    }

    #[test]
    fn hash2d_fixtures() {
        assert_eq!(hash2d(10, 20, 1234), 196_494_926);
        assert_eq!(hash2d(-3, 7, 42), 1_530_987_057);
        assert_eq!(hash2d(0, 0, 0), 0);
    }

    #[test]
    fn hash2d_is_deterministic() {
        for i in -50..50 {
            assert_eq!(hash2d(i, -i * 3, 99), hash2d(i, -i * 3, 99));
        }
    }

    #[test]
    fn hash2d_depends_on_every_input() {
        let base = hash2d(5, 9, 1234);
        assert_ne!(base, hash2d(6, 9, 1234));
        assert_ne!(base, hash2d(5, 10, 1234));
        assert_ne!(base, hash2d(5, 9, 1235));
    }

    #[test]
    // Flipping one input bit should flip about half of the output bits
    fn hash32_avalanche() {
        let mut flipped = 0u64;
        let mut trials = 0u64;
        for i in 0..2000u32 {
            let v = hash32(i.wrapping_mul(0x9e37_79b9));
            let base = hash32(v);
            for bit in 0..32 {
                flipped += (base ^ hash32(v ^ (1 << bit))).count_ones() as u64;
                trials += 1;
            }
        }
        let mean = flipped as f64 / trials as f64;
        assert!((15.5..=16.5).contains(&mean), "mean flipped bits {mean}");
    }

    #[test]
    fn hash2d_fills_unit_interval_evenly() {
        let mut buckets = [0u32; 16];
        for y in 0..256 {
            for x in 0..256 {
                let u = to_unit(hash2d(x, y, 1234));
                let idx = ((u * 16.0) as usize).min(15);
                buckets[idx] += 1;
            }
        }
        let expected = 65536.0 / 16.0;
        for (i, &count) in buckets.iter().enumerate() {
            let err = (count as f64 - expected).abs() / expected;
            assert!(err < 0.1, "bucket {i} holds {count}");
        }
    }
}
